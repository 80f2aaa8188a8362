//! Request payloads the CLI knows how to validate.

use fieldcheck_validate_derive::Constrained;
use serde::Deserialize;

/// User registration request.
#[derive(Debug, Clone, Default, Deserialize, Constrained)]
#[serde(default, deny_unknown_fields)]
pub struct RegisterRequest {
    #[validate(label = "用户名", rule = "required")]
    pub username: String,
    #[validate(label = "邮箱", rules("required", "email"))]
    pub email: String,
    #[validate(label = "密码", rules("required", "password"))]
    pub password: String,
}
