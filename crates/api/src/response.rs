//! Uniform `{code, message, data?}` response envelope.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Code carried by successful responses.
pub const SUCCESS_CODE: u32 = 200;
/// Message carried by successful responses unless overridden.
pub const SUCCESS_MESSAGE: &str = "success";

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiResponse<T> {
    /// Application code: [`SUCCESS_CODE`] or a catalog entry.
    pub code: u32,
    /// Human-readable message for the caller.
    pub message: String,
    /// Payload; omitted on failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    #[must_use]
    pub fn success(data: T) -> Self {
        Self::success_with_message(SUCCESS_MESSAGE, data)
    }

    /// Successful response with a custom message.
    #[must_use]
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed response without payload.
    #[must_use]
    pub fn fail(code: u32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Returns true for [`SUCCESS_CODE`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}
