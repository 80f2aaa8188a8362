//! Standard application error codes.

/// Declare catalog entries as `const` items plus an ordered slice of all of them.
///
/// ```
/// fieldcheck_catalog::declare_app_errors! {
///     /// Billing entries.
///     BILLING => {
///         /// Invoice lookup failed.
///         INVOICE_NOT_FOUND = (3001, "InvoiceNotFound", "invoice not found"),
///     }
/// }
///
/// assert_eq!(BILLING.len(), 1);
/// assert_eq!(INVOICE_NOT_FOUND.code(), 3001);
/// ```
#[macro_export]
macro_rules! declare_app_errors {
    (
        $(#[$list_meta:meta])*
        $list:ident => {
            $(
                $(#[$meta:meta])*
                $item:ident = ($code:expr, $name:literal, $message:expr)
            ),* $(,)?
        }
    ) => {
        $(
            $(#[$meta])*
            pub const $item: $crate::AppError = $crate::AppError::new($code, $name, $message);
        )*

        $(#[$list_meta])*
        pub const $list: &[$crate::AppError] = &[$($item),*];
    };
}

declare_app_errors! {
    /// Every standard entry in declaration order.
    STANDARD_ERRORS => {
        /// Request succeeded.
        SUCCESS = (0, "Success", "success"),

        // 400-499: generic client errors
        /// Request parameters failed validation.
        INVALID_PARAMS = (400, "InvalidParams", "参数错误"),
        /// Caller is not authenticated.
        UNAUTHORIZED = (401, "Unauthorized", "未授权"),
        /// Caller lacks permission.
        FORBIDDEN = (403, "Forbidden", "禁止访问"),
        /// Resource does not exist.
        NOT_FOUND = (404, "NotFound", "资源不存在"),
        /// Caller is rate limited.
        TOO_MANY_REQUESTS = (429, "TooManyRequests", "请求过于频繁"),

        // 500-599: generic server errors
        /// Unhandled server failure.
        SERVER_INTERNAL = (500, "ServerInternal", "服务器内部错误"),

        // 1000-1999: identity and users
        /// User lookup failed.
        USER_NOT_FOUND = (1001, "UserNotFound", "用户不存在"),
        /// Username or email already taken.
        USER_ALREADY_EXISTS = (1002, "UserAlreadyExists", "用户已存在"),
        /// Password did not match.
        INVALID_PASSWORD = (1003, "InvalidPassword", "密码错误"),
        /// Token could not be verified.
        INVALID_TOKEN = (1004, "InvalidToken", "Token 无效"),
        /// Token is past its expiry.
        TOKEN_EXPIRED = (1005, "TokenExpired", "Token 已过期"),

        // 2000-2999: content
        /// Post lookup failed.
        POST_NOT_FOUND = (2001, "PostNotFound", "文章不存在"),
        /// Category lookup failed.
        CATEGORY_NOT_FOUND = (2002, "CategoryNotFound", "分类不存在"),
        /// Tag lookup failed.
        TAG_NOT_FOUND = (2003, "TagNotFound", "标签不存在"),
    }
}
