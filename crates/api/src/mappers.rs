//! Mapping helpers from internal outcomes to [`ApiResponse`]s.

use crate::response::ApiResponse;
use fieldcheck_catalog::codes::{INVALID_PARAMS, SERVER_INTERNAL};
use fieldcheck_catalog::{AppError, CodedError};
use fieldcheck_shared::{ErrorEnvelope, ErrorKind, FieldViolation, ValidationResult};

/// Map a validation outcome: `Valid` carries `data`, `Invalid` becomes
/// `InvalidParams` with the localized violation message.
#[must_use]
pub fn validation_result_to_response<T>(result: ValidationResult, data: T) -> ApiResponse<T> {
    match result {
        ValidationResult::Valid => ApiResponse::success(data),
        ValidationResult::Invalid(violation) => violation_to_response(&violation),
    }
}

/// `InvalidParams` response carrying the violation message.
#[must_use]
pub fn violation_to_response<T>(violation: &FieldViolation) -> ApiResponse<T> {
    coded_error_to_response(&INVALID_PARAMS.with_message(violation.message.as_str()))
}

/// Response for a catalog entry with its default message.
#[must_use]
pub fn app_error_to_response<T>(error: &AppError) -> ApiResponse<T> {
    ApiResponse::fail(error.code(), error.message())
}

/// Response for a coded error with a call-site message.
#[must_use]
pub fn coded_error_to_response<T>(error: &CodedError) -> ApiResponse<T> {
    ApiResponse::fail(error.code, error.message.as_str())
}

/// Map an operational error.
///
/// Expected errors are the caller's fault and keep their message under
/// `InvalidParams`. Invariant and unexpected errors become `ServerInternal`
/// with the catalog message; their details stay server-side.
#[must_use]
pub fn error_envelope_to_response<T>(envelope: &ErrorEnvelope) -> ApiResponse<T> {
    match envelope.kind {
        ErrorKind::Expected => {
            coded_error_to_response(&INVALID_PARAMS.with_message(envelope.message.as_str()))
        },
        ErrorKind::Invariant | ErrorKind::Unexpected => app_error_to_response(&SERVER_INTERNAL),
    }
}

/// Map a shared result: `Ok` carries the payload, `Err` goes through
/// [`error_envelope_to_response`].
#[must_use]
pub fn result_to_response<T>(result: Result<T, ErrorEnvelope>) -> ApiResponse<T> {
    match result {
        Ok(data) => ApiResponse::success(data),
        Err(error) => error_envelope_to_response(&error),
    }
}
