//! JSON Schema exports for the response envelope.

use crate::response::ApiResponse;

/// JSON Schema for a response with an arbitrary JSON payload.
#[must_use]
pub fn api_response_schema() -> schemars::Schema {
    schemars::schema_for!(ApiResponse<serde_json::Value>)
}

/// JSON Schema for a failure response (payload always absent).
#[must_use]
pub fn api_failure_schema() -> schemars::Schema {
    schemars::schema_for!(ApiResponse<()>)
}
