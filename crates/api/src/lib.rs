//! # fieldcheck-api
//!
//! Uniform response envelope served to API clients and the mappers that
//! turn validation outcomes, catalog entries, and operational errors into it.
//! This crate depends only on `catalog` and `shared`.

mod mappers;
mod response;
mod schema;

pub use mappers::{
    app_error_to_response, coded_error_to_response, error_envelope_to_response,
    result_to_response, validation_result_to_response, violation_to_response,
};
pub use response::{ApiResponse, SUCCESS_CODE, SUCCESS_MESSAGE};
pub use schema::{api_failure_schema, api_response_schema};

/// Returns the API crate version.
#[must_use]
pub const fn api_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
