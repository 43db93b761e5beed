//! pf-api: wire contract and calculation service for pumpflow.
//!
//! The request/response schema preserves the field names of the original
//! data-entry form (Portuguese, camelCase requests, snake_case responses)
//! so the excluded form and display layers keep working unchanged. The
//! service validates per field, normalizes units, runs the engine, and
//! renders advisories into the response message.

pub mod request;
pub mod response;
pub mod service;
pub mod validate;

// Re-exports for ergonomics
pub use request::{AccessoryUsageDef, CalcRequest};
pub use response::CalcResponse;
pub use service::calculate;
pub use validate::{ValidationError, validate_request};
