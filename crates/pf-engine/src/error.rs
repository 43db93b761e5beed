//! Engine error types.

use pf_core::PfError;
use thiserror::Error;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur inside the hydraulic engine.
///
/// `DegenerateFlow` and the `Unknown*` variants re-assert invariants the
/// caller's validation already guarantees; reaching one of them indicates a
/// programming defect upstream, not bad user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Flow-rate unit tag outside the three recognized values.
    #[error("Unrecognized flow-rate unit: {tag}")]
    InvalidUnit { tag: String },

    /// Non-positive flow or diameter reached the characterizer.
    #[error("Degenerate flow: {what}")]
    DegenerateFlow { what: &'static str },

    #[error("Unknown pipe material id: {id}")]
    UnknownMaterial { id: String },

    #[error("Unknown accessory id: {id}")]
    UnknownAccessory { id: String },
}

impl From<EngineError> for PfError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::InvalidUnit { .. } => PfError::InvalidArg {
                what: "flow-rate unit",
            },
            EngineError::DegenerateFlow { what } => PfError::Invariant { what },
            EngineError::UnknownMaterial { .. } => PfError::Invariant {
                what: "material id must resolve before computation",
            },
            EngineError::UnknownAccessory { .. } => PfError::Invariant {
                what: "accessory id must resolve before computation",
            },
        }
    }
}
