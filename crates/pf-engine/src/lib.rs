//! pf-engine: the hydraulic calculation engine for pumpflow.
//!
//! Deterministic, formula-based transform from validated physical inputs to
//! flow-regime classification, friction factor, head losses, manometric
//! head, and pump power. Purely functional: no shared mutable state, no
//! I/O, every invocation a function of its inputs plus the read-only
//! catalogs.
//!
//! Pipeline per pipe leg:
//! normalize flow -> characterize (velocity, Reynolds, regime) ->
//! solve friction factor -> aggregate continuous + localized losses.
//! The system stage combines both legs with the static lift into the
//! manometric head and the ideal hydraulic power.

pub mod error;
pub mod flow;
pub mod friction;
pub mod leg;
pub mod losses;
pub mod system;

// Re-exports for ergonomics
pub use error::{EngineError, EngineResult};
pub use flow::{FlowRate, FlowRegime, FlowUnit, FluidProperties, LegFlow, characterize};
pub use friction::{FrictionSolution, solve_friction, swamee_jain};
pub use leg::{FittingUsage, LegRole, PipeLeg};
pub use losses::{LegLosses, head_losses};
pub use system::{Advisory, LegResult, SystemInput, SystemResult, analyze_leg, compute_system};
