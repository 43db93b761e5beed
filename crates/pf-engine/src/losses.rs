//! Head-loss aggregation for one pipe leg.

use pf_core::units::{Length, Velocity, constants::GRAVITY_MPS2, m};

/// Continuous (straight-pipe) and localized (fitting) head loss, in meters
/// of fluid column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegLosses {
    pub continuous: Length,
    pub localized: Length,
}

impl LegLosses {
    pub fn total(&self) -> Length {
        self.continuous + self.localized
    }
}

/// Darcy-Weisbach major loss plus K-factor minor loss.
///
/// h_f = f (L/D) v²/2g, h_k = K v²/2g. Pure arithmetic over validated
/// finite positive inputs; no error conditions.
pub fn head_losses(
    friction_factor: f64,
    velocity: Velocity,
    length: Length,
    diameter: Length,
    k_total: f64,
) -> LegLosses {
    let velocity_head = velocity.value * velocity.value / (2.0 * GRAVITY_MPS2);
    LegLosses {
        continuous: m(friction_factor * (length.value / diameter.value) * velocity_head),
        localized: m(k_total * velocity_head),
    }
}
