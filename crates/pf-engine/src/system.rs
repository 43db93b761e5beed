//! System head and power: combines both legs with the static lift.

use pf_catalog::Catalogs;
use pf_core::units::{Length, Power, Velocity, VolumeRate, constants::GRAVITY_MPS2, kw};

use crate::error::EngineResult;
use crate::flow::{FlowRate, FlowRegime, FluidProperties, characterize};
use crate::friction::{RELATIVE_ROUGHNESS_WARN, solve_friction};
use crate::leg::{LegRole, PipeLeg};
use crate::losses::head_losses;

/// Non-fatal annotation on an otherwise successful result.
///
/// Advisories are always surfaced to the caller next to the numbers; they
/// are never errors and never dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advisory {
    /// Reynolds number fell in the 2300..=4000 band where no exact
    /// correlation exists; the turbulent one was applied.
    TransitionalRegime { role: LegRole },
    /// Colebrook-White iteration hit the cap; the Swamee-Jain seed was
    /// used instead.
    FrictionNotConverged { role: LegRole },
    /// Relative roughness at or beyond 0.05, outside the range where the
    /// correlations hold their stated accuracy.
    RelativeRoughnessHigh { role: LegRole, value: f64 },
}

impl Advisory {
    /// Whether this advisory marks the numeric result as low-confidence.
    ///
    /// High relative roughness degrades correlation accuracy but is a
    /// geometry warning, not a solver approximation.
    pub fn lowers_confidence(&self) -> bool {
        matches!(
            self,
            Self::TransitionalRegime { .. } | Self::FrictionNotConverged { .. }
        )
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TransitionalRegime { role } => write!(
                f,
                "{role} leg flow is transitional; turbulent correlation applied as an estimate"
            ),
            Self::FrictionNotConverged { role } => write!(
                f,
                "{role} leg friction factor did not converge; explicit approximation used"
            ),
            Self::RelativeRoughnessHigh { role, value } => write!(
                f,
                "{role} leg relative roughness {value:.4} exceeds the correlation range"
            ),
        }
    }
}

/// Per-leg calculation outcome. Value object, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegResult {
    pub role: LegRole,
    pub velocity: Velocity,
    pub reynolds: f64,
    pub regime: FlowRegime,
    pub friction_factor: f64,
    pub continuous_loss: Length,
    pub localized_loss: Length,
    pub total_loss: Length,
    pub low_confidence: bool,
}

/// Complete input for one sizing calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemInput {
    pub suction: PipeLeg,
    pub discharge: PipeLeg,
    pub fluid: FluidProperties,
    pub flow: FlowRate,
}

/// Full system outcome: both legs, manometric head, hydraulic power.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemResult {
    pub suction: LegResult,
    pub discharge: LegResult,
    pub manometric_head: Length,
    /// Normalized volumetric flow, m³/s.
    pub flow: VolumeRate,
    /// Ideal hydraulic power; divide by pump/motor efficiency externally
    /// for shaft or electrical power.
    pub pump_power: Power,
    pub low_confidence: bool,
    pub advisories: Vec<Advisory>,
}

/// Run one leg through the characterize -> friction -> losses pipeline.
pub fn analyze_leg(
    leg: &PipeLeg,
    flow: VolumeRate,
    fluid: &FluidProperties,
    catalogs: &Catalogs,
) -> EngineResult<(LegResult, Vec<Advisory>)> {
    let relative_roughness = leg.relative_roughness(catalogs)?;
    let k_total = leg.k_total(catalogs)?;
    let leg_flow = characterize(leg.internal_diameter, flow, fluid)?;
    let friction = solve_friction(leg_flow.reynolds, relative_roughness);
    let losses = head_losses(
        friction.factor,
        leg_flow.velocity,
        leg.length,
        leg.internal_diameter,
        k_total,
    );

    let mut advisories = Vec::new();
    if relative_roughness >= RELATIVE_ROUGHNESS_WARN {
        advisories.push(Advisory::RelativeRoughnessHigh {
            role: leg.role,
            value: relative_roughness,
        });
    }
    if leg_flow.regime == FlowRegime::Transitional {
        advisories.push(Advisory::TransitionalRegime { role: leg.role });
    }
    if !friction.converged {
        advisories.push(Advisory::FrictionNotConverged { role: leg.role });
    }

    let result = LegResult {
        role: leg.role,
        velocity: leg_flow.velocity,
        reynolds: leg_flow.reynolds,
        regime: leg_flow.regime,
        friction_factor: friction.factor,
        continuous_loss: losses.continuous,
        localized_loss: losses.localized,
        total_loss: losses.total(),
        low_confidence: advisories.iter().any(Advisory::lowers_confidence),
    };
    Ok((result, advisories))
}

/// Compute the full system: both legs, manometric head, pump power.
///
/// H = static lift (both legs) + total losses (both legs);
/// P[kW] = rho g Q H / 1000.
pub fn compute_system(input: &SystemInput, catalogs: &Catalogs) -> EngineResult<SystemResult> {
    let flow = input.flow.normalized();

    let (suction, mut advisories) = analyze_leg(&input.suction, flow, &input.fluid, catalogs)?;
    let (discharge, more) = analyze_leg(&input.discharge, flow, &input.fluid, catalogs)?;
    advisories.extend(more);

    let manometric_head = input.suction.static_height
        + input.discharge.static_height
        + suction.total_loss
        + discharge.total_loss;

    let power_kw =
        input.fluid.density.value * GRAVITY_MPS2 * flow.value * manometric_head.value / 1000.0;

    Ok(SystemResult {
        low_confidence: suction.low_confidence || discharge.low_confidence,
        suction,
        discharge,
        manometric_head,
        flow,
        pump_power: kw(power_kw),
        advisories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowUnit;
    use crate::leg::FittingUsage;
    use pf_core::units::{kgpm3, m, pas};

    fn water() -> FluidProperties {
        FluidProperties {
            density: kgpm3(998.0),
            dynamic_viscosity: pas(0.001002),
        }
    }

    fn pvc_leg(role: LegRole, fittings: Vec<FittingUsage>) -> PipeLeg {
        PipeLeg {
            role,
            internal_diameter: m(0.05),
            length: m(12.0),
            material_id: "pvc-plastico".to_string(),
            static_height: m(1.5),
            fittings,
        }
    }

    fn reference_input() -> SystemInput {
        SystemInput {
            suction: pvc_leg(
                LegRole::Suction,
                vec![FittingUsage {
                    accessory_id: "valvula-retencao-aberta".into(),
                    quantity: 1,
                }],
            ),
            discharge: pvc_leg(
                LegRole::Discharge,
                vec![FittingUsage {
                    accessory_id: "cotovelo-padrao-90".into(),
                    quantity: 2,
                }],
            ),
            fluid: water(),
            flow: FlowRate::new(0.01, FlowUnit::CubicMetersPerSecond),
        }
    }

    #[test]
    fn head_is_statics_plus_losses() {
        let catalogs = Catalogs::standard();
        let result = compute_system(&reference_input(), &catalogs).unwrap();

        let expected = 1.5
            + 1.5
            + result.suction.total_loss.value
            + result.discharge.total_loss.value;
        assert!((result.manometric_head.value - expected).abs() < 1e-9);
    }

    #[test]
    fn power_is_rho_g_q_h_over_1000() {
        let catalogs = Catalogs::standard();
        let result = compute_system(&reference_input(), &catalogs).unwrap();

        let expected_kw =
            998.0 * GRAVITY_MPS2 * result.flow.value * result.manometric_head.value / 1000.0;
        let rel = (result.pump_power.value / 1000.0 - expected_kw).abs() / expected_kw;
        assert!(rel < 1e-6, "relative error {rel}");
    }

    #[test]
    fn turbulent_water_case_has_full_confidence() {
        let catalogs = Catalogs::standard();
        let result = compute_system(&reference_input(), &catalogs).unwrap();

        assert_eq!(result.suction.regime, FlowRegime::Turbulent);
        assert!(!result.low_confidence);
        assert!(result.advisories.is_empty());
    }

    #[test]
    fn transitional_leg_lowers_system_confidence() {
        // Glycerine-like viscosity pulls Reynolds into the 2300..=4000 band:
        // v = 5.093 m/s, Re = 1260 * 5.093 * 0.05 / 0.1 ~ 3209
        let mut input = reference_input();
        input.fluid = FluidProperties {
            density: kgpm3(1260.0),
            dynamic_viscosity: pas(0.1),
        };

        let catalogs = Catalogs::standard();
        let result = compute_system(&input, &catalogs).unwrap();

        assert_eq!(result.suction.regime, FlowRegime::Transitional);
        assert!(result.suction.low_confidence);
        assert!(result.low_confidence);
        assert!(
            result
                .advisories
                .iter()
                .any(|a| matches!(a, Advisory::TransitionalRegime { .. }))
        );
    }

    #[test]
    fn leg_total_is_continuous_plus_localized() {
        let catalogs = Catalogs::standard();
        let result = compute_system(&reference_input(), &catalogs).unwrap();

        for leg in [&result.suction, &result.discharge] {
            let sum = leg.continuous_loss.value + leg.localized_loss.value;
            assert!((leg.total_loss.value - sum).abs() < 1e-12);
            assert!(leg.continuous_loss.value >= 0.0);
            assert!(leg.localized_loss.value >= 0.0);
        }
    }

    #[test]
    fn zero_fittings_leg_has_zero_localized_loss() {
        let mut input = reference_input();
        input.suction.fittings.clear();

        let catalogs = Catalogs::standard();
        let result = compute_system(&input, &catalogs).unwrap();
        assert_eq!(result.suction.localized_loss.value, 0.0);
        assert!(result.discharge.localized_loss.value > 0.0);
    }
}
