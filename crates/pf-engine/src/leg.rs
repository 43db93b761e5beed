//! Pipe leg geometry and fitting usage.

use pf_catalog::Catalogs;
use pf_core::units::Length;

use crate::error::{EngineError, EngineResult};

/// Which side of the pump a leg sits on.
///
/// Suction and discharge legs are structurally identical and run through
/// the same calculation pipeline; the role only labels results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegRole {
    Suction,
    Discharge,
}

impl LegRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suction => "suction",
            Self::Discharge => "discharge",
        }
    }
}

impl std::fmt::Display for LegRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accessory attached to a leg, with multiplicity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FittingUsage {
    pub accessory_id: String,
    pub quantity: u32,
}

/// Geometry and attachments of one pipe leg.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeLeg {
    pub role: LegRole,
    /// Internal diameter, canonical meters.
    pub internal_diameter: Length,
    pub length: Length,
    pub material_id: String,
    /// Elevation change this leg contributes to the static lift.
    pub static_height: Length,
    pub fittings: Vec<FittingUsage>,
}

impl PipeLeg {
    /// Sum of K-factors over all fittings: sum(k(id) * quantity).
    ///
    /// A repeated accessory id simply contributes again, so a merged or an
    /// itemized fitting list produce the same total.
    pub fn k_total(&self, catalogs: &Catalogs) -> EngineResult<f64> {
        let mut total = 0.0;
        for fitting in &self.fittings {
            let accessory = catalogs.accessory(&fitting.accessory_id).ok_or_else(|| {
                EngineError::UnknownAccessory {
                    id: fitting.accessory_id.clone(),
                }
            })?;
            total += accessory.k_factor * f64::from(fitting.quantity);
        }
        Ok(total)
    }

    /// Absolute wall roughness over internal diameter.
    pub fn relative_roughness(&self, catalogs: &Catalogs) -> EngineResult<f64> {
        let material =
            catalogs
                .material(&self.material_id)
                .ok_or_else(|| EngineError::UnknownMaterial {
                    id: self.material_id.clone(),
                })?;
        Ok(material.roughness().value / self.internal_diameter.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::units::m;

    fn leg_with(fittings: Vec<FittingUsage>) -> PipeLeg {
        PipeLeg {
            role: LegRole::Suction,
            internal_diameter: m(0.05),
            length: m(10.0),
            material_id: "pvc-plastico".to_string(),
            static_height: m(2.0),
            fittings,
        }
    }

    #[test]
    fn k_total_sums_catalog_values_times_quantity() {
        let leg = leg_with(vec![
            FittingUsage {
                accessory_id: "cotovelo-padrao-90".into(),
                quantity: 2,
            },
            FittingUsage {
                accessory_id: "valvula-gaveta-aberta".into(),
                quantity: 1,
            },
        ]);
        let k = leg.k_total(&Catalogs::standard()).unwrap();
        assert!((k - (2.0 * 0.9 + 0.2)).abs() < 1e-12);
    }

    #[test]
    fn k_total_empty_is_zero() {
        let leg = leg_with(vec![]);
        assert_eq!(leg.k_total(&Catalogs::standard()).unwrap(), 0.0);
    }

    #[test]
    fn repeated_accessory_id_accumulates() {
        let merged = leg_with(vec![FittingUsage {
            accessory_id: "curva-padrao-45".into(),
            quantity: 3,
        }]);
        let itemized = leg_with(vec![
            FittingUsage {
                accessory_id: "curva-padrao-45".into(),
                quantity: 1,
            },
            FittingUsage {
                accessory_id: "curva-padrao-45".into(),
                quantity: 2,
            },
        ]);
        let catalogs = Catalogs::standard();
        assert_eq!(
            merged.k_total(&catalogs).unwrap(),
            itemized.k_total(&catalogs).unwrap()
        );
    }

    #[test]
    fn unknown_accessory_is_an_error() {
        let leg = leg_with(vec![FittingUsage {
            accessory_id: "flux-capacitor".into(),
            quantity: 1,
        }]);
        let err = leg.k_total(&Catalogs::standard()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownAccessory { .. }));
    }

    #[test]
    fn relative_roughness_for_pvc() {
        let leg = leg_with(vec![]);
        let rr = leg.relative_roughness(&Catalogs::standard()).unwrap();
        assert!((rr - 1.5e-6 / 0.05).abs() < 1e-12);
    }

    #[test]
    fn unknown_material_is_an_error() {
        let mut leg = leg_with(vec![]);
        leg.material_id = "vibranium".into();
        let err = leg.relative_roughness(&Catalogs::standard()).unwrap_err();
        assert!(matches!(err, EngineError::UnknownMaterial { .. }));
    }
}
