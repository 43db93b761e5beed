//! Reference fluid catalog.
//!
//! These entries prefill fluid properties for common working fluids. A
//! calculation always receives explicit density and viscosity values, so a
//! fluid outside this table is handled by supplying the numbers directly.

use pf_core::units::{Density, DynVisc, kgpm3, pas};

/// A reference working fluid at its tabulated temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFluid {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Density in kg/m³.
    pub density_kg_m3: f64,
    /// Dynamic viscosity in Pa·s.
    pub dynamic_viscosity_pa_s: f64,
}

impl ReferenceFluid {
    pub fn density(&self) -> Density {
        kgpm3(self.density_kg_m3)
    }

    pub fn dynamic_viscosity(&self) -> DynVisc {
        pas(self.dynamic_viscosity_pa_s)
    }

    pub fn matches(&self, query: &str) -> bool {
        self.id.eq_ignore_ascii_case(query) || self.display_name.eq_ignore_ascii_case(query)
    }
}

const REFERENCE_FLUIDS: [ReferenceFluid; 5] = [
    ReferenceFluid {
        id: "agua_20c",
        display_name: "Água (20°C)",
        density_kg_m3: 998.0,
        dynamic_viscosity_pa_s: 0.001002,
    },
    ReferenceFluid {
        id: "oleo_iso_vg46",
        display_name: "Óleo ISO VG 46",
        density_kg_m3: 870.0,
        dynamic_viscosity_pa_s: 0.041,
    },
    ReferenceFluid {
        id: "oleo_sae_30",
        display_name: "Óleo SAE 30",
        density_kg_m3: 875.0,
        dynamic_viscosity_pa_s: 0.29,
    },
    ReferenceFluid {
        id: "glicerina",
        display_name: "Glicerina",
        density_kg_m3: 1260.0,
        dynamic_viscosity_pa_s: 1.49,
    },
    ReferenceFluid {
        id: "oleo_vegetal",
        display_name: "Óleo vegetal",
        density_kg_m3: 920.0,
        dynamic_viscosity_pa_s: 0.065,
    },
];

pub fn reference_fluids() -> &'static [ReferenceFluid] {
    &REFERENCE_FLUIDS
}

pub fn find_fluid(id: &str) -> Option<&'static ReferenceFluid> {
    REFERENCE_FLUIDS.iter().find(|f| f.matches(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in reference_fluids() {
            assert!(seen.insert(entry.id), "duplicate fluid id: {}", entry.id);
        }
    }

    #[test]
    fn water_properties() {
        let water = find_fluid("agua_20c").expect("water should be in catalog");
        assert!((water.density().value - 998.0).abs() < 1e-9);
        assert!((water.dynamic_viscosity().value - 0.001002).abs() < 1e-12);
    }

    #[test]
    fn all_properties_positive() {
        for fluid in reference_fluids() {
            assert!(fluid.density_kg_m3 > 0.0);
            assert!(fluid.dynamic_viscosity_pa_s > 0.0);
        }
    }
}
