//! Pipe material catalog with absolute roughness values.

use pf_core::units::{Length, mm};

/// A pipe wall material with its absolute roughness.
///
/// Roughness values are nominal figures for commercial pipe in good
/// condition; aged or fouled pipe can be considerably rougher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeMaterial {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Absolute roughness in millimeters, as tabulated.
    pub roughness_mm: f64,
}

impl PipeMaterial {
    /// Absolute roughness as a length (canonical meters).
    pub fn roughness(&self) -> Length {
        mm(self.roughness_mm)
    }

    pub fn matches(&self, query: &str) -> bool {
        self.id.eq_ignore_ascii_case(query) || self.display_name.eq_ignore_ascii_case(query)
    }
}

const PIPE_MATERIALS: [PipeMaterial; 6] = [
    PipeMaterial {
        id: "ferro-fundido",
        display_name: "Ferro fundido",
        roughness_mm: 0.26,
    },
    PipeMaterial {
        id: "pvc-plastico",
        display_name: "PVC/Plástico",
        roughness_mm: 0.0015,
    },
    PipeMaterial {
        id: "cobre-bronze",
        display_name: "Cobre/bronze",
        roughness_mm: 0.0015,
    },
    PipeMaterial {
        id: "concreto-liso",
        display_name: "Concreto (liso)",
        roughness_mm: 0.3,
    },
    PipeMaterial {
        id: "aco-comercial",
        display_name: "Aço comercial",
        roughness_mm: 0.045,
    },
    PipeMaterial {
        id: "ferro-galvanizado",
        display_name: "Ferro galvanizado",
        roughness_mm: 0.15,
    },
];

pub fn pipe_materials() -> &'static [PipeMaterial] {
    &PIPE_MATERIALS
}

pub fn find_material(id: &str) -> Option<&'static PipeMaterial> {
    PIPE_MATERIALS.iter().find(|m| m.matches(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in pipe_materials() {
            assert!(seen.insert(entry.id), "duplicate material id: {}", entry.id);
        }
    }

    #[test]
    fn pvc_roughness_in_meters() {
        let pvc = find_material("pvc-plastico").expect("pvc should be in catalog");
        assert!((pvc.roughness().value - 1.5e-6).abs() < 1e-12);
    }

    #[test]
    fn lookup_by_display_name() {
        let m = find_material("Ferro fundido").expect("lookup by name");
        assert_eq!(m.id, "ferro-fundido");
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(find_material("adamantium").is_none());
    }
}
