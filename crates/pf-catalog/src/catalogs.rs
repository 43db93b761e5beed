//! One-time catalog index for O(1) id lookups.

use std::collections::HashMap;

use crate::accessories::{Accessory, accessories};
use crate::fluids::{ReferenceFluid, reference_fluids};
use crate::materials::{PipeMaterial, pipe_materials};

/// Id -> entry maps over the static tables.
///
/// Built once at process start and passed by shared reference into every
/// calculation; lookups are read-only and safe across threads.
#[derive(Debug, Clone)]
pub struct Catalogs {
    materials: HashMap<&'static str, &'static PipeMaterial>,
    accessories: HashMap<&'static str, &'static Accessory>,
    fluids: HashMap<&'static str, &'static ReferenceFluid>,
}

impl Catalogs {
    /// Index the built-in tables.
    pub fn standard() -> Self {
        Self {
            materials: pipe_materials().iter().map(|m| (m.id, m)).collect(),
            accessories: accessories().iter().map(|a| (a.id, a)).collect(),
            fluids: reference_fluids().iter().map(|f| (f.id, f)).collect(),
        }
    }

    pub fn material(&self, id: &str) -> Option<&'static PipeMaterial> {
        self.materials.get(id).copied()
    }

    pub fn accessory(&self, id: &str) -> Option<&'static Accessory> {
        self.accessories.get(id).copied()
    }

    pub fn fluid(&self, id: &str) -> Option<&'static ReferenceFluid> {
        self.fluids.get(id).copied()
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexes_cover_all_entries() {
        let catalogs = Catalogs::standard();
        assert_eq!(catalogs.materials.len(), pipe_materials().len());
        assert_eq!(catalogs.accessories.len(), accessories().len());
        assert_eq!(catalogs.fluids.len(), reference_fluids().len());
    }

    #[test]
    fn lookup_matches_linear_scan() {
        let catalogs = Catalogs::standard();
        let by_map = catalogs.material("aco-comercial").unwrap();
        let by_scan = crate::materials::find_material("aco-comercial").unwrap();
        assert_eq!(by_map, by_scan);
    }

    #[test]
    fn unknown_ids_are_none() {
        let catalogs = Catalogs::standard();
        assert!(catalogs.material("unobtainium").is_none());
        assert!(catalogs.accessory("teleporter").is_none());
        assert!(catalogs.fluid("mercury_300c").is_none());
    }
}
