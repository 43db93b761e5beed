//! pf-catalog: static lookup tables for pumpflow.
//!
//! Provides:
//! - Pipe material catalog (absolute roughness)
//! - Fitting accessory catalog (K-factors)
//! - Reference fluid catalog (density, dynamic viscosity)
//! - `Catalogs`: id -> entry maps built once and shared by reference
//!
//! All tables are immutable `&'static` data; lookups never allocate beyond
//! the one-time map construction in [`Catalogs::standard`].

pub mod accessories;
pub mod catalogs;
pub mod fluids;
pub mod materials;

// Re-exports for ergonomics
pub use accessories::{Accessory, accessories, find_accessory};
pub use catalogs::Catalogs;
pub use fluids::{ReferenceFluid, find_fluid, reference_fluids};
pub use materials::{PipeMaterial, find_material, pipe_materials};
