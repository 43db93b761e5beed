//! Calculation request schema.
//!
//! Field names and units match the original form exactly: diameters arrive
//! in millimeters as entered, lengths and heights in meters, and the fluid
//! is a catalog id plus the explicit (possibly overridden) property values.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalcRequest {
    /// Suction internal diameter, millimeters.
    pub diametro_succao: f64,
    /// Suction pipe length, meters.
    pub comprimento_succao: f64,
    pub material_succao: String,
    /// Suction static height, meters.
    pub altura_succao: f64,
    #[serde(default)]
    pub acessorios_succao: Vec<AccessoryUsageDef>,

    /// Discharge internal diameter, millimeters.
    pub diametro_recalque: f64,
    /// Discharge pipe length, meters.
    pub comprimento_recalque: f64,
    pub material_recalque: String,
    /// Discharge static height, meters.
    pub altura_recalque: f64,
    #[serde(default)]
    pub acessorios_recalque: Vec<AccessoryUsageDef>,

    /// Reference fluid id; properties below are authoritative.
    pub fluido: String,
    /// Dynamic viscosity, Pa·s.
    pub viscosidade_fluido: f64,
    /// Density, kg/m³.
    pub densidade_fluido: f64,
    pub vazao: f64,
    /// Flow-rate unit tag (catalog id or symbol).
    pub unidade_vazao: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryUsageDef {
    pub id_acessorio: String,
    pub quantidade: u32,
}
