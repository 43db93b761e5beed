//! Flow-rate normalization and per-leg flow characterization.

use pf_core::units::{Density, DynVisc, Length, Velocity, VolumeRate, m3ps, mps};

use crate::error::{EngineError, EngineResult};

/// Reynolds number below which flow is laminar.
pub const LAMINAR_LIMIT: f64 = 2300.0;

/// Reynolds number above which flow is fully turbulent.
pub const TURBULENT_LIMIT: f64 = 4000.0;

/// Recognized volumetric flow-rate units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowUnit {
    LitersPerSecond,
    CubicMetersPerSecond,
    CubicMetersPerHour,
}

impl FlowUnit {
    /// Parse a unit tag: the catalog id or the display symbol.
    pub fn parse(tag: &str) -> EngineResult<Self> {
        match tag {
            "litro-segundo" | "L/s" | "l/s" => Ok(Self::LitersPerSecond),
            "metro-cubico-segundo" | "m³/s" | "m3/s" => Ok(Self::CubicMetersPerSecond),
            "metro-cubico-hora" | "m³/h" | "m3/h" => Ok(Self::CubicMetersPerHour),
            _ => Err(EngineError::InvalidUnit {
                tag: tag.to_string(),
            }),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::LitersPerSecond => "L/s",
            Self::CubicMetersPerSecond => "m³/s",
            Self::CubicMetersPerHour => "m³/h",
        }
    }

    /// Multiplier from this unit to m³/s.
    fn factor(&self) -> f64 {
        match self {
            Self::LitersPerSecond => 1e-3,
            Self::CubicMetersPerSecond => 1.0,
            Self::CubicMetersPerHour => 1.0 / 3600.0,
        }
    }
}

/// A flow-rate magnitude with its unit tag, as entered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowRate {
    pub magnitude: f64,
    pub unit: FlowUnit,
}

impl FlowRate {
    pub fn new(magnitude: f64, unit: FlowUnit) -> Self {
        Self { magnitude, unit }
    }

    /// Canonical volumetric flow in m³/s.
    pub fn normalized(&self) -> VolumeRate {
        m3ps(self.magnitude * self.unit.factor())
    }
}

/// Working fluid properties at the operating temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    pub density: Density,
    pub dynamic_viscosity: DynVisc,
}

/// Flow regime classified from the Reynolds number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    /// Boundaries are inclusive: Re = 2300 and Re = 4000 are transitional.
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            Self::Laminar
        } else if reynolds <= TURBULENT_LIMIT {
            Self::Transitional
        } else {
            Self::Turbulent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Laminar => "laminar",
            Self::Transitional => "transitional",
            Self::Turbulent => "turbulent",
        }
    }
}

impl std::fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Velocity, Reynolds number, and regime for one pipe leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegFlow {
    pub velocity: Velocity,
    pub reynolds: f64,
    pub regime: FlowRegime,
}

/// Characterize flow through a circular pipe of the given internal diameter.
///
/// v = Q / (π·D²/4), Re = ρ·v·D/μ. Upstream validation already excludes
/// non-positive Q and D; the guard here re-asserts that invariant.
pub fn characterize(
    diameter: Length,
    flow: VolumeRate,
    fluid: &FluidProperties,
) -> EngineResult<LegFlow> {
    if flow.value <= 0.0 {
        return Err(EngineError::DegenerateFlow {
            what: "volumetric flow must be positive",
        });
    }
    if diameter.value <= 0.0 {
        return Err(EngineError::DegenerateFlow {
            what: "internal diameter must be positive",
        });
    }

    let area = std::f64::consts::PI * diameter.value * diameter.value / 4.0;
    let velocity = flow.value / area;
    let reynolds = fluid.density.value * velocity * diameter.value / fluid.dynamic_viscosity.value;

    Ok(LegFlow {
        velocity: mps(velocity),
        reynolds,
        regime: FlowRegime::classify(reynolds),
    })
}
