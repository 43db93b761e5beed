//! Calculation response schema.
//!
//! Snake-case Portuguese field names, mirrored for the suction and
//! discharge legs. Numeric fields are present only on success; `mensagem`
//! carries either the rendered advisories or the failure reason, so a
//! low-confidence annotation is never silently dropped.

use serde::{Deserialize, Serialize};
use uom::si::power::kilowatt;

use pf_engine::{Advisory, LegResult, LegRole, SystemResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalcResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocidade_succao: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reynolds_succao: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_fluxo_succao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fator_atrito_succao: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perda_carga_continua_succao: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perda_carga_localizada_succao: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perda_carga_total_succao: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocidade_recalque: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reynolds_recalque: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_fluxo_recalque: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fator_atrito_recalque: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perda_carga_continua_recalque: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perda_carga_localizada_recalque: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub perda_carga_total_recalque: Option<f64>,

    /// Normalized volumetric flow, m³/s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vazao: Option<f64>,
    /// Manometric head, meters of fluid column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altura_manometrica: Option<f64>,
    /// Ideal hydraulic power, kW.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potencia_estimada: Option<f64>,

    pub mensagem: String,
    pub sucesso: bool,
}

impl CalcResponse {
    pub fn from_result(result: &SystemResult) -> Self {
        let suction = LegFields::from(&result.suction);
        let discharge = LegFields::from(&result.discharge);

        Self {
            velocidade_succao: Some(suction.velocity),
            reynolds_succao: Some(suction.reynolds),
            tipo_fluxo_succao: Some(suction.regime),
            fator_atrito_succao: Some(suction.friction_factor),
            perda_carga_continua_succao: Some(suction.continuous_loss),
            perda_carga_localizada_succao: Some(suction.localized_loss),
            perda_carga_total_succao: Some(suction.total_loss),

            velocidade_recalque: Some(discharge.velocity),
            reynolds_recalque: Some(discharge.reynolds),
            tipo_fluxo_recalque: Some(discharge.regime),
            fator_atrito_recalque: Some(discharge.friction_factor),
            perda_carga_continua_recalque: Some(discharge.continuous_loss),
            perda_carga_localizada_recalque: Some(discharge.localized_loss),
            perda_carga_total_recalque: Some(discharge.total_loss),

            vazao: Some(result.flow.value),
            altura_manometrica: Some(result.manometric_head.value),
            potencia_estimada: Some(result.pump_power.get::<kilowatt>()),

            mensagem: render_mensagem(result),
            sucesso: true,
        }
    }

    pub fn failure(mensagem: String) -> Self {
        Self {
            velocidade_succao: None,
            reynolds_succao: None,
            tipo_fluxo_succao: None,
            fator_atrito_succao: None,
            perda_carga_continua_succao: None,
            perda_carga_localizada_succao: None,
            perda_carga_total_succao: None,
            velocidade_recalque: None,
            reynolds_recalque: None,
            tipo_fluxo_recalque: None,
            fator_atrito_recalque: None,
            perda_carga_continua_recalque: None,
            perda_carga_localizada_recalque: None,
            perda_carga_total_recalque: None,
            vazao: None,
            altura_manometrica: None,
            potencia_estimada: None,
            mensagem,
            sucesso: false,
        }
    }
}

struct LegFields {
    velocity: f64,
    reynolds: f64,
    regime: String,
    friction_factor: f64,
    continuous_loss: f64,
    localized_loss: f64,
    total_loss: f64,
}

impl From<&LegResult> for LegFields {
    fn from(leg: &LegResult) -> Self {
        Self {
            velocity: leg.velocity.value,
            reynolds: leg.reynolds,
            regime: leg.regime.as_str().to_string(),
            friction_factor: leg.friction_factor,
            continuous_loss: leg.continuous_loss.value,
            localized_loss: leg.localized_loss.value,
            total_loss: leg.total_loss.value,
        }
    }
}

fn leg_pt(role: LegRole) -> &'static str {
    match role {
        LegRole::Suction => "sucção",
        LegRole::Discharge => "recalque",
    }
}

fn render_advisory(advisory: &Advisory) -> String {
    match advisory {
        Advisory::TransitionalRegime { role } => format!(
            "Atenção: escoamento transitório na linha de {}; correlação turbulenta aplicada como estimativa.",
            leg_pt(*role)
        ),
        Advisory::FrictionNotConverged { role } => format!(
            "Atenção: fator de atrito não convergiu na linha de {}; aproximação explícita utilizada.",
            leg_pt(*role)
        ),
        Advisory::RelativeRoughnessHigh { role, value } => format!(
            "Atenção: rugosidade relativa {:.4} acima do limite recomendado na linha de {}.",
            value,
            leg_pt(*role)
        ),
    }
}

fn render_mensagem(result: &SystemResult) -> String {
    if result.advisories.is_empty() {
        "Cálculo realizado com sucesso.".to_string()
    } else {
        result
            .advisories
            .iter()
            .map(render_advisory)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
