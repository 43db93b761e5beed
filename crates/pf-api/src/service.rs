//! Calculation service: validate, normalize, compute, respond.

use pf_catalog::Catalogs;
use pf_core::units::{kgpm3, m, mm, pas};
use pf_engine::{
    EngineError, FittingUsage, FlowRate, FlowUnit, FluidProperties, LegRole, PipeLeg, SystemInput,
    compute_system,
};
use tracing::debug;
use uom::si::power::kilowatt;

use crate::request::{AccessoryUsageDef, CalcRequest};
use crate::response::CalcResponse;
use crate::validate::validate_request;

/// Run one sizing calculation against a request.
///
/// Never panics and never returns an error: every failure mode renders into
/// a `sucesso = false` response with the reason in `mensagem`.
pub fn calculate(request: &CalcRequest, catalogs: &Catalogs) -> CalcResponse {
    if let Err(err) = validate_request(request, catalogs) {
        debug!(error = %err, "request rejected by validation");
        return CalcResponse::failure(err.to_string());
    }

    let unit = match FlowUnit::parse(&request.unidade_vazao) {
        Ok(unit) => unit,
        Err(err) => return CalcResponse::failure(render_engine_error(&err)),
    };

    let input = SystemInput {
        suction: leg_from_request(
            LegRole::Suction,
            request.diametro_succao,
            request.comprimento_succao,
            &request.material_succao,
            request.altura_succao,
            &request.acessorios_succao,
        ),
        discharge: leg_from_request(
            LegRole::Discharge,
            request.diametro_recalque,
            request.comprimento_recalque,
            &request.material_recalque,
            request.altura_recalque,
            &request.acessorios_recalque,
        ),
        fluid: FluidProperties {
            density: kgpm3(request.densidade_fluido),
            dynamic_viscosity: pas(request.viscosidade_fluido),
        },
        flow: FlowRate::new(request.vazao, unit),
    };

    match compute_system(&input, catalogs) {
        Ok(result) => {
            debug!(
                fluid = %request.fluido,
                head_m = result.manometric_head.value,
                power_kw = result.pump_power.get::<kilowatt>(),
                low_confidence = result.low_confidence,
                "calculation complete"
            );
            CalcResponse::from_result(&result)
        }
        Err(err) => {
            debug!(error = %err, "engine rejected validated input");
            CalcResponse::failure(render_engine_error(&err))
        }
    }
}

/// Diameters arrive in millimeters as entered; everything else in meters.
fn leg_from_request(
    role: LegRole,
    diameter_mm: f64,
    length_m: f64,
    material_id: &str,
    static_height_m: f64,
    usages: &[AccessoryUsageDef],
) -> PipeLeg {
    PipeLeg {
        role,
        internal_diameter: mm(diameter_mm),
        length: m(length_m),
        material_id: material_id.to_string(),
        static_height: m(static_height_m),
        fittings: usages
            .iter()
            .map(|usage| FittingUsage {
                accessory_id: usage.id_acessorio.clone(),
                quantity: usage.quantidade,
            })
            .collect(),
    }
}

fn render_engine_error(err: &EngineError) -> String {
    match err {
        EngineError::InvalidUnit { tag } => {
            format!("Unidade de vazão não reconhecida: {tag}.")
        }
        EngineError::UnknownMaterial { id } => format!("Material desconhecido: {id}."),
        EngineError::UnknownAccessory { id } => format!("Acessório desconhecido: {id}."),
        EngineError::DegenerateFlow { what } => {
            format!("Erro interno de cálculo: {what}.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_request() -> CalcRequest {
        CalcRequest {
            diametro_succao: 50.0,
            comprimento_succao: 10.0,
            material_succao: "pvc-plastico".into(),
            altura_succao: 2.0,
            acessorios_succao: vec![],
            diametro_recalque: 50.0,
            comprimento_recalque: 30.0,
            material_recalque: "pvc-plastico".into(),
            altura_recalque: 15.0,
            acessorios_recalque: vec![],
            fluido: "agua_20c".into(),
            viscosidade_fluido: 0.001002,
            densidade_fluido: 998.0,
            vazao: 36.0,
            unidade_vazao: "metro-cubico-hora".into(),
        }
    }

    #[test]
    fn successful_calculation() {
        let catalogs = Catalogs::standard();
        let response = calculate(&water_request(), &catalogs);

        assert!(response.sucesso);
        assert_eq!(response.tipo_fluxo_succao.as_deref(), Some("turbulent"));
        // 36 m³/h -> 0.01 m³/s through a 50 mm bore
        assert!((response.velocidade_succao.unwrap() - 5.093).abs() < 2e-3);
        assert!((response.vazao.unwrap() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn invalid_unit_fails_at_normalization() {
        let mut request = water_request();
        request.unidade_vazao = "gal/min".into();

        let response = calculate(&request, &Catalogs::standard());
        assert!(!response.sucesso);
        assert!(response.mensagem.contains("gal/min"));
        assert!(response.velocidade_succao.is_none());
    }

    #[test]
    fn validation_failure_reports_field() {
        let mut request = water_request();
        request.comprimento_recalque = -3.0;

        let response = calculate(&request, &Catalogs::standard());
        assert!(!response.sucesso);
        assert!(response.mensagem.contains("comprimentoRecalque"));
    }
}
