//! Per-field request validation.
//!
//! Every required physical quantity must be positive and finite, heights
//! must be non-negative, and every referenced catalog id must resolve,
//! before any computation runs. Error reasons reuse the wording of the
//! original form's field messages.

use pf_catalog::Catalogs;
use thiserror::Error;

use crate::request::{AccessoryUsageDef, CalcRequest};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: {reason}")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("{field}: {reason}")]
    MissingField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("{field}: referência desconhecida: {id}")]
    UnknownReference { field: String, id: String },
}

pub fn validate_request(request: &CalcRequest, catalogs: &Catalogs) -> Result<(), ValidationError> {
    positive(
        "diametroSuccao",
        request.diametro_succao,
        "Diâmetro da tubulação deve ser maior que zero.",
    )?;
    positive(
        "comprimentoSuccao",
        request.comprimento_succao,
        "Comprimento da tubulação deve ser maior que zero.",
    )?;
    non_negative(
        "alturaSuccao",
        request.altura_succao,
        "Altura de sucção não pode ser negativa.",
    )?;
    material(catalogs, "materialSuccao", &request.material_succao)?;
    accessories(catalogs, "acessoriosSuccao", &request.acessorios_succao)?;

    positive(
        "diametroRecalque",
        request.diametro_recalque,
        "Diâmetro da tubulação deve ser maior que zero.",
    )?;
    positive(
        "comprimentoRecalque",
        request.comprimento_recalque,
        "Comprimento da tubulação deve ser maior que zero.",
    )?;
    non_negative(
        "alturaRecalque",
        request.altura_recalque,
        "Altura de recalque não pode ser negativa.",
    )?;
    material(catalogs, "materialRecalque", &request.material_recalque)?;
    accessories(catalogs, "acessoriosRecalque", &request.acessorios_recalque)?;

    if request.fluido.is_empty() {
        return Err(ValidationError::MissingField {
            field: "fluido",
            reason: "Fluido usado no sistema é obrigatório.",
        });
    }
    positive(
        "viscosidadeFluido",
        request.viscosidade_fluido,
        "Viscosidade do fluido deve ser maior que zero.",
    )?;
    positive(
        "densidadeFluido",
        request.densidade_fluido,
        "Densidade do fluido deve ser maior que zero.",
    )?;
    positive("vazao", request.vazao, "Vazão deve ser maior que zero.")?;
    if request.unidade_vazao.is_empty() {
        return Err(ValidationError::MissingField {
            field: "unidadeVazao",
            reason: "Unidade de vazão é obrigatória.",
        });
    }

    Ok(())
}

fn positive(field: &str, value: f64, reason: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value,
            reason,
        });
    }
    Ok(())
}

fn non_negative(field: &str, value: f64, reason: &'static str) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value,
            reason,
        });
    }
    Ok(())
}

fn material(catalogs: &Catalogs, field: &str, id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::UnknownReference {
            field: field.to_string(),
            id: id.to_string(),
        });
    }
    if catalogs.material(id).is_none() {
        return Err(ValidationError::UnknownReference {
            field: field.to_string(),
            id: id.to_string(),
        });
    }
    Ok(())
}

fn accessories(
    catalogs: &Catalogs,
    field: &str,
    usages: &[AccessoryUsageDef],
) -> Result<(), ValidationError> {
    for (index, usage) in usages.iter().enumerate() {
        if catalogs.accessory(&usage.id_acessorio).is_none() {
            return Err(ValidationError::UnknownReference {
                field: format!("{field}[{index}].idAcessorio"),
                id: usage.id_acessorio.clone(),
            });
        }
        if usage.quantidade < 1 {
            return Err(ValidationError::InvalidValue {
                field: format!("{field}[{index}].quantidade"),
                value: f64::from(usage.quantidade),
                reason: "A quantidade deve ser no mínimo 1.",
            });
        }
    }
    Ok(())
}
