//! Visita domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Visita domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Visita {
    pub id: i64,
    pub cliente_id: i64,
    pub fecha: NaiveDate,
    #[schema(example = "spa")]
    pub servicio: String,
}

/// Visita joined with the human-readable fields of its cliente.
///
/// The list endpoint returns this shape so the dashboard never has to
/// resolve the cliente itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VisitaDetalle {
    pub id: i64,
    pub cliente_id: i64,
    pub fecha: NaiveDate,
    pub servicio: String,
    #[schema(example = "María González López")]
    pub nombre: String,
    #[schema(example = "12345678")]
    pub dni: String,
}

/// Payload accepted by create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct VisitaForm {
    #[validate(range(min = 1, message = "El cliente es obligatorio"))]
    pub cliente_id: i64,
    pub fecha: NaiveDate,
    #[validate(length(min = 1, message = "El servicio es obligatorio"))]
    #[schema(example = "spa")]
    pub servicio: String,
}
