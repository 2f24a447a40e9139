//! Asignación domain entity: links one cliente to one promoción.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Asignación joined with cliente and promoción display fields, as the list
/// endpoint returns it. The bare row is never served on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AsignacionDetalle {
    pub id: i64,
    pub cliente_id: i64,
    pub promocion_id: i64,
    pub fecha_asignacion: NaiveDate,
    #[schema(example = "María González López")]
    pub nombre: String,
    #[schema(example = "12345678")]
    pub dni: String,
    /// Nombre de la promoción asignada
    #[schema(example = "Noche de Póker")]
    pub promo: String,
    #[schema(example = 15.0)]
    pub descuento: f64,
}

/// Payload accepted by the create endpoint. Asignaciones have no update
/// operation; they are created and deleted only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AsignacionForm {
    #[validate(range(min = 1, message = "El cliente es obligatorio"))]
    pub cliente_id: i64,
    #[validate(range(min = 1, message = "La promoción es obligatoria"))]
    pub promocion_id: i64,
    pub fecha_asignacion: NaiveDate,
}
