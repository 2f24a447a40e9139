//! Promoción domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{PROMO_ACTIVA, PROMO_FINALIZADA, PROMO_PROGRAMADA};

/// Estado de una promoción
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum EstadoPromocion {
    #[default]
    Programada,
    Activa,
    Finalizada,
}

impl From<&str> for EstadoPromocion {
    fn from(s: &str) -> Self {
        match s {
            PROMO_ACTIVA => EstadoPromocion::Activa,
            PROMO_FINALIZADA => EstadoPromocion::Finalizada,
            _ => EstadoPromocion::Programada,
        }
    }
}

impl std::fmt::Display for EstadoPromocion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstadoPromocion::Programada => write!(f, "{}", PROMO_PROGRAMADA),
            EstadoPromocion::Activa => write!(f, "{}", PROMO_ACTIVA),
            EstadoPromocion::Finalizada => write!(f, "{}", PROMO_FINALIZADA),
        }
    }
}

/// Promoción domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Promocion {
    pub id: i64,
    #[schema(example = "Noche de Póker")]
    pub nombre: String,
    /// Discount percentage applied while the promotion is active
    #[schema(example = 15.0)]
    pub descuento: f64,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    pub estado: EstadoPromocion,
}

/// Promoción as returned by the list endpoint: the row plus how many
/// asignaciones currently point at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PromocionResumen {
    #[serde(flatten)]
    pub promocion: Promocion,
    #[schema(example = 3)]
    pub asignados: i64,
}

/// Payload accepted by create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PromocionForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub nombre: String,
    #[validate(range(min = 0.0, max = 100.0, message = "El descuento debe estar entre 0 y 100"))]
    pub descuento: f64,
    pub fecha_inicio: NaiveDate,
    pub fecha_fin: NaiveDate,
    /// Defaults to `Programada` when omitted
    #[serde(default)]
    pub estado: Option<EstadoPromocion>,
}
