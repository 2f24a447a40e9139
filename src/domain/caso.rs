//! Caso (ticket) domain entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{
    CASO_ABIERTO, CASO_CERRADO, CASO_EN_PROCESO, CASO_RESUELTO, PRIORIDAD_ALTA, PRIORIDAD_BAJA,
    PRIORIDAD_MEDIA, TIPO_INCIDENCIA, TIPO_QUEJA, TIPO_SUGERENCIA,
};

/// Tipo de caso
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TipoCaso {
    Queja,
    Sugerencia,
    Incidencia,
}

impl From<&str> for TipoCaso {
    fn from(s: &str) -> Self {
        match s {
            TIPO_SUGERENCIA => TipoCaso::Sugerencia,
            TIPO_INCIDENCIA => TipoCaso::Incidencia,
            _ => TipoCaso::Queja,
        }
    }
}

impl std::fmt::Display for TipoCaso {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TipoCaso::Queja => write!(f, "{}", TIPO_QUEJA),
            TipoCaso::Sugerencia => write!(f, "{}", TIPO_SUGERENCIA),
            TipoCaso::Incidencia => write!(f, "{}", TIPO_INCIDENCIA),
        }
    }
}

/// Prioridad de atención
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum Prioridad {
    Alta,
    #[default]
    Media,
    Baja,
}

impl From<&str> for Prioridad {
    fn from(s: &str) -> Self {
        match s {
            PRIORIDAD_ALTA => Prioridad::Alta,
            PRIORIDAD_BAJA => Prioridad::Baja,
            _ => Prioridad::Media,
        }
    }
}

impl std::fmt::Display for Prioridad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prioridad::Alta => write!(f, "{}", PRIORIDAD_ALTA),
            Prioridad::Media => write!(f, "{}", PRIORIDAD_MEDIA),
            Prioridad::Baja => write!(f, "{}", PRIORIDAD_BAJA),
        }
    }
}

/// Estado de resolución
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum EstadoCaso {
    #[default]
    Abierto,
    #[serde(rename = "En Proceso")]
    EnProceso,
    Resuelto,
    Cerrado,
}

impl From<&str> for EstadoCaso {
    fn from(s: &str) -> Self {
        match s {
            CASO_EN_PROCESO => EstadoCaso::EnProceso,
            CASO_RESUELTO => EstadoCaso::Resuelto,
            CASO_CERRADO => EstadoCaso::Cerrado,
            _ => EstadoCaso::Abierto,
        }
    }
}

impl std::fmt::Display for EstadoCaso {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstadoCaso::Abierto => write!(f, "{}", CASO_ABIERTO),
            EstadoCaso::EnProceso => write!(f, "{}", CASO_EN_PROCESO),
            EstadoCaso::Resuelto => write!(f, "{}", CASO_RESUELTO),
            EstadoCaso::Cerrado => write!(f, "{}", CASO_CERRADO),
        }
    }
}

/// Caso domain entity.
///
/// `cliente` is free text, not a foreign key: tickets can reference people
/// who are not registered clientes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Caso {
    pub id: i64,
    /// Unique ticket code
    #[schema(example = "CASO-2024-001")]
    pub codigo: String,
    #[schema(example = "María González López")]
    pub cliente: String,
    pub tipo: TipoCaso,
    #[schema(example = "Demora en atención")]
    pub asunto: String,
    pub descripcion: Option<String>,
    pub prioridad: Prioridad,
    pub estado: EstadoCaso,
    pub fecha: NaiveDate,
    pub responsable: Option<String>,
}

/// Payload accepted by create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CasoForm {
    #[validate(length(min = 1, message = "El código es obligatorio"))]
    #[schema(example = "CASO-2024-001")]
    pub codigo: String,
    #[validate(length(min = 1, message = "El cliente es obligatorio"))]
    pub cliente: String,
    pub tipo: TipoCaso,
    #[validate(length(min = 1, message = "El asunto es obligatorio"))]
    pub asunto: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Defaults to `Media` when omitted
    #[serde(default)]
    pub prioridad: Option<Prioridad>,
    /// Defaults to `Abierto` when omitted
    #[serde(default)]
    pub estado: Option<EstadoCaso>,
    pub fecha: NaiveDate,
    #[serde(default)]
    pub responsable: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_en_proceso_serializes_with_space() {
        let json = serde_json::to_string(&EstadoCaso::EnProceso).unwrap();
        assert_eq!(json, "\"En Proceso\"");
        assert_eq!(EstadoCaso::from("En Proceso"), EstadoCaso::EnProceso);
    }

    #[test]
    fn unknown_strings_fall_back_to_defaults() {
        assert_eq!(Prioridad::from("Urgente"), Prioridad::Media);
        assert_eq!(EstadoCaso::from(""), EstadoCaso::Abierto);
        assert_eq!(TipoCaso::from("Otro"), TipoCaso::Queja);
    }
}
