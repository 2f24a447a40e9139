//! Cliente domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{ESTADO_ACTIVO, ESTADO_INACTIVO};

/// Estado de un cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum EstadoCliente {
    #[default]
    Activo,
    Inactivo,
}

impl From<&str> for EstadoCliente {
    fn from(s: &str) -> Self {
        match s {
            ESTADO_INACTIVO => EstadoCliente::Inactivo,
            _ => EstadoCliente::Activo,
        }
    }
}

impl std::fmt::Display for EstadoCliente {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstadoCliente::Activo => write!(f, "{}", ESTADO_ACTIVO),
            EstadoCliente::Inactivo => write!(f, "{}", ESTADO_INACTIVO),
        }
    }
}

/// Cliente domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Cliente {
    pub id: i64,
    #[schema(example = "María González López")]
    pub nombre: String,
    /// Documento nacional de identidad, unique per cliente
    #[schema(example = "12345678")]
    pub dni: String,
    #[schema(example = "maria@example.com")]
    pub email: String,
    pub telefono: Option<String>,
    pub estado: EstadoCliente,
    pub created_at: DateTime<Utc>,
}

/// Payload accepted by create and update endpoints (full-row semantics).
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClienteForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    #[schema(example = "María González López")]
    pub nombre: String,
    #[validate(length(min = 1, message = "El DNI es obligatorio"))]
    #[schema(example = "12345678")]
    pub dni: String,
    #[validate(email(message = "El email no es válido"))]
    #[schema(example = "maria@example.com")]
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    /// Defaults to `Activo` when omitted
    #[serde(default)]
    pub estado: Option<EstadoCliente>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estado_round_trips_through_strings() {
        assert_eq!(EstadoCliente::from("Activo"), EstadoCliente::Activo);
        assert_eq!(EstadoCliente::from("Inactivo"), EstadoCliente::Inactivo);
        assert_eq!(EstadoCliente::Activo.to_string(), "Activo");
        // Unknown values fall back to Activo
        assert_eq!(EstadoCliente::from("???"), EstadoCliente::Activo);
    }

    #[test]
    fn form_rejects_empty_required_fields() {
        let form = ClienteForm {
            nombre: "".into(),
            dni: "1".into(),
            email: "a@x.com".into(),
            telefono: None,
            estado: None,
        };
        assert!(form.validate().is_err());
    }
}
