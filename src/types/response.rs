use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned by every create endpoint: generated id plus a message.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Creado {
    /// Auto-generated identifier of the inserted row
    #[schema(example = 7)]
    pub id: i64,
    #[schema(example = "Cliente creado exitosamente")]
    pub mensaje: String,
}

impl Creado {
    pub fn new(id: i64, mensaje: impl Into<String>) -> Self {
        Self {
            id,
            mensaje: mensaje.into(),
        }
    }
}

/// 201 response helper for POST endpoints
pub struct Registrado(pub Creado);

impl IntoResponse for Registrado {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

/// Message-only body used by update and delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Mensaje {
    #[schema(example = "Cliente actualizado exitosamente")]
    pub mensaje: String,
}

impl Mensaje {
    pub fn new(mensaje: impl Into<String>) -> Self {
        Self {
            mensaje: mensaje.into(),
        }
    }
}
