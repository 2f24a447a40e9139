//! Asignación handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AsignacionDetalle, AsignacionForm};
use crate::errors::AppResult;
use crate::types::{Creado, Mensaje, Registrado};

/// Create asignación routes
pub fn asignacion_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_asignaciones))
        .route("/", post(crear_asignacion))
        .route("/:id", delete(eliminar_asignacion))
}

/// List all asignaciones with cliente and promoción data
#[utoipa::path(
    get,
    path = "/api/asignaciones",
    tag = "Asignaciones",
    responses(
        (status = 200, description = "All asignaciones, newest first", body = [AsignacionDetalle])
    )
)]
pub async fn list_asignaciones(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AsignacionDetalle>>> {
    let asignaciones = state.asignaciones.list().await?;
    Ok(Json(asignaciones))
}

/// Assign a promoción to a cliente
#[utoipa::path(
    post,
    path = "/api/asignaciones",
    tag = "Asignaciones",
    request_body = AsignacionForm,
    responses(
        (status = 201, description = "Asignación created", body = Creado),
        (status = 400, description = "Validation error or unknown cliente/promoción")
    )
)]
pub async fn crear_asignacion(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AsignacionForm>,
) -> AppResult<Registrado> {
    let id = state.asignaciones.create(payload).await?;
    Ok(Registrado(Creado::new(id, "Asignación creada exitosamente")))
}

/// Delete an asignación
#[utoipa::path(
    delete,
    path = "/api/asignaciones/{id}",
    tag = "Asignaciones",
    params(("id" = i64, Path, description = "Asignación id")),
    responses(
        (status = 200, description = "Asignación deleted", body = Mensaje),
        (status = 404, description = "Asignación not found")
    )
)]
pub async fn eliminar_asignacion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Mensaje>> {
    state.asignaciones.delete(id).await?;
    Ok(Json(Mensaje::new("Asignación eliminada exitosamente")))
}
