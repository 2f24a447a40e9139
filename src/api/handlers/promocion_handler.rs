//! Promoción handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Promocion, PromocionForm, PromocionResumen};
use crate::errors::AppResult;
use crate::types::{Creado, Mensaje, Registrado};

/// Create promoción routes
pub fn promocion_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_promociones))
        .route("/:id", get(get_promocion))
        .route("/", post(crear_promocion))
        .route("/:id", put(actualizar_promocion))
        .route("/:id", delete(eliminar_promocion))
}

/// List all promociones with their asignados count
#[utoipa::path(
    get,
    path = "/api/promociones",
    tag = "Promociones",
    responses(
        (status = 200, description = "All promociones", body = [PromocionResumen])
    )
)]
pub async fn list_promociones(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PromocionResumen>>> {
    let promociones = state.promociones.list().await?;
    Ok(Json(promociones))
}

/// Get a promoción by id
#[utoipa::path(
    get,
    path = "/api/promociones/{id}",
    tag = "Promociones",
    params(("id" = i64, Path, description = "Promoción id")),
    responses(
        (status = 200, description = "Promoción found", body = Promocion),
        (status = 404, description = "Promoción not found")
    )
)]
pub async fn get_promocion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Promocion>> {
    let promocion = state.promociones.get(id).await?;
    Ok(Json(promocion))
}

/// Create a new promoción
#[utoipa::path(
    post,
    path = "/api/promociones",
    tag = "Promociones",
    request_body = PromocionForm,
    responses(
        (status = 201, description = "Promoción created", body = Creado),
        (status = 400, description = "Validation error")
    )
)]
pub async fn crear_promocion(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PromocionForm>,
) -> AppResult<Registrado> {
    let id = state.promociones.create(payload).await?;
    Ok(Registrado(Creado::new(id, "Promoción creada exitosamente")))
}

/// Update an existing promoción
#[utoipa::path(
    put,
    path = "/api/promociones/{id}",
    tag = "Promociones",
    params(("id" = i64, Path, description = "Promoción id")),
    request_body = PromocionForm,
    responses(
        (status = 200, description = "Promoción updated", body = Mensaje),
        (status = 404, description = "Promoción not found")
    )
)]
pub async fn actualizar_promocion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<PromocionForm>,
) -> AppResult<Json<Mensaje>> {
    state.promociones.update(id, payload).await?;
    Ok(Json(Mensaje::new("Promoción actualizada exitosamente")))
}

/// Delete a promoción and its asignaciones
#[utoipa::path(
    delete,
    path = "/api/promociones/{id}",
    tag = "Promociones",
    params(("id" = i64, Path, description = "Promoción id")),
    responses(
        (status = 200, description = "Promoción deleted", body = Mensaje),
        (status = 404, description = "Promoción not found")
    )
)]
pub async fn eliminar_promocion(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Mensaje>> {
    state.promociones.delete(id).await?;
    Ok(Json(Mensaje::new("Promoción eliminada exitosamente")))
}
