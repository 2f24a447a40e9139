//! Visita handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Visita, VisitaDetalle, VisitaForm};
use crate::errors::AppResult;
use crate::types::{Creado, Mensaje, Registrado};

/// Create visita routes
pub fn visita_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_visitas))
        .route("/cliente/:cliente_id", get(visitas_de_cliente))
        .route("/", post(registrar_visita))
        .route("/:id", put(actualizar_visita))
        .route("/:id", delete(eliminar_visita))
}

/// List all visitas with cliente data
#[utoipa::path(
    get,
    path = "/api/visitas",
    tag = "Visitas",
    responses(
        (status = 200, description = "All visitas, newest first", body = [VisitaDetalle])
    )
)]
pub async fn list_visitas(State(state): State<AppState>) -> AppResult<Json<Vec<VisitaDetalle>>> {
    let visitas = state.visitas.list().await?;
    Ok(Json(visitas))
}

/// List visitas of one cliente
#[utoipa::path(
    get,
    path = "/api/visitas/cliente/{cliente_id}",
    tag = "Visitas",
    params(("cliente_id" = i64, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "Visitas of the cliente, newest first", body = [Visita])
    )
)]
pub async fn visitas_de_cliente(
    State(state): State<AppState>,
    Path(cliente_id): Path<i64>,
) -> AppResult<Json<Vec<Visita>>> {
    let visitas = state.visitas.list_by_cliente(cliente_id).await?;
    Ok(Json(visitas))
}

/// Record a new visita
#[utoipa::path(
    post,
    path = "/api/visitas",
    tag = "Visitas",
    request_body = VisitaForm,
    responses(
        (status = 201, description = "Visita recorded", body = Creado),
        (status = 400, description = "Validation error or unknown cliente")
    )
)]
pub async fn registrar_visita(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<VisitaForm>,
) -> AppResult<Registrado> {
    let id = state.visitas.create(payload).await?;
    Ok(Registrado(Creado::new(id, "Visita registrada exitosamente")))
}

/// Update an existing visita
#[utoipa::path(
    put,
    path = "/api/visitas/{id}",
    tag = "Visitas",
    params(("id" = i64, Path, description = "Visita id")),
    request_body = VisitaForm,
    responses(
        (status = 200, description = "Visita updated", body = Mensaje),
        (status = 404, description = "Visita not found")
    )
)]
pub async fn actualizar_visita(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<VisitaForm>,
) -> AppResult<Json<Mensaje>> {
    state.visitas.update(id, payload).await?;
    Ok(Json(Mensaje::new("Visita actualizada exitosamente")))
}

/// Delete a visita
#[utoipa::path(
    delete,
    path = "/api/visitas/{id}",
    tag = "Visitas",
    params(("id" = i64, Path, description = "Visita id")),
    responses(
        (status = 200, description = "Visita deleted", body = Mensaje),
        (status = 404, description = "Visita not found")
    )
)]
pub async fn eliminar_visita(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Mensaje>> {
    state.visitas.delete(id).await?;
    Ok(Json(Mensaje::new("Visita eliminada exitosamente")))
}
