//! Caso handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Caso, CasoForm};
use crate::errors::AppResult;
use crate::types::{Creado, Mensaje, Registrado};

/// Create caso routes
pub fn caso_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_casos))
        .route("/:id", get(get_caso))
        .route("/", post(crear_caso))
        .route("/:id", put(actualizar_caso))
        .route("/:id", delete(eliminar_caso))
}

/// List all casos
#[utoipa::path(
    get,
    path = "/api/casos",
    tag = "Casos",
    responses(
        (status = 200, description = "All casos, most recent first", body = [Caso])
    )
)]
pub async fn list_casos(State(state): State<AppState>) -> AppResult<Json<Vec<Caso>>> {
    let casos = state.casos.list().await?;
    Ok(Json(casos))
}

/// Get a caso by id
#[utoipa::path(
    get,
    path = "/api/casos/{id}",
    tag = "Casos",
    params(("id" = i64, Path, description = "Caso id")),
    responses(
        (status = 200, description = "Caso found", body = Caso),
        (status = 404, description = "Caso not found")
    )
)]
pub async fn get_caso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Caso>> {
    let caso = state.casos.get(id).await?;
    Ok(Json(caso))
}

/// Open a new caso
#[utoipa::path(
    post,
    path = "/api/casos",
    tag = "Casos",
    request_body = CasoForm,
    responses(
        (status = 201, description = "Caso created", body = Creado),
        (status = 400, description = "Validation error or duplicated codigo")
    )
)]
pub async fn crear_caso(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CasoForm>,
) -> AppResult<Registrado> {
    let id = state.casos.create(payload).await?;
    Ok(Registrado(Creado::new(id, "Caso creado exitosamente")))
}

/// Update an existing caso
#[utoipa::path(
    put,
    path = "/api/casos/{id}",
    tag = "Casos",
    params(("id" = i64, Path, description = "Caso id")),
    request_body = CasoForm,
    responses(
        (status = 200, description = "Caso updated", body = Mensaje),
        (status = 400, description = "Validation error or duplicated codigo"),
        (status = 404, description = "Caso not found")
    )
)]
pub async fn actualizar_caso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<CasoForm>,
) -> AppResult<Json<Mensaje>> {
    state.casos.update(id, payload).await?;
    Ok(Json(Mensaje::new("Caso actualizado exitosamente")))
}

/// Delete a caso
#[utoipa::path(
    delete,
    path = "/api/casos/{id}",
    tag = "Casos",
    params(("id" = i64, Path, description = "Caso id")),
    responses(
        (status = 200, description = "Caso deleted", body = Mensaje),
        (status = 404, description = "Caso not found")
    )
)]
pub async fn eliminar_caso(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Mensaje>> {
    state.casos.delete(id).await?;
    Ok(Json(Mensaje::new("Caso eliminado exitosamente")))
}
