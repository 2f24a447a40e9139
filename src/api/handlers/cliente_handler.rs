//! Cliente handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Cliente, ClienteForm};
use crate::errors::AppResult;
use crate::types::{Creado, Mensaje, Registrado};

/// Create cliente routes
pub fn cliente_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clientes))
        .route("/:id", get(get_cliente))
        .route("/buscar/:termino", get(buscar_clientes))
        .route("/", post(crear_cliente))
        .route("/:id", put(actualizar_cliente))
        .route("/:id", delete(eliminar_cliente))
}

/// List all clientes
#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "All clientes, newest first", body = [Cliente])
    )
)]
pub async fn list_clientes(State(state): State<AppState>) -> AppResult<Json<Vec<Cliente>>> {
    let clientes = state.clientes.list().await?;
    Ok(Json(clientes))
}

/// Get a cliente by id
#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "Cliente found", body = Cliente),
        (status = 404, description = "Cliente not found")
    )
)]
pub async fn get_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Cliente>> {
    let cliente = state.clientes.get(id).await?;
    Ok(Json(cliente))
}

/// Search clientes by nombre, dni or email
#[utoipa::path(
    get,
    path = "/api/clientes/buscar/{termino}",
    tag = "Clientes",
    params(("termino" = String, Path, description = "Substring to match")),
    responses(
        (status = 200, description = "Matching clientes", body = [Cliente])
    )
)]
pub async fn buscar_clientes(
    State(state): State<AppState>,
    Path(termino): Path<String>,
) -> AppResult<Json<Vec<Cliente>>> {
    let clientes = state.clientes.buscar(&termino).await?;
    Ok(Json(clientes))
}

/// Register a new cliente
#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = ClienteForm,
    responses(
        (status = 201, description = "Cliente created", body = Creado),
        (status = 400, description = "Validation error or duplicated DNI")
    )
)]
pub async fn crear_cliente(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ClienteForm>,
) -> AppResult<Registrado> {
    let id = state.clientes.create(payload).await?;
    Ok(Registrado(Creado::new(id, "Cliente creado exitosamente")))
}

/// Update an existing cliente
#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "Cliente id")),
    request_body = ClienteForm,
    responses(
        (status = 200, description = "Cliente updated", body = Mensaje),
        (status = 400, description = "Validation error or duplicated DNI"),
        (status = 404, description = "Cliente not found")
    )
)]
pub async fn actualizar_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ClienteForm>,
) -> AppResult<Json<Mensaje>> {
    state.clientes.update(id, payload).await?;
    Ok(Json(Mensaje::new("Cliente actualizado exitosamente")))
}

/// Delete a cliente and its dependent rows
#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i64, Path, description = "Cliente id")),
    responses(
        (status = 200, description = "Cliente deleted", body = Mensaje),
        (status = 404, description = "Cliente not found")
    )
)]
pub async fn eliminar_cliente(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Mensaje>> {
    state.clientes.delete(id).await?;
    Ok(Json(Mensaje::new("Cliente eliminado exitosamente")))
}
