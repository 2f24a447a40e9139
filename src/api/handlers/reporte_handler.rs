//! Reporte handlers: estadísticas and cross-entity búsqueda.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::AppState;
use crate::domain::{Estadisticas, ResultadoBusqueda, TipoBusqueda};
use crate::errors::AppResult;

/// Create reporte routes. These are mounted directly under /api.
pub fn reporte_routes() -> Router<AppState> {
    Router::new()
        .route("/estadisticas", get(estadisticas))
        .route("/busqueda", get(busqueda))
}

/// Query string accepted by the búsqueda endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BusquedaParams {
    /// Search term, required and non-empty
    #[serde(default)]
    pub query: String,
    /// Entity family filter: todos, clientes, visitas, casos o promociones
    #[serde(default)]
    pub tipo: Option<String>,
}

/// General statistics across all entities
#[utoipa::path(
    get,
    path = "/api/estadisticas",
    tag = "Reportes",
    responses(
        (status = 200, description = "Counters for every entity family", body = Estadisticas)
    )
)]
pub async fn estadisticas(State(state): State<AppState>) -> AppResult<Json<Estadisticas>> {
    let stats = state.reportes.estadisticas().await?;
    Ok(Json(stats))
}

/// Cross-entity search
#[utoipa::path(
    get,
    path = "/api/busqueda",
    tag = "Reportes",
    params(BusquedaParams),
    responses(
        (status = 200, description = "Matches across the selected families", body = [ResultadoBusqueda]),
        (status = 400, description = "Missing search term")
    )
)]
pub async fn busqueda(
    State(state): State<AppState>,
    Query(params): Query<BusquedaParams>,
) -> AppResult<Json<Vec<ResultadoBusqueda>>> {
    let tipo = params
        .tipo
        .as_deref()
        .map(TipoBusqueda::from)
        .unwrap_or_default();

    let resultados = state.reportes.buscar(&params.query, tipo).await?;
    Ok(Json(resultados))
}
