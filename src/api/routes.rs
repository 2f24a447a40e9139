//! Application route configuration.

use axum::{http::StatusCode, response::Json, routing::get, Router};
use serde::Serialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    asignacion_routes, caso_routes, cliente_routes, promocion_routes, reporte_routes,
    visita_routes,
};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/clientes", cliente_routes())
        .nest("/api/visitas", visita_routes())
        .nest("/api/casos", caso_routes())
        .nest("/api/promociones", promocion_routes())
        .nest("/api/asignaciones", asignacion_routes())
        // estadisticas and busqueda live directly under /api
        .nest("/api", reporte_routes())
        .fallback(ruta_no_encontrada)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Index body listing every exposed endpoint group.
#[derive(Serialize)]
struct IndexResponse {
    mensaje: &'static str,
    version: &'static str,
    endpoints: Value,
}

/// API index
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        mensaje: "API Casino Atlantic CRM",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: json!({
            "clientes": "/api/clientes",
            "visitas": "/api/visitas",
            "casos": "/api/casos",
            "promociones": "/api/promociones",
            "asignaciones": "/api/asignaciones",
            "busqueda": "/api/busqueda",
            "estadisticas": "/api/estadisticas"
        }),
    })
}

/// Uniform 404 body for unmatched routes
async fn ruta_no_encontrada() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Ruta no encontrada" })),
    )
}
