//! Integration tests for API endpoints.
//!
//! These tests use stub services behind the real router, so they exercise
//! routing, extractors and response shapes without a database.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use atlantic_crm::api::{create_router, AppState};
use atlantic_crm::domain::{
    AsignacionDetalle, AsignacionForm, Caso, CasoForm, Cliente, ClienteForm, Estadisticas,
    EstadisticasCasos, EstadisticasClientes, EstadisticasPromociones, EstadoCliente,
    PromocionForm, PromocionResumen, Promocion, ResultadoBusqueda, TipoBusqueda, VisitaDetalle,
    VisitaForm, Visita,
};
use atlantic_crm::errors::{AppError, AppResult};
use atlantic_crm::infra::repositories::ReporteRepository;
use atlantic_crm::services::{
    AsignacionService, CasoService, ClienteService, PromocionService, ReporteManager,
    VisitaService,
};

// =============================================================================
// Stub services
// =============================================================================

const DNI_DUPLICADO: &str = "99999999";

fn cliente_de_prueba(id: i64, nombre: &str, dni: &str) -> Cliente {
    Cliente {
        id,
        nombre: nombre.to_string(),
        dni: dni.to_string(),
        email: format!("{dni}@example.com"),
        telefono: None,
        estado: EstadoCliente::Activo,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    }
}

/// Cliente service with two canned rows. Id 1 exists, everything else is
/// missing; the DNI 99999999 is already taken.
struct StubClienteService;

#[async_trait]
impl ClienteService for StubClienteService {
    async fn list(&self) -> AppResult<Vec<Cliente>> {
        Ok(vec![
            cliente_de_prueba(1, "María González López", "12345678"),
            cliente_de_prueba(2, "Pedro Pérez", "87654321"),
        ])
    }

    async fn get(&self, id: i64) -> AppResult<Cliente> {
        if id == 1 {
            Ok(cliente_de_prueba(1, "María González López", "12345678"))
        } else {
            Err(AppError::not_found("Cliente no encontrado"))
        }
    }

    async fn buscar(&self, termino: &str) -> AppResult<Vec<Cliente>> {
        let todos = self.list().await?;
        Ok(todos
            .into_iter()
            .filter(|c| c.nombre.to_lowercase().contains(&termino.to_lowercase()))
            .collect())
    }

    async fn create(&self, form: ClienteForm) -> AppResult<i64> {
        if form.dni == DNI_DUPLICADO {
            Err(AppError::conflict("El DNI ya está registrado"))
        } else {
            Ok(7)
        }
    }

    async fn update(&self, id: i64, _form: ClienteForm) -> AppResult<()> {
        if id == 1 {
            Ok(())
        } else {
            Err(AppError::not_found("Cliente no encontrado"))
        }
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if id == 1 {
            Ok(())
        } else {
            Err(AppError::not_found("Cliente no encontrado"))
        }
    }
}

struct StubVisitaService;

#[async_trait]
impl VisitaService for StubVisitaService {
    async fn list(&self) -> AppResult<Vec<VisitaDetalle>> {
        Ok(vec![VisitaDetalle {
            id: 1,
            cliente_id: 1,
            fecha: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            servicio: "spa".to_string(),
            nombre: "María González López".to_string(),
            dni: "12345678".to_string(),
        }])
    }

    async fn list_by_cliente(&self, cliente_id: i64) -> AppResult<Vec<Visita>> {
        Ok(vec![Visita {
            id: 1,
            cliente_id,
            fecha: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            servicio: "spa".to_string(),
        }])
    }

    async fn create(&self, _form: VisitaForm) -> AppResult<i64> {
        Ok(3)
    }

    async fn update(&self, _id: i64, _form: VisitaForm) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

struct StubCasoService;

#[async_trait]
impl CasoService for StubCasoService {
    async fn list(&self) -> AppResult<Vec<Caso>> {
        Ok(vec![])
    }

    async fn get(&self, _id: i64) -> AppResult<Caso> {
        Err(AppError::not_found("Caso no encontrado"))
    }

    async fn create(&self, form: CasoForm) -> AppResult<i64> {
        if form.codigo == "CASO-DUP" {
            Err(AppError::conflict("El código del caso ya existe"))
        } else {
            Ok(4)
        }
    }

    async fn update(&self, _id: i64, _form: CasoForm) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

struct StubPromocionService;

#[async_trait]
impl PromocionService for StubPromocionService {
    async fn list(&self) -> AppResult<Vec<PromocionResumen>> {
        Ok(vec![])
    }

    async fn get(&self, _id: i64) -> AppResult<Promocion> {
        Err(AppError::not_found("Promoción no encontrada"))
    }

    async fn create(&self, _form: PromocionForm) -> AppResult<i64> {
        Ok(5)
    }

    async fn update(&self, _id: i64, _form: PromocionForm) -> AppResult<()> {
        Ok(())
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

struct StubAsignacionService;

#[async_trait]
impl AsignacionService for StubAsignacionService {
    async fn list(&self) -> AppResult<Vec<AsignacionDetalle>> {
        Ok(vec![])
    }

    async fn create(&self, _form: AsignacionForm) -> AppResult<i64> {
        Ok(6)
    }

    async fn delete(&self, _id: i64) -> AppResult<()> {
        Ok(())
    }
}

/// Reporte repository stub; the reporte service is the real manager so the
/// empty-term rule is exercised through HTTP.
struct StubReporteRepo;

#[async_trait]
impl ReporteRepository for StubReporteRepo {
    async fn estadisticas(&self) -> AppResult<Estadisticas> {
        Ok(Estadisticas {
            clientes: EstadisticasClientes {
                total: 25,
                activos: 20,
                inactivos: 5,
                nuevos: 3,
            },
            visitas: 60,
            casos: EstadisticasCasos {
                total: 10,
                abiertos: 2,
            },
            promociones: EstadisticasPromociones { activas: 4 },
        })
    }

    async fn buscar(
        &self,
        term: &str,
        _tipo: TipoBusqueda,
    ) -> AppResult<Vec<ResultadoBusqueda>> {
        Ok(vec![ResultadoBusqueda {
            tipo: "cliente".to_string(),
            nombre: format!("Coincidencia para {term}"),
            dni: Some("12345678".to_string()),
            estado_detalle: Some("Activo".to_string()),
            fecha: None,
        }])
    }
}

fn app() -> Router {
    let state = AppState {
        clientes: Arc::new(StubClienteService),
        visitas: Arc::new(StubVisitaService),
        casos: Arc::new(StubCasoService),
        promociones: Arc::new(StubPromocionService),
        asignaciones: Arc::new(StubAsignacionService),
        reportes: Arc::new(ReporteManager::new(Arc::new(StubReporteRepo))),
    };

    create_router(state)
}

async fn send(method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn index_describes_the_api() {
    let (status, body) = send(Method::GET, "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "API Casino Atlantic CRM");
    assert_eq!(body["endpoints"]["clientes"], "/api/clientes");
}

#[tokio::test]
async fn unknown_route_returns_the_uniform_404_body() {
    let (status, body) = send(Method::GET, "/api/inexistente", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Ruta no encontrada");
}

#[tokio::test]
async fn list_clientes_returns_a_bare_array() {
    let (status, body) = send(Method::GET, "/api/clientes", None).await;

    assert_eq!(status, StatusCode::OK);
    let filas = body.as_array().expect("la lista debe ser un array");
    assert_eq!(filas.len(), 2);
    assert_eq!(filas[0]["dni"], "12345678");
}

#[tokio::test]
async fn get_missing_cliente_is_404_with_error_body() {
    let (status, body) = send(Method::GET, "/api/clientes/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Cliente no encontrado");
}

#[tokio::test]
async fn crear_cliente_returns_201_with_id_and_mensaje() {
    let payload = json!({
        "nombre": "Ana Martínez Cruz",
        "dni": "11223344",
        "email": "ana@example.com"
    });
    let (status, body) = send(Method::POST, "/api/clientes", Some(payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 7);
    assert_eq!(body["mensaje"], "Cliente creado exitosamente");
}

#[tokio::test]
async fn crear_cliente_with_duplicate_dni_is_400() {
    let payload = json!({
        "nombre": "Otra Persona",
        "dni": DNI_DUPLICADO,
        "email": "otra@example.com"
    });
    let (status, body) = send(Method::POST, "/api/clientes", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El DNI ya está registrado");
}

#[tokio::test]
async fn crear_cliente_with_invalid_fields_is_400() {
    let payload = json!({
        "nombre": "",
        "dni": "123",
        "email": "no-es-un-email"
    });
    let (status, body) = send(Method::POST, "/api/clientes", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn eliminar_cliente_returns_the_confirmation_mensaje() {
    let (status, body) = send(Method::DELETE, "/api/clientes/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mensaje"], "Cliente eliminado exitosamente");
}

#[tokio::test]
async fn crear_caso_with_duplicate_codigo_is_400() {
    let payload = json!({
        "codigo": "CASO-DUP",
        "cliente": "María González López",
        "tipo": "Queja",
        "asunto": "Demora en atención",
        "fecha": "2024-03-01"
    });
    let (status, body) = send(Method::POST, "/api/casos", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El código del caso ya existe");
}

#[tokio::test]
async fn visitas_by_cliente_uses_the_nested_route() {
    let (status, body) = send(Method::GET, "/api/visitas/cliente/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["cliente_id"], 1);
}

#[tokio::test]
async fn busqueda_without_query_is_400() {
    let (status, body) = send(Method::GET, "/api/busqueda", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Debe proporcionar un término de búsqueda");
}

#[tokio::test]
async fn busqueda_with_query_returns_tagged_rows() {
    let (status, body) = send(Method::GET, "/api/busqueda?query=maria&tipo=clientes", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["tipo"], "cliente");
    assert_eq!(body[0]["dni"], "12345678");
}

#[tokio::test]
async fn estadisticas_returns_the_nested_counters() {
    let (status, body) = send(Method::GET, "/api/estadisticas", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientes"]["total"], 25);
    assert_eq!(body["clientes"]["activos"], 20);
    assert_eq!(body["visitas"], 60);
    assert_eq!(body["casos"]["abiertos"], 2);
    assert_eq!(body["promociones"]["activas"], 4);
    assert!(body["casos"]["total"].as_i64() >= body["casos"]["abiertos"].as_i64());
}
