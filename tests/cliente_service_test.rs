//! Cliente service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::predicate::eq;

use atlantic_crm::domain::{Cliente, ClienteForm, EstadoCliente};
use atlantic_crm::errors::{AppError, AppResult};
use atlantic_crm::infra::repositories::ClienteRepository;
use atlantic_crm::services::{ClienteManager, ClienteService};

mockall::mock! {
    ClienteRepo {}

    #[async_trait]
    impl ClienteRepository for ClienteRepo {
        async fn list(&self) -> AppResult<Vec<Cliente>>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>>;
        async fn search(&self, term: &str) -> AppResult<Vec<Cliente>>;
        async fn insert(&self, form: ClienteForm) -> AppResult<i64>;
        async fn update(&self, id: i64, form: ClienteForm) -> AppResult<()>;
        async fn delete(&self, id: i64) -> AppResult<()>;
    }
}

fn cliente_de_prueba(id: i64) -> Cliente {
    Cliente {
        id,
        nombre: "María González López".to_string(),
        dni: "12345678".to_string(),
        email: "maria@example.com".to_string(),
        telefono: Some("987654321".to_string()),
        estado: EstadoCliente::Activo,
        created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
    }
}

fn formulario() -> ClienteForm {
    ClienteForm {
        nombre: "María González López".to_string(),
        dni: "12345678".to_string(),
        email: "maria@example.com".to_string(),
        telefono: None,
        estado: None,
    }
}

#[tokio::test]
async fn get_returns_the_cliente() {
    let mut repo = MockClienteRepo::new();
    repo.expect_find_by_id()
        .with(eq(7))
        .times(1)
        .returning(|id| Ok(Some(cliente_de_prueba(id))));

    let service = ClienteManager::new(Arc::new(repo));
    let cliente = service.get(7).await.unwrap();

    assert_eq!(cliente.id, 7);
    assert_eq!(cliente.dni, "12345678");
}

#[tokio::test]
async fn get_missing_cliente_is_not_found() {
    let mut repo = MockClienteRepo::new();
    repo.expect_find_by_id().returning(|_| Ok(None));

    let service = ClienteManager::new(Arc::new(repo));
    let err = service.get(999).await.unwrap_err();

    match err {
        AppError::NotFound(mensaje) => assert_eq!(mensaje, "Cliente no encontrado"),
        otro => panic!("error inesperado: {otro:?}"),
    }
}

#[tokio::test]
async fn buscar_trims_the_term_before_querying() {
    let mut repo = MockClienteRepo::new();
    repo.expect_search()
        .with(eq("maria"))
        .times(1)
        .returning(|_| Ok(vec![cliente_de_prueba(1)]));

    let service = ClienteManager::new(Arc::new(repo));
    let resultados = service.buscar("  maria  ").await.unwrap();

    assert_eq!(resultados.len(), 1);
}

#[tokio::test]
async fn create_returns_the_generated_id() {
    let mut repo = MockClienteRepo::new();
    repo.expect_insert().times(1).returning(|_| Ok(42));

    let service = ClienteManager::new(Arc::new(repo));
    let id = service.create(formulario()).await.unwrap();

    assert_eq!(id, 42);
}

#[tokio::test]
async fn create_surfaces_duplicate_dni_as_conflict() {
    let mut repo = MockClienteRepo::new();
    repo.expect_insert()
        .returning(|_| Err(AppError::conflict("El DNI ya está registrado")));

    let service = ClienteManager::new(Arc::new(repo));
    let err = service.create(formulario()).await.unwrap_err();

    match err {
        AppError::Conflict(mensaje) => assert_eq!(mensaje, "El DNI ya está registrado"),
        otro => panic!("error inesperado: {otro:?}"),
    }
}

#[tokio::test]
async fn delete_propagates_not_found() {
    let mut repo = MockClienteRepo::new();
    repo.expect_delete()
        .with(eq(5))
        .returning(|_| Err(AppError::not_found("Cliente no encontrado")));

    let service = ClienteManager::new(Arc::new(repo));
    let err = service.delete(5).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
}
