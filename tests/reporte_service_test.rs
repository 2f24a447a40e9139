//! Reporte and promoción service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::predicate::eq;

use atlantic_crm::domain::{
    Estadisticas, EstadisticasCasos, EstadisticasClientes, EstadisticasPromociones, Promocion,
    PromocionForm, PromocionResumen, ResultadoBusqueda, TipoBusqueda,
};
use atlantic_crm::errors::{AppError, AppResult};
use atlantic_crm::infra::repositories::{PromocionRepository, ReporteRepository};
use atlantic_crm::services::{
    PromocionManager, PromocionService, ReporteManager, ReporteService,
};

mockall::mock! {
    ReporteRepo {}

    #[async_trait]
    impl ReporteRepository for ReporteRepo {
        async fn estadisticas(&self) -> AppResult<Estadisticas>;
        async fn buscar(&self, term: &str, tipo: TipoBusqueda) -> AppResult<Vec<ResultadoBusqueda>>;
    }
}

mockall::mock! {
    PromocionRepo {}

    #[async_trait]
    impl PromocionRepository for PromocionRepo {
        async fn list_resumen(&self) -> AppResult<Vec<PromocionResumen>>;
        async fn find_by_id(&self, id: i64) -> AppResult<Option<Promocion>>;
        async fn insert(&self, form: PromocionForm) -> AppResult<i64>;
        async fn update(&self, id: i64, form: PromocionForm) -> AppResult<()>;
        async fn delete(&self, id: i64) -> AppResult<()>;
    }
}

fn fecha(dia: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, dia).unwrap()
}

fn estadisticas_de_prueba() -> Estadisticas {
    Estadisticas {
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
    }
}

#[tokio::test]
async fn buscar_rejects_an_empty_term_without_touching_the_repo() {
    let repo = MockReporteRepo::new();
    let service = ReporteManager::new(Arc::new(repo));

    let err = service.buscar("", TipoBusqueda::Todos).await.unwrap_err();

    match err {
        AppError::Validation(mensaje) => {
            assert_eq!(mensaje, "Debe proporcionar un término de búsqueda")
        }
        otro => panic!("error inesperado: {otro:?}"),
    }
}

#[tokio::test]
async fn buscar_rejects_whitespace_only_terms() {
    let repo = MockReporteRepo::new();
    let service = ReporteManager::new(Arc::new(repo));

    let err = service.buscar("   ", TipoBusqueda::Clientes).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn buscar_trims_the_term_before_querying() {
    let mut repo = MockReporteRepo::new();
    repo.expect_buscar()
        .with(eq("poker"), eq(TipoBusqueda::Promociones))
        .times(1)
        .returning(|_, _| {
            Ok(vec![ResultadoBusqueda {
                tipo: "promocion".to_string(),
                nombre: "Noche de Póker".to_string(),
                dni: None,
                estado_detalle: Some("Activa".to_string()),
                fecha: Some("2024-06-01".to_string()),
            }])
        });

    let service = ReporteManager::new(Arc::new(repo));
    let resultados = service
        .buscar("  poker ", TipoBusqueda::Promociones)
        .await
        .unwrap();

    assert_eq!(resultados.len(), 1);
    assert_eq!(resultados[0].tipo, "promocion");
}

#[tokio::test]
async fn estadisticas_pass_through_unchanged() {
    let mut repo = MockReporteRepo::new();
    repo.expect_estadisticas()
        .times(1)
        .returning(|| Ok(estadisticas_de_prueba()));

    let service = ReporteManager::new(Arc::new(repo));
    let stats = service.estadisticas().await.unwrap();

    assert_eq!(stats.clientes.total, 25);
    assert_eq!(stats.casos.abiertos, 2);
}

#[tokio::test]
async fn promocion_create_rejects_fin_before_inicio() {
    let repo = MockPromocionRepo::new();
    let service = PromocionManager::new(Arc::new(repo));

    let form = PromocionForm {
        nombre: "Promo inválida".to_string(),
        descuento: 10.0,
        fecha_inicio: fecha(20),
        fecha_fin: fecha(10),
        estado: None,
    };

    let err = service.create(form).await.unwrap_err();
    match err {
        AppError::Validation(mensaje) => {
            assert_eq!(mensaje, "La fecha de fin debe ser posterior a la fecha de inicio")
        }
        otro => panic!("error inesperado: {otro:?}"),
    }
}

#[tokio::test]
async fn promocion_create_accepts_a_single_day_promotion() {
    let mut repo = MockPromocionRepo::new();
    repo.expect_insert().times(1).returning(|_| Ok(9));

    let service = PromocionManager::new(Arc::new(repo));

    let form = PromocionForm {
        nombre: "Promo de un día".to_string(),
        descuento: 25.0,
        fecha_inicio: fecha(15),
        fecha_fin: fecha(15),
        estado: None,
    };

    assert_eq!(service.create(form).await.unwrap(), 9);
}

#[tokio::test]
async fn promocion_update_applies_the_same_date_rule() {
    let repo = MockPromocionRepo::new();
    let service = PromocionManager::new(Arc::new(repo));

    let form = PromocionForm {
        nombre: "Promo".to_string(),
        descuento: 5.0,
        fecha_inicio: fecha(2),
        fecha_fin: fecha(1),
        estado: None,
    };

    assert!(matches!(
        service.update(3, form).await.unwrap_err(),
        AppError::Validation(_)
    ));
}
