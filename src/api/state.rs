//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::services::{
    AsignacionService, CasoService, ClienteService, PromocionService, ReporteService, Services,
    VisitaService,
};

/// Application state containing all services (DI container).
///
/// Handlers depend on service traits only, so tests can inject mocks
/// without a database.
#[derive(Clone)]
pub struct AppState {
    pub clientes: Arc<dyn ClienteService>,
    pub visitas: Arc<dyn VisitaService>,
    pub casos: Arc<dyn CasoService>,
    pub promociones: Arc<dyn PromocionService>,
    pub asignaciones: Arc<dyn AsignacionService>,
    pub reportes: Arc<dyn ReporteService>,
}

impl From<Services> for AppState {
    fn from(services: Services) -> Self {
        Self {
            clientes: services.clientes,
            visitas: services.visitas,
            casos: services.casos,
            promociones: services.promociones,
            asignaciones: services.asignaciones,
            reportes: services.reportes,
        }
    }
}
