//! Service Container - Centralized service construction.
//!
//! SOLID (SRP): Manages service lifecycle and wiring.
//! SOLID (DIP): Exposes service traits, not implementations.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AsignacionManager, AsignacionService, CasoManager, CasoService, ClienteManager,
    ClienteService, PromocionManager, PromocionService, ReporteManager, ReporteService,
    VisitaManager, VisitaService,
};
use crate::infra::repositories::{
    AsignacionStore, CasoStore, ClienteStore, PromocionStore, ReporteStore, VisitaStore,
};

/// All application services, wired once at startup.
#[derive(Clone)]
pub struct Services {
    pub clientes: Arc<dyn ClienteService>,
    pub visitas: Arc<dyn VisitaService>,
    pub casos: Arc<dyn CasoService>,
    pub promociones: Arc<dyn PromocionService>,
    pub asignaciones: Arc<dyn AsignacionService>,
    pub reportes: Arc<dyn ReporteService>,
}

impl Services {
    /// Build every service on top of a single database connection pool.
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            clientes: Arc::new(ClienteManager::new(Arc::new(ClienteStore::new(db.clone())))),
            visitas: Arc::new(VisitaManager::new(Arc::new(VisitaStore::new(db.clone())))),
            casos: Arc::new(CasoManager::new(Arc::new(CasoStore::new(db.clone())))),
            promociones: Arc::new(PromocionManager::new(Arc::new(PromocionStore::new(
                db.clone(),
            )))),
            asignaciones: Arc::new(AsignacionManager::new(Arc::new(AsignacionStore::new(
                db.clone(),
            )))),
            reportes: Arc::new(ReporteManager::new(Arc::new(ReporteStore::new(db)))),
        }
    }
}
