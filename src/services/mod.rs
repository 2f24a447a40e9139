//! Service layer - Business logic
//!
//! Services orchestrate domain operations on top of the repository layer
//! and are exposed to handlers as trait objects.

mod asignacion_service;
mod caso_service;
mod cliente_service;
mod container;
mod promocion_service;
mod reporte_service;
mod visita_service;

pub use asignacion_service::{AsignacionManager, AsignacionService};
pub use caso_service::{CasoManager, CasoService};
pub use cliente_service::{ClienteManager, ClienteService};
pub use container::Services;
pub use promocion_service::{PromocionManager, PromocionService};
pub use reporte_service::{ReporteManager, ReporteService};
pub use visita_service::{VisitaManager, VisitaService};
