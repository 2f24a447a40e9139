//! Core business entities of the CRM.
//!
//! Database-specific models live in `infra::repositories::entities`; these
//! types are what the API serves and the dashboard consumes.

mod asignacion;
mod caso;
mod cliente;
mod promocion;
mod reporte;
mod visita;

pub use asignacion::{AsignacionDetalle, AsignacionForm};
pub use caso::{Caso, CasoForm, EstadoCaso, Prioridad, TipoCaso};
pub use cliente::{Cliente, ClienteForm, EstadoCliente};
pub use promocion::{EstadoPromocion, Promocion, PromocionForm, PromocionResumen};
pub use reporte::{
    Estadisticas, EstadisticasCasos, EstadisticasClientes, EstadisticasPromociones,
    ResultadoBusqueda, TipoBusqueda,
};
pub use visita::{Visita, VisitaDetalle, VisitaForm};
