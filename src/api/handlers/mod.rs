//! HTTP request handlers.

pub mod asignacion_handler;
pub mod caso_handler;
pub mod cliente_handler;
pub mod promocion_handler;
pub mod reporte_handler;
pub mod visita_handler;

pub use asignacion_handler::asignacion_routes;
pub use caso_handler::caso_routes;
pub use cliente_handler::cliente_routes;
pub use promocion_handler::promocion_routes;
pub use reporte_handler::reporte_routes;
pub use visita_handler::visita_routes;
