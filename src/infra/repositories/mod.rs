//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;

mod asignacion_repository;
mod caso_repository;
mod cliente_repository;
mod promocion_repository;
mod reporte_repository;
mod visita_repository;

pub use asignacion_repository::{AsignacionRepository, AsignacionStore};
pub use caso_repository::{CasoRepository, CasoStore};
pub use cliente_repository::{ClienteRepository, ClienteStore};
pub use promocion_repository::{PromocionRepository, PromocionStore};
pub use reporte_repository::{ReporteRepository, ReporteStore};
pub use visita_repository::{VisitaRepository, VisitaStore};

use sea_orm::{DbErr, SqlErr};

use crate::errors::AppError;

/// Classify a unique-constraint violation as a conflict with a specific
/// message; everything else stays a generic database error.
pub(crate) fn map_duplicado(err: DbErr, mensaje: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(mensaje),
        _ => AppError::from(err),
    }
}

/// Classify a foreign-key violation as a validation failure with a specific
/// message; everything else stays a generic database error.
pub(crate) fn map_referencia(err: DbErr, mensaje: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::validation(mensaje),
        _ => AppError::from(err),
    }
}
