//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod asignacion;
pub mod caso;
pub mod cliente;
pub mod promocion;
pub mod visita;
