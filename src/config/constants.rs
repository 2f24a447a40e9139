//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database (development defaults, overridden via environment)
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 3306;
pub const DEFAULT_DB_USER: &str = "root";
pub const DEFAULT_DB_PASSWORD: &str = "123456";
pub const DEFAULT_DB_NAME: &str = "casino_atlantic_crm";

// =============================================================================
// Entity state strings (stored as-is in the database)
// =============================================================================

pub const ESTADO_ACTIVO: &str = "Activo";
pub const ESTADO_INACTIVO: &str = "Inactivo";

pub const CASO_ABIERTO: &str = "Abierto";
pub const CASO_EN_PROCESO: &str = "En Proceso";
pub const CASO_RESUELTO: &str = "Resuelto";
pub const CASO_CERRADO: &str = "Cerrado";

pub const PRIORIDAD_ALTA: &str = "Alta";
pub const PRIORIDAD_MEDIA: &str = "Media";
pub const PRIORIDAD_BAJA: &str = "Baja";

pub const TIPO_QUEJA: &str = "Queja";
pub const TIPO_SUGERENCIA: &str = "Sugerencia";
pub const TIPO_INCIDENCIA: &str = "Incidencia";

pub const PROMO_PROGRAMADA: &str = "Programada";
pub const PROMO_ACTIVA: &str = "Activa";
pub const PROMO_FINALIZADA: &str = "Finalizada";

// =============================================================================
// Reporting
// =============================================================================

/// A cliente counts as "nuevo" if registered within this many days.
pub const DIAS_CLIENTE_NUEVO: i64 = 30;

/// Message returned whenever persistence detail must be hidden from clients.
pub const MENSAJE_ERROR_INTERNO: &str = "Error interno del servidor";
