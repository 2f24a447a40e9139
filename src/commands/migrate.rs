//! Migrate command - Database schema management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations so each action stays explicit
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("No se pudo conectar a la base de datos: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Aplicando migraciones pendientes...");
            db.run_migrations()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Esquema del CRM actualizado");
        }
        MigrateAction::Down => {
            tracing::info!("Revirtiendo la última migración...");
            db.rollback_migration()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Reversión completada");
        }
        MigrateAction::Status => {
            let estado = db
                .migration_status()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            for (nombre, aplicada) in estado {
                println!("{}: {}", nombre, etiqueta_estado(aplicada));
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Recreando las tablas del CRM desde cero...");
            db.fresh_migrations()
                .await
                .map_err(|e| AppError::internal(e.to_string()))?;
            tracing::info!("Esquema recreado");
        }
    }

    Ok(())
}

/// Human label for one row of the `migrate status` listing.
fn etiqueta_estado(aplicada: bool) -> &'static str {
    if aplicada {
        "aplicada"
    } else {
        "pendiente"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn etiqueta_estado_distingue_aplicada_de_pendiente() {
        assert_eq!(etiqueta_estado(true), "aplicada");
        assert_eq!(etiqueta_estado(false), "pendiente");
    }
}
