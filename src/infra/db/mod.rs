//! Database connection and schema management for the CRM.

use sea_orm::{Database as SeaDatabase, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use crate::config::Config;

pub mod migrations;

pub use migrations::Migrator;

/// Connection handle plus the migration operations the CLI exposes.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect to MySQL and bring the schema up to date.
    ///
    /// # Panics
    /// Panics when the database is unreachable or a migration fails; the
    /// server cannot serve any endpoint without its tables.
    pub async fn connect(config: &Config) -> Self {
        let connection = SeaDatabase::connect(config.database_url())
            .await
            .expect("No se pudo conectar a la base de datos");

        if let Err(e) = Migrator::up(&connection, None).await {
            tracing::error!("No se pudieron aplicar las migraciones: {}", e);
            panic!("No se pudieron aplicar las migraciones: {}", e);
        }

        tracing::info!("Base de datos conectada y migraciones aplicadas");

        Self { connection }
    }

    /// Connect without touching the schema; the migrate command drives
    /// each action explicitly.
    pub async fn connect_without_migrations(config: &Config) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(config.database_url()).await?;
        Ok(Self { connection })
    }

    /// Clone of the pooled connection for wiring the service container.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply pending migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Roll back the most recent migration.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Every defined migration paired with whether it has been applied.
    pub async fn migration_status(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        let aplicadas: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|m| {
                let nombre = m.name().to_string();
                let hecha = aplicadas.contains(&nombre);
                (nombre, hecha)
            })
            .collect())
    }

    /// Drop everything and re-run all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }
}
