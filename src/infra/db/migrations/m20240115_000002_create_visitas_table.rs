//! Migration: Create visitas table.

use sea_orm_migration::prelude::*;

use super::m20240115_000001_create_clientes_table::Clientes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visitas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Visitas::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Visitas::ClienteId).big_integer().not_null())
                    .col(ColumnDef::new(Visitas::Fecha).date().not_null())
                    .col(ColumnDef::new(Visitas::Servicio).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visitas_cliente")
                            .from(Visitas::Table, Visitas::ClienteId)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visitas_cliente_id")
                    .table(Visitas::Table)
                    .col(Visitas::ClienteId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visitas::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for Visitas
#[derive(Iden)]
enum Visitas {
    Table,
    Id,
    ClienteId,
    Fecha,
    Servicio,
}
