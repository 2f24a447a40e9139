//! Migration: Create asignaciones table.

use sea_orm_migration::prelude::*;

use super::m20240115_000001_create_clientes_table::Clientes;
use super::m20240115_000004_create_promociones_table::Promociones;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Asignaciones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Asignaciones::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Asignaciones::ClienteId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Asignaciones::PromocionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Asignaciones::FechaAsignacion)
                            .date()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asignaciones_cliente")
                            .from(Asignaciones::Table, Asignaciones::ClienteId)
                            .to(Clientes::Table, Clientes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asignaciones_promocion")
                            .from(Asignaciones::Table, Asignaciones::PromocionId)
                            .to(Promociones::Table, Promociones::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_asignaciones_promocion_id")
                    .table(Asignaciones::Table)
                    .col(Asignaciones::PromocionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Asignaciones::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for Asignaciones
#[derive(Iden)]
enum Asignaciones {
    Table,
    Id,
    ClienteId,
    PromocionId,
    FechaAsignacion,
}
