//! Migration: Create promociones table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Promociones::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Promociones::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Promociones::Nombre).string().not_null())
                    .col(ColumnDef::new(Promociones::Descuento).double().not_null())
                    .col(ColumnDef::new(Promociones::FechaInicio).date().not_null())
                    .col(ColumnDef::new(Promociones::FechaFin).date().not_null())
                    .col(
                        ColumnDef::new(Promociones::Estado)
                            .string_len(20)
                            .not_null()
                            .default("Programada"),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Promociones::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for Promociones
#[derive(Iden)]
pub enum Promociones {
    Table,
    Id,
    Nombre,
    Descuento,
    FechaInicio,
    FechaFin,
    Estado,
}
