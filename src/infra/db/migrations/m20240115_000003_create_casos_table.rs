//! Migration: Create casos table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Casos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Casos::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Casos::Codigo)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Casos::Cliente).string().not_null())
                    .col(
                        ColumnDef::new(Casos::Tipo)
                            .string_len(20)
                            .not_null()
                            .default("Queja"),
                    )
                    .col(ColumnDef::new(Casos::Asunto).string().not_null())
                    .col(ColumnDef::new(Casos::Descripcion).text().null())
                    .col(
                        ColumnDef::new(Casos::Prioridad)
                            .string_len(20)
                            .not_null()
                            .default("Media"),
                    )
                    .col(
                        ColumnDef::new(Casos::Estado)
                            .string_len(20)
                            .not_null()
                            .default("Abierto"),
                    )
                    .col(ColumnDef::new(Casos::Fecha).date().not_null())
                    .col(ColumnDef::new(Casos::Responsable).string().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Casos::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for Casos
#[derive(Iden)]
enum Casos {
    Table,
    Id,
    Codigo,
    Cliente,
    Tipo,
    Asunto,
    Descripcion,
    Prioridad,
    Estado,
    Fecha,
    Responsable,
}
