//! Migration: Create clientes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clientes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clientes::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Clientes::Nombre).string().not_null())
                    .col(
                        ColumnDef::new(Clientes::Dni)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Clientes::Email).string().not_null())
                    .col(ColumnDef::new(Clientes::Telefono).string_len(30).null())
                    .col(
                        ColumnDef::new(Clientes::Estado)
                            .string_len(20)
                            .not_null()
                            .default("Activo"),
                    )
                    .col(
                        ColumnDef::new(Clientes::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Search hits nombre constantly from the cross-entity endpoint
        manager
            .create_index(
                Index::create()
                    .name("idx_clientes_nombre")
                    .table(Clientes::Table)
                    .col(Clientes::Nombre)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Clientes::Table).to_owned())
            .await
    }
}

/// Table and column identifiers for Clientes
#[derive(Iden)]
pub enum Clientes {
    Table,
    Id,
    Nombre,
    Dni,
    Email,
    Telefono,
    Estado,
    CreatedAt,
}
