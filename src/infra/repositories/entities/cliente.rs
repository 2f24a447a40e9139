//! Cliente database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Cliente, EstadoCliente};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clientes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    #[sea_orm(unique)]
    pub dni: String,
    pub email: String,
    pub telefono: Option<String>,
    pub estado: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::visita::Entity")]
    Visita,
    #[sea_orm(has_many = "super::asignacion::Entity")]
    Asignacion,
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Cliente {
    fn from(model: Model) -> Self {
        Cliente {
            id: model.id,
            nombre: model.nombre,
            dni: model.dni,
            email: model.email,
            telefono: model.telefono,
            estado: EstadoCliente::from(model.estado.as_str()),
            created_at: model.created_at,
        }
    }
}
