//! Caso database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Caso, EstadoCaso, Prioridad, TipoCaso};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "casos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub codigo: String,
    /// Free text, intentionally not a foreign key to clientes
    pub cliente: String,
    pub tipo: String,
    pub asunto: String,
    pub descripcion: Option<String>,
    pub prioridad: String,
    pub estado: String,
    pub fecha: Date,
    pub responsable: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Caso {
    fn from(model: Model) -> Self {
        Caso {
            id: model.id,
            codigo: model.codigo,
            cliente: model.cliente,
            tipo: TipoCaso::from(model.tipo.as_str()),
            asunto: model.asunto,
            descripcion: model.descripcion,
            prioridad: Prioridad::from(model.prioridad.as_str()),
            estado: EstadoCaso::from(model.estado.as_str()),
            fecha: model.fecha,
            responsable: model.responsable,
        }
    }
}
