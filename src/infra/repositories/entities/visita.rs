//! Visita database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Visita;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "visitas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub cliente_id: i64,
    pub fecha: Date,
    pub servicio: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::ClienteId",
        to = "super::cliente::Column::Id"
    )]
    Cliente,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Visita {
    fn from(model: Model) -> Self {
        Visita {
            id: model.id,
            cliente_id: model.cliente_id,
            fecha: model.fecha,
            servicio: model.servicio,
        }
    }
}
