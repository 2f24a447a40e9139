//! Asignación database entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "asignaciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub cliente_id: i64,
    pub promocion_id: i64,
    pub fecha_asignacion: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cliente::Entity",
        from = "Column::ClienteId",
        to = "super::cliente::Column::Id"
    )]
    Cliente,
    #[sea_orm(
        belongs_to = "super::promocion::Entity",
        from = "Column::PromocionId",
        to = "super::promocion::Column::Id"
    )]
    Promocion,
}

impl Related<super::cliente::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cliente.def()
    }
}

impl Related<super::promocion::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Promocion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
