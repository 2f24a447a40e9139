//! Promoción database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{EstadoPromocion, Promocion};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "promociones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nombre: String,
    pub descuento: f64,
    pub fecha_inicio: Date,
    pub fecha_fin: Date,
    pub estado: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::asignacion::Entity")]
    Asignacion,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Promocion {
    fn from(model: Model) -> Self {
        Promocion {
            id: model.id,
            nombre: model.nombre,
            descuento: model.descuento,
            fecha_inicio: model.fecha_inicio,
            fecha_fin: model.fecha_fin,
            estado: EstadoPromocion::from(model.estado.as_str()),
        }
    }
}
