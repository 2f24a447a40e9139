//! Asignación repository: links clientes to promociones.

use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

use super::entities::{asignacion, cliente, promocion};
use super::map_referencia;
use crate::domain::{AsignacionDetalle, AsignacionForm};
use crate::errors::{AppError, AppResult};

const MSG_NO_ENCONTRADA: &str = "Asignación no encontrada";
const MSG_REFERENCIA_INVALIDA: &str = "El cliente o la promoción no existe";

/// Asignación persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AsignacionRepository: Send + Sync {
    /// All asignaciones joined with cliente and promoción data, newest first
    async fn list_detalle(&self) -> AppResult<Vec<AsignacionDetalle>>;

    /// Insert and return the generated id. Fails with a validation error
    /// when either referenced row does not exist.
    async fn insert(&self, form: AsignacionForm) -> AppResult<i64>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[derive(Debug, FromQueryResult)]
struct AsignacionDetalleRow {
    id: i64,
    cliente_id: i64,
    promocion_id: i64,
    fecha_asignacion: chrono::NaiveDate,
    nombre: String,
    dni: String,
    promo: String,
    descuento: f64,
}

impl From<AsignacionDetalleRow> for AsignacionDetalle {
    fn from(row: AsignacionDetalleRow) -> Self {
        AsignacionDetalle {
            id: row.id,
            cliente_id: row.cliente_id,
            promocion_id: row.promocion_id,
            fecha_asignacion: row.fecha_asignacion,
            nombre: row.nombre,
            dni: row.dni,
            promo: row.promo,
            descuento: row.descuento,
        }
    }
}

/// SeaORM-backed implementation of [`AsignacionRepository`].
pub struct AsignacionStore {
    db: DatabaseConnection,
}

impl AsignacionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AsignacionRepository for AsignacionStore {
    async fn list_detalle(&self) -> AppResult<Vec<AsignacionDetalle>> {
        let rows = asignacion::Entity::find()
            .select_only()
            .columns([
                asignacion::Column::Id,
                asignacion::Column::ClienteId,
                asignacion::Column::PromocionId,
                asignacion::Column::FechaAsignacion,
            ])
            .columns([cliente::Column::Nombre, cliente::Column::Dni])
            .column_as(promocion::Column::Nombre, "promo")
            .column(promocion::Column::Descuento)
            .join(JoinType::InnerJoin, asignacion::Relation::Cliente.def())
            .join(JoinType::InnerJoin, asignacion::Relation::Promocion.def())
            .order_by_desc(asignacion::Column::FechaAsignacion)
            .order_by_desc(asignacion::Column::Id)
            .into_model::<AsignacionDetalleRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(AsignacionDetalle::from).collect())
    }

    async fn insert(&self, form: AsignacionForm) -> AppResult<i64> {
        let active = asignacion::ActiveModel {
            cliente_id: Set(form.cliente_id),
            promocion_id: Set(form.promocion_id),
            fecha_asignacion: Set(form.fecha_asignacion),
            ..Default::default()
        };

        let result = asignacion::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| map_referencia(e, MSG_REFERENCIA_INVALIDA))?;

        Ok(result.last_insert_id)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = asignacion::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_NO_ENCONTRADA));
        }

        Ok(())
    }
}
