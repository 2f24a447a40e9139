//! Visita repository: CRUD over visitas, lists pre-joined with cliente data.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::entities::{cliente, visita};
use super::map_referencia;
use crate::domain::{Visita, VisitaDetalle, VisitaForm};
use crate::errors::{AppError, AppResult, OptionExt};

const MSG_NO_ENCONTRADA: &str = "Visita no encontrada";
const MSG_CLIENTE_INEXISTENTE: &str = "El cliente especificado no existe";

/// Visita persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VisitaRepository: Send + Sync {
    /// All visitas joined with cliente nombre and dni, newest first
    async fn list_detalle(&self) -> AppResult<Vec<VisitaDetalle>>;

    /// Visitas of a single cliente, newest first
    async fn list_by_cliente(&self, cliente_id: i64) -> AppResult<Vec<Visita>>;

    async fn insert(&self, form: VisitaForm) -> AppResult<i64>;

    async fn update(&self, id: i64, form: VisitaForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Row shape produced by the joined list query.
#[derive(Debug, FromQueryResult)]
struct VisitaDetalleRow {
    id: i64,
    cliente_id: i64,
    fecha: chrono::NaiveDate,
    servicio: String,
    nombre: String,
    dni: String,
}

impl From<VisitaDetalleRow> for VisitaDetalle {
    fn from(row: VisitaDetalleRow) -> Self {
        VisitaDetalle {
            id: row.id,
            cliente_id: row.cliente_id,
            fecha: row.fecha,
            servicio: row.servicio,
            nombre: row.nombre,
            dni: row.dni,
        }
    }
}

/// SeaORM-backed implementation of [`VisitaRepository`].
pub struct VisitaStore {
    db: DatabaseConnection,
}

impl VisitaStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VisitaRepository for VisitaStore {
    async fn list_detalle(&self) -> AppResult<Vec<VisitaDetalle>> {
        let rows = visita::Entity::find()
            .select_only()
            .columns([
                visita::Column::Id,
                visita::Column::ClienteId,
                visita::Column::Fecha,
                visita::Column::Servicio,
            ])
            .columns([cliente::Column::Nombre, cliente::Column::Dni])
            .join(JoinType::InnerJoin, visita::Relation::Cliente.def())
            .order_by_desc(visita::Column::Fecha)
            .into_model::<VisitaDetalleRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(VisitaDetalle::from).collect())
    }

    async fn list_by_cliente(&self, cliente_id: i64) -> AppResult<Vec<Visita>> {
        let models = visita::Entity::find()
            .filter(visita::Column::ClienteId.eq(cliente_id))
            .order_by_desc(visita::Column::Fecha)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Visita::from).collect())
    }

    async fn insert(&self, form: VisitaForm) -> AppResult<i64> {
        let active = visita::ActiveModel {
            cliente_id: Set(form.cliente_id),
            fecha: Set(form.fecha),
            servicio: Set(form.servicio),
            ..Default::default()
        };

        let result = visita::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| map_referencia(e, MSG_CLIENTE_INEXISTENTE))?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i64, form: VisitaForm) -> AppResult<()> {
        let model = visita::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(MSG_NO_ENCONTRADA)?;

        let mut active: visita::ActiveModel = model.into();
        active.cliente_id = Set(form.cliente_id);
        active.fecha = Set(form.fecha);
        active.servicio = Set(form.servicio);

        active
            .update(&self.db)
            .await
            .map_err(|e| map_referencia(e, MSG_CLIENTE_INEXISTENTE))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = visita::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_NO_ENCONTRADA));
        }

        Ok(())
    }
}
