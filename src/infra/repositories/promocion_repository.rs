//! Promoción repository: CRUD plus the asignados count used by the list.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

use super::entities::{asignacion, promocion};
use crate::domain::{Promocion, PromocionForm, PromocionResumen};
use crate::errors::{AppError, AppResult, OptionExt};

const MSG_NO_ENCONTRADA: &str = "Promoción no encontrada";

/// Promoción persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PromocionRepository: Send + Sync {
    /// All promociones with their asignados count, most recent start first
    async fn list_resumen(&self) -> AppResult<Vec<PromocionResumen>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Promocion>>;

    async fn insert(&self, form: PromocionForm) -> AppResult<i64>;

    async fn update(&self, id: i64, form: PromocionForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

#[derive(Debug, FromQueryResult)]
struct PromocionResumenRow {
    id: i64,
    nombre: String,
    descuento: f64,
    fecha_inicio: chrono::NaiveDate,
    fecha_fin: chrono::NaiveDate,
    estado: String,
    asignados: i64,
}

impl From<PromocionResumenRow> for PromocionResumen {
    fn from(row: PromocionResumenRow) -> Self {
        PromocionResumen {
            promocion: Promocion {
                id: row.id,
                nombre: row.nombre,
                descuento: row.descuento,
                fecha_inicio: row.fecha_inicio,
                fecha_fin: row.fecha_fin,
                estado: row.estado.as_str().into(),
            },
            asignados: row.asignados,
        }
    }
}

/// SeaORM-backed implementation of [`PromocionRepository`].
pub struct PromocionStore {
    db: DatabaseConnection,
}

impl PromocionStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PromocionRepository for PromocionStore {
    async fn list_resumen(&self) -> AppResult<Vec<PromocionResumen>> {
        let rows = promocion::Entity::find()
            .select_only()
            .columns([
                promocion::Column::Id,
                promocion::Column::Nombre,
                promocion::Column::Descuento,
                promocion::Column::FechaInicio,
                promocion::Column::FechaFin,
                promocion::Column::Estado,
            ])
            .column_as(asignacion::Column::Id.count(), "asignados")
            .join(JoinType::LeftJoin, promocion::Relation::Asignacion.def())
            .group_by(promocion::Column::Id)
            .group_by(promocion::Column::Nombre)
            .group_by(promocion::Column::Descuento)
            .group_by(promocion::Column::FechaInicio)
            .group_by(promocion::Column::FechaFin)
            .group_by(promocion::Column::Estado)
            .order_by_desc(promocion::Column::FechaInicio)
            .into_model::<PromocionResumenRow>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(PromocionResumen::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Promocion>> {
        let model = promocion::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Promocion::from))
    }

    async fn insert(&self, form: PromocionForm) -> AppResult<i64> {
        let active = promocion::ActiveModel {
            nombre: Set(form.nombre),
            descuento: Set(form.descuento),
            fecha_inicio: Set(form.fecha_inicio),
            fecha_fin: Set(form.fecha_fin),
            estado: Set(form.estado.unwrap_or_default().to_string()),
            ..Default::default()
        };

        let result = promocion::Entity::insert(active).exec(&self.db).await?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i64, form: PromocionForm) -> AppResult<()> {
        let model = promocion::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(MSG_NO_ENCONTRADA)?;

        let mut active: promocion::ActiveModel = model.into();
        active.nombre = Set(form.nombre);
        active.descuento = Set(form.descuento);
        active.fecha_inicio = Set(form.fecha_inicio);
        active.fecha_fin = Set(form.fecha_fin);
        active.estado = Set(form.estado.unwrap_or_default().to_string());

        active.update(&self.db).await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = promocion::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_NO_ENCONTRADA));
        }

        Ok(())
    }
}
