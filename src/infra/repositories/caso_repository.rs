//! Caso repository: CRUD over the casos table.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

use super::entities::caso;
use super::map_duplicado;
use crate::domain::{Caso, CasoForm};
use crate::errors::{AppError, AppResult, OptionExt};

const MSG_NO_ENCONTRADO: &str = "Caso no encontrado";
const MSG_CODIGO_DUPLICADO: &str = "El código del caso ya existe";

/// Caso persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CasoRepository: Send + Sync {
    /// All casos, most recent fecha first
    async fn list(&self) -> AppResult<Vec<Caso>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Caso>>;

    /// Insert and return the generated id. Fails with a conflict when the
    /// codigo already exists.
    async fn insert(&self, form: CasoForm) -> AppResult<i64>;

    async fn update(&self, id: i64, form: CasoForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`CasoRepository`].
pub struct CasoStore {
    db: DatabaseConnection,
}

impl CasoStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CasoRepository for CasoStore {
    async fn list(&self) -> AppResult<Vec<Caso>> {
        let models = caso::Entity::find()
            .order_by_desc(caso::Column::Fecha)
            .order_by_desc(caso::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Caso::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Caso>> {
        let model = caso::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Caso::from))
    }

    async fn insert(&self, form: CasoForm) -> AppResult<i64> {
        let active = caso::ActiveModel {
            codigo: Set(form.codigo),
            cliente: Set(form.cliente),
            tipo: Set(form.tipo.to_string()),
            asunto: Set(form.asunto),
            descripcion: Set(form.descripcion),
            prioridad: Set(form.prioridad.unwrap_or_default().to_string()),
            estado: Set(form.estado.unwrap_or_default().to_string()),
            fecha: Set(form.fecha),
            responsable: Set(form.responsable),
            ..Default::default()
        };

        let result = caso::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| map_duplicado(e, MSG_CODIGO_DUPLICADO))?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i64, form: CasoForm) -> AppResult<()> {
        let model = caso::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(MSG_NO_ENCONTRADO)?;

        let mut active: caso::ActiveModel = model.into();
        active.codigo = Set(form.codigo);
        active.cliente = Set(form.cliente);
        active.tipo = Set(form.tipo.to_string());
        active.asunto = Set(form.asunto);
        active.descripcion = Set(form.descripcion);
        active.prioridad = Set(form.prioridad.unwrap_or_default().to_string());
        active.estado = Set(form.estado.unwrap_or_default().to_string());
        active.fecha = Set(form.fecha);
        active.responsable = Set(form.responsable);

        active
            .update(&self.db)
            .await
            .map_err(|e| map_duplicado(e, MSG_CODIGO_DUPLICADO))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = caso::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(MSG_NO_ENCONTRADO));
        }

        Ok(())
    }
}
