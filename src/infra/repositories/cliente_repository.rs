//! Cliente repository: CRUD plus substring search over the clientes table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

use super::entities::cliente;
use super::map_duplicado;
use crate::domain::{Cliente, ClienteForm};
use crate::errors::{AppResult, OptionExt};

const MSG_NO_ENCONTRADO: &str = "Cliente no encontrado";
const MSG_DNI_DUPLICADO: &str = "El DNI ya está registrado";

/// Cliente persistence operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    /// All clientes, newest registration first
    async fn list(&self) -> AppResult<Vec<Cliente>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>>;

    /// Substring match on nombre, dni or email
    async fn search(&self, term: &str) -> AppResult<Vec<Cliente>>;

    /// Insert and return the generated id. Fails with a conflict when the
    /// dni is already registered.
    async fn insert(&self, form: ClienteForm) -> AppResult<i64>;

    /// Full-row update. Fails with not-found when no row matches the id.
    async fn update(&self, id: i64, form: ClienteForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`ClienteRepository`].
pub struct ClienteStore {
    db: DatabaseConnection,
}

impl ClienteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClienteRepository for ClienteStore {
    async fn list(&self) -> AppResult<Vec<Cliente>> {
        let models = cliente::Entity::find()
            .order_by_desc(cliente::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Cliente::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Cliente>> {
        let model = cliente::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Cliente::from))
    }

    async fn search(&self, term: &str) -> AppResult<Vec<Cliente>> {
        let patron = format!("%{}%", term);
        let models = cliente::Entity::find()
            .filter(
                Condition::any()
                    .add(cliente::Column::Nombre.like(&patron))
                    .add(cliente::Column::Dni.like(&patron))
                    .add(cliente::Column::Email.like(&patron)),
            )
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Cliente::from).collect())
    }

    async fn insert(&self, form: ClienteForm) -> AppResult<i64> {
        let active = cliente::ActiveModel {
            nombre: Set(form.nombre),
            dni: Set(form.dni),
            email: Set(form.email),
            telefono: Set(form.telefono),
            estado: Set(form.estado.unwrap_or_default().to_string()),
            ..Default::default()
        };

        let result = cliente::Entity::insert(active)
            .exec(&self.db)
            .await
            .map_err(|e| map_duplicado(e, MSG_DNI_DUPLICADO))?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, id: i64, form: ClienteForm) -> AppResult<()> {
        let model = cliente::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found(MSG_NO_ENCONTRADO)?;

        let mut active: cliente::ActiveModel = model.into();
        active.nombre = Set(form.nombre);
        active.dni = Set(form.dni);
        active.email = Set(form.email);
        active.telefono = Set(form.telefono);
        active.estado = Set(form.estado.unwrap_or_default().to_string());

        active
            .update(&self.db)
            .await
            .map_err(|e| map_duplicado(e, MSG_DNI_DUPLICADO))?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = cliente::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(crate::errors::AppError::not_found(MSG_NO_ENCONTRADO));
        }

        Ok(())
    }
}
