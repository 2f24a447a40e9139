//! Cliente service - Business logic for customer management.
//!
//! SOLID (SRP): Handles cliente use cases only.
//! SOLID (DIP): Depends on the repository abstraction, not SeaORM.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Cliente, ClienteForm};
use crate::errors::{AppResult, OptionExt};
use crate::infra::repositories::ClienteRepository;

const MSG_NO_ENCONTRADO: &str = "Cliente no encontrado";

/// Cliente service trait for dependency injection.
#[async_trait]
pub trait ClienteService: Send + Sync {
    /// List all clientes, newest registration first
    async fn list(&self) -> AppResult<Vec<Cliente>>;

    /// Get a cliente by id
    async fn get(&self, id: i64) -> AppResult<Cliente>;

    /// Substring search on nombre, dni or email
    async fn buscar(&self, termino: &str) -> AppResult<Vec<Cliente>>;

    /// Register a cliente and return the generated id
    async fn create(&self, form: ClienteForm) -> AppResult<i64>;

    async fn update(&self, id: i64, form: ClienteForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`ClienteService`].
pub struct ClienteManager {
    repository: Arc<dyn ClienteRepository>,
}

impl ClienteManager {
    pub fn new(repository: Arc<dyn ClienteRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ClienteService for ClienteManager {
    async fn list(&self) -> AppResult<Vec<Cliente>> {
        self.repository.list().await
    }

    async fn get(&self, id: i64) -> AppResult<Cliente> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_NO_ENCONTRADO)
    }

    async fn buscar(&self, termino: &str) -> AppResult<Vec<Cliente>> {
        self.repository.search(termino.trim()).await
    }

    async fn create(&self, form: ClienteForm) -> AppResult<i64> {
        self.repository.insert(form).await
    }

    async fn update(&self, id: i64, form: ClienteForm) -> AppResult<()> {
        self.repository.update(id, form).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
