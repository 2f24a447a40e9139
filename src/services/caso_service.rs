//! Caso service - Business logic for support tickets.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Caso, CasoForm};
use crate::errors::{AppResult, OptionExt};
use crate::infra::repositories::CasoRepository;

const MSG_NO_ENCONTRADO: &str = "Caso no encontrado";

/// Caso service trait for dependency injection.
#[async_trait]
pub trait CasoService: Send + Sync {
    /// List all casos, most recent first
    async fn list(&self) -> AppResult<Vec<Caso>>;

    /// Get a caso by id
    async fn get(&self, id: i64) -> AppResult<Caso>;

    /// Open a caso and return the generated id
    async fn create(&self, form: CasoForm) -> AppResult<i64>;

    async fn update(&self, id: i64, form: CasoForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`CasoService`].
pub struct CasoManager {
    repository: Arc<dyn CasoRepository>,
}

impl CasoManager {
    pub fn new(repository: Arc<dyn CasoRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CasoService for CasoManager {
    async fn list(&self) -> AppResult<Vec<Caso>> {
        self.repository.list().await
    }

    async fn get(&self, id: i64) -> AppResult<Caso> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_NO_ENCONTRADO)
    }

    async fn create(&self, form: CasoForm) -> AppResult<i64> {
        self.repository.insert(form).await
    }

    async fn update(&self, id: i64, form: CasoForm) -> AppResult<()> {
        self.repository.update(id, form).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
