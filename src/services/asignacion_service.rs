//! Asignación service - Business logic for promotion assignments.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{AsignacionDetalle, AsignacionForm};
use crate::errors::AppResult;
use crate::infra::repositories::AsignacionRepository;

/// Asignación service trait for dependency injection.
#[async_trait]
pub trait AsignacionService: Send + Sync {
    /// List all asignaciones joined with cliente and promoción data
    async fn list(&self) -> AppResult<Vec<AsignacionDetalle>>;

    /// Assign a promoción to a cliente and return the generated id
    async fn create(&self, form: AsignacionForm) -> AppResult<i64>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`AsignacionService`].
pub struct AsignacionManager {
    repository: Arc<dyn AsignacionRepository>,
}

impl AsignacionManager {
    pub fn new(repository: Arc<dyn AsignacionRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AsignacionService for AsignacionManager {
    async fn list(&self) -> AppResult<Vec<AsignacionDetalle>> {
        self.repository.list_detalle().await
    }

    async fn create(&self, form: AsignacionForm) -> AppResult<i64> {
        self.repository.insert(form).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
