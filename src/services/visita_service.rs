//! Visita service - Business logic for visit tracking.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Visita, VisitaDetalle, VisitaForm};
use crate::errors::AppResult;
use crate::infra::repositories::VisitaRepository;

/// Visita service trait for dependency injection.
#[async_trait]
pub trait VisitaService: Send + Sync {
    /// List all visitas joined with cliente data, newest first
    async fn list(&self) -> AppResult<Vec<VisitaDetalle>>;

    /// List visitas of one cliente, newest first
    async fn list_by_cliente(&self, cliente_id: i64) -> AppResult<Vec<Visita>>;

    /// Record a visita and return the generated id
    async fn create(&self, form: VisitaForm) -> AppResult<i64>;

    async fn update(&self, id: i64, form: VisitaForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`VisitaService`].
pub struct VisitaManager {
    repository: Arc<dyn VisitaRepository>,
}

impl VisitaManager {
    pub fn new(repository: Arc<dyn VisitaRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl VisitaService for VisitaManager {
    async fn list(&self) -> AppResult<Vec<VisitaDetalle>> {
        self.repository.list_detalle().await
    }

    async fn list_by_cliente(&self, cliente_id: i64) -> AppResult<Vec<Visita>> {
        self.repository.list_by_cliente(cliente_id).await
    }

    async fn create(&self, form: VisitaForm) -> AppResult<i64> {
        self.repository.insert(form).await
    }

    async fn update(&self, id: i64, form: VisitaForm) -> AppResult<()> {
        self.repository.update(id, form).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
