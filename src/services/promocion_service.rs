//! Promoción service - Business logic for marketing campaigns.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Promocion, PromocionForm, PromocionResumen};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::repositories::PromocionRepository;

const MSG_NO_ENCONTRADA: &str = "Promoción no encontrada";
const MSG_FECHAS_INVALIDAS: &str = "La fecha de fin debe ser posterior a la fecha de inicio";

/// Promoción service trait for dependency injection.
#[async_trait]
pub trait PromocionService: Send + Sync {
    /// List all promociones with their asignados count
    async fn list(&self) -> AppResult<Vec<PromocionResumen>>;

    /// Get a promoción by id
    async fn get(&self, id: i64) -> AppResult<Promocion>;

    /// Create a promoción and return the generated id
    async fn create(&self, form: PromocionForm) -> AppResult<i64>;

    async fn update(&self, id: i64, form: PromocionForm) -> AppResult<()>;

    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of [`PromocionService`].
pub struct PromocionManager {
    repository: Arc<dyn PromocionRepository>,
}

impl PromocionManager {
    pub fn new(repository: Arc<dyn PromocionRepository>) -> Self {
        Self { repository }
    }

    fn validar_fechas(form: &PromocionForm) -> AppResult<()> {
        if form.fecha_fin < form.fecha_inicio {
            return Err(AppError::validation(MSG_FECHAS_INVALIDAS));
        }
        Ok(())
    }
}

#[async_trait]
impl PromocionService for PromocionManager {
    async fn list(&self) -> AppResult<Vec<PromocionResumen>> {
        self.repository.list_resumen().await
    }

    async fn get(&self, id: i64) -> AppResult<Promocion> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_not_found(MSG_NO_ENCONTRADA)
    }

    async fn create(&self, form: PromocionForm) -> AppResult<i64> {
        Self::validar_fechas(&form)?;
        self.repository.insert(form).await
    }

    async fn update(&self, id: i64, form: PromocionForm) -> AppResult<()> {
        Self::validar_fechas(&form)?;
        self.repository.update(id, form).await
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.delete(id).await
    }
}
