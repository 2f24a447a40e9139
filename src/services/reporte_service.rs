//! Reporte service - Cross-entity statistics and search.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Estadisticas, ResultadoBusqueda, TipoBusqueda};
use crate::errors::{AppError, AppResult};
use crate::infra::repositories::ReporteRepository;

const MSG_TERMINO_VACIO: &str = "Debe proporcionar un término de búsqueda";

/// Reporte service trait for dependency injection.
#[async_trait]
pub trait ReporteService: Send + Sync {
    /// Counters across clientes, visitas, casos and promociones
    async fn estadisticas(&self) -> AppResult<Estadisticas>;

    /// Search the families selected by `tipo`. Fails with a validation
    /// error when the term is empty or whitespace.
    async fn buscar(&self, termino: &str, tipo: TipoBusqueda)
        -> AppResult<Vec<ResultadoBusqueda>>;
}

/// Concrete implementation of [`ReporteService`].
pub struct ReporteManager {
    repository: Arc<dyn ReporteRepository>,
}

impl ReporteManager {
    pub fn new(repository: Arc<dyn ReporteRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ReporteService for ReporteManager {
    async fn estadisticas(&self) -> AppResult<Estadisticas> {
        self.repository.estadisticas().await
    }

    async fn buscar(
        &self,
        termino: &str,
        tipo: TipoBusqueda,
    ) -> AppResult<Vec<ResultadoBusqueda>> {
        let termino = termino.trim();
        if termino.is_empty() {
            return Err(AppError::validation(MSG_TERMINO_VACIO));
        }

        self.repository.buscar(termino, tipo).await
    }
}
