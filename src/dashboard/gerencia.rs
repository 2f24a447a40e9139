//! General-management dashboard: consolidated report, búsqueda avanzada
//! and system statistics.

use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::dashboard::consolidado::{
    csv_consolidado, escalar, preset, promedio_visitas, tasa_actividad, tasa_crecimiento,
    tasa_resolucion, top_clientes, total_registros, Periodo, ResumenConsolidado, TipoReporte,
    TopCliente,
};
use crate::domain::{Estadisticas, ResultadoBusqueda, TipoBusqueda};

const MENSAJE_SIN_TERMINO: &str = "Por favor, ingrese un término de búsqueda";
const MENSAJE_SIN_RESULTADOS: &str =
    "No se encontraron resultados. Intente con otros términos o tipo de búsqueda.";
const MENSAJE_ERROR_BUSQUEDA: &str = "Error al realizar la búsqueda. Verifique la conexión.";

/// Loading state for a single panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<T> {
    Cargando,
    Listo(T),
    Error,
}

/// Search panel outcome.
#[derive(Debug, Clone, PartialEq)]
pub enum Busqueda {
    SinEjecutar,
    /// Non-empty result rows
    Resultados(Vec<ResultadoBusqueda>),
    /// Message row: empty term, no matches or transport failure
    Mensaje(String),
}

/// One row of the system summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct FilaResumen {
    pub seccion: &'static str,
    pub indicador: &'static str,
    pub valor: String,
    pub calificacion: &'static str,
}

/// State of the general-management dashboard.
pub struct GerenciaView {
    pub tipo: TipoReporte,
    pub periodo: Periodo,
    pub consolidado: Panel<ResumenConsolidado>,
    pub top: Vec<TopCliente>,
    pub busqueda: Busqueda,
    pub estadisticas: Panel<Estadisticas>,
}

impl Default for GerenciaView {
    fn default() -> Self {
        Self {
            tipo: TipoReporte::default(),
            periodo: Periodo::default(),
            consolidado: Panel::Cargando,
            top: Vec::new(),
            busqueda: Busqueda::SinEjecutar,
            estadisticas: Panel::Cargando,
        }
    }
}

impl GerenciaView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the consolidated report for the current selectors.
    pub async fn actualizar_consolidado(&mut self, api: &ApiClient) {
        self.consolidado = Panel::Cargando;

        match api.reportes().estadisticas().await {
            Ok(stats) => {
                let base = preset(&stats, self.tipo);
                self.consolidado = Panel::Listo(escalar(base, self.periodo));
                self.top = top_clientes(self.periodo);
            }
            Err(err) => {
                tracing::error!("Error al actualizar consolidado: {}", err);
                self.consolidado = Panel::Error;
            }
        }
    }

    pub async fn seleccionar(&mut self, api: &ApiClient, tipo: TipoReporte, periodo: Periodo) {
        self.tipo = tipo;
        self.periodo = periodo;
        self.actualizar_consolidado(api).await;
    }

    /// Run the cross-entity search. An empty term never hits the server.
    pub async fn ejecutar_busqueda(&mut self, api: &ApiClient, query: &str, tipo: TipoBusqueda) {
        if query.trim().is_empty() {
            self.busqueda = Busqueda::Mensaje(MENSAJE_SIN_TERMINO.to_string());
            return;
        }

        match api.reportes().busqueda(query.trim(), tipo).await {
            Ok(resultados) if resultados.is_empty() => {
                self.busqueda = Busqueda::Mensaje(MENSAJE_SIN_RESULTADOS.to_string());
            }
            Ok(resultados) => {
                self.busqueda = Busqueda::Resultados(resultados);
            }
            Err(err) => {
                tracing::error!("Error en búsqueda: {}", err);
                self.busqueda = Busqueda::Mensaje(MENSAJE_ERROR_BUSQUEDA.to_string());
            }
        }
    }

    pub async fn cargar_estadisticas(&mut self, api: &ApiClient) {
        self.estadisticas = Panel::Cargando;
        match api.reportes().estadisticas().await {
            Ok(stats) => self.estadisticas = Panel::Listo(stats),
            Err(err) => {
                tracing::error!("Error al cargar estadísticas: {}", err);
                self.estadisticas = Panel::Error;
            }
        }
    }

    /// CSV of the current consolidated report. `None` while the panel
    /// is still loading or after an error.
    pub fn descargar_consolidado(&self, generado: NaiveDate) -> Option<String> {
        match &self.consolidado {
            Panel::Listo(datos) => Some(csv_consolidado(
                self.tipo,
                self.periodo,
                *datos,
                &self.top,
                generado,
            )),
            _ => None,
        }
    }
}

/// The five-row system summary with its qualitative labels.
pub fn resumen_sistema(stats: &Estadisticas) -> Vec<FilaResumen> {
    let actividad = tasa_actividad(stats);
    let crecimiento = tasa_crecimiento(stats);
    let resolucion = tasa_resolucion(stats);
    let promedio = promedio_visitas(stats);

    vec![
        FilaResumen {
            seccion: "Clientes",
            indicador: "Tasa de Actividad",
            valor: format!("{actividad}%"),
            calificacion: if actividad >= 70 { "Excelente" } else { "Mejorar" },
        },
        FilaResumen {
            seccion: "Clientes",
            indicador: "Tasa de Crecimiento",
            valor: format!("{crecimiento}%"),
            calificacion: if crecimiento >= 10 { "Positivo" } else { "Normal" },
        },
        FilaResumen {
            seccion: "Casos",
            indicador: "Tasa de Resolución",
            valor: format!("{resolucion}%"),
            calificacion: if resolucion >= 80 { "Buena" } else { "Crítico" },
        },
        FilaResumen {
            seccion: "Visitas",
            indicador: "Promedio por Cliente Activo",
            valor: format!("{promedio:.1}"),
            calificacion: if promedio >= 3.0 { "Alto" } else { "Normal" },
        },
        FilaResumen {
            seccion: "Sistema",
            indicador: "Total de Registros",
            valor: total_registros(stats).to_string(),
            calificacion: "Operacional",
        },
    ]
}

/// Consolidated counters rendered when the panel errors out.
pub fn consolidado_o_error(panel: &Panel<ResumenConsolidado>) -> [String; 4] {
    match panel {
        Panel::Listo(datos) => [
            datos.total.to_string(),
            datos.activos.to_string(),
            datos.inactivos.to_string(),
            datos.nuevos.to_string(),
        ],
        Panel::Cargando => std::array::from_fn(|_| "...".to_string()),
        Panel::Error => std::array::from_fn(|_| "Error".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        EstadisticasCasos, EstadisticasClientes, EstadisticasPromociones,
    };

    fn stats() -> Estadisticas {
        Estadisticas {
            clientes: EstadisticasClientes {
                total: 200,
                activos: 150,
                inactivos: 50,
                nuevos: 30,
            },
            visitas: 500,
            casos: EstadisticasCasos {
                total: 40,
                abiertos: 4,
            },
            promociones: EstadisticasPromociones { activas: 6 },
        }
    }

    #[test]
    fn resumen_sistema_labels_follow_the_thresholds() {
        let filas = resumen_sistema(&stats());

        // 75% actividad, 15% crecimiento, 90% resolución, 3.3 promedio
        assert_eq!(filas[0].calificacion, "Excelente");
        assert_eq!(filas[1].calificacion, "Positivo");
        assert_eq!(filas[2].calificacion, "Buena");
        assert_eq!(filas[3].calificacion, "Alto");
        assert_eq!(filas[4].valor, "740");
    }

    #[test]
    fn panel_states_render_placeholder_values() {
        assert_eq!(consolidado_o_error(&Panel::Cargando)[0], "...");
        assert_eq!(consolidado_o_error(&Panel::Error)[3], "Error");
    }
}
