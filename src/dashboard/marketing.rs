//! Marketing dashboard: promociones, asignaciones and the period report.

use crate::client::{ApiClient, ClientResult};
use crate::dashboard::atencion::cuerpo;
use crate::dashboard::consolidado::{Periodo, TopCliente};
use crate::dashboard::filter::coincide;
use crate::dashboard::state::{ListState, Recurso};
use crate::dashboard::view_model::Tabla;
use crate::domain::{
    AsignacionDetalle, AsignacionForm, Cliente, PromocionForm, PromocionResumen,
};

const ERROR_PROMOCIONES: &str =
    "Error al cargar promociones. Verifique la conexión con el servidor.";
const ERROR_ASIGNACIONES: &str =
    "Error al cargar asignaciones. Verifique la conexión con el servidor.";

/// State of the marketing dashboard.
pub struct MarketingView {
    pub promociones: Recurso<PromocionResumen>,
    pub asignaciones: Recurso<AsignacionDetalle>,
    /// Plain list backing the cliente selector; failures degrade to empty
    pub clientes: Vec<Cliente>,
}

impl Default for MarketingView {
    fn default() -> Self {
        Self {
            promociones: Recurso::Cargando,
            asignaciones: Recurso::Cargando,
            clientes: Vec::new(),
        }
    }
}

impl MarketingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch clientes, promociones and asignaciones concurrently.
    pub async fn cargar(&mut self, api: &ApiClient) {
        let clientes_api = api.clientes();
        let promociones_api = api.promociones();
        let asignaciones_api = api.asignaciones();
        let (clientes, promociones, asignaciones) = tokio::join!(
            clientes_api.get_all(),
            promociones_api.get_all(),
            asignaciones_api.get_all(),
        );

        self.clientes = clientes.unwrap_or_default();
        self.promociones = a_recurso(promociones, ERROR_PROMOCIONES);
        self.asignaciones = a_recurso(asignaciones, ERROR_ASIGNACIONES);
    }

    pub async fn recargar_promociones(&mut self, api: &ApiClient) {
        self.promociones = a_recurso(api.promociones().get_all().await, ERROR_PROMOCIONES);
    }

    pub async fn recargar_asignaciones(&mut self, api: &ApiClient) {
        self.asignaciones = a_recurso(api.asignaciones().get_all().await, ERROR_ASIGNACIONES);
    }

    pub async fn guardar_promocion(
        &mut self,
        api: &ApiClient,
        id: Option<i64>,
        form: PromocionForm,
    ) -> ClientResult<String> {
        let mensaje = match id {
            Some(id) => api.promociones().update(id, &form).await?.mensaje,
            None => api.promociones().create(&form).await?.mensaje,
        };
        self.recargar_promociones(api).await;
        Ok(mensaje)
    }

    pub async fn eliminar_promocion(&mut self, api: &ApiClient, id: i64) -> ClientResult<String> {
        let respuesta = api.promociones().delete(id).await?;
        self.recargar_promociones(api).await;
        Ok(respuesta.mensaje)
    }

    /// Creating an asignación changes the asignados counter, so both
    /// lists are re-fetched.
    pub async fn guardar_asignacion(
        &mut self,
        api: &ApiClient,
        form: AsignacionForm,
    ) -> ClientResult<String> {
        let creado = api.asignaciones().create(&form).await?;
        self.recargar_asignaciones(api).await;
        self.recargar_promociones(api).await;
        Ok(creado.mensaje)
    }

    pub async fn eliminar_asignacion(&mut self, api: &ApiClient, id: i64) -> ClientResult<String> {
        let respuesta = api.asignaciones().delete(id).await?;
        self.recargar_asignaciones(api).await;
        self.recargar_promociones(api).await;
        Ok(respuesta.mensaje)
    }

    pub fn filtrar_promociones(&mut self, nombre: &str) {
        if let Some(lista) = self.promociones.lista_mut() {
            lista.filtrar(|p| coincide(&p.promocion.nombre, nombre));
        }
    }

    pub fn filtrar_asignaciones(&mut self, nombre: &str, dni: &str) {
        if let Some(lista) = self.asignaciones.lista_mut() {
            lista.filtrar(|a| coincide(&a.nombre, nombre) && coincide(&a.dni, dni));
        }
    }

    pub fn tabla_promociones(&self) -> Tabla {
        Tabla::new(
            vec![
                "Nombre",
                "Descuento",
                "Inicio",
                "Fin",
                "Estado",
                "Asignados",
            ],
            cuerpo(
                &self.promociones,
                "No hay promociones registradas",
                |p: &PromocionResumen| {
                    vec![
                        p.promocion.nombre.clone(),
                        format!("{}%", p.promocion.descuento),
                        p.promocion.fecha_inicio.format("%d/%m/%Y").to_string(),
                        p.promocion.fecha_fin.format("%d/%m/%Y").to_string(),
                        p.promocion.estado.to_string(),
                        p.asignados.to_string(),
                    ]
                },
            ),
        )
    }

    pub fn tabla_asignaciones(&self) -> Tabla {
        Tabla::new(
            vec!["Cliente", "DNI", "Promoción", "Descuento", "Fecha"],
            cuerpo(
                &self.asignaciones,
                "No hay asignaciones registradas",
                |a: &AsignacionDetalle| {
                    vec![
                        a.nombre.clone(),
                        a.dni.clone(),
                        a.promo.clone(),
                        format!("{}%", a.descuento),
                        a.fecha_asignacion.format("%d/%m/%Y").to_string(),
                    ]
                },
            ),
        )
    }
}

fn a_recurso<T: Clone>(resultado: ClientResult<Vec<T>>, mensaje_error: &str) -> Recurso<T> {
    match resultado {
        Ok(items) => Recurso::Listo(ListState::new(items)),
        Err(err) => {
            tracing::error!("{}: {}", mensaje_error, err);
            Recurso::Error(mensaje_error.to_string())
        }
    }
}

/// Customer metrics shown by the marketing period report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricasPeriodo {
    pub total: i64,
    pub activos: i64,
    pub inactivos: i64,
    pub nuevos: i64,
}

/// Illustrative customer figures per period for the marketing report.
pub fn metricas_periodo(periodo: Periodo) -> MetricasPeriodo {
    match periodo {
        Periodo::UltimaSemana => MetricasPeriodo {
            total: 320,
            activos: 280,
            inactivos: 40,
            nuevos: 25,
        },
        Periodo::UltimoMes => MetricasPeriodo {
            total: 1247,
            activos: 1098,
            inactivos: 149,
            nuevos: 89,
        },
        Periodo::Trimestre => MetricasPeriodo {
            total: 3600,
            activos: 3100,
            inactivos: 500,
            nuevos: 270,
        },
        Periodo::MedioAno => MetricasPeriodo {
            total: 7200,
            activos: 6200,
            inactivos: 1000,
            nuevos: 540,
        },
        Periodo::UltimoAno => MetricasPeriodo {
            total: 14400,
            activos: 12400,
            inactivos: 2000,
            nuevos: 1080,
        },
    }
}

/// Top clientes shown next to the period metrics.
pub fn top_clientes_periodo(periodo: Periodo) -> Vec<TopCliente> {
    let filas: [(&'static str, u32); 3] = match periodo {
        Periodo::UltimaSemana => [
            ("María González López", 3),
            ("Carlos Ramírez Soto", 2),
            ("Ana Martínez Cruz", 2),
        ],
        Periodo::UltimoMes => [
            ("María González López", 6),
            ("Carlos Ramírez Soto", 6),
            ("Ana Martínez Cruz", 6),
        ],
        Periodo::Trimestre => [
            ("María González López", 15),
            ("Carlos Ramírez Soto", 13),
            ("Ana Martínez Cruz", 12),
        ],
        Periodo::MedioAno => [
            ("María González López", 29),
            ("Carlos Ramírez Soto", 26),
            ("Ana Martínez Cruz", 24),
        ],
        Periodo::UltimoAno => [
            ("María González López", 55),
            ("Carlos Ramírez Soto", 52),
            ("Ana Martínez Cruz", 49),
        ],
    };

    filas
        .into_iter()
        .map(|(cliente, visitas)| TopCliente { cliente, visitas })
        .collect()
}

/// CSV export for the marketing period report.
pub fn csv_reporte_clientes(metricas: MetricasPeriodo, top: &[TopCliente]) -> String {
    let mut filas: Vec<Vec<String>> = vec![
        vec!["Métrica".into(), "Valor".into(), "Descripción".into()],
        vec![
            "Total Clientes".into(),
            metricas.total.to_string(),
            "Clientes registrados".into(),
        ],
        vec![
            "Clientes Activos".into(),
            metricas.activos.to_string(),
            "Con actividad".into(),
        ],
        vec![
            "Clientes Inactivos".into(),
            metricas.inactivos.to_string(),
            "Sin actividad".into(),
        ],
        vec![
            "Nuevos Clientes".into(),
            metricas.nuevos.to_string(),
            "Registrados en el período".into(),
        ],
        vec![],
        vec!["Top Clientes por Actividad".into(), "".into(), "".into()],
        vec!["Cliente".into(), "Visitas".into(), "".into()],
    ];

    for fila in top {
        filas.push(vec![
            fila.cliente.to_string(),
            fila.visitas.to_string(),
            "".into(),
        ]);
    }

    filas
        .iter()
        .map(|fila| {
            fila.iter()
                .map(|v| format!("\"{}\"", v.replace('"', "\"\"")))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metricas_scale_with_the_period() {
        assert_eq!(metricas_periodo(Periodo::UltimoMes).total, 1247);
        assert_eq!(metricas_periodo(Periodo::UltimoAno).nuevos, 1080);
    }

    #[test]
    fn csv_lists_metrics_then_top_clientes() {
        let top = top_clientes_periodo(Periodo::UltimoMes);
        let csv = csv_reporte_clientes(metricas_periodo(Periodo::UltimoMes), &top);

        let lineas: Vec<&str> = csv.lines().collect();
        assert_eq!(lineas[0], "\"Métrica\",\"Valor\",\"Descripción\"");
        assert!(lineas[1].contains("\"1247\""));
        assert!(csv.contains("\"María González López\",\"6\""));
    }
}
