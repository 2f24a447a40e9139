//! Consolidated report math for the general-management dashboard.
//!
//! Pure functions: presets per report kind, period scaling, derived
//! rates and the CSV export. The promociones preset and the top-clientes
//! lists are fixed illustrative figures, not live data.

use chrono::NaiveDate;

use crate::domain::Estadisticas;

/// Report kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipoReporte {
    #[default]
    Clientes,
    Promociones,
    Incidencias,
    Visitas,
}

impl TipoReporte {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoReporte::Clientes => "clientes",
            TipoReporte::Promociones => "promociones",
            TipoReporte::Incidencias => "incidencias",
            TipoReporte::Visitas => "visitas",
        }
    }
}

impl From<&str> for TipoReporte {
    fn from(s: &str) -> Self {
        match s {
            "promociones" => TipoReporte::Promociones,
            "incidencias" => TipoReporte::Incidencias,
            "visitas" => TipoReporte::Visitas,
            _ => TipoReporte::Clientes,
        }
    }
}

/// Reporting period selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Periodo {
    UltimaSemana,
    #[default]
    UltimoMes,
    Trimestre,
    MedioAno,
    UltimoAno,
}

impl Periodo {
    /// Scale factor applied to the monthly baseline.
    pub fn factor(&self) -> f64 {
        match self {
            Periodo::UltimaSemana => 0.25,
            Periodo::UltimoMes => 1.0,
            Periodo::Trimestre => 3.0,
            Periodo::MedioAno => 6.0,
            Periodo::UltimoAno => 12.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Periodo::UltimaSemana => "ultima-semana",
            Periodo::UltimoMes => "ultimo-mes",
            Periodo::Trimestre => "trimestre",
            Periodo::MedioAno => "medio-ano",
            Periodo::UltimoAno => "ultimo-ano",
        }
    }

    /// Human form used in the CSV header ("ultimo mes").
    pub fn etiqueta(&self) -> String {
        self.as_str().replace('-', " ")
    }
}

impl From<&str> for Periodo {
    fn from(s: &str) -> Self {
        match s {
            "ultima-semana" => Periodo::UltimaSemana,
            "trimestre" => Periodo::Trimestre,
            "medio-ano" => Periodo::MedioAno,
            "ultimo-ano" => Periodo::UltimoAno,
            _ => Periodo::UltimoMes,
        }
    }
}

/// The four consolidated counters shown per report kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumenConsolidado {
    pub total: i64,
    pub activos: i64,
    pub inactivos: i64,
    pub nuevos: i64,
}

fn round(x: f64) -> i64 {
    x.round() as i64
}

/// Monthly baseline for a report kind, derived from live statistics
/// where the original had real data.
pub fn preset(stats: &Estadisticas, tipo: TipoReporte) -> ResumenConsolidado {
    match tipo {
        TipoReporte::Clientes => ResumenConsolidado {
            total: stats.clientes.total,
            activos: stats.clientes.activos,
            inactivos: stats.clientes.inactivos,
            nuevos: stats.clientes.nuevos,
        },
        // Fixed stub, promotion history is not tracked per period
        TipoReporte::Promociones => ResumenConsolidado {
            total: 24,
            activos: 12,
            inactivos: 8,
            nuevos: 4,
        },
        TipoReporte::Incidencias => ResumenConsolidado {
            total: stats.casos.total,
            activos: stats.casos.abiertos,
            inactivos: stats.casos.total - stats.casos.abiertos,
            nuevos: round(stats.casos.abiertos as f64 * 0.5),
        },
        TipoReporte::Visitas => ResumenConsolidado {
            total: stats.visitas,
            activos: round(stats.visitas as f64 * 0.6),
            inactivos: round(stats.visitas as f64 * 0.4),
            nuevos: round(stats.visitas as f64 * 0.15),
        },
    }
}

/// Scale a monthly baseline to the selected period.
pub fn escalar(base: ResumenConsolidado, periodo: Periodo) -> ResumenConsolidado {
    let factor = periodo.factor();
    ResumenConsolidado {
        total: round(base.total as f64 * factor),
        activos: round(base.activos as f64 * factor),
        inactivos: round(base.inactivos as f64 * factor),
        nuevos: round(base.nuevos as f64 * factor),
    }
}

/// One row of the top-clientes table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCliente {
    pub cliente: &'static str,
    pub visitas: u32,
}

/// Illustrative top-clientes figures per period.
pub fn top_clientes(periodo: Periodo) -> Vec<TopCliente> {
    let filas: [(&'static str, u32); 3] = match periodo {
        Periodo::UltimaSemana => [
            ("María González López", 4),
            ("Camila Martínez Salpe", 4),
            ("Ana Martínez Cruz", 3),
        ],
        Periodo::Trimestre => [
            ("María González López", 15),
            ("Camila Martínez Salpe", 13),
            ("Ana Martínez Cruz", 12),
        ],
        Periodo::MedioAno => [
            ("María González López", 29),
            ("Camila Martínez Salpe", 26),
            ("Ana Martínez Cruz", 24),
        ],
        Periodo::UltimoAno => [
            ("María González López", 55),
            ("Camila Martínez Salpe", 52),
            ("Ana Martínez Cruz", 49),
        ],
        Periodo::UltimoMes => [
            ("María González López", 9),
            ("Camila Martínez Salpe", 8),
            ("Ana Martínez Cruz", 8),
        ],
    };

    filas
        .into_iter()
        .map(|(cliente, visitas)| TopCliente { cliente, visitas })
        .collect()
}

/// Percentage of clientes currently activos, rounded.
pub fn tasa_actividad(stats: &Estadisticas) -> i64 {
    if stats.clientes.total == 0 {
        return 0;
    }
    round(stats.clientes.activos as f64 / stats.clientes.total as f64 * 100.0)
}

/// Percentage of clientes registered within the window, rounded.
pub fn tasa_crecimiento(stats: &Estadisticas) -> i64 {
    if stats.clientes.total == 0 {
        return 0;
    }
    round(stats.clientes.nuevos as f64 / stats.clientes.total as f64 * 100.0)
}

/// Percentage of casos no longer abiertos, rounded.
pub fn tasa_resolucion(stats: &Estadisticas) -> i64 {
    if stats.casos.total == 0 {
        return 0;
    }
    let resueltos = stats.casos.total - stats.casos.abiertos;
    round(resueltos as f64 / stats.casos.total as f64 * 100.0)
}

/// Visitas per cliente activo, one decimal.
pub fn promedio_visitas(stats: &Estadisticas) -> f64 {
    if stats.clientes.activos == 0 {
        return 0.0;
    }
    let promedio = stats.visitas as f64 / stats.clientes.activos as f64;
    (promedio * 10.0).round() / 10.0
}

/// Grand total of rows across clientes, visitas and casos.
pub fn total_registros(stats: &Estadisticas) -> i64 {
    stats.clientes.total + stats.visitas + stats.casos.total
}

fn celda_csv(valor: &str) -> String {
    format!("\"{}\"", valor.replace('"', "\"\""))
}

/// Build the downloadable CSV for a consolidated report.
pub fn csv_consolidado(
    tipo: TipoReporte,
    periodo: Periodo,
    datos: ResumenConsolidado,
    top: &[TopCliente],
    generado: NaiveDate,
) -> String {
    let mut tipo_titulo = tipo.as_str().to_string();
    if let Some(primera) = tipo_titulo.get_mut(0..1) {
        primera.make_ascii_uppercase();
    }

    let mut filas: Vec<Vec<String>> = vec![
        vec!["Reporte Consolidado - Casino Atlantic CRM".into(), "".into()],
        vec!["Tipo de Reporte".into(), tipo_titulo],
        vec!["Período".into(), periodo.etiqueta()],
        vec![
            "Fecha de Generación".into(),
            generado.format("%d/%m/%Y").to_string(),
        ],
        vec![],
        vec!["Sección".into(), "Valor".into()],
        vec!["Total".into(), datos.total.to_string()],
        vec!["Activos".into(), datos.activos.to_string()],
        vec!["Inactivos".into(), datos.inactivos.to_string()],
        vec!["Nuevos".into(), datos.nuevos.to_string()],
        vec![],
        vec!["Top Clientes".into(), "Visitas".into()],
    ];

    for fila in top {
        filas.push(vec![fila.cliente.to_string(), fila.visitas.to_string()]);
    }

    filas
        .iter()
        .map(|fila| {
            fila.iter()
                .map(|v| celda_csv(v))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
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
                total: 100,
                activos: 75,
                inactivos: 25,
                nuevos: 12,
            },
            visitas: 250,
            casos: EstadisticasCasos {
                total: 20,
                abiertos: 5,
            },
            promociones: EstadisticasPromociones { activas: 3 },
        }
    }

    #[test]
    fn periodo_factors_match_the_selector() {
        assert_eq!(Periodo::UltimaSemana.factor(), 0.25);
        assert_eq!(Periodo::UltimoMes.factor(), 1.0);
        assert_eq!(Periodo::UltimoAno.factor(), 12.0);
    }

    #[test]
    fn incidencias_preset_derives_from_casos() {
        let resumen = preset(&stats(), TipoReporte::Incidencias);
        assert_eq!(resumen.total, 20);
        assert_eq!(resumen.activos, 5);
        assert_eq!(resumen.inactivos, 15);
        // round(5 * 0.5)
        assert_eq!(resumen.nuevos, 3);
    }

    #[test]
    fn escalar_rounds_like_the_original() {
        let base = ResumenConsolidado {
            total: 10,
            activos: 7,
            inactivos: 3,
            nuevos: 2,
        };
        let semana = escalar(base, Periodo::UltimaSemana);
        // round(7 * 0.25) = 2, round(3 * 0.25) = 1
        assert_eq!(semana.total, 3);
        assert_eq!(semana.activos, 2);
        assert_eq!(semana.inactivos, 1);
        assert_eq!(semana.nuevos, 1);
    }

    #[test]
    fn tasas_are_rounded_percentages() {
        let s = stats();
        assert_eq!(tasa_actividad(&s), 75);
        assert_eq!(tasa_crecimiento(&s), 12);
        assert_eq!(tasa_resolucion(&s), 75);
        assert_eq!(promedio_visitas(&s), 3.3);
        assert_eq!(total_registros(&s), 370);
    }

    #[test]
    fn tasas_handle_empty_tables() {
        let vacio = Estadisticas {
            clientes: EstadisticasClientes {
                total: 0,
                activos: 0,
                inactivos: 0,
                nuevos: 0,
            },
            visitas: 0,
            casos: EstadisticasCasos {
                total: 0,
                abiertos: 0,
            },
            promociones: EstadisticasPromociones { activas: 0 },
        };
        assert_eq!(tasa_actividad(&vacio), 0);
        assert_eq!(tasa_resolucion(&vacio), 0);
        assert_eq!(promedio_visitas(&vacio), 0.0);
    }

    #[test]
    fn top_clientes_depend_on_the_period() {
        let semana = top_clientes(Periodo::UltimaSemana);
        assert_eq!(semana[0].visitas, 4);

        let ano = top_clientes(Periodo::UltimoAno);
        assert_eq!(ano[0].cliente, "María González López");
        assert_eq!(ano[0].visitas, 55);
    }

    #[test]
    fn csv_quotes_and_escapes_values() {
        let datos = ResumenConsolidado {
            total: 1,
            activos: 1,
            inactivos: 0,
            nuevos: 0,
        };
        let fecha = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let csv = csv_consolidado(TipoReporte::Clientes, Periodo::UltimoMes, datos, &[], fecha);

        assert!(csv.starts_with("\"Reporte Consolidado - Casino Atlantic CRM\",\"\""));
        assert!(csv.contains("\"Tipo de Reporte\",\"Clientes\""));
        assert!(csv.contains("\"Período\",\"ultimo mes\""));
        assert!(csv.contains("\"Fecha de Generación\",\"15/03/2024\""));
    }
}
