//! Reporte repository: raw-SQL aggregates for estadísticas and búsqueda.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};

use crate::config::DIAS_CLIENTE_NUEVO;
use crate::domain::{
    Estadisticas, EstadisticasCasos, EstadisticasClientes, EstadisticasPromociones,
    ResultadoBusqueda, TipoBusqueda,
};
use crate::errors::{AppError, AppResult};

/// Aggregate reporting queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReporteRepository: Send + Sync {
    /// Counters across the four entity families, computed in one round trip.
    async fn estadisticas(&self) -> AppResult<Estadisticas>;

    /// Substring search across the families selected by `tipo`.
    async fn buscar(&self, term: &str, tipo: TipoBusqueda) -> AppResult<Vec<ResultadoBusqueda>>;
}

#[derive(Debug, FromQueryResult)]
struct EstadisticasRow {
    clientes_total: i64,
    clientes_activos: i64,
    clientes_inactivos: i64,
    clientes_nuevos: i64,
    visitas_total: i64,
    casos_total: i64,
    casos_abiertos: i64,
    promociones_activas: i64,
}

#[derive(Debug, FromQueryResult)]
struct BusquedaRow {
    tipo: String,
    nombre: String,
    dni: Option<String>,
    estado_detalle: Option<String>,
    fecha: Option<String>,
}

const SQL_ESTADISTICAS: &str = r#"
SELECT
    (SELECT COUNT(*) FROM clientes) AS clientes_total,
    (SELECT COUNT(*) FROM clientes WHERE estado = 'Activo') AS clientes_activos,
    (SELECT COUNT(*) FROM clientes WHERE estado = 'Inactivo') AS clientes_inactivos,
    (SELECT COUNT(*) FROM clientes
        WHERE created_at >= DATE_SUB(NOW(), INTERVAL ? DAY)) AS clientes_nuevos,
    (SELECT COUNT(*) FROM visitas) AS visitas_total,
    (SELECT COUNT(*) FROM casos) AS casos_total,
    (SELECT COUNT(*) FROM casos WHERE estado = 'Abierto') AS casos_abiertos,
    (SELECT COUNT(*) FROM promociones WHERE estado = 'Activa') AS promociones_activas
"#;

// Dates are formatted in SQL so every UNION branch yields the same CHAR
// column types.
const SQL_BUSCAR_CLIENTES: &str = r#"
SELECT 'cliente' AS tipo, nombre, dni, estado AS estado_detalle,
       DATE_FORMAT(created_at, '%Y-%m-%d') AS fecha
FROM clientes
WHERE nombre LIKE ? OR dni LIKE ? OR email LIKE ?
"#;

const SQL_BUSCAR_VISITAS: &str = r#"
SELECT 'visita' AS tipo, c.nombre AS nombre, c.dni AS dni,
       v.servicio AS estado_detalle,
       DATE_FORMAT(v.fecha, '%Y-%m-%d') AS fecha
FROM visitas v
INNER JOIN clientes c ON c.id = v.cliente_id
WHERE c.nombre LIKE ? OR c.dni LIKE ? OR v.servicio LIKE ?
"#;

const SQL_BUSCAR_CASOS: &str = r#"
SELECT 'caso' AS tipo, CONCAT(codigo, ' - ', asunto) AS nombre,
       cliente AS dni, estado AS estado_detalle,
       DATE_FORMAT(fecha, '%Y-%m-%d') AS fecha
FROM casos
WHERE codigo LIKE ? OR cliente LIKE ? OR asunto LIKE ?
"#;

const SQL_BUSCAR_PROMOCIONES: &str = r#"
SELECT 'promocion' AS tipo, nombre, NULL AS dni, estado AS estado_detalle,
       DATE_FORMAT(fecha_inicio, '%Y-%m-%d') AS fecha
FROM promociones
WHERE nombre LIKE ?
"#;

/// SeaORM-backed implementation of [`ReporteRepository`].
pub struct ReporteStore {
    db: DatabaseConnection,
}

impl ReporteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReporteRepository for ReporteStore {
    async fn estadisticas(&self) -> AppResult<Estadisticas> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::MySql,
            SQL_ESTADISTICAS,
            [DIAS_CLIENTE_NUEVO.into()],
        );

        let row = EstadisticasRow::find_by_statement(stmt)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::internal("La consulta de estadísticas no devolvió filas"))?;

        Ok(Estadisticas {
            clientes: EstadisticasClientes {
                total: row.clientes_total,
                activos: row.clientes_activos,
                inactivos: row.clientes_inactivos,
                nuevos: row.clientes_nuevos,
            },
            visitas: row.visitas_total,
            casos: EstadisticasCasos {
                total: row.casos_total,
                abiertos: row.casos_abiertos,
            },
            promociones: EstadisticasPromociones {
                activas: row.promociones_activas,
            },
        })
    }

    async fn buscar(&self, term: &str, tipo: TipoBusqueda) -> AppResult<Vec<ResultadoBusqueda>> {
        let patron = format!("%{}%", term);

        let mut branches: Vec<&str> = Vec::new();
        let mut values: Vec<sea_orm::Value> = Vec::new();

        if tipo.incluye(TipoBusqueda::Clientes) {
            branches.push(SQL_BUSCAR_CLIENTES);
            values.extend([patron.clone().into(), patron.clone().into(), patron.clone().into()]);
        }
        if tipo.incluye(TipoBusqueda::Visitas) {
            branches.push(SQL_BUSCAR_VISITAS);
            values.extend([patron.clone().into(), patron.clone().into(), patron.clone().into()]);
        }
        if tipo.incluye(TipoBusqueda::Casos) {
            branches.push(SQL_BUSCAR_CASOS);
            values.extend([patron.clone().into(), patron.clone().into(), patron.clone().into()]);
        }
        if tipo.incluye(TipoBusqueda::Promociones) {
            branches.push(SQL_BUSCAR_PROMOCIONES);
            values.push(patron.clone().into());
        }

        let sql = branches.join("UNION ALL\n");
        let stmt = Statement::from_sql_and_values(DbBackend::MySql, sql, values);

        let rows = BusquedaRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|row| ResultadoBusqueda {
                tipo: row.tipo,
                nombre: row.nombre,
                dni: row.dni,
                estado_detalle: row.estado_detalle,
                fecha: row.fecha,
            })
            .collect())
    }
}

impl ReporteStore {
    /// Used by tests to exercise query assembly without a live database.
    #[cfg(test)]
    fn branch_count(tipo: TipoBusqueda) -> usize {
        [
            TipoBusqueda::Clientes,
            TipoBusqueda::Visitas,
            TipoBusqueda::Casos,
            TipoBusqueda::Promociones,
        ]
        .iter()
        .filter(|familia| tipo.incluye(**familia))
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todos_selects_all_four_branches() {
        assert_eq!(ReporteStore::branch_count(TipoBusqueda::Todos), 4);
        assert_eq!(ReporteStore::branch_count(TipoBusqueda::Casos), 1);
    }
}
