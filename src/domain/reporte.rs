//! Aggregate reporting types: estadísticas generales and búsqueda results.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer counters within the statistics aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EstadisticasClientes {
    pub total: i64,
    pub activos: i64,
    pub inactivos: i64,
    /// Registered within the last 30 days
    pub nuevos: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EstadisticasCasos {
    pub total: i64,
    pub abiertos: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EstadisticasPromociones {
    pub activas: i64,
}

/// Full statistics aggregate, computed server-side in a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Estadisticas {
    pub clientes: EstadisticasClientes,
    pub visitas: i64,
    pub casos: EstadisticasCasos,
    pub promociones: EstadisticasPromociones,
}

/// One row of the cross-entity search, tagged by entity family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResultadoBusqueda {
    /// Entity family this match belongs to: cliente, visita, caso o promocion
    #[schema(example = "cliente")]
    pub tipo: String,
    pub nombre: String,
    pub dni: Option<String>,
    /// Estado, servicio or other per-family detail
    pub estado_detalle: Option<String>,
    /// ISO date of the matched record, when it has one
    pub fecha: Option<String>,
}

/// Entity family filter for the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipoBusqueda {
    #[default]
    Todos,
    Clientes,
    Visitas,
    Casos,
    Promociones,
}

impl From<&str> for TipoBusqueda {
    fn from(s: &str) -> Self {
        match s {
            "clientes" => TipoBusqueda::Clientes,
            "visitas" => TipoBusqueda::Visitas,
            "casos" => TipoBusqueda::Casos,
            "promociones" => TipoBusqueda::Promociones,
            _ => TipoBusqueda::Todos,
        }
    }
}

impl TipoBusqueda {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoBusqueda::Todos => "todos",
            TipoBusqueda::Clientes => "clientes",
            TipoBusqueda::Visitas => "visitas",
            TipoBusqueda::Casos => "casos",
            TipoBusqueda::Promociones => "promociones",
        }
    }

    /// Whether this filter includes the given family.
    pub fn incluye(&self, familia: TipoBusqueda) -> bool {
        matches!(self, TipoBusqueda::Todos) || *self == familia
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tipo_busqueda_parses_known_values_and_defaults_to_todos() {
        assert_eq!(TipoBusqueda::from("clientes"), TipoBusqueda::Clientes);
        assert_eq!(TipoBusqueda::from("promociones"), TipoBusqueda::Promociones);
        assert_eq!(TipoBusqueda::from("todo lo demás"), TipoBusqueda::Todos);
    }

    #[test]
    fn todos_includes_every_family() {
        for familia in [
            TipoBusqueda::Clientes,
            TipoBusqueda::Visitas,
            TipoBusqueda::Casos,
            TipoBusqueda::Promociones,
        ] {
            assert!(TipoBusqueda::Todos.incluye(familia));
        }
        assert!(!TipoBusqueda::Casos.incluye(TipoBusqueda::Clientes));
    }
}
