//! Declarative table view-models.
//!
//! Views produce a [`Tabla`] instead of rendering markup; the UI layer
//! decides how to draw it.

/// A rendered table: headers plus the body state.
#[derive(Debug, Clone, PartialEq)]
pub struct Tabla {
    pub columnas: Vec<&'static str>,
    pub cuerpo: CuerpoTabla,
}

/// Body of a table, covering the loading and failure states the
/// dashboards display inside the table itself.
#[derive(Debug, Clone, PartialEq)]
pub enum CuerpoTabla {
    /// Data rows, one Vec<String> per row
    Filas(Vec<Vec<String>>),
    /// No rows loaded; message like "No hay clientes registrados"
    Vacio(String),
    Cargando,
    Error(String),
}

impl Tabla {
    pub fn new(columnas: Vec<&'static str>, cuerpo: CuerpoTabla) -> Self {
        Self { columnas, cuerpo }
    }

    pub fn filas(&self) -> &[Vec<String>] {
        match &self.cuerpo {
            CuerpoTabla::Filas(filas) => filas,
            _ => &[],
        }
    }
}

impl CuerpoTabla {
    /// Text of the single placeholder row shown while there are no data
    /// rows. `None` once real rows are loaded.
    pub fn texto_estado(&self) -> Option<&str> {
        match self {
            CuerpoTabla::Filas(_) => None,
            CuerpoTabla::Vacio(texto) => Some(texto),
            CuerpoTabla::Cargando => Some(TEXTO_CARGANDO),
            CuerpoTabla::Error(mensaje) => Some(mensaje),
        }
    }
}

/// Loading placeholder text shared by every table.
pub const TEXTO_CARGANDO: &str = "Cargando datos...";

/// Formats an optional value the way the tables render blanks.
pub fn celda_opcional(valor: Option<&str>) -> String {
    match valor {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filas_is_empty_for_non_data_states() {
        let tabla = Tabla::new(vec!["a"], CuerpoTabla::Cargando);
        assert!(tabla.filas().is_empty());
    }

    #[test]
    fn texto_estado_covers_every_placeholder_row() {
        assert_eq!(
            CuerpoTabla::Cargando.texto_estado(),
            Some("Cargando datos...")
        );
        assert_eq!(
            CuerpoTabla::Vacio("No hay clientes registrados".into()).texto_estado(),
            Some("No hay clientes registrados")
        );
        assert_eq!(
            CuerpoTabla::Error("sin conexión".into()).texto_estado(),
            Some("sin conexión")
        );
        assert_eq!(CuerpoTabla::Filas(vec![]).texto_estado(), None);
    }

    #[test]
    fn celda_opcional_renders_dash_for_missing() {
        assert_eq!(celda_opcional(None), "—");
        assert_eq!(celda_opcional(Some("")), "—");
        assert_eq!(celda_opcional(Some("Laura")), "Laura");
    }
}
