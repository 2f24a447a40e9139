//! Text normalization for table filters.

/// Lowercase and strip diacritics so filter matching ignores accents.
///
/// Folds the Latin-1 accented range the UI actually receives, including
/// `ñ` and `ü`. Unknown characters pass through lowercased.
pub fn normalizar(texto: &str) -> String {
    texto
        .chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

/// Case- and accent-insensitive substring check used by every list filter.
pub fn coincide(valor: &str, filtro: &str) -> bool {
    normalizar(valor).contains(&normalizar(filtro))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizar_folds_case_and_accents() {
        assert_eq!(normalizar("María González"), "maria gonzalez");
        assert_eq!(normalizar("NÚÑEZ"), "nunez");
        assert_eq!(normalizar("Atención"), "atencion");
    }

    #[test]
    fn coincide_ignores_accents_on_both_sides() {
        assert!(coincide("María González López", "gonzález"));
        assert!(coincide("María González López", "GONZALEZ"));
        assert!(!coincide("María González López", "ramirez"));
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(coincide("cualquier cosa", ""));
    }
}
