//! Explicit view state for dashboard lists.
//!
//! The original/visible split keeps filtering non-destructive: filters
//! recompute `visible` from `original` and never mutate what was loaded.

/// Lifecycle of a remotely loaded resource.
#[derive(Debug, Clone, PartialEq)]
pub enum Recurso<T> {
    Cargando,
    Listo(ListState<T>),
    Error(String),
}

impl<T> Recurso<T> {
    /// The list when loaded, regardless of filtering.
    pub fn lista(&self) -> Option<&ListState<T>> {
        match self {
            Recurso::Listo(state) => Some(state),
            _ => None,
        }
    }

    pub fn lista_mut(&mut self) -> Option<&mut ListState<T>> {
        match self {
            Recurso::Listo(state) => Some(state),
            _ => None,
        }
    }
}

/// A loaded list plus its currently visible subset.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    original: Vec<T>,
    visible: Vec<T>,
}

impl<T: Clone> ListState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            visible: items.clone(),
            original: items,
        }
    }

    /// Everything that was loaded, unaffected by filters.
    pub fn original(&self) -> &[T] {
        &self.original
    }

    /// What the table currently shows.
    pub fn visible(&self) -> &[T] {
        &self.visible
    }

    /// Recompute the visible subset from the original snapshot.
    pub fn filtrar(&mut self, predicado: impl Fn(&T) -> bool) {
        self.visible = self
            .original
            .iter()
            .filter(|item| predicado(item))
            .cloned()
            .collect();
    }

    /// Drop the active filter and show everything again.
    pub fn limpiar(&mut self) {
        self.visible = self.original.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filtrar_never_touches_original() {
        let mut state = ListState::new(vec![1, 2, 3, 4]);
        state.filtrar(|n| *n % 2 == 0);

        assert_eq!(state.visible(), &[2, 4]);
        assert_eq!(state.original(), &[1, 2, 3, 4]);
    }

    #[test]
    fn limpiar_restores_everything() {
        let mut state = ListState::new(vec!["a", "b"]);
        state.filtrar(|_| false);
        assert!(state.visible().is_empty());

        state.limpiar();
        assert_eq!(state.visible(), &["a", "b"]);
    }

    #[test]
    fn consecutive_filters_apply_to_the_original() {
        let mut state = ListState::new(vec![1, 2, 3, 4, 5]);
        state.filtrar(|n| *n > 2);
        state.filtrar(|n| *n < 3);

        // Second filter is not narrowed by the first one
        assert_eq!(state.visible(), &[1, 2]);
    }
}
