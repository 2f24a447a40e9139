//! Session marker for the dashboards.
//!
//! Every dashboard checks for a stored user before rendering and
//! redirects to the login page when there is none. The storage itself
//! is abstracted so tests can use an in-memory map.

use serde::{Deserialize, Serialize};

/// Logged-in user as persisted by the login page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usuario {
    pub name: String,
}

/// Where the session marker lives (browser local storage in production).
pub trait SessionStore {
    fn usuario(&self) -> Option<Usuario>;

    /// Remove the marker on logout.
    fn cerrar(&mut self);
}

/// Outcome of the pre-render session check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceso {
    Permitido(Usuario),
    /// No session: send the user back to the login page
    Redirigir,
}

pub fn verificar(store: &dyn SessionStore) -> Acceso {
    match store.usuario() {
        Some(usuario) => Acceso::Permitido(usuario),
        None => Acceso::Redirigir,
    }
}

/// In-memory store, used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemorySession {
    usuario: Option<Usuario>,
}

impl MemorySession {
    pub fn con_usuario(name: impl Into<String>) -> Self {
        Self {
            usuario: Some(Usuario { name: name.into() }),
        }
    }
}

impl SessionStore for MemorySession {
    fn usuario(&self) -> Option<Usuario> {
        self.usuario.clone()
    }

    fn cerrar(&mut self) {
        self.usuario = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_session_redirects() {
        let store = MemorySession::default();
        assert_eq!(verificar(&store), Acceso::Redirigir);
    }

    #[test]
    fn logout_clears_the_marker() {
        let mut store = MemorySession::con_usuario("Laura");
        assert!(matches!(verificar(&store), Acceso::Permitido(_)));

        store.cerrar();
        assert_eq!(verificar(&store), Acceso::Redirigir);
    }
}
