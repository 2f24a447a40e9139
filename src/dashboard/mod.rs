//! Dashboard view logic for the three role-specific consoles.
//!
//! Each view holds the fetched lists, the active filters and the
//! table view-models a renderer needs. Everything here is UI-agnostic
//! state driven through the typed [`crate::client::ApiClient`].

pub mod atencion;
pub mod consolidado;
pub mod filter;
pub mod gerencia;
pub mod marketing;
pub mod session;
pub mod state;
pub mod view_model;

pub use atencion::AtencionView;
pub use gerencia::GerenciaView;
pub use marketing::MarketingView;
pub use state::{ListState, Recurso};
pub use view_model::{CuerpoTabla, Tabla};
