//! Casino Atlantic CRM - Customer management for the casino floor
//!
//! REST API over MySQL for clientes, visitas, casos, promociones and
//! asignaciones, plus the typed HTTP client and the dashboard view
//! layer the three consoles are built on.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities and forms
//! - **services**: Application use cases and business rules
//! - **infra**: Infrastructure concerns (database, repositories)
//! - **api**: HTTP handlers, extractors, and routes
//! - **client**: Typed reqwest client for the API
//! - **dashboard**: View state for the role-specific consoles
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use client::ApiClient;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use infra::Database;
pub use services::Services;
