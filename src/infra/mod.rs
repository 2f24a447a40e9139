//! Infrastructure layer - Database and repositories

pub mod db;
pub mod repositories;

pub use db::Database;
