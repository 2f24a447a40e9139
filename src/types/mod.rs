//! Shared response types.

mod response;

pub use response::{Creado, Mensaje, Registrado};
