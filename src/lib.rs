//! DCI Rust Library
//!
//! Librería de la aplicación sobre los crates del workspace:
//! - `config`: configuración global (`CONFIG`) cargada desde el entorno.
//! - `errors`: `AppError`, que agrupa errores del motor y del dominio.
//! - `demo`: las dos demos (transferencia y boda) que ejecuta `main-core`.

pub mod config;
pub mod demo;
pub mod errors;
