use dci_adapters::UseCaseError;
use dci_core::DciError;
use dci_domain::DomainError;
use thiserror::Error;

/// Errores de la aplicación (binario `main-core`).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error del motor de roles: {0}")]
    Engine(#[from] DciError),
    #[error("Error de dominio: {0}")]
    Domain(#[from] DomainError),
    #[error("Error de configuración: {0}")]
    Config(String),
}

impl From<UseCaseError> for AppError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::Domain(d) => AppError::Domain(d),
            UseCaseError::Engine(d) => AppError::Engine(d),
        }
    }
}
