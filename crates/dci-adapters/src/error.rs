use dci_core::DciError;
use dci_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UseCaseError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Engine(#[from] DciError),
}
