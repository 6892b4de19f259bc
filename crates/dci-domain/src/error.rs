use dci_core::DciError;
use thiserror::Error;

/// Errores del dominio (datos puros, sin casos de uso).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("account {0} not found")]
    NotFound(u32),
    #[error("invalid amount: {0}")]
    InvalidAmount(i64),
    #[error("insufficient funds in account {account}: requested {requested}, available {available}")]
    InsufficientFunds { account: u32, requested: i64, available: i64 },
    #[error("balance overflow in account {account}: cannot add {amount}")]
    BalanceOverflow { account: u32, amount: i64 },
}

// Un fallo del dominio viaja por la frontera dinámica como `Raised`, igual
// para una llamada directa que para una reenviada por un rol.
impl From<DomainError> for DciError {
    fn from(e: DomainError) -> Self {
        DciError::Raised(e.to_string())
    }
}
