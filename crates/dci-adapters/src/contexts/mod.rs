//! Contextos de caso de uso.
//!
//! Cada valor corresponde a una ejecución: el constructor resuelve los
//! players, crea el `Context` y declara los roles; `call` (o
//! `dci_core::enact`) ejecuta el algoritmo.

mod balanced_transfer;
mod transfer_funds;
mod wedding;

pub use balanced_transfer::BalancedTransfer;
pub use transfer_funds::{TransferFunds, TransferReceipt};
pub use wedding::{TraditionalWedding, WeddingOutcome};
