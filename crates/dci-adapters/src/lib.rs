//! dci-adapters: roles y contextos concretos sobre el dominio.
//!
//! Este crate provee:
//! - Roles de transferencia (`MoneySource`, `MoneySink`) y sus variantes
//!   simétricas (`TransferSource`, `TransferDestination`).
//! - Roles de boda (`HusbandToBe`, `WifeToBe`, `Minister`).
//! - Contextos que enlazan esos roles a cuentas y personas:
//!   `TransferFunds`, `BalancedTransfer`, `TraditionalWedding`.
//!
//! Nota: los objetos de dominio no saben nada de estos roles; todo el
//! comportamiento propio de un caso de uso vive aquí.

pub mod contexts;
pub mod error;
pub mod roles;

pub use contexts::{BalancedTransfer, TraditionalWedding, TransferFunds, TransferReceipt, WeddingOutcome};
pub use error::UseCaseError;
