//! Roles ("methodful roles") usados por los contextos de este crate.

pub mod transfer;
pub mod wedding;

pub use transfer::{MoneySink, MoneySource, TransferDestination, TransferSource};
pub use wedding::{HusbandToBe, Minister, WifeToBe};
