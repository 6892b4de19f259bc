//! Demos ejecutadas por `main-core`.

use dci_adapters::{TraditionalWedding, TransferFunds, TransferReceipt, WeddingOutcome};
use dci_core::{enact, EngineConfig, Enactment};
use dci_domain::AccountDirectory;

use crate::config::DemoConfig;
use crate::errors::AppError;

pub const SOURCE_ID: u32 = 1;
pub const DEST_ID: u32 = 2;

/// Transfiere `amount` de la cuenta 1 a la 2, sembradas con `demo`.
pub fn run_transfer(demo: &DemoConfig, engine: EngineConfig, amount: i64) -> Result<TransferReceipt, AppError> {
    if demo.source_balance < 0 || demo.dest_balance < 0 {
        return Err(AppError::Config(format!("saldos iniciales negativos: {} / {}",
                                            demo.source_balance, demo.dest_balance)));
    }
    let directory = AccountDirectory::seeded(&[(SOURCE_ID, demo.source_balance), (DEST_ID, demo.dest_balance)]);
    let transfer = TransferFunds::with_config(&directory, SOURCE_ID, DEST_ID, amount, engine)?;
    println!("[transfer] context={} opened_at={} roles={:?}",
             transfer.context().id(),
             transfer.context().opened_at(),
             transfer.context().role_names());
    Ok(enact(&transfer)?)
}

pub fn run_wedding() -> Result<WeddingOutcome, AppError> {
    let wedding = TraditionalWedding::new(("Jason", "Voegele"), ("Jennifer", "Bollinger"), ("Mark", "Schlafman"))?;
    Ok(enact(&wedding)?)
}
