use std::cell::RefCell;
use std::rc::Rc;

use dci_core::{args, Context, DciError, EngineConfig, Enactment};
use dci_domain::{Account, AccountDirectory, DomainError};
use log::debug;
use serde::Serialize;

use crate::error::UseCaseError;
use crate::roles::{MoneySink, MoneySource};

/// Resultado de una transferencia ya aplicada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReceipt {
    pub context_id: String,
    pub source_id: u32,
    pub dest_id: u32,
    pub amount: i64,
    pub source_balance: i64,
    pub dest_balance: i64,
}

/// Transferencia de `amount` entre dos cuentas del directorio.
///
/// Roles: `money_source` (MoneySource) y `money_sink` (MoneySink), con
/// nombres derivados.
pub struct TransferFunds {
    ctx: Context,
    source: Rc<RefCell<Account>>,
    dest: Rc<RefCell<Account>>,
    amount: i64,
}

impl TransferFunds {
    pub fn new(directory: &AccountDirectory, source_id: u32, dest_id: u32, amount: i64) -> Result<Self, UseCaseError> {
        Self::with_config(directory, source_id, dest_id, amount, EngineConfig::default())
    }

    pub fn with_config(directory: &AccountDirectory,
                       source_id: u32,
                       dest_id: u32,
                       amount: i64,
                       config: EngineConfig)
                       -> Result<Self, UseCaseError> {
        if amount <= 0 {
            return Err(DomainError::InvalidAmount(amount).into());
        }
        let source = directory.find(source_id)?;
        let dest = directory.find(dest_id)?;

        let ctx = Context::with_config("TransferFunds", config);
        ctx.role::<MoneySource>(source.clone())?;
        ctx.role::<MoneySink>(dest.clone())?;
        debug!("transfer_funds:prepared context={} source={source_id} dest={dest_id} amount={amount}", ctx.id());

        Ok(Self { ctx, source, dest, amount })
    }
}

impl Enactment for TransferFunds {
    type Output = TransferReceipt;

    fn context(&self) -> &Context {
        &self.ctx
    }

    fn call(&self) -> Result<TransferReceipt, DciError> {
        self.ctx.get("money_source")?.invoke("transfer_out", &args![self.amount])?;
        let source = self.source.borrow();
        let dest = self.dest.borrow();
        Ok(TransferReceipt { context_id: self.ctx.id().to_string(),
                             source_id: source.id(),
                             dest_id: dest.id(),
                             amount: self.amount,
                             source_balance: source.balance(),
                             dest_balance: dest.balance() })
    }
}
