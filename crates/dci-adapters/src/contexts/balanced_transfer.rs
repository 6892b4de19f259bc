use dci_core::{args, Context, DciError, Enactment, PlayerRef};
use log::{debug, warn};

use crate::roles::{TransferDestination, TransferSource};

/// Variante simétrica: ambos roles exponen `transfer(amount)` y el contexto
/// los recorre en orden de declaración (origen primero). Si un paso falla,
/// los pasos ya aplicados se revierten con `undo` en orden inverso.
pub struct BalancedTransfer {
    ctx: Context,
    amount: i64,
}

impl BalancedTransfer {
    pub fn new(source: PlayerRef, destination: PlayerRef, amount: i64) -> Result<Self, DciError> {
        let ctx = Context::new("BalancedTransfer");
        ctx.role_as::<TransferSource>("source_account", source)?;
        ctx.role_as::<TransferDestination>("destination_account", destination)?;
        Ok(Self { ctx, amount })
    }
}

impl Enactment for BalancedTransfer {
    /// Saldo resultante de cada rol, en orden de declaración.
    type Output = Vec<(String, i64)>;

    fn context(&self) -> &Context {
        &self.ctx
    }

    fn call(&self) -> Result<Self::Output, DciError> {
        let roles = self.ctx.roles();
        let mut balances = Vec::with_capacity(roles.len());
        for (name, role) in self.ctx.role_names().into_iter().zip(&roles) {
            match role.call::<i64>("transfer", &args![self.amount]) {
                Ok(balance) => {
                    debug!("balanced_transfer:step role={name} balance={balance}");
                    balances.push((name, balance));
                }
                Err(e) => {
                    warn!("balanced_transfer:failed role={name} error={e}; undoing {} step(s)", balances.len());
                    for done in roles[..balances.len()].iter().rev() {
                        done.invoke("undo", &args![self.amount])?;
                    }
                    return Err(e);
                }
            }
        }
        Ok(balances)
    }
}
