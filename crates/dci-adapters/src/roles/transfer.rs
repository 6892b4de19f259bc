//! Roles de transferencia de fondos.
//!
//! `MoneySource` retira y le pide al sumidero (alcanzado por nombre a través
//! del contexto) que acredite. Las variantes `TransferSource` /
//! `TransferDestination` comparten el nombre de método `transfer`, de modo
//! que un contexto puede recorrer sus roles y llamar lo mismo en cada uno;
//! `undo` revierte un `transfer` ya aplicado.

use dci_core::{args, role};
use log::{info, warn};

/// Nombre por defecto del rol sumidero dentro del contexto.
pub const DEFAULT_SINK: &str = "money_sink";

role! {
    MoneySource {
        /// `sink` es el nombre del rol destino; por defecto `money_sink`.
        fn transfer_out(role, amount: i64, sink: Option<String>) -> i64 {
            let sink = role.context()?.get(sink.as_deref().unwrap_or(DEFAULT_SINK))?;
            let from: u32 = role.call("id", &[])?;
            let to: u32 = sink.call("id", &[])?;
            info!("Transferring {amount} from account {from} to account {to}");
            let balance: i64 = role.call("decrease_balance", &args![amount])?;
            info!("Source account new balance: {balance}");
            if let Err(e) = sink.invoke("transfer_in", &args![amount]) {
                // el crédito falló: se devuelve el débito antes de propagar
                warn!("Credit to account {to} failed ({e}); restoring {amount} to account {from}");
                role.invoke("increase_balance", &args![amount])?;
                return Err(e);
            }
            balance
        }
    }
}

role! {
    MoneySink {
        fn transfer_in(role, amount: i64) -> i64 {
            let balance: i64 = role.call("increase_balance", &args![amount])?;
            info!("Destination account new balance: {balance}");
            balance
        }
    }
}

role! {
    TransferSource {
        fn transfer(role, amount: i64) -> i64 {
            let balance: i64 = role.call("decrease_balance", &args![amount])?;
            let id: u32 = role.call("id", &[])?;
            info!("Transferred ${amount} from account #{id}.");
            balance
        }
        fn undo(role, amount: i64) -> i64 {
            role.call::<i64>("increase_balance", &args![amount])?
        }
    }
}

role! {
    TransferDestination {
        fn transfer(role, amount: i64) -> i64 {
            let balance: i64 = role.call("increase_balance", &args![amount])?;
            let id: u32 = role.call("id", &[])?;
            info!("Transferred ${amount} into account #{id}.");
            balance
        }
        fn undo(role, amount: i64) -> i64 {
            role.call::<i64>("decrease_balance", &args![amount])?
        }
    }
}
