use dci_rust::config::CONFIG;
use dci_rust::demo::{run_transfer, run_wedding};

fn main() {
    // CONFIG carga .env si existe (DCI_REBIND_POLICY, DCI_*_BALANCE)
    let config = &*CONFIG;
    println!("--- Demo TransferFunds (rebind={}) ---", config.engine.rebind);
    match run_transfer(&config.demo, config.engine, 50) {
        Ok(receipt) => {
            println!("{}", serde_json::to_string_pretty(&receipt).unwrap_or_default());
            println!("account {}: {}", receipt.source_id, receipt.source_balance);
            println!("account {}: {}", receipt.dest_id, receipt.dest_balance);
        }
        Err(e) => {
            eprintln!("[transfer] error: {e}");
            std::process::exit(4);
        }
    }

    println!("--- Demo TraditionalWedding ---");
    match run_wedding() {
        Ok(outcome) => {
            println!("{}", outcome.pronouncement);
            println!("husband: {} / wife: {}", outcome.husband, outcome.wife);
        }
        Err(e) => {
            eprintln!("[wedding] error: {e}");
            std::process::exit(5);
        }
    }
}
