use dci_adapters::{TraditionalWedding, TransferFunds, UseCaseError};
use dci_core::{enact, DciError, EngineConfig};
use dci_domain::AccountDirectory;

const USAGE: &str = "Uso:\n  dci-cli transfer --from <ID> --to <ID> --amount <N> [--seed <ID>=<SALDO>]...\n  dci-cli wedding <NOMBRE> <APELLIDO> <NOMBRE> <APELLIDO> [<NOMBRE MINISTRO> <APELLIDO MINISTRO>]";

/// Cuentas disponibles cuando no se pasa ningún `--seed`.
const DEFAULT_SEED: &[(u32, i64)] = &[(1, 200), (2, 100), (3, 0)];

fn main() {
    // Cargar .env si existe para obtener DCI_REBIND_POLICY
    let _ = dotenvy::dotenv();
    let args: Vec<String> = std::env::args().collect();
    let code = match args.get(1).map(String::as_str) {
        Some("transfer") => run_transfer(&args[2..]),
        Some("wedding") => run_wedding(&args[2..]),
        _ => {
            eprintln!("{USAGE}");
            2
        }
    };
    std::process::exit(code);
}

fn run_transfer(args: &[String]) -> i32 {
    let mut from: Option<u32> = None;
    let mut to: Option<u32> = None;
    let mut amount: Option<i64> = None;
    let mut seed: Vec<(u32, i64)> = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--from" => { i += 1; from = args.get(i).and_then(|v| v.parse().ok()); }
            "--to" => { i += 1; to = args.get(i).and_then(|v| v.parse().ok()); }
            "--amount" => { i += 1; amount = args.get(i).and_then(|v| v.parse().ok()); }
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|v| parse_seed(v)) {
                    Some(entry) => seed.push(entry),
                    None => { eprintln!("[dci transfer] --seed espera <ID>=<SALDO>"); return 2; }
                }
            }
            other => { eprintln!("[dci transfer] argumento desconocido: {other}"); return 2; }
        }
        i += 1;
    }

    let (Some(from), Some(to), Some(amount)) = (from, to, amount) else {
        eprintln!("{USAGE}");
        return 2;
    };

    let directory = if seed.is_empty() { AccountDirectory::seeded(DEFAULT_SEED) } else { AccountDirectory::seeded(&seed) };
    let transfer = match TransferFunds::with_config(&directory, from, to, amount, EngineConfig::from_env()) {
        Ok(t) => t,
        Err(e) => return report("transfer", &e),
    };
    match enact(&transfer) {
        Ok(receipt) => {
            match serde_json::to_string_pretty(&receipt) {
                Ok(json) => println!("{json}"),
                Err(e) => { eprintln!("[dci transfer] error serializando recibo: {e}"); return 5; }
            }
            for (id, balance) in directory.balances() {
                println!("account {id}: {balance}");
            }
            0
        }
        Err(e) => report("transfer", &UseCaseError::Engine(e)),
    }
}

fn run_wedding(args: &[String]) -> i32 {
    let minister = match args.len() {
        4 => ("Mark", "Schlafman"),
        6 => (args[4].as_str(), args[5].as_str()),
        _ => {
            eprintln!("{USAGE}");
            return 2;
        }
    };
    let wedding = match TraditionalWedding::new((args[0].as_str(), args[1].as_str()),
                                              (args[2].as_str(), args[3].as_str()),
                                              minister) {
        Ok(w) => w,
        Err(e) => return report("wedding", &UseCaseError::Engine(e)),
    };
    match enact(&wedding) {
        Ok(outcome) => {
            println!("{}", outcome.pronouncement);
            println!("husband: {}", outcome.husband);
            println!("wife: {}", outcome.wife);
            0
        }
        Err(e) => report("wedding", &UseCaseError::Engine(e)),
    }
}

fn parse_seed(raw: &str) -> Option<(u32, i64)> {
    let (id, balance) = raw.split_once('=')?;
    Some((id.trim().parse().ok()?, balance.trim().parse().ok()?))
}

/// 4 = rechazo del dominio (cuenta inexistente, saldo insuficiente...),
/// 5 = error del motor de roles.
fn report(command: &str, err: &UseCaseError) -> i32 {
    eprintln!("[dci {command}] error: {err}");
    match err {
        UseCaseError::Domain(_) | UseCaseError::Engine(DciError::Raised(_)) => 4,
        UseCaseError::Engine(_) => 5,
    }
}
