//! Configuración central de la aplicación.
//! Carga variables de entorno (.env) y expone una estructura inmutable (`CONFIG`).
use dci_core::EngineConfig;
use once_cell::sync::Lazy;
use std::env;

/// Configuración global de la aplicación.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Política del motor de roles (`DCI_REBIND_POLICY`).
    pub engine: EngineConfig,
    /// Saldos iniciales de las cuentas de la demo de transferencia.
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub source_balance: i64,
    pub dest_balance: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { source_balance: 200, dest_balance: 100 }
    }
}

impl AppConfig {
    /// Lee el entorno actual; valores ausentes o inválidos usan el default.
    pub fn from_env() -> Self {
        let defaults = DemoConfig::default();
        let source_balance = read_i64("DCI_SOURCE_BALANCE").unwrap_or(defaults.source_balance);
        let dest_balance = read_i64("DCI_DEST_BALANCE").unwrap_or(defaults.dest_balance);
        AppConfig { engine: EngineConfig::from_env(),
                    demo: DemoConfig { source_balance, dest_balance } }
    }
}

fn read_i64(key: &str) -> Option<i64> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
    AppConfig::from_env()
});
