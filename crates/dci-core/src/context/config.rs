//! Configuración del motor de enlace.
//!
//! Por defecto no se lee nada del entorno; `EngineConfig::from_env` carga
//! `.env` (una sola vez) y lee `DCI_REBIND_POLICY`.

use std::env;
use std::fmt;
use std::str::FromStr;

use dotenvy::dotenv;
use log::warn;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Qué hacer al declarar dos veces el mismo nombre de rol en un contexto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RebindPolicy {
    /// `RoleAlreadyBound`; el enlace original queda intacto.
    #[default]
    Reject,
    /// El nuevo rol reemplaza al anterior (mismo lugar en el orden).
    Overwrite,
}

impl FromStr for RebindPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "overwrite" => Ok(Self::Overwrite),
            other => Err(format!("unknown rebind policy `{other}`")),
        }
    }
}

impl fmt::Display for RebindPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => f.write_str("reject"),
            Self::Overwrite => f.write_str("overwrite"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    pub rebind: RebindPolicy,
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        let rebind = match env::var("DCI_REBIND_POLICY") {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                              warn!("{e}; falling back to {}", RebindPolicy::default());
                              RebindPolicy::default()
                          }),
            Err(_) => RebindPolicy::default(),
        };
        Self { rebind }
    }
}
