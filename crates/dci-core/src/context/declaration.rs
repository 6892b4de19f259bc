//! Forma dinámica de una declaración de rol.
//!
//! Se aceptan exactamente dos formas:
//! - `(role_type, player)`: el nombre se deriva del tipo (`MoneySource` →
//!   `money_source`);
//! - `(name, role_type, player)`: nombre explícito.
//!
//! Cualquier otra cantidad o combinación es `InvalidDeclaration`, validada
//! antes de tocar el contexto.

use crate::errors::DciError;
use crate::naming::underscore;
use crate::player::PlayerRef;
use crate::role::{RoleKind, RoleType};

#[derive(Debug, Clone)]
pub enum RoleArg {
    Name(String),
    Kind(RoleKind),
    Player(PlayerRef),
}

impl RoleArg {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    pub fn kind<R: RoleType>() -> Self {
        Self::Kind(RoleKind::of::<R>())
    }

    pub fn player(player: PlayerRef) -> Self {
        Self::Player(player)
    }
}

impl From<RoleKind> for RoleArg {
    fn from(kind: RoleKind) -> Self {
        Self::Kind(kind)
    }
}

impl From<&str> for RoleArg {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

/// Declaración ya validada.
#[derive(Debug)]
pub(crate) struct Declaration {
    pub name: String,
    pub kind: RoleKind,
    pub player: PlayerRef,
}

impl Declaration {
    pub fn derived(kind: RoleKind, player: PlayerRef) -> Self {
        Self { name: underscore(kind.name()),
               kind,
               player }
    }

    pub fn named(name: String, kind: RoleKind, player: PlayerRef) -> Result<Self, DciError> {
        if name.trim().is_empty() {
            return Err(DciError::InvalidDeclaration("role name must not be empty".into()));
        }
        Ok(Self { name, kind, player })
    }
}

impl TryFrom<Vec<RoleArg>> for Declaration {
    type Error = DciError;

    fn try_from(args: Vec<RoleArg>) -> Result<Self, Self::Error> {
        let given = args.len();
        if !(2..=3).contains(&given) {
            return Err(DciError::InvalidDeclaration(format!("wrong number of arguments (given {given}, expected 2..3)")));
        }
        let mut it = args.into_iter();
        match (it.next(), it.next(), it.next()) {
            (Some(RoleArg::Kind(kind)), Some(RoleArg::Player(player)), None) => Ok(Self::derived(kind, player)),
            (Some(RoleArg::Name(name)), Some(RoleArg::Kind(kind)), Some(RoleArg::Player(player))) => {
                Self::named(name, kind, player)
            }
            _ => Err(DciError::InvalidDeclaration("expected (role_type, player) or (name, role_type, player)".into())),
        }
    }
}
