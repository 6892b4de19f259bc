//! Enlace ad-hoc: envolver un objeto en un rol sin pasar por un contexto.
//!
//! Útil para decoraciones puntuales y para pruebas. El rol resultante no
//! tiene contexto; sus métodos que lo consulten fallan con `UnboundContext`.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Role, RoleType};
use crate::player::{Player, PlayerRef};

/// Crea un rol de tipo `R` sobre `player`, sin contexto.
pub fn wrap_as_role<R: RoleType>(player: &PlayerRef) -> Role {
    Role::new::<R>(Rc::clone(player))
}

/// Extensión para cualquier player compartido: `account.as_role::<MoneySource>()`.
pub trait PlayerExt {
    fn as_role<R: RoleType>(&self) -> Role;
}

impl<P: Player> PlayerExt for Rc<RefCell<P>> {
    fn as_role<R: RoleType>(&self) -> Role {
        let player: PlayerRef = self.clone();
        Role::new::<R>(player)
    }
}
