//! Roles: envoltorios sin estado que agregan comportamiento a un player.
//!
//! Resolución de un método sobre un `Role`:
//! 1. si el tipo de rol lo declara, se ejecuta con el rol como receptor;
//! 2. si no, se reenvía con los mismos argumentos al player, y su resultado
//!    (o su error) vuelve sin cambios.
//!
//! El reenvío sólo alcanza los miembros públicos del player, y un rol nunca
//! responde a métodos de otro tipo de rol que envuelva al mismo player.

mod adhoc;
mod kind;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::trace;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::context::{Context, ContextInner};
use crate::errors::DciError;
use crate::player::{self, Player, PlayerRef};

pub use adhoc::{wrap_as_role, PlayerExt};
pub use kind::{RoleKind, RoleType};

pub struct Role {
    kind: RoleKind,
    /// Referencia no propietaria; el dueño del player es quien lo aportó.
    player: Weak<RefCell<dyn Player>>,
    /// Lo fija el motor de enlace al construir el rol; `None` en roles ad-hoc.
    context: Option<Weak<ContextInner>>,
}

impl Role {
    /// Crea un rol de tipo `R` sobre `player`, sin contexto.
    pub fn new<R: RoleType>(player: PlayerRef) -> Self {
        Self::of_kind(RoleKind::of::<R>(), player)
    }

    pub fn of_kind(kind: RoleKind, player: PlayerRef) -> Self {
        Self { kind,
               player: Rc::downgrade(&player),
               context: None }
    }

    /// Rol nuevo ya asignado a `context`. Único camino que fija el contexto.
    pub(crate) fn bound(kind: RoleKind, player: PlayerRef, context: &Context) -> Self {
        Self { context: Some(context.downgrade()),
               ..Self::of_kind(kind, player) }
    }

    pub fn kind(&self) -> RoleKind {
        self.kind
    }

    /// Identificador del tipo de rol (`MoneySource`).
    pub fn role_type(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is<R: RoleType>(&self) -> bool {
        self.kind.is::<R>()
    }

    /// El player envuelto.
    pub fn player(&self) -> Result<PlayerRef, DciError> {
        self.player.upgrade().ok_or(DciError::PlayerReleased)
    }

    /// Nombre del tipo del player envuelto.
    pub fn player_type(&self) -> Result<String, DciError> {
        let player = self.player()?;
        let name = player.try_borrow()
                         .map(|p| p.type_name().to_string())
                         .map_err(|_| DciError::PlayerBusy { method: "type_name".into() })?;
        Ok(name)
    }

    pub fn is_played_by(&self, player: &PlayerRef) -> bool {
        self.player.upgrade().is_some_and(|mine| player::same_player(&mine, player))
    }

    /// Contexto dueño de este rol.
    ///
    /// Falla con `UnboundContext` si el rol se creó fuera de un contexto, y
    /// con `ContextReleased` si el contexto ya fue descartado.
    pub fn context(&self) -> Result<Context, DciError> {
        let weak = self.context
                       .as_ref()
                       .ok_or_else(|| DciError::UnboundContext { role: self.role_type().to_string() })?;
        weak.upgrade()
            .map(Context::from_inner)
            .ok_or_else(|| DciError::ContextReleased { role: self.role_type().to_string() })
    }

    pub fn has_context(&self) -> bool {
        self.context.is_some()
    }

    /// Métodos propios del rol más los miembros públicos del player.
    pub fn responds_to(&self, method: &str) -> bool {
        if self.kind.declares(method) {
            return true;
        }
        self.player
            .upgrade()
            .and_then(|p| p.try_borrow().ok().map(|p| p.responds_to(method)))
            .unwrap_or(false)
    }

    /// Invoca `method`: primero el comportamiento del rol, después el player.
    pub fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, DciError> {
        if let Some(result) = self.kind.dispatch(self, method, args) {
            return result;
        }
        let player = self.player()?;
        trace!("forward role={} method={method} argc={}", self.role_type(), args.len());
        player::send(&player, method, args)
    }

    /// Como `invoke`, decodificando el resultado a `T`.
    pub fn call<T: DeserializeOwned>(&self, method: &str, args: &[Value]) -> Result<T, DciError> {
        let value = self.invoke(method, args)?;
        serde_json::from_value(value).map_err(|e| DciError::InvalidReturn { method: method.to_string(),
                                                                           reason: e.to_string() })
    }

    /// Acceso tipado de sólo lectura al player.
    pub fn with_player<P: Player, T>(&self, f: impl FnOnce(&P) -> T) -> Result<T, DciError> {
        let player = self.player()?;
        let guard = player.try_borrow()
                          .map_err(|_| DciError::PlayerBusy { method: "with_player".into() })?;
        match guard.as_any().downcast_ref::<P>() {
            Some(p) => Ok(f(p)),
            None => Err(DciError::PlayerMismatch { expected: std::any::type_name::<P>().to_string(),
                                                   found: guard.type_name().to_string() }),
        }
    }
}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Role")
         .field("role_type", &self.role_type())
         .field("player", &self.player_type().ok())
         .field("has_context", &self.has_context())
         .finish()
    }
}
