use std::any::TypeId;
use std::fmt;

use serde_json::Value;

use super::Role;
use crate::errors::DciError;

/// Conjunto de comportamiento de un rol ("methodful role").
///
/// Se implementa con el macro `role!`. El tipo es un marcador sin estado:
/// todo el estado de dominio vive en el player.
pub trait RoleType: 'static {
    /// Identificador del tipo de rol (`MoneySource`). Del mismo se deriva
    /// el nombre por defecto del enlace.
    const NAME: &'static str;

    /// Métodos propios del rol.
    fn methods() -> &'static [&'static str];

    /// Ejecuta el método propio `method` con `role` como receptor.
    /// Devuelve `None` si el rol no declara ese método.
    fn dispatch(role: &Role, method: &str, args: &[Value]) -> Option<Result<Value, DciError>>;
}

type DispatchFn = fn(&Role, &str, &[Value]) -> Option<Result<Value, DciError>>;

/// Descriptor borrado de un `RoleType`, usado por la forma dinámica de
/// declaración y guardado dentro de cada `Role`.
#[derive(Clone, Copy)]
pub struct RoleKind {
    type_id: TypeId,
    name: &'static str,
    methods: fn() -> &'static [&'static str],
    dispatch: DispatchFn,
}

impl RoleKind {
    pub fn of<R: RoleType>() -> Self {
        Self { type_id: TypeId::of::<R>(),
               name: R::NAME,
               methods: R::methods,
               dispatch: R::dispatch }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn methods(&self) -> &'static [&'static str] {
        (self.methods)()
    }

    pub fn declares(&self, method: &str) -> bool {
        self.methods().contains(&method)
    }

    pub fn is<R: RoleType>(&self) -> bool {
        self.type_id == TypeId::of::<R>()
    }

    pub(crate) fn dispatch(&self, role: &Role, method: &str, args: &[Value]) -> Option<Result<Value, DciError>> {
        (self.dispatch)(role, method, args)
    }
}

impl PartialEq for RoleKind {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for RoleKind {}

impl fmt::Debug for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleKind")
         .field("name", &self.name)
         .field("methods", &self.methods())
         .finish()
    }
}
