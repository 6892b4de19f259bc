//! Players: los objetos de datos sobre los que se enlazan roles.
//!
//! El motor no conoce nada de un player más allá de "un objeto que admite
//! invocar sus miembros públicos por nombre". Argumentos y resultados cruzan
//! esa frontera dinámica como `serde_json::Value`.
//!
//! Un player se comparte como `PlayerRef` (`Rc<RefCell<dyn Player>>`): quien
//! lo crea es su dueño; los roles sólo guardan una referencia débil.

mod args;

use std::any::Any;
use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;

use serde_json::Value;

use crate::errors::DciError;

pub use args::{encode, ArgReader};

/// Referencia compartida a un player.
pub type PlayerRef = Rc<RefCell<dyn Player>>;

/// Interfaz mínima que el motor exige a un objeto de datos.
///
/// Normalmente se implementa con el macro `player!`, que lista los miembros
/// públicos del tipo. Cualquier método Rust no listado queda fuera del
/// alcance de `invoke` (privado para los roles).
pub trait Player: Any + Debug {
    /// Nombre del tipo, usado en los errores `NoSuchMethod`.
    fn type_name(&self) -> &str;

    /// Miembros invocables por nombre.
    fn public_methods(&self) -> &'static [&'static str];

    fn responds_to(&self, method: &str) -> bool {
        self.public_methods().contains(&method)
    }

    /// Invoca el miembro público `method`. Un nombre desconocido o no
    /// público debe fallar con `DciError::NoSuchMethod`.
    fn invoke(&mut self, method: &str, args: &[Value]) -> Result<Value, DciError>;

    fn as_any(&self) -> &dyn Any;
}

/// Envuelve un objeto de datos para compartirlo entre contextos.
pub fn share<P: Player>(player: P) -> Rc<RefCell<P>> {
    Rc::new(RefCell::new(player))
}

/// Llamada directa sobre un player compartido.
///
/// Es exactamente el camino que usa un rol al reenviar, de modo que un fallo
/// observado aquí y uno reenviado son indistinguibles.
pub fn send(player: &PlayerRef, method: &str, args: &[Value]) -> Result<Value, DciError> {
    let mut target = player.try_borrow_mut()
                           .map_err(|_| DciError::PlayerBusy { method: method.to_string() })?;
    target.invoke(method, args)
}

/// Identidad de player (ignora la vtable).
pub fn same_player(a: &PlayerRef, b: &PlayerRef) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}
