//! Errores del motor de roles.
//!
//! Todos los fallos se devuelven de forma síncrona al llamador inmediato; el
//! core no reintenta ni suprime nada.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum DciError {
    /// Forma/cantidad de argumentos inválida al declarar un rol.
    #[error("invalid role declaration: {0}")]
    InvalidDeclaration(String),

    /// Ni el tipo de rol ni la interfaz pública del player soportan el
    /// método. El rol propaga este error sin envolverlo.
    #[error("undefined method `{method}` for {receiver}")]
    NoSuchMethod { receiver: String, method: String },

    /// Un método de rol leyó `context` antes de que se asignara uno.
    #[error("role {role} is not bound to a context")]
    UnboundContext { role: String },

    /// El contexto dueño del rol ya fue descartado.
    #[error("context of role {role} has been released")]
    ContextReleased { role: String },

    #[error("role `{0}` is already bound in this context")]
    RoleAlreadyBound(String),

    #[error("no role named `{0}` in this context")]
    UnknownRole(String),

    #[error("wrong arguments for `{method}`: {reason}")]
    InvalidArguments { method: String, reason: String },

    #[error("player has been released")]
    PlayerReleased,

    /// El player ya está prestado mutablemente (llamada re-entrante).
    #[error("player is already in use while calling `{method}`")]
    PlayerBusy { method: String },

    #[error("player is a {found}, expected {expected}")]
    PlayerMismatch { expected: String, found: String },

    #[error("cannot decode result of `{method}`: {reason}")]
    InvalidReturn { method: String, reason: String },

    /// Fallo señalado por el propio método de un player o de un rol.
    #[error("{0}")]
    Raised(String),
}

impl DciError {
    pub fn no_such_method(receiver: impl Into<String>, method: impl Into<String>) -> Self {
        Self::NoSuchMethod { receiver: receiver.into(),
                             method: method.into() }
    }

    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised(message.into())
    }

    /// `true` para el error de "método inexistente" (miembro no resuelto).
    pub fn is_no_such_method(&self) -> bool {
        matches!(self, Self::NoSuchMethod { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_such_method_message_names_receiver_and_method() {
        let err = DciError::no_such_method("Account", "secret");
        assert_eq!(err.to_string(), "undefined method `secret` for Account");
        assert!(err.is_no_such_method());
    }

    #[test]
    fn unbound_context_is_not_a_missing_method() {
        let err = DciError::UnboundContext { role: "MoneySource".into() };
        assert!(!err.is_no_such_method());
        assert_eq!(err.to_string(), "role MoneySource is not bound to a context");
    }
}
