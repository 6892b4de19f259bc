use serde::de::{self, DeserializeOwned, Visitor};
use serde::forward_to_deserialize_any;
use serde::Serialize;
use serde_json::Value;

use crate::errors::DciError;

/// Lector secuencial de argumentos posicionales.
///
/// Los macros `player!` y `role!` lo usan para decodificar cada parámetro
/// declarado. `arity` es la cantidad de parámetros declarados. Un argumento
/// ausente sólo se acepta para un parámetro `Option<T>` (queda `None`).
#[derive(Debug)]
pub struct ArgReader<'a> {
    method: &'a str,
    args: &'a [Value],
    arity: usize,
    cursor: usize,
}

impl<'a> ArgReader<'a> {
    pub fn new(method: &'a str, args: &'a [Value], arity: usize) -> Self {
        Self { method, args, arity, cursor: 0 }
    }

    pub fn next<T: DeserializeOwned>(&mut self) -> Result<T, DciError> {
        let position = self.cursor;
        self.cursor += 1;
        match self.args.get(position) {
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| self.invalid(format!("argument #{}: {e}", position + 1))),
            None => T::deserialize(Missing).map_err(|_| self.arity_error()),
        }
    }

    /// Falla si sobran argumentos.
    pub fn finish(self) -> Result<(), DciError> {
        if self.args.len() > self.arity {
            return Err(self.arity_error());
        }
        Ok(())
    }

    fn arity_error(&self) -> DciError {
        self.invalid(format!("wrong number of arguments (given {}, expected {})", self.args.len(), self.arity))
    }

    fn invalid(&self, reason: String) -> DciError {
        DciError::InvalidArguments { method: self.method.to_string(),
                                     reason }
    }
}

/// Argumento ausente: sólo un `Option` lo acepta (como `None`).
struct Missing;

impl<'de> de::Deserializer<'de> for Missing {
    type Error = serde_json::Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value, Self::Error> {
        Err(de::Error::custom("missing argument"))
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        visitor.visit_none()
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

/// Codifica el resultado de un método. `()` queda como `null`.
pub fn encode<T: Serialize>(value: &T) -> Result<Value, DciError> {
    serde_json::to_value(value).map_err(|e| DciError::raised(format!("cannot encode result: {e}")))
}
