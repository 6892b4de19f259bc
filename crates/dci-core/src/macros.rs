//! Macros para declarar players y roles sin boilerplate.
//!
//! Exportados en la raíz del crate:
//!   use dci_core::{player, role, args};
//!
//! Ambos macros comparten la sintaxis de métodos:
//!
//! ```ignore
//! fn nombre(receptor, arg1: Tipo1, arg2: Tipo2) -> Retorno { cuerpo }
//! ```
//!
//! Los argumentos se decodifican desde `serde_json::Value` y el resultado se
//! codifica de vuelta. Dentro del cuerpo se puede usar `?` con `DciError`.

/// Implementa `Player` para un tipo de datos, listando sus miembros públicos.
///
/// El receptor es `&mut Self`. Los métodos Rust que no aparezcan aquí no son
/// alcanzables por nombre (privados para los roles).
///
/// ```ignore
/// player! {
///     Account {
///         fn balance(this) -> i64 { this.balance }
///         fn set_balance(this, amount: i64) { this.balance = amount; }
///     }
/// }
/// ```
#[macro_export]
macro_rules! player {
    (
        $ty:ident {
            $(
                $(#[$fmeta:meta])*
                fn $m:ident ( $this:ident $(, $arg:ident : $aty:ty)* ) $(-> $ret:ty)? $body:block
            )*
        }
    ) => {
        impl $crate::player::Player for $ty {
            fn type_name(&self) -> &str {
                stringify!($ty)
            }

            fn public_methods(&self) -> &'static [&'static str] {
                &[$(stringify!($m)),*]
            }

            #[allow(unused_variables, unused_mut)]
            fn invoke(&mut self,
                      method: &str,
                      args: &[$crate::serde_json::Value])
                      -> ::std::result::Result<$crate::serde_json::Value, $crate::errors::DciError> {
                $(
                    if method == stringify!($m) {
                        let mut reader = $crate::player::ArgReader::new(method, args, <[&str]>::len(&[$(stringify!($arg)),*]));
                        $( let $arg: $aty = reader.next()?; )*
                        reader.finish()?;
                        let $this = &mut *self;
                        let out $(: $ret)? = $body;
                        return $crate::player::encode(&out);
                    }
                )*
                ::std::result::Result::Err($crate::errors::DciError::no_such_method(stringify!($ty), method))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}

/// Declara un tipo de rol y su conjunto de métodos.
///
/// El receptor es el `&Role`: desde él se alcanza el player (`invoke`,
/// `call`) y los demás roles (`context()?.get(..)`).
///
/// ```ignore
/// role! {
///     MoneySink {
///         fn transfer_in(role, amount: i64) {
///             let balance: i64 = role.call("balance", &[])?;
///             role.invoke("set_balance", &args![balance + amount])?;
///         }
///     }
/// }
/// ```
#[macro_export]
macro_rules! role {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$fmeta:meta])*
                fn $m:ident ( $this:ident $(, $arg:ident : $aty:ty)* ) $(-> $ret:ty)? $body:block
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $crate::role::RoleType for $name {
            const NAME: &'static str = stringify!($name);

            fn methods() -> &'static [&'static str] {
                &[$(stringify!($m)),*]
            }

            #[allow(unused_variables, unused_mut)]
            fn dispatch(role: &$crate::role::Role,
                        method: &str,
                        args: &[$crate::serde_json::Value])
                        -> ::std::option::Option<::std::result::Result<$crate::serde_json::Value, $crate::errors::DciError>> {
                $(
                    if method == stringify!($m) {
                        let $this = role;
                        let run = || -> ::std::result::Result<$crate::serde_json::Value, $crate::errors::DciError> {
                            let mut reader = $crate::player::ArgReader::new(method, args, <[&str]>::len(&[$(stringify!($arg)),*]));
                            $( let $arg: $aty = reader.next()?; )*
                            reader.finish()?;
                            let out $(: $ret)? = $body;
                            $crate::player::encode(&out)
                        };
                        return ::std::option::Option::Some(run());
                    }
                )*
                ::std::option::Option::None
            }
        }
    };
}

/// Lista de argumentos a partir de valores serializables.
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::serde_json::Value>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::serde_json::json!($value)),+]
    };
}
