//! dci-core: motor de enlace Context/Role (Data-Context-Interaction).
//!
//! - `player`: interfaz dinámica de los objetos de datos.
//! - `role`: envoltorios sin estado con comportamiento propio y reenvío al
//!   player.
//! - `context`: declaración de roles y accesores estables por nombre.
//! - `naming`: `CamelCase` → `snake_case` para nombres derivados.
pub mod context;
pub mod errors;
pub mod macros;
pub mod naming;
pub mod player;
pub mod role;

pub use context::{enact, Context, Enactment, EngineConfig, RebindPolicy, RoleArg};
pub use errors::DciError;
pub use player::{share, Player, PlayerRef};
pub use role::{wrap_as_role, PlayerExt, Role, RoleKind, RoleType};

// Usado por los macros exportados.
#[doc(hidden)]
pub use serde_json;

/// Importaciones habituales para declarar players, roles y contextos.
pub mod prelude {
    pub use crate::context::{enact, Context, Enactment, RoleArg};
    pub use crate::errors::DciError;
    pub use crate::player::{share, Player, PlayerRef};
    pub use crate::role::{wrap_as_role, PlayerExt, Role, RoleType};
    pub use crate::{args, player, role};
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use std::rc::Rc;

	#[derive(Debug)]
	struct Account {
		balance: i64,
	}

	player! {
		Account {
			fn balance(this) -> i64 { this.balance }
			fn deposit(this, amount: i64) { this.balance += amount; }
			fn withdraw(this, amount: i64) -> i64 {
				if amount > this.balance {
					return Err(DciError::raised("insufficient funds"));
				}
				this.balance -= amount;
				this.balance
			}
		}
	}

	role! {
		MoneySource {
			fn transfer_out(role, amount: i64) {
				role.invoke("withdraw", &args![amount])?;
				role.context()?.get("money_sink")?.invoke("transfer_in", &args![amount])?;
			}
		}
	}

	role! {
		MoneySink {
			fn transfer_in(role, amount: i64) {
				role.invoke("deposit", &args![amount])?;
			}
		}
	}

	#[test]
	fn transfer_between_two_roles() {
		let a = share(Account { balance: 200 });
		let b = share(Account { balance: 100 });
		let ctx = Context::new("TransferFunds");
		ctx.role::<MoneySource>(a.clone()).unwrap();
		ctx.role::<MoneySink>(b.clone()).unwrap();

		ctx.get("money_source").unwrap().invoke("transfer_out", &args![50]).unwrap();

		assert_eq!(a.borrow().balance, 150);
		assert_eq!(b.borrow().balance, 150);
	}

	#[test]
	fn player_failures_propagate_through_roles() {
		let a = share(Account { balance: 10 });
		let b = share(Account { balance: 0 });
		let ctx = Context::new("TransferFunds");
		ctx.role::<MoneySource>(a.clone()).unwrap();
		ctx.role::<MoneySink>(b.clone()).unwrap();

		let err = ctx.get("money_source").unwrap().invoke("transfer_out", &args![50]).unwrap_err();
		assert_eq!(err, DciError::raised("insufficient funds"));
		// nada se movió
		assert_eq!((a.borrow().balance, b.borrow().balance), (10, 0));
	}

	#[test]
	fn dynamic_declaration_shapes() {
		let a: PlayerRef = share(Account { balance: 1 });
		let ctx = Context::new("Shapes");

		let derived = ctx.declare(vec![RoleArg::kind::<MoneySource>(), RoleArg::player(a.clone())]).unwrap();
		let named = ctx.declare(vec!["sink".into(), RoleArg::kind::<MoneySink>(), RoleArg::player(a.clone())]).unwrap();
		assert!(Rc::ptr_eq(&derived, &ctx.get("money_source").unwrap()));
		assert!(Rc::ptr_eq(&named, &ctx.get("sink").unwrap()));

		let err = ctx.declare(vec![RoleArg::kind::<MoneySink>()]).unwrap_err();
		assert!(matches!(err, DciError::InvalidDeclaration(_)));
		let err = ctx.declare(vec![RoleArg::player(a.clone()), RoleArg::kind::<MoneySink>()]).unwrap_err();
		assert!(matches!(err, DciError::InvalidDeclaration(_)));
		assert_eq!(ctx.len(), 2);
	}

	#[test]
	fn args_macro_builds_json_values() {
		assert!(args![].is_empty());
		assert_eq!(args![1, "two", 3.5], vec![json!(1), json!("two"), json!(3.5)]);
	}
}
