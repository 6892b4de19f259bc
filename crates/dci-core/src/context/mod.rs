//! Contextos: el alcance de una ejecución de un caso de uso.
//!
//! Un `Context` se crea por cada ejecución (request, transacción...). Al
//! construirlo se declaran sus roles; cada declaración crea un `Role` nuevo
//! sobre el player, le asigna este contexto y lo registra bajo un nombre.
//! Desde ese momento `get(nombre)` devuelve siempre la misma instancia.
//!
//! Los roles se alcanzan entre sí sólo a través del contexto:
//! `role.context()?.get("money_sink")`.

mod config;
mod declaration;
mod enactment;

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::{debug, warn};
use uuid::Uuid;

use crate::errors::DciError;
use crate::player::PlayerRef;
use crate::role::{Role, RoleKind, RoleType};

pub use config::{EngineConfig, RebindPolicy};
pub use declaration::RoleArg;
pub use enactment::{enact, Enactment};

use declaration::Declaration;

pub(crate) struct ContextInner {
    id: Uuid,
    label: String,
    opened_at: DateTime<Utc>,
    config: EngineConfig,
    bindings: RefCell<IndexMap<String, Rc<Role>>>,
}

/// Handle barato de clonar; todos los clones son el mismo contexto.
#[derive(Clone)]
pub struct Context {
    inner: Rc<ContextInner>,
}

impl Context {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_config(label, EngineConfig::default())
    }

    pub fn with_config(label: impl Into<String>, config: EngineConfig) -> Self {
        let inner = ContextInner { id: Uuid::new_v4(),
                                   label: label.into(),
                                   opened_at: Utc::now(),
                                   config,
                                   bindings: RefCell::new(IndexMap::new()) };
        Self { inner: Rc::new(inner) }
    }

    pub(crate) fn from_inner(inner: Rc<ContextInner>) -> Self {
        Self { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<ContextInner> {
        Rc::downgrade(&self.inner)
    }

    /// Forma dinámica: `[role_type, player]` o `[name, role_type, player]`.
    pub fn declare(&self, args: Vec<RoleArg>) -> Result<Rc<Role>, DciError> {
        let declaration = Declaration::try_from(args)?;
        self.bind(declaration)
    }

    /// Dos argumentos: el nombre se deriva de `R::NAME`.
    pub fn role<R: RoleType>(&self, player: PlayerRef) -> Result<Rc<Role>, DciError> {
        self.bind(Declaration::derived(RoleKind::of::<R>(), player))
    }

    /// Tres argumentos: nombre explícito.
    pub fn role_as<R: RoleType>(&self, name: impl Into<String>, player: PlayerRef) -> Result<Rc<Role>, DciError> {
        self.bind(Declaration::named(name.into(), RoleKind::of::<R>(), player)?)
    }

    fn bind(&self, declaration: Declaration) -> Result<Rc<Role>, DciError> {
        let Declaration { name, kind, player } = declaration;
        debug!("declare_role:start context={} name={name} role={}", self.inner.id, kind.name());

        if self.contains(&name) && self.inner.config.rebind == RebindPolicy::Reject {
            warn!("declare_role:rejected context={} name={name} already bound", self.inner.id);
            return Err(DciError::RoleAlreadyBound(name));
        }

        let role = Rc::new(Role::bound(kind, player, self));
        self.inner.bindings.borrow_mut().insert(name.clone(), Rc::clone(&role));

        debug!("declare_role:done context={} name={name} bindings={}", self.inner.id, self.len());
        Ok(role)
    }

    /// Accesor del rol `name`: misma instancia en cada lectura.
    pub fn get(&self, name: &str) -> Result<Rc<Role>, DciError> {
        self.inner
            .bindings
            .borrow()
            .get(name)
            .cloned()
            .ok_or_else(|| DciError::UnknownRole(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner.bindings.borrow().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.inner.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Nombres enlazados, en orden de declaración.
    pub fn role_names(&self) -> Vec<String> {
        self.inner.bindings.borrow().keys().cloned().collect()
    }

    /// Roles enlazados, en orden de declaración.
    pub fn roles(&self) -> Vec<Rc<Role>> {
        self.inner.bindings.borrow().values().cloned().collect()
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        self.inner.opened_at
    }

    pub fn config(&self) -> EngineConfig {
        self.inner.config
    }

    pub fn same_as(&self, other: &Context) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
         .field("id", &self.inner.id)
         .field("label", &self.inner.label)
         .field("roles", &self.role_names())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::share;

    #[derive(Debug)]
    struct Crate {
        weight: u32,
    }

    crate::player! {
        Crate {
            fn weight(this) -> u32 { this.weight }
        }
    }

    crate::role! {
        Cargo {
            fn heavier_than_peer(role) -> bool {
                let mine: u32 = role.call("weight", &[])?;
                let peer: u32 = role.context()?.get("ballast")?.call("weight", &[])?;
                mine > peer
            }
        }
    }

    crate::role! {
        Ballast {}
    }

    #[test]
    fn derived_and_explicit_names() {
        let ctx = Context::new("Loading");
        let a = share(Crate { weight: 3 });
        let b = share(Crate { weight: 1 });
        ctx.role::<Cargo>(a.clone()).unwrap();
        ctx.role_as::<Ballast>("ballast", b.clone()).unwrap();
        assert_eq!(ctx.role_names(), vec!["cargo".to_string(), "ballast".to_string()]);
        assert!(ctx.get("cargo").unwrap().invoke("heavier_than_peer", &[]).unwrap().as_bool().unwrap());
    }

    #[test]
    fn roles_point_back_at_their_context() {
        let ctx = Context::new("Loading");
        let a = share(Crate { weight: 3 });
        let role = ctx.role::<Cargo>(a.clone()).unwrap();
        assert!(role.context().unwrap().same_as(&ctx));
        assert!(Rc::ptr_eq(&role, &ctx.get("cargo").unwrap()));
    }

    #[test]
    fn rebinding_is_rejected_by_default() {
        let ctx = Context::new("Loading");
        let a = share(Crate { weight: 3 });
        let b = share(Crate { weight: 5 });
        let first = ctx.role::<Cargo>(a.clone()).unwrap();
        assert_eq!(ctx.role::<Cargo>(b.clone()).unwrap_err(), DciError::RoleAlreadyBound("cargo".into()));
        assert!(Rc::ptr_eq(&first, &ctx.get("cargo").unwrap()));
    }

    #[test]
    fn overwrite_policy_replaces_in_place() {
        let ctx = Context::with_config("Loading", EngineConfig { rebind: RebindPolicy::Overwrite });
        let a = share(Crate { weight: 3 });
        let b = share(Crate { weight: 5 });
        let c = share(Crate { weight: 7 });
        ctx.role::<Cargo>(a.clone()).unwrap();
        ctx.role::<Ballast>(c.clone()).unwrap();
        ctx.role::<Cargo>(b.clone()).unwrap();
        assert_eq!(ctx.role_names(), vec!["cargo".to_string(), "ballast".to_string()]);
        let b_ref: PlayerRef = b.clone();
        assert!(ctx.get("cargo").unwrap().is_played_by(&b_ref));
    }

    #[test]
    fn dropped_context_is_reported_by_surviving_roles() {
        let a = share(Crate { weight: 3 });
        let role = {
            let ctx = Context::new("Short");
            ctx.role::<Cargo>(a.clone()).unwrap()
        };
        assert_eq!(role.context().unwrap_err(), DciError::ContextReleased { role: "Cargo".into() });
    }

    #[test]
    fn unknown_role_name() {
        let ctx = Context::new("Empty");
        assert!(ctx.is_empty());
        assert_eq!(ctx.get("nobody").unwrap_err(), DciError::UnknownRole("nobody".into()));
    }
}
