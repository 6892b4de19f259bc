//! Directorio en memoria de cuentas compartidas.
//!
//! Simula el "find" por id: la misma cuenta se devuelve en cada búsqueda,
//! así varios contextos pueden envolver al mismo objeto.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use dci_core::share;

use crate::{Account, DomainError};

#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: BTreeMap<u32, Rc<RefCell<Account>>>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(seed: &[(u32, i64)]) -> Self {
        let mut dir = Self::new();
        for &(id, balance) in seed {
            dir.insert(Account::new(id, balance));
        }
        dir
    }

    pub fn insert(&mut self, account: Account) -> Rc<RefCell<Account>> {
        let shared = share(account);
        self.accounts.insert(shared.borrow().id(), Rc::clone(&shared));
        shared
    }

    pub fn find(&self, id: u32) -> Result<Rc<RefCell<Account>>, DomainError> {
        self.accounts.get(&id).cloned().ok_or(DomainError::NotFound(id))
    }

    pub fn balances(&self) -> Vec<(u32, i64)> {
        self.accounts.iter().map(|(id, a)| (*id, a.borrow().balance())).collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
