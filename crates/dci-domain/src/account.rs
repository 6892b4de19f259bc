use dci_core::player;
use serde::{Deserialize, Serialize};

use crate::DomainError;
use std::fmt;

/// Cuenta bancaria: sólo datos y primitivas sobre el saldo.
///
/// No hay `deposit` ni `transfer`; esas operaciones pertenecen a los roles
/// de un caso de uso.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: u32,
    balance: i64,
    #[serde(skip)]
    pin: String,
}

impl Account {
    pub fn new(id: u32, balance: i64) -> Self {
        Self { id, balance, pin: String::new() }
    }

    pub fn with_pin(id: u32, balance: i64, pin: &str) -> Self {
        Self { id, balance, pin: pin.to_string() }
    }

    pub fn id(&self) -> u32 { self.id }
    pub fn balance(&self) -> i64 { self.balance }

    pub fn set_balance(&mut self, balance: i64) {
        self.balance = balance;
    }

    pub fn increase_balance(&mut self, amount: i64) -> Result<i64, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidAmount(amount));
        }
        self.balance = self.balance
                           .checked_add(amount)
                           .ok_or(DomainError::BalanceOverflow { account: self.id, amount })?;
        Ok(self.balance)
    }

    pub fn decrease_balance(&mut self, amount: i64) -> Result<i64, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(DomainError::InsufficientFunds { account: self.id,
                                                        requested: amount,
                                                        available: self.balance });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    pub fn verify_pin(&self, pin: &str) -> bool {
        !self.pin.is_empty() && self.secret() == pin
    }

    // Privado: no figura en la interfaz pública del player.
    fn secret(&self) -> &str {
        &self.pin
    }
}

player! {
    Account {
        fn id(this) -> u32 { this.id() }
        fn balance(this) -> i64 { this.balance() }
        fn available_balance(this) -> i64 { this.balance() }
        fn set_balance(this, balance: i64) { this.set_balance(balance) }
        fn increase_balance(this, amount: i64) -> i64 { this.increase_balance(amount)? }
        fn decrease_balance(this, amount: i64) -> i64 { this.decrease_balance(amount)? }
        fn verify_pin(this, pin: String) -> bool { this.verify_pin(&pin) }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<account #{}: {}>", self.id, self.balance)
    }
}
