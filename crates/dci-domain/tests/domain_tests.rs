use dci_core::{player::send, DciError, Player, PlayerRef};
use dci_domain::{Account, AccountDirectory, DomainError, Person};
use serde_json::json;

#[test]
fn account_player_exposes_only_listed_members() {
    let acct: PlayerRef = dci_core::share(Account::with_pin(1, 200, "4242"));
    assert_eq!(send(&acct, "balance", &[]).unwrap(), json!(200));
    assert_eq!(send(&acct, "verify_pin", &[json!("4242")]).unwrap(), json!(true));
    // `secret` es un método Rust privado, no un miembro público
    assert_eq!(send(&acct, "secret", &[]).unwrap_err(), DciError::no_such_method("Account", "secret"));
    assert!(!acct.borrow().responds_to("secret"));
}

#[test]
fn domain_failures_cross_the_player_boundary_as_raised() {
    let acct: PlayerRef = dci_core::share(Account::new(3, 10));
    let err = send(&acct, "decrease_balance", &[json!(50)]).unwrap_err();
    assert_eq!(err, DciError::from(DomainError::InsufficientFunds { account: 3, requested: 50, available: 10 }));
    assert_eq!(send(&acct, "balance", &[]).unwrap(), json!(10));
}

#[test]
fn directory_returns_the_same_shared_account() {
    let dir = AccountDirectory::seeded(&[(1, 200), (2, 100)]);
    let first = dir.find(1).unwrap();
    let again = dir.find(1).unwrap();
    assert!(std::rc::Rc::ptr_eq(&first, &again));
    assert_eq!(dir.find(9).unwrap_err(), DomainError::NotFound(9));
    assert_eq!(dir.balances(), vec![(1, 200), (2, 100)]);
}

#[test]
fn person_accessors() {
    let p: PlayerRef = dci_core::share(Person::new("Jennifer", "Bollinger"));
    send(&p, "set_last_name", &[json!("Voegele")]).unwrap();
    assert_eq!(send(&p, "full_name", &[]).unwrap(), json!("Jennifer Voegele"));
    assert!(matches!(send(&p, "set_last_name", &[]), Err(DciError::InvalidArguments { .. })));
}
