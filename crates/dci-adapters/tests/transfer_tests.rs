use dci_adapters::roles::{MoneySink, MoneySource};
use dci_adapters::{BalancedTransfer, TransferFunds, UseCaseError};
use dci_core::prelude::*;
use dci_domain::{Account, AccountDirectory, DomainError};

fn directory() -> AccountDirectory {
    AccountDirectory::seeded(&[(1, 200), (2, 100)])
}

#[test]
fn transfer_funds_moves_money_between_accounts() {
    let dir = directory();
    let transfer = TransferFunds::new(&dir, 1, 2, 50).unwrap();
    let receipt = enact(&transfer).unwrap();

    assert_eq!((receipt.source_balance, receipt.dest_balance), (150, 150));
    assert_eq!(receipt.context_id, transfer.context().id().to_string());
    assert_eq!(dir.balances(), vec![(1, 150), (2, 150)]);
}

#[test]
fn roles_use_derived_names() {
    let dir = directory();
    let transfer = TransferFunds::new(&dir, 1, 2, 10).unwrap();
    assert_eq!(transfer.context().role_names(), vec!["money_source".to_string(), "money_sink".to_string()]);
    assert!(transfer.context().get("money_source").unwrap().is::<MoneySource>());
    assert!(transfer.context().get("money_sink").unwrap().is::<MoneySink>());
}

#[test]
fn unknown_account_is_a_domain_error() {
    let dir = directory();
    let err = TransferFunds::new(&dir, 1, 99, 10).err().unwrap();
    assert_eq!(err, UseCaseError::Domain(DomainError::NotFound(99)));
}

#[test]
fn non_positive_amount_is_rejected_before_binding() {
    let dir = directory();
    let err = TransferFunds::new(&dir, 1, 2, 0).err().unwrap();
    assert_eq!(err, UseCaseError::Domain(DomainError::InvalidAmount(0)));
}

#[test]
fn insufficient_funds_leave_balances_untouched() {
    let dir = directory();
    let transfer = TransferFunds::new(&dir, 2, 1, 500).unwrap();
    let err = enact(&transfer).unwrap_err();
    assert!(matches!(err, DciError::Raised(ref msg) if msg.contains("insufficient funds")));
    assert_eq!(dir.balances(), vec![(1, 200), (2, 100)]);
}

#[test]
fn explicit_sink_name_overrides_default() {
    let a = share(Account::new(1, 200));
    let b = share(Account::new(2, 0));
    let ctx = Context::new("Custom");
    ctx.role::<MoneySource>(a.clone()).unwrap();
    ctx.role_as::<MoneySink>("savings", b.clone()).unwrap();

    let err = ctx.get("money_source").unwrap().invoke("transfer_out", &args![20]).unwrap_err();
    assert_eq!(err, DciError::UnknownRole("money_sink".into()));
    // el sumidero se resuelve antes de debitar
    assert_eq!(a.borrow().balance(), 200);

    ctx.get("money_source").unwrap().invoke("transfer_out", &args![20, "savings"]).unwrap();
    assert_eq!((a.borrow().balance(), b.borrow().balance()), (180, 20));
}

#[test]
fn balanced_transfer_walks_roles_in_declaration_order() {
    let a = share(Account::new(1, 200));
    let b = share(Account::new(2, 100));
    let transfer = BalancedTransfer::new(a.clone(), b.clone(), 75).unwrap();

    let balances = enact(&transfer).unwrap();
    assert_eq!(balances,
               vec![("source_account".to_string(), 125), ("destination_account".to_string(), 175)]);
    assert_eq!((a.borrow().balance(), b.borrow().balance()), (125, 175));
}

#[test]
fn same_method_name_resolves_per_role() {
    let a = share(Account::new(1, 10));
    let b = share(Account::new(2, 10));
    let transfer = BalancedTransfer::new(a.clone(), b.clone(), 5).unwrap();
    let ctx = transfer.context();

    assert_eq!(ctx.get("source_account").unwrap().call::<i64>("transfer", &args![1]).unwrap(), 9);
    assert_eq!(ctx.get("destination_account").unwrap().call::<i64>("transfer", &args![1]).unwrap(), 11);
}

#[test]
fn failed_credit_restores_the_debit() {
    let dir = AccountDirectory::seeded(&[(1, 10), (2, i64::MAX)]);
    let transfer = TransferFunds::new(&dir, 1, 2, 5).unwrap();

    let err = enact(&transfer).unwrap_err();
    assert_eq!(err, DciError::from(DomainError::BalanceOverflow { account: 2, amount: 5 }));
    assert_eq!(dir.balances(), vec![(1, 10), (2, i64::MAX)]);
}

#[test]
fn balanced_transfer_undoes_applied_steps_on_failure() {
    let a = share(Account::new(1, 10));
    let b = share(Account::new(2, i64::MAX));
    let transfer = BalancedTransfer::new(a.clone(), b.clone(), 5).unwrap();

    let err = enact(&transfer).unwrap_err();
    assert!(matches!(err, DciError::Raised(ref msg) if msg.contains("balance overflow")));
    assert_eq!((a.borrow().balance(), b.borrow().balance()), (10, i64::MAX));
}
