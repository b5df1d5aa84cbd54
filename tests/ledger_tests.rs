// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tallybook::ledger::Ledger;
use tallybook::models::{Account, Transaction};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn tx(id: i64, date: &str) -> Transaction {
    Transaction {
        id,
        date: d(date),
        account_id: 1,
        amount: dec("10"),
        payee: "P".into(),
        note: None,
        repeats: None,
        is_recurring_source: false,
        parent_expense_id: None,
        last_processed_date: None,
    }
}

fn ledger_with_account() -> Ledger {
    let mut ledger = Ledger::new();
    ledger.add_account(Account {
        id: 1,
        name: "Checking".into(),
        r#type: "checking".into(),
        balance: dec("100"),
    });
    ledger
}

#[test]
fn ids_are_fresh_and_monotonic() {
    let mut ledger = ledger_with_account();
    assert_eq!(ledger.next_account_id(), 2);
    assert_eq!(ledger.next_transaction_id(), 1);
    ledger.append_transaction(tx(7, "2024-01-01"));
    assert_eq!(ledger.next_transaction_id(), 8);
}

#[test]
fn adjust_balance_reports_missing_account() {
    let mut ledger = ledger_with_account();
    assert!(ledger.adjust_balance(1, dec("-25")));
    assert_eq!(ledger.account(1).unwrap().balance, dec("75"));
    assert!(!ledger.adjust_balance(99, dec("-25")));
    assert_eq!(ledger.account(1).unwrap().balance, dec("75"));
}

#[test]
fn set_last_processed_detects_no_op() {
    let mut ledger = ledger_with_account();
    ledger.append_transaction(tx(1, "2024-01-01"));
    assert!(ledger.set_last_processed(1, d("2024-02-01")));
    assert!(!ledger.set_last_processed(1, d("2024-02-01")));
    assert!(ledger.set_last_processed(1, d("2024-03-01")));
    assert!(!ledger.set_last_processed(42, d("2024-03-01")));
    assert_eq!(
        ledger.transaction(1).unwrap().last_processed_date,
        Some(d("2024-03-01"))
    );
}

#[test]
fn remove_transaction_returns_the_removed_entry() {
    let mut ledger = ledger_with_account();
    ledger.append_transaction(tx(1, "2024-01-01"));
    ledger.append_transaction(tx(2, "2024-01-02"));
    let removed = ledger.remove_transaction(1).unwrap();
    assert_eq!(removed.id, 1);
    assert!(ledger.transaction(1).is_none());
    assert!(ledger.remove_transaction(1).is_none());
    assert_eq!(ledger.transactions.len(), 1);
}

#[test]
fn lookups_by_name_and_id() {
    let mut ledger = ledger_with_account();
    assert_eq!(ledger.account_by_name("Checking").map(|a| a.id), Some(1));
    assert!(ledger.account_by_name("Savings").is_none());
    assert!(ledger.remove_account(1));
    assert!(!ledger.remove_account(1));
    assert!(ledger.account(1).is_none());
}
