// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Account, Transaction};

/// The owning collection of accounts and transactions, treated as one
/// consistent snapshot. The materialization engine mutates it only through
/// the primitives below; it never deletes or reorders entries. Persistence
/// happens elsewhere (`db`), wholesale, after a batch of changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.name == name)
    }

    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn next_account_id(&self) -> i64 {
        self.accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1
    }

    pub fn next_transaction_id(&self) -> i64 {
        self.transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    pub fn append_transaction(&mut self, t: Transaction) {
        self.transactions.push(t);
    }

    /// Advance a source's processed-through marker. Returns whether the
    /// stored value actually changed.
    pub fn set_last_processed(&mut self, id: i64, date: NaiveDate) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(t) if t.last_processed_date != Some(date) => {
                t.last_processed_date = Some(date);
                true
            }
            _ => false,
        }
    }

    /// Apply a signed delta to an account balance. Returns false when the
    /// account no longer exists (deleted by the user), in which case the
    /// ledger is left untouched.
    pub fn adjust_balance(&mut self, account_id: i64, delta: Decimal) -> bool {
        match self.accounts.iter_mut().find(|a| a.id == account_id) {
            Some(a) => {
                a.balance += delta;
                true
            }
            None => false,
        }
    }

    // Host-side mutations below; the engine never calls these.

    pub fn add_account(&mut self, a: Account) {
        self.accounts.push(a);
    }

    pub fn remove_account(&mut self, id: i64) -> bool {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        self.accounts.len() != before
    }

    pub fn remove_transaction(&mut self, id: i64) -> Option<Transaction> {
        let pos = self.transactions.iter().position(|t| t.id == id)?;
        Some(self.transactions.remove(pos))
    }
}
