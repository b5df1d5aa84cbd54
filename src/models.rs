// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub name: String,
    pub r#type: String,
    /// Materialized cache of the ledger: opening balance minus everything
    /// charged to this account. Never authoritative on its own.
    pub balance: Decimal,
}

/// How often a recurring source fires. Non-recurring transactions carry
/// `Option<Frequency>::None`, so the calendar functions never see an
/// "unrepeatable" frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Bimonthly,
    Semiannual,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Bimonthly => "bimonthly",
            Frequency::Semiannual => "semiannual",
            Frequency::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "bimonthly" => Ok(Frequency::Bimonthly),
            "semiannual" => Ok(Frequency::Semiannual),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(anyhow::anyhow!(
                "Invalid frequency '{}', expected daily|weekly|monthly|bimonthly|semiannual|yearly",
                other
            )),
        }
    }
}

/// An expense. Exactly one of three shapes: plain (no repeats, no parent),
/// recurring source (`is_recurring_source` with `repeats` set, carries
/// `last_processed_date` once processed), or generated instance
/// (`parent_expense_id` set, everything recurring cleared).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub account_id: i64,
    pub amount: Decimal,
    pub payee: String,
    pub note: Option<String>,
    pub repeats: Option<Frequency>,
    pub is_recurring_source: bool,
    pub parent_expense_id: Option<i64>,
    pub last_processed_date: Option<NaiveDate>,
}

impl Transaction {
    /// A well-formed source drives materialization. A transaction flagged as
    /// a source but missing its frequency is treated as not recurring.
    pub fn is_source(&self) -> bool {
        self.is_recurring_source && self.repeats.is_some()
    }

    pub fn is_instance(&self) -> bool {
        self.parent_expense_id.is_some()
    }
}
