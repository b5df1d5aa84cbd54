// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use crate::ledger::Ledger;
use crate::models::{Account, Frequency, Transaction};
use crate::utils::parse_date;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.tallybook", "Tallybook", "tallybook"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tallybook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS accounts(
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        type TEXT NOT NULL,
        balance TEXT NOT NULL
    );

    -- No FK on account_id: transactions outlive a deleted account.
    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY,
        date TEXT NOT NULL,
        account_id INTEGER NOT NULL,
        amount TEXT NOT NULL,
        payee TEXT NOT NULL,
        note TEXT,
        repeats TEXT,
        is_recurring_source INTEGER NOT NULL DEFAULT 0,
        parent_expense_id INTEGER,
        last_processed_date TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    "#,
    )?;
    Ok(())
}

/// Read the full ledger snapshot, ordered by id.
pub fn load_ledger(conn: &Connection) -> Result<Ledger> {
    let mut ledger = Ledger::new();

    let mut stmt = conn.prepare("SELECT id, name, type, balance FROM accounts ORDER BY id")?;
    let mut rows = stmt.query([])?;
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let name: String = r.get(1)?;
        let typ: String = r.get(2)?;
        let balance_s: String = r.get(3)?;
        let balance = Decimal::from_str(&balance_s)
            .with_context(|| format!("Invalid balance '{}' for account {}", balance_s, name))?;
        ledger.accounts.push(Account {
            id,
            name,
            r#type: typ,
            balance,
        });
    }

    let mut stmt = conn.prepare(
        "SELECT id, date, account_id, amount, payee, note, repeats,
                is_recurring_source, parent_expense_id, last_processed_date
         FROM transactions ORDER BY id",
    )?;
    let mut rows = stmt.query([])?;
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let date_s: String = r.get(1)?;
        let amount_s: String = r.get(3)?;
        let repeats_s: Option<String> = r.get(6)?;
        let last_s: Option<String> = r.get(9)?;
        ledger.transactions.push(Transaction {
            id,
            date: parse_date(&date_s)?,
            account_id: r.get(2)?,
            amount: Decimal::from_str(&amount_s)
                .with_context(|| format!("Invalid amount '{}' in transaction {}", amount_s, id))?,
            payee: r.get(4)?,
            note: r.get(5)?,
            repeats: repeats_s.as_deref().map(Frequency::from_str).transpose()?,
            is_recurring_source: r.get::<_, i64>(7)? != 0,
            parent_expense_id: r.get(8)?,
            last_processed_date: last_s.as_deref().map(parse_date).transpose()?,
        });
    }

    Ok(ledger)
}

/// Write the whole snapshot back in one SQLite transaction. The ledger is
/// the authority; the tables are replaced wholesale so readers never see a
/// partial write.
pub fn save_ledger(conn: &mut Connection, ledger: &Ledger) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM accounts", [])?;
    tx.execute("DELETE FROM transactions", [])?;
    for a in &ledger.accounts {
        tx.execute(
            "INSERT INTO accounts(id, name, type, balance) VALUES (?1, ?2, ?3, ?4)",
            params![a.id, a.name, a.r#type, a.balance.to_string()],
        )?;
    }
    for t in &ledger.transactions {
        tx.execute(
            "INSERT INTO transactions(id, date, account_id, amount, payee, note, repeats,
                                      is_recurring_source, parent_expense_id, last_processed_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                t.id,
                t.date.to_string(),
                t.account_id,
                t.amount.to_string(),
                t.payee,
                t.note,
                t.repeats.map(|f| f.as_str()),
                t.is_recurring_source as i64,
                t.parent_expense_id,
                t.last_processed_date.map(|d| d.to_string()),
            ],
        )?;
    }
    tx.commit()?;
    Ok(())
}
