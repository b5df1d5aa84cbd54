// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::db::{load_ledger, save_ledger};
use crate::ledger::Ledger;
use crate::models::{Frequency, Transaction};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, parse_month, pretty_table};

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    let account_name = sub.get_one::<String>("account").unwrap().trim();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap().trim())?;
    let payee = sub.get_one::<String>("payee").unwrap().trim().to_string();
    let note = sub.get_one::<String>("note").map(|s| s.trim().to_string());
    let repeats: Option<Frequency> = sub
        .get_one::<String>("repeat")
        .map(|s| s.parse())
        .transpose()?;

    let mut ledger = load_ledger(conn)?;
    let account = ledger
        .account_by_name(account_name)
        .ok_or_else(|| anyhow::anyhow!("Account '{}' not found", account_name))?;
    let account_id = account.id;

    let tx = Transaction {
        id: ledger.next_transaction_id(),
        date,
        account_id,
        amount,
        payee: payee.clone(),
        note,
        repeats,
        is_recurring_source: repeats.is_some(),
        parent_expense_id: None,
        last_processed_date: None,
    };
    ledger.append_transaction(tx);
    ledger.adjust_balance(account_id, -amount);
    save_ledger(conn, &ledger)?;
    println!(
        "Recorded {} on {} at '{}' (acct: {})",
        amount, date, payee, account_name
    );

    // Creation hook: a new recurring source materializes immediately, so
    // instances due today or earlier appear without waiting for the next
    // activation.
    if let Some(freq) = repeats {
        let created = super::sync::activate(conn, chrono::Utc::now().date_naive())?;
        println!(
            "Recurring {} from {}; materialized {} instance(s)",
            freq, date, created
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub account: String,
    pub payee: String,
    pub amount: String,
    pub repeats: String,
    pub kind: String,
    pub note: String,
}

fn kind_of(t: &Transaction) -> &'static str {
    if t.is_source() {
        "source"
    } else if t.is_instance() {
        "instance"
    } else {
        ""
    }
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let month = sub
        .get_one::<String>("month")
        .map(|s| parse_month(s.trim()))
        .transpose()?;
    let account = sub.get_one::<String>("account").map(|s| s.trim());
    let limit = sub.get_one::<usize>("limit").copied();

    let mut txs: Vec<&Transaction> = ledger
        .transactions
        .iter()
        .filter(|t| match &month {
            Some(m) => t.date.to_string().starts_with(m.as_str()),
            None => true,
        })
        .filter(|t| match account {
            Some(name) => ledger
                .account(t.account_id)
                .is_some_and(|a| a.name == name),
            None => true,
        })
        .collect();
    txs.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    if let Some(n) = limit {
        txs.truncate(n);
    }

    Ok(txs
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id,
            date: t.date.to_string(),
            account: ledger
                .account(t.account_id)
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            payee: t.payee.clone(),
            amount: fmt_money(&t.amount),
            repeats: t.repeats.map(|f| f.to_string()).unwrap_or_default(),
            kind: kind_of(t).to_string(),
            note: t.note.clone().unwrap_or_default(),
        })
        .collect())
}

fn list(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = load_ledger(conn)?;
    let data = query_rows(&ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.account.clone(),
                    r.payee.clone(),
                    r.amount.clone(),
                    r.repeats.clone(),
                    r.kind.clone(),
                    r.note.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Account", "Payee", "Amount", "Repeats", "Kind", "Note"],
                rows,
            )
        );
    }
    Ok(())
}

fn rm(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let mut ledger = load_ledger(conn)?;
    let removed = ledger
        .remove_transaction(id)
        .ok_or_else(|| anyhow::anyhow!("Transaction {} not found", id))?;
    // Keep the balance cache in lockstep: credit the charge back. A removed
    // instance is not regenerated later; the source's processed-through
    // marker already covers its date.
    ledger.adjust_balance(removed.account_id, removed.amount);
    save_ledger(conn, &ledger)?;
    println!(
        "Removed expense {} ({} at '{}')",
        id, removed.amount, removed.payee
    );
    Ok(())
}
