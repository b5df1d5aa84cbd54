// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

use crate::db::{load_ledger, save_ledger};
use crate::models::Account;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

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
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let typ = sub.get_one::<String>("type").unwrap().trim().to_string();
    let balance = parse_decimal(sub.get_one::<String>("balance").unwrap().trim())?;

    let mut ledger = load_ledger(conn)?;
    if ledger.account_by_name(&name).is_some() {
        return Err(anyhow::anyhow!("Account '{}' already exists", name));
    }
    let account = Account {
        id: ledger.next_account_id(),
        name: name.clone(),
        r#type: typ.clone(),
        balance,
    };
    ledger.add_account(account);
    save_ledger(conn, &ledger)?;
    println!("Added account '{}' ({}, opening {})", name, typ, balance);
    Ok(())
}

#[derive(Serialize)]
pub struct AccountRow {
    pub name: String,
    pub r#type: String,
    pub balance: String,
}

fn list(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let ledger = load_ledger(conn)?;
    let mut data: Vec<AccountRow> = ledger
        .accounts
        .iter()
        .map(|a| AccountRow {
            name: a.name.clone(),
            r#type: a.r#type.clone(),
            balance: fmt_money(&a.balance),
        })
        .collect();
    data.sort_by(|a, b| a.name.cmp(&b.name));
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.name, r.r#type, r.balance])
            .collect();
        println!("{}", pretty_table(&["Name", "Type", "Balance"], rows));
    }
    Ok(())
}

fn rm(conn: &mut Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let mut ledger = load_ledger(conn)?;
    let id = ledger
        .account_by_name(&name)
        .map(|a| a.id)
        .ok_or_else(|| anyhow::anyhow!("Account '{}' not found", name))?;
    // Transactions referencing the account are kept; recurring sources keep
    // generating instances with nothing left to debit (see DESIGN.md).
    ledger.remove_account(id);
    save_ledger(conn, &ledger)?;
    println!("Removed account '{}'", name);
    Ok(())
}
