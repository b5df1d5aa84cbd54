// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use serde::Serialize;

use crate::db::{load_ledger, save_ledger};
use crate::engine::materialize;
use crate::utils::{maybe_print_json, parse_date};

/// Activation hook: load the snapshot, materialize everything due through
/// `today`, and persist only if something changed. Returns the number of
/// instances generated.
pub fn activate(conn: &mut Connection, today: NaiveDate) -> Result<usize> {
    let ledger = load_ledger(conn)?;
    let outcome = materialize(ledger, today);
    if outcome.changed {
        save_ledger(conn, &outcome.ledger)?;
    }
    Ok(outcome.created)
}

#[derive(Serialize)]
struct SyncOutcome {
    as_of: String,
    created: usize,
    changed: bool,
}

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let as_of = match m.get_one::<String>("as-of") {
        Some(s) => parse_date(s.trim())?,
        None => Utc::now().date_naive(),
    };

    let ledger = load_ledger(conn)?;
    let outcome = materialize(ledger, as_of);
    if outcome.changed {
        save_ledger(conn, &outcome.ledger)?;
    }

    let report = SyncOutcome {
        as_of: as_of.to_string(),
        created: outcome.created,
        changed: outcome.changed,
    };
    if !maybe_print_json(json_flag, jsonl_flag, &report)? {
        if report.changed {
            println!(
                "Materialized {} recurring expense(s) through {}",
                report.created, report.as_of
            );
        } else {
            println!("Up to date through {}", report.as_of);
        }
    }
    Ok(())
}
