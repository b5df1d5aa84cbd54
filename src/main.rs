// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Utc;

use tallybook::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut conn = db::open_or_init()?;

    // Activation hook: bring recurring expenses up to date before any
    // command reads the ledger. `sync` runs the engine itself with its own
    // as-of date.
    if !matches!(matches.subcommand(), Some(("sync", _))) {
        let created = commands::sync::activate(&mut conn, Utc::now().date_naive())?;
        if created > 0 {
            println!("Materialized {} recurring expense(s)", created);
        }
    }

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("account", sub)) => commands::accounts::handle(&mut conn, sub)?,
        Some(("tx", sub)) => commands::expenses::handle(&mut conn, sub)?,
        Some(("sync", sub)) => commands::sync::handle(&mut conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
