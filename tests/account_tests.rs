// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use tallybook::db::{init_schema, load_ledger};
use tallybook::{cli, commands::accounts};

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    init_schema(&mut conn).unwrap();
    conn
}

fn dispatch_account(conn: &mut Connection, argv: &[&str]) -> anyhow::Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(argv);
    if let Some(("account", acct_m)) = matches.subcommand() {
        accounts::handle(conn, acct_m)
    } else {
        panic!("no account subcommand");
    }
}

#[test]
fn add_trims_and_stores_opening_balance() {
    let mut conn = setup();
    dispatch_account(
        &mut conn,
        &[
            "tallybook", "account", "add", "--name", " Checking ", "--type", "bank",
            "--balance", "250.75",
        ],
    )
    .unwrap();
    let ledger = load_ledger(&conn).unwrap();
    let acct = ledger.account_by_name("Checking").unwrap();
    assert_eq!(acct.r#type, "bank");
    assert_eq!(acct.balance, dec("250.75"));
}

#[test]
fn duplicate_name_is_rejected() {
    let mut conn = setup();
    dispatch_account(
        &mut conn,
        &["tallybook", "account", "add", "--name", "Checking"],
    )
    .unwrap();
    assert!(
        dispatch_account(
            &mut conn,
            &["tallybook", "account", "add", "--name", "Checking"],
        )
        .is_err()
    );
}

#[test]
fn rm_keeps_transactions_behind() {
    let mut conn = setup();
    dispatch_account(
        &mut conn,
        &[
            "tallybook", "account", "add", "--name", "Checking", "--balance", "100",
        ],
    )
    .unwrap();
    // Record an expense, then delete the account out from under it.
    let cli = cli::build_cli();
    let matches = cli.get_matches_from([
        "tallybook", "tx", "add", "--date", "2024-06-01", "--account", "Checking",
        "--amount", "10", "--payee", "P",
    ]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        tallybook::commands::expenses::handle(&mut conn, tx_m).unwrap();
    } else {
        panic!("no tx subcommand");
    }
    dispatch_account(
        &mut conn,
        &["tallybook", "account", "rm", "--name", "Checking"],
    )
    .unwrap();

    let ledger = load_ledger(&conn).unwrap();
    assert!(ledger.accounts.is_empty());
    assert_eq!(ledger.transactions.len(), 1);
}
