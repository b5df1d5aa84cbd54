// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(crate_version!())
        .about("Personal expense tracking with recurring-expense materialization")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add an account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("type").long("type").default_value("checking"))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .default_value("0")
                                .help("Opening balance"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List accounts with balances"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove an account (its transactions are kept)")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect expenses")
                .subcommand(
                    Command::new("add")
                        .about("Record an expense")
                        .arg(Arg::new("date").long("date").required(true))
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("payee").long("payee").required(true))
                        .arg(Arg::new("note").long("note"))
                        .arg(
                            Arg::new("repeat")
                                .long("repeat")
                                .help("daily|weekly|monthly|bimonthly|semiannual|yearly"),
                        ),
                )
                .subcommand(
                    json_flags(Command::new("list").about("List expenses"))
                        .arg(Arg::new("month").long("month").help("Filter by YYYY-MM"))
                        .arg(Arg::new("account").long("account"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove an expense by id")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(json_flags(
            Command::new("sync")
                .about("Materialize due recurring expenses")
                .arg(
                    Arg::new("as-of")
                        .long("as-of")
                        .help("Materialize through this date instead of today (YYYY-MM-DD)"),
                ),
        ))
}
