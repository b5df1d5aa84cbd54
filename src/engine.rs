// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Recurring-expense materialization.
//!
//! On every activation the host hands the full ledger and today's date to
//! [`materialize`], which generates every instance still missing between each
//! source's processed-through marker and today, debits the charged accounts
//! in lockstep, and advances the markers. The function is pure state-in /
//! state-out: it performs no I/O and has no failure modes, and the caller
//! persists the returned snapshot wholesale if `changed` is set.
//!
//! Re-running with the engine's own output and the same date is a no-op
//! (`changed = false`): each marker has already advanced past every due date,
//! so no date is ever materialized twice.

use chrono::NaiveDate;

use crate::ledger::Ledger;
use crate::models::Transaction;
use crate::recurrence::next_date;

/// Outcome of one materialization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Materialized {
    pub ledger: Ledger,
    /// True when the returned snapshot differs from the input and must be
    /// persisted. Also raised when a legacy source merely had its
    /// processed-through marker backfilled.
    pub changed: bool,
    /// Number of instances generated this pass.
    pub created: usize,
}

/// Generate all due instances for every recurring source, up to and
/// including `today`.
///
/// Sources are processed independently; each one only appends its own
/// instances, debits its own account, and advances its own marker, so the
/// order across sources does not matter. A transaction flagged as a source
/// but missing its frequency is skipped and left untouched. A `today` before
/// a source's marker (clock set backwards) yields zero instances and leaves
/// the marker alone.
pub fn materialize(mut ledger: Ledger, today: NaiveDate) -> Materialized {
    let mut changed = false;
    let mut created = 0usize;

    let sources: Vec<i64> = ledger
        .transactions
        .iter()
        .filter(|t| t.is_source())
        .map(|t| t.id)
        .collect();

    for source_id in sources {
        // is_source() above guarantees the frequency is present.
        let Some(template) = ledger.transaction(source_id).cloned() else {
            continue;
        };
        let Some(freq) = template.repeats else {
            continue;
        };

        // Legacy sources predate the marker; their own date stands in.
        let mut cursor = template.last_processed_date.unwrap_or(template.date);

        loop {
            let next = next_date(cursor, freq);
            if next > today {
                break;
            }
            let instance = Transaction {
                id: ledger.next_transaction_id(),
                date: next,
                account_id: template.account_id,
                amount: template.amount,
                payee: template.payee.clone(),
                note: template.note.clone(),
                repeats: None,
                is_recurring_source: false,
                parent_expense_id: Some(source_id),
                last_processed_date: None,
            };
            ledger.append_transaction(instance);
            // The charged account may have been deleted since the source was
            // created. Keep the instance for the historical record and move
            // on; there is no balance left to adjust.
            let _ = ledger.adjust_balance(template.account_id, -template.amount);
            cursor = next;
            created += 1;
            changed = true;
        }

        // Persist the marker even when nothing was generated, so legacy
        // sources missing the field get it backfilled on first run.
        if ledger.set_last_processed(source_id, cursor) {
            changed = true;
        }
    }

    Materialized {
        ledger,
        changed,
        created,
    }
}
