// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use tallybook::models::Frequency;
use tallybook::recurrence::next_date;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn daily_and_weekly_step_by_days() {
    assert_eq!(next_date(d("2024-06-01"), Frequency::Daily), d("2024-06-02"));
    assert_eq!(next_date(d("2024-12-31"), Frequency::Daily), d("2025-01-01"));
    assert_eq!(next_date(d("2024-06-01"), Frequency::Weekly), d("2024-06-08"));
    assert_eq!(next_date(d("2024-02-26"), Frequency::Weekly), d("2024-03-04"));
}

#[test]
fn monthly_keeps_day_of_month() {
    assert_eq!(
        next_date(d("2024-01-15"), Frequency::Monthly),
        d("2024-02-15")
    );
    assert_eq!(
        next_date(d("2024-11-30"), Frequency::Monthly),
        d("2024-12-30")
    );
}

#[test]
fn monthly_clamps_to_short_months() {
    // Leap year February keeps the 29th, otherwise the 28th.
    assert_eq!(
        next_date(d("2024-01-31"), Frequency::Monthly),
        d("2024-02-29")
    );
    assert_eq!(
        next_date(d("2025-01-31"), Frequency::Monthly),
        d("2025-02-28")
    );
    // The clamped day carries forward on the next step.
    assert_eq!(
        next_date(d("2024-02-29"), Frequency::Monthly),
        d("2024-03-29")
    );
}

#[test]
fn multi_month_frequencies() {
    assert_eq!(
        next_date(d("2024-01-15"), Frequency::Bimonthly),
        d("2024-03-15")
    );
    assert_eq!(
        next_date(d("2023-12-31"), Frequency::Bimonthly),
        d("2024-02-29")
    );
    assert_eq!(
        next_date(d("2023-08-31"), Frequency::Semiannual),
        d("2024-02-29")
    );
    assert_eq!(
        next_date(d("2024-03-10"), Frequency::Yearly),
        d("2025-03-10")
    );
    assert_eq!(
        next_date(d("2024-02-29"), Frequency::Yearly),
        d("2025-02-28")
    );
}

#[test]
fn stable_across_calls() {
    let date = d("2024-01-31");
    for freq in [
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Bimonthly,
        Frequency::Semiannual,
        Frequency::Yearly,
    ] {
        assert_eq!(next_date(date, freq), next_date(date, freq));
    }
}
