// Copyright (c) 2026 Tallybook Authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Days, Months, NaiveDate};

use crate::models::Frequency;

/// Next occurrence of a recurring expense after `date`.
///
/// Month and year steps clamp the day-of-month to the end of the target
/// month when it is shorter (Jan 31 + 1 month = Feb 29 in a leap year,
/// Feb 28 otherwise), and the clamped day carries into subsequent steps
/// (Jan 31 -> Feb 29 -> Mar 29). Pure and stable: same input, same output.
pub fn next_date(date: NaiveDate, freq: Frequency) -> NaiveDate {
    let next = match freq {
        Frequency::Daily => date.checked_add_days(Days::new(1)),
        Frequency::Weekly => date.checked_add_days(Days::new(7)),
        Frequency::Monthly => date.checked_add_months(Months::new(1)),
        Frequency::Bimonthly => date.checked_add_months(Months::new(2)),
        Frequency::Semiannual => date.checked_add_months(Months::new(6)),
        Frequency::Yearly => date.checked_add_months(Months::new(12)),
    };
    // chrono dates run out past year 262142, far outside any ledger.
    next.expect("calendar date out of range")
}
