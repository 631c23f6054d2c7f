//! Calendar helpers for countdown dates.

use chrono::{Datelike, Days, NaiveDate};

/// Number of days from `today` up to and including `last_day`.
///
/// This is the number of boxes a poster needs: one for today, one for the
/// last day, and one for every day in between. Negative or zero when
/// `last_day` is already in the past.
pub fn days_inclusive(today: NaiveDate, last_day: NaiveDate) -> i64 {
    (last_day - today).num_days() + 1
}

/// The date `n` days before `date`, or `None` if that leaves the calendar.
pub fn days_before(date: NaiveDate, n: u64) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(n))
}

/// Short "day.month." label without year or leading zeros, e.g. `1.3.`
pub fn day_month_label(date: NaiveDate) -> String {
    format!("{}.{}.", date.day(), date.month())
}
