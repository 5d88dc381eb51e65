//! Calendar grid computation and date predicates.
//!
//! A grid is an ordered sequence of `NaiveDate` cells. Weeks run
//! Sunday through Saturday throughout (weekday index 0 = Sunday).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Duration, Months, NaiveDate};

/// Grid granularity for the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Month,
    Week,
    Day,
}

impl View {
    /// The cells to render for this view around `date`.
    pub fn grid(self, date: NaiveDate) -> Vec<NaiveDate> {
        match self {
            View::Month => month_grid(date),
            View::Week => week_grid(date),
            View::Day => day_grid(date),
        }
    }

    /// Step `date` by `n` units of this view's granularity.
    /// Negative `n` steps backward.
    pub fn step(self, date: NaiveDate, n: i32) -> NaiveDate {
        match self {
            View::Month => shift_months(date, n),
            View::Week => shift_weeks(date, n as i64),
            View::Day => shift_days(date, n as i64),
        }
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(View::Month),
            "week" => Ok(View::Week),
            "day" => Ok(View::Day),
            other => Err(format!(
                "Unknown view '{other}'. Expected month, week, or day"
            )),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Month => write!(f, "month"),
            View::Week => write!(f, "week"),
            View::Day => write!(f, "day"),
        }
    }
}

/// All cells for the month view around `date`.
///
/// Covers the month's first through last day, padded back to the Sunday
/// on-or-before the first and forward to the Saturday on-or-after the
/// last, so the result is whole weeks (a multiple of 7 cells, 28-42)
/// including the visible days of adjacent months.
pub fn month_grid(date: NaiveDate) -> Vec<NaiveDate> {
    let first = date.with_day(1).unwrap();
    let last = first + Months::new(1) - Days::new(1);

    let start = first - Days::new(first.weekday().num_days_from_sunday() as u64);
    let end = last + Days::new((6 - last.weekday().num_days_from_sunday()) as u64);

    let mut days = Vec::new();
    let mut current = start;
    while current <= end {
        days.push(current);
        current = current.succ_opt().unwrap();
    }

    days
}

/// The Sunday-through-Saturday week containing `date`.
pub fn week_grid(date: NaiveDate) -> Vec<NaiveDate> {
    let sunday = date - Days::new(date.weekday().num_days_from_sunday() as u64);
    (0..7).map(|offset| sunday + Days::new(offset)).collect()
}

/// The single cell for the day view.
pub fn day_grid(date: NaiveDate) -> Vec<NaiveDate> {
    vec![date]
}

/// Whether two date values fall on the same calendar day, ignoring
/// time-of-day.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Whether two date values fall in the same month of the same year.
pub fn is_same_month<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Offset `date` by `n` whole months.
///
/// Days past the end of the target month clamp to its last day
/// (Jan 31 + 1 month = Feb 28, or Feb 29 in leap years).
pub fn shift_months(date: NaiveDate, n: i32) -> NaiveDate {
    if n >= 0 {
        date + Months::new(n as u32)
    } else {
        date - Months::new(n.unsigned_abs())
    }
}

/// Offset `date` by `n` whole weeks.
pub fn shift_weeks(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::weeks(n)
}

/// Offset `date` by `n` days.
pub fn shift_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}
