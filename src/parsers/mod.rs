//! Entity parsers.
//!
//! One parser per entity kind, mirroring the extractors. A parser turns a
//! single candidate span plus a reference datetime into a normalized
//! [`Resolution`], or `None` when the span's sub-match data cannot be
//! interpreted; the caller drops such spans rather than failing the batch.

use crate::{ExtractResult, Resolution};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

pub mod date;
pub mod date_period;
pub mod date_time;
pub mod date_time_period;
pub mod duration;
pub mod holiday;
pub mod number;
pub mod set;
pub mod time;
pub mod time_period;
pub mod timezone;

/// Year-swift sentinel: "no modifier present, use the literally stated year".
pub const NO_SWIFT: i64 = -10;

pub trait EntityParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution>;
}

pub(crate) fn at_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(0, 0, 0).unwrap()
}

/// First occurrence of `weekday` strictly after `date`.
pub(crate) fn next_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut d = date + Duration::days(1);
    while d.weekday() != weekday {
        d += Duration::days(1);
    }
    d
}

/// Last occurrence of `weekday` strictly before `date`.
pub(crate) fn prev_weekday(date: NaiveDate, weekday: Weekday) -> NaiveDate {
    let mut d = date - Duration::days(1);
    while d.weekday() != weekday {
        d -= Duration::days(1);
    }
    d
}

/// Monday of the ISO week containing `date`.
pub(crate) fn week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub(crate) fn weekday_number(weekday: Weekday) -> u32 {
    weekday.num_days_from_monday() + 1
}

pub(crate) fn date_timex(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Range timex in the `(begin,end,duration)` encoding.
pub(crate) fn period_timex(begin: NaiveDate, end: NaiveDate) -> String {
    let days = (end - begin).num_days();
    format!("({},{},P{}D)", date_timex(begin), date_timex(end), days)
}

pub(crate) fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    (NaiveDate::from_ymd_opt(next_y, next_m, 1).unwrap() - Duration::days(1)).day()
}

/// Shift `(year, month)` by a signed number of months.
pub(crate) fn shift_month(year: i32, month: u32, delta: i64) -> (i32, u32) {
    let total = year as i64 * 12 + (month as i64 - 1) + delta;
    (total.div_euclid(12) as i32, (total.rem_euclid(12) + 1) as u32)
}
