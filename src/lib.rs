extern crate self as tijdtekst;

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::fmt;

#[macro_use]
mod macros;
mod api;
mod holidays;

pub mod dutch;
pub mod extractors;
pub mod parsers;

pub use api::{DateTimeOptions, Entity, Reference, recognize, recognize_number, recognize_with};
pub use holidays::Holiday;

/// Entity kinds produced by extraction. Parsing may resolve a span into a
/// different kind (e.g. a `Holiday` span resolves as a `Date`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Date,
    Time,
    DateTime,
    Duration,
    Set,
    Holiday,
    DatePeriod,
    TimePeriod,
    DateTimePeriod,
    TimeZone,
    Number,
    Integer,
    Cardinal,
    Ordinal,
    Fraction,
}

impl EntityKind {
    pub fn type_name(self) -> &'static str {
        match self {
            EntityKind::Date => "date",
            EntityKind::Time => "time",
            EntityKind::DateTime => "datetime",
            EntityKind::Duration => "duration",
            EntityKind::Set => "set",
            EntityKind::Holiday => "date",
            EntityKind::DatePeriod => "daterange",
            EntityKind::TimePeriod => "timerange",
            EntityKind::DateTimePeriod => "datetimerange",
            EntityKind::TimeZone => "timezone",
            EntityKind::Number => "number",
            EntityKind::Integer => "number",
            EntityKind::Cardinal => "number",
            EntityKind::Ordinal => "ordinal",
            EntityKind::Fraction => "number",
        }
    }
}

/// Sub-match payload attached to a candidate span.
///
/// `tag` identifies which configured pattern produced the span; `groups`
/// carries the named capture groups of that pattern. The payload is consumed
/// only by the parser for the same kind.
#[derive(Debug, Clone, Default)]
pub struct MatchData {
    pub tag: &'static str,
    pub groups: BTreeMap<&'static str, String>,
}

impl MatchData {
    pub fn group(&self, name: &str) -> Option<&str> {
        self.groups.get(name).map(|s| s.as_str())
    }
}

/// A candidate span found by an extractor.
///
/// `start`/`length` are byte offsets into the original input. Spans are
/// immutable once built; a fresh set is produced per extraction call.
#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub start: usize,
    pub length: usize,
    pub text: String,
    pub kind: EntityKind,
    pub data: MatchData,
}

impl ExtractResult {
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn overlaps(&self, other: &ExtractResult) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}

/// A resolved value: either a concrete instant, a half-open range, a
/// sentinel reference (`PRESENT_REF` and friends), or a plain number.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    DateTime(NaiveDateTime),
    Range { begin: NaiveDateTime, end: NaiveDateTime },
    Ref(&'static str),
    Number(f64),
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            ResolvedValue::Range { begin, end } => {
                write!(f, "{} -- {}", begin.format("%Y-%m-%d %H:%M:%S"), end.format("%Y-%m-%d %H:%M:%S"))
            }
            ResolvedValue::Ref(s) => write!(f, "{s}"),
            ResolvedValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The normalized resolution of one candidate span against a reference time.
///
/// `future_value`/`past_value` are present when the phrase is ambiguous
/// between directions ("maandag" without a modifier); `value` then carries
/// the future reading.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub kind: EntityKind,
    pub timex: String,
    pub value: ResolvedValue,
    pub future_value: Option<ResolvedValue>,
    pub past_value: Option<ResolvedValue>,
    pub modifier: Option<&'static str>,
    pub is_lunar: bool,
}

impl Resolution {
    pub fn new(kind: EntityKind, timex: impl Into<String>, value: ResolvedValue) -> Self {
        Resolution {
            kind,
            timex: timex.into(),
            value,
            future_value: None,
            past_value: None,
            modifier: None,
            is_lunar: false,
        }
    }
}

/// The sentinel "unknown" instant used for degraded results (e.g. a movable
/// feast with no implemented calendar rule).
pub fn min_value() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

pub(crate) fn debug_enabled() -> bool {
    std::env::var_os("TIJDTEKST_DEBUG").is_some()
}
