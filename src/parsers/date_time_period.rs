//! Datetime period parser: a date combined with a time range, or a range
//! between two full datetimes.

use super::EntityParser;
use crate::extractors::Extractor;
use crate::extractors::date::DateExtractor;
use crate::extractors::date_time::DateTimeExtractor;
use crate::extractors::time_period::TimePeriodExtractor;
use crate::parsers::date::DateParser;
use crate::parsers::date_time::DateTimeParser;
use crate::parsers::time_period::TimePeriodParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::NaiveDateTime;

pub struct DateTimePeriodParser {
    date_extractor: DateExtractor,
    date_parser: DateParser,
    time_period_extractor: TimePeriodExtractor,
    time_period_parser: TimePeriodParser,
    date_time_extractor: DateTimeExtractor,
    date_time_parser: DateTimeParser,
}

impl DateTimePeriodParser {
    pub fn new(
        date_extractor: DateExtractor,
        date_parser: DateParser,
        time_period_extractor: TimePeriodExtractor,
        time_period_parser: TimePeriodParser,
        date_time_extractor: DateTimeExtractor,
        date_time_parser: DateTimeParser,
    ) -> Self {
        DateTimePeriodParser {
            date_extractor,
            date_parser,
            time_period_extractor,
            time_period_parser,
            date_time_extractor,
            date_time_parser,
        }
    }

    fn one_span<E: Extractor>(extractor: &E, text: &str) -> Option<ExtractResult> {
        let mut spans = extractor.extract(text);
        if spans.len() != 1 {
            return None;
        }
        Some(spans.remove(0))
    }

    /// "dinsdag van 10:00 tot 12:00": anchor the time range to the date.
    fn parse_date_with_time_period(
        &self,
        span: &ExtractResult,
        reference: NaiveDateTime,
    ) -> Option<Resolution> {
        let date_span = Self::one_span(&self.date_extractor, span.data.group("left")?)?;
        let date = self.date_parser.parse(&date_span, reference)?;
        let period_span = Self::one_span(&self.time_period_extractor, span.data.group("right")?)?;
        let period = self.time_period_parser.parse(&period_span, reference)?;

        let day = match date.value {
            ResolvedValue::DateTime(dt) => dt.date(),
            _ => return None,
        };
        let (begin, end) = match period.value {
            ResolvedValue::Range { begin, end } => (day.and_time(begin.time()), day.and_time(end.time())),
            _ => return None,
        };
        let minutes = (end - begin).num_minutes();
        let dur = if minutes % 60 == 0 {
            format!("PT{}H", minutes / 60)
        } else {
            format!("PT{}H{}M", minutes / 60, minutes % 60)
        };
        Some(Resolution::new(
            EntityKind::DateTimePeriod,
            format!(
                "({}T{},{}T{},{})",
                day.format("%Y-%m-%d"),
                begin.format("%H:%M"),
                day.format("%Y-%m-%d"),
                end.format("%H:%M"),
                dur
            ),
            ResolvedValue::Range { begin, end },
        ))
    }

    /// "van morgen 09:00 tot morgen 17:00": a range between two datetimes.
    fn parse_datetime_range(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let half = |text: &str| -> Option<NaiveDateTime> {
            let sub = Self::one_span(&self.date_time_extractor, text)?;
            match self.date_time_parser.parse(&sub, reference)?.value {
                ResolvedValue::DateTime(dt) => Some(dt),
                _ => None,
            }
        };
        let begin = half(span.data.group("left")?)?;
        let end = half(span.data.group("right")?)?;
        if end <= begin {
            return None;
        }
        let minutes = (end - begin).num_minutes();
        Some(Resolution::new(
            EntityKind::DateTimePeriod,
            format!(
                "({},{},PT{}H)",
                begin.format("%Y-%m-%dT%H:%M"),
                end.format("%Y-%m-%dT%H:%M"),
                minutes / 60
            ),
            ResolvedValue::Range { begin, end },
        ))
    }
}

impl EntityParser for DateTimePeriodParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        match span.data.tag {
            "date_timeperiod" => self.parse_date_with_time_period(span, reference),
            "dtrange" => self.parse_datetime_range(span, reference),
            _ => None,
        }
    }
}
