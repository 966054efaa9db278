//! Time period parser: bare hour ranges, named parts of the day, and
//! composite from-to spans over two full times.

use super::{EntityParser, at_midnight};
use crate::extractors::Extractor;
use crate::extractors::time::TimeExtractor;
use crate::parsers::time::TimeParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeMap;

/// Part-of-day entry: timex code, begin hour, end hour (exclusive).
pub type TimeOfDaySpec = (&'static str, u32, u32);

pub struct TimePeriodParserConfig {
    pub time_of_day_map: &'static BTreeMap<&'static str, TimeOfDaySpec>,
}

pub struct TimePeriodParser {
    config: TimePeriodParserConfig,
    time_extractor: TimeExtractor,
    time_parser: TimeParser,
}

impl TimePeriodParser {
    pub fn new(
        config: TimePeriodParserConfig,
        time_extractor: TimeExtractor,
        time_parser: TimeParser,
    ) -> Self {
        TimePeriodParser { config, time_extractor, time_parser }
    }

    fn hour_range(&self, reference: NaiveDateTime, h1: u32, h2: u32) -> Option<Resolution> {
        if h1 > 23 || h2 > 24 || h2 <= h1 {
            return None;
        }
        let midnight = at_midnight(reference.date());
        Some(Resolution::new(
            EntityKind::TimePeriod,
            format!("(T{h1:02},T{h2:02},PT{}H)", h2 - h1),
            ResolvedValue::Range {
                begin: midnight + Duration::hours(h1 as i64),
                end: midnight + Duration::hours(h2 as i64),
            },
        ))
    }

    /// "van 10 tot 12 uur": bare numbers, second hour below the first means
    /// an afternoon reading of the second.
    fn parse_pure_numbers(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let h1: u32 = data.group("hour1")?.parse().ok()?;
        let mut h2: u32 = data.group("hour2")?.parse().ok()?;
        if h2 < h1 && h2 + 12 <= 24 {
            h2 += 12;
        }
        self.hour_range(reference, h1, h2)
    }

    fn parse_time_of_day(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let &(code, h1, h2) = self.config.time_of_day_map.get(span.data.group("tod")?)?;
        let mut res = self.hour_range(reference, h1, h2)?;
        res.timex = format!("T{code}");
        Some(res)
    }

    fn parse_from_to(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let half = |text: &str| -> Option<NaiveDateTime> {
            let spans = self.time_extractor.extract(text);
            if spans.len() != 1 {
                return None;
            }
            match self.time_parser.parse(&spans[0], reference)?.value {
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
        let dur = if minutes % 60 == 0 {
            format!("PT{}H", minutes / 60)
        } else {
            format!("PT{}H{}M", minutes / 60, minutes % 60)
        };
        Some(Resolution::new(
            EntityKind::TimePeriod,
            format!("(T{},T{},{})", begin.format("%H:%M"), end.format("%H:%M"), dur),
            ResolvedValue::Range { begin, end },
        ))
    }
}

impl EntityParser for TimePeriodParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        match span.data.tag {
            "purenum" => self.parse_pure_numbers(span, reference),
            "timeofday" => self.parse_time_of_day(span, reference),
            "fromto" | "between" => self.parse_from_to(span, reference),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;
    use crate::parsers::EntityParser;
    use crate::{ResolvedValue, api::Reference};
    use chrono::Timelike;

    fn resolve(text: &str) -> crate::Resolution {
        let locale = DutchLocale::new();
        let spans = locale.time_period_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.time_period_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    fn hours(res: &crate::Resolution) -> (u32, u32) {
        match res.value {
            ResolvedValue::Range { begin, end } => (begin.hour(), end.hour()),
            ref other => panic!("expected a range, got {other:?}"),
        }
    }

    #[test]
    fn pure_number_range() {
        let res = resolve("van 10 tot 12 uur");
        assert_eq!(hours(&res), (10, 12));
        assert_eq!(res.timex, "(T10,T12,PT2H)");
    }

    #[test]
    fn wrapped_second_hour_reads_as_afternoon() {
        // "van 10 tot 2 uur" is 10:00 to 14:00.
        let res = resolve("van 10 tot 2 uur");
        assert_eq!(hours(&res), (10, 14));
    }

    #[test]
    fn named_parts_of_day() {
        let res = resolve("vanochtend");
        assert_eq!(res.timex, "TMO");
        assert_eq!(hours(&res), (8, 12));

        let res = resolve("vanavond");
        assert_eq!(res.timex, "TEV");
        assert_eq!(hours(&res), (16, 20));
    }

    #[test]
    fn clock_time_range() {
        let res = resolve("van 10:00 tot 12:30");
        let (b, e) = match res.value {
            ResolvedValue::Range { begin, end } => (begin, end),
            ref other => panic!("{other:?}"),
        };
        assert_eq!((b.hour(), b.minute()), (10, 0));
        assert_eq!((e.hour(), e.minute()), (12, 30));
        assert_eq!(res.timex, "(T10:00,T12:30,PT2H30M)");
    }

    #[test]
    fn inverted_range_is_dropped() {
        let locale = DutchLocale::new();
        let spans = locale.time_period_extractor.extract("van 14:00 tot 09:00");
        for span in spans {
            assert!(locale.time_period_parser.parse(&span, Reference::default().datetime).is_none());
        }
    }
}
