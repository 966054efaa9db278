//! Datetime parser: "now"-class words resolve to sentinel references, merged
//! date+time spans are re-split and combined into a single instant.

use super::EntityParser;
use crate::extractors::Extractor;
use crate::extractors::date::DateExtractor;
use crate::extractors::time::TimeExtractor;
use crate::parsers::date::DateParser;
use crate::parsers::time::TimeParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::NaiveDateTime;

pub struct DateTimeParserConfig {
    /// Maps a "now"-class phrase to its sentinel timex (`PRESENT_REF`,
    /// `PAST_REF`, `FUTURE_REF`), or `None` for unrecognized phrases.
    pub matched_now_timex: fn(&str) -> Option<&'static str>,
}

pub struct DateTimeParser {
    config: DateTimeParserConfig,
    date_extractor: DateExtractor,
    date_parser: DateParser,
    time_extractor: TimeExtractor,
    time_parser: TimeParser,
}

impl DateTimeParser {
    pub fn new(
        config: DateTimeParserConfig,
        date_extractor: DateExtractor,
        date_parser: DateParser,
        time_extractor: TimeExtractor,
        time_parser: TimeParser,
    ) -> Self {
        DateTimeParser { config, date_extractor, date_parser, time_extractor, time_parser }
    }

    fn half_resolution<E: Extractor, P: EntityParser>(
        extractor: &E,
        parser: &P,
        text: &str,
        reference: NaiveDateTime,
    ) -> Option<Resolution> {
        let spans = extractor.extract(text);
        if spans.len() != 1 {
            return None;
        }
        parser.parse(&spans[0], reference)
    }

    /// One half must read as a date and the other as a time; the extractor
    /// does not record which came first.
    fn split_halves(
        &self,
        left: &str,
        right: &str,
        reference: NaiveDateTime,
    ) -> Option<(Resolution, Resolution)> {
        let date = Self::half_resolution(&self.date_extractor, &self.date_parser, left, reference);
        if let Some(date) = date {
            let time = Self::half_resolution(&self.time_extractor, &self.time_parser, right, reference)?;
            return Some((date, time));
        }
        let date = Self::half_resolution(&self.date_extractor, &self.date_parser, right, reference)?;
        let time = Self::half_resolution(&self.time_extractor, &self.time_parser, left, reference)?;
        Some((date, time))
    }

    fn parse_now(&self, span: &ExtractResult) -> Option<Resolution> {
        let timex = (self.config.matched_now_timex)(span.text.trim())?;
        Some(Resolution::new(EntityKind::DateTime, timex, ResolvedValue::Ref(timex)))
    }

    fn parse_merged(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let (date, time) = self.split_halves(
            span.data.group("left")?,
            span.data.group("right")?,
            reference,
        )?;

        let time_of_day = match time.value {
            ResolvedValue::DateTime(dt) => dt.time(),
            _ => return None,
        };
        let combine = |value: &ResolvedValue| -> Option<NaiveDateTime> {
            match value {
                ResolvedValue::DateTime(dt) => Some(dt.date().and_time(time_of_day)),
                _ => None,
            }
        };

        let value = combine(&date.value)?;
        let mut res = Resolution::new(
            EntityKind::DateTime,
            format!("{}{}", date.timex, time.timex),
            ResolvedValue::DateTime(value),
        );
        res.future_value =
            date.future_value.as_ref().and_then(&combine).map(ResolvedValue::DateTime);
        res.past_value =
            date.past_value.as_ref().and_then(&combine).map(ResolvedValue::DateTime);
        Some(res)
    }
}

impl EntityParser for DateTimeParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        match span.data.tag {
            "now" => self.parse_now(span),
            "datetime" => self.parse_merged(span, reference),
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
    use chrono::{NaiveDate, Timelike};

    fn resolve(text: &str) -> crate::Resolution {
        let locale = DutchLocale::new();
        let spans = locale.date_time_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.date_time_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    #[test]
    fn now_words_resolve_to_sentinels() {
        let res = resolve("nu");
        assert_eq!(res.timex, "PRESENT_REF");
        assert_eq!(res.value, ResolvedValue::Ref("PRESENT_REF"));

        assert_eq!(resolve("zojuist").timex, "PAST_REF");
        assert_eq!(resolve("binnenkort").timex, "FUTURE_REF");
    }

    #[test]
    fn merged_date_and_time_combine() {
        let res = resolve("morgen om 15:00");
        assert_eq!(res.timex, "2013-02-13T15:00");
        match res.value {
            ResolvedValue::DateTime(dt) => {
                assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2013, 2, 13).unwrap());
                assert_eq!((dt.hour(), dt.minute()), (15, 0));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn ambiguous_date_half_keeps_both_directions() {
        let res = resolve("maandag om 09:00");
        let future = match res.future_value.unwrap() {
            ResolvedValue::DateTime(dt) => dt,
            other => panic!("{other:?}"),
        };
        let past = match res.past_value.unwrap() {
            ResolvedValue::DateTime(dt) => dt,
            other => panic!("{other:?}"),
        };
        assert_eq!(future.date(), NaiveDate::from_ymd_opt(2013, 2, 18).unwrap());
        assert_eq!(past.date(), NaiveDate::from_ymd_opt(2013, 2, 11).unwrap());
        assert_eq!(future.time(), past.time());
    }
}
