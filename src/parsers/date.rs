//! Date parser.
//!
//! Resolves a single date span against the reference: explicit dates become
//! concrete instants, relative forms ("morgen", "volgende dinsdag") are
//! shifted from the reference, and direction-ambiguous forms carry both a
//! future and a past reading.

use super::{EntityParser, at_midnight, date_timex, next_weekday, prev_weekday, week_monday, weekday_number};
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use regex::Regex;
use std::collections::BTreeMap;

pub struct DateParserConfig {
    pub month_of_year: &'static BTreeMap<&'static str, u32>,
    pub day_of_week: &'static BTreeMap<&'static str, Weekday>,
    pub next_prefix_regex: &'static Regex,
    pub previous_prefix_regex: &'static Regex,
    /// Signed day offset for a special-day word ("morgen" -> 1).
    pub swift_day: fn(&str) -> i64,
    /// When set, unmodified forms resolve both directions and `value`
    /// carries the future reading.
    pub check_both_before_after: bool,
}

pub struct DateParser {
    config: DateParserConfig,
}

impl DateParser {
    pub fn new(config: DateParserConfig) -> Self {
        DateParser { config }
    }

    fn month_number(&self, name: &str) -> Option<u32> {
        self.config.month_of_year.get(name).copied()
    }

    fn weekday(&self, name: &str) -> Option<Weekday> {
        self.config.day_of_week.get(name).copied()
    }

    fn parse_ymd(&self, span: &ExtractResult) -> Option<Resolution> {
        let data = &span.data;
        let date = NaiveDate::from_ymd_opt(
            data.group("year")?.parse().ok()?,
            data.group("month")?.parse().ok()?,
            data.group("day")?.parse().ok()?,
        )?;
        Some(Resolution::new(
            EntityKind::Date,
            date_timex(date),
            ResolvedValue::DateTime(at_midnight(date)),
        ))
    }

    fn parse_month_name(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let day: u32 = data.group("day")?.parse().ok()?;
        let month = self.month_number(data.group("month")?)?;

        if let Some(year) = data.group("year") {
            let date = NaiveDate::from_ymd_opt(year.parse().ok()?, month, day)?;
            return Some(Resolution::new(
                EntityKind::Date,
                date_timex(date),
                ResolvedValue::DateTime(at_midnight(date)),
            ));
        }

        // No year stated: anchor to the reference year and offer both
        // directions when the phrase is direction-ambiguous.
        let this_year = NaiveDate::from_ymd_opt(reference.year(), month, day)?;
        let future = if this_year < reference.date() {
            NaiveDate::from_ymd_opt(reference.year() + 1, month, day)?
        } else {
            this_year
        };
        let past = if this_year >= reference.date() {
            NaiveDate::from_ymd_opt(reference.year() - 1, month, day)?
        } else {
            this_year
        };

        let mut res = Resolution::new(
            EntityKind::Date,
            format!("XXXX-{month:02}-{day:02}"),
            ResolvedValue::DateTime(at_midnight(future)),
        );
        if self.config.check_both_before_after {
            res.future_value = Some(ResolvedValue::DateTime(at_midnight(future)));
            res.past_value = Some(ResolvedValue::DateTime(at_midnight(past)));
        }
        Some(res)
    }

    fn parse_special_day(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let swift = (self.config.swift_day)(span.text.trim());
        let date = reference.date() + Duration::days(swift);
        Some(Resolution::new(
            EntityKind::Date,
            date_timex(date),
            ResolvedValue::DateTime(at_midnight(date)),
        ))
    }

    fn parse_weekday(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let weekday = self.weekday(data.group("weekday")?)?;
        let offset = weekday.num_days_from_monday() as i64;
        let timex = format!("XXXX-WXX-{}", weekday_number(weekday));

        if let Some(rel) = data.group("rel") {
            let monday = week_monday(reference.date());
            let date = if self.config.next_prefix_regex.is_match(rel) {
                monday + Duration::days(7 + offset)
            } else if self.config.previous_prefix_regex.is_match(rel) {
                monday + Duration::days(offset - 7)
            } else {
                // "deze", "aankomende" without a week jump: this week.
                monday + Duration::days(offset)
            };
            return Some(Resolution::new(
                EntityKind::Date,
                timex,
                ResolvedValue::DateTime(at_midnight(date)),
            ));
        }

        let today = reference.date();
        let future = if today.weekday() == weekday { today } else { next_weekday(today, weekday) };
        let past = prev_weekday(today, weekday);

        let mut res = Resolution::new(EntityKind::Date, timex, ResolvedValue::DateTime(at_midnight(future)));
        if self.config.check_both_before_after {
            res.future_value = Some(ResolvedValue::DateTime(at_midnight(future)));
            res.past_value = Some(ResolvedValue::DateTime(at_midnight(past)));
        }
        Some(res)
    }

    /// "dinsdag de 19e": the stated day of month, in the nearest month where
    /// it actually falls on the stated weekday.
    fn parse_weekday_dom(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let weekday = self.weekday(data.group("weekday")?)?;
        let day: u32 = data.group("day")?.parse().ok()?;

        let (y, m) = (reference.year(), reference.month());
        let candidates = [
            super::shift_month(y, m, 0),
            super::shift_month(y, m, 1),
            super::shift_month(y, m, -1),
        ];
        let date = candidates.iter().find_map(|&(cy, cm)| {
            NaiveDate::from_ymd_opt(cy, cm, day).filter(|d| d.weekday() == weekday)
        })?;

        Some(Resolution::new(
            EntityKind::Date,
            date_timex(date),
            ResolvedValue::DateTime(at_midnight(date)),
        ))
    }

    /// "op de 27e": a bare day of month, anchored to the reference month.
    fn parse_day_only(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let day: u32 = data.group("day")?.parse().ok()?;
        let this_month = NaiveDate::from_ymd_opt(reference.year(), reference.month(), day)?;

        let future = if this_month < reference.date() {
            let (y, m) = super::shift_month(reference.year(), reference.month(), 1);
            NaiveDate::from_ymd_opt(y, m, day)?
        } else {
            this_month
        };
        let past = if this_month >= reference.date() {
            let (y, m) = super::shift_month(reference.year(), reference.month(), -1);
            NaiveDate::from_ymd_opt(y, m, day)?
        } else {
            this_month
        };

        let mut res = Resolution::new(
            EntityKind::Date,
            format!("XXXX-XX-{day:02}"),
            ResolvedValue::DateTime(at_midnight(future)),
        );
        if self.config.check_both_before_after {
            res.future_value = Some(ResolvedValue::DateTime(at_midnight(future)));
            res.past_value = Some(ResolvedValue::DateTime(at_midnight(past)));
        }
        Some(res)
    }
}

impl EntityParser for DateParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        match span.data.tag {
            "ymd" | "dmy" => self.parse_ymd(span),
            "dm_name" => self.parse_month_name(span, reference),
            "specialday" => self.parse_special_day(span, reference),
            "weekday" => self.parse_weekday(span, reference),
            "weekday_dom" => self.parse_weekday_dom(span, reference),
            "on" => self.parse_day_only(span, reference),
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
    use chrono::NaiveDate;

    fn resolve(text: &str) -> crate::Resolution {
        let locale = DutchLocale::new();
        let spans = locale.date_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.date_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    fn datetime(res: &crate::Resolution) -> chrono::NaiveDateTime {
        match res.value {
            ResolvedValue::DateTime(dt) => dt,
            ref other => panic!("expected a datetime, got {other:?}"),
        }
    }

    #[test]
    fn explicit_date_resolves_concretely() {
        let res = resolve("27 april 2023");
        assert_eq!(res.timex, "2023-04-27");
        assert_eq!(datetime(&res).date(), NaiveDate::from_ymd_opt(2023, 4, 27).unwrap());
    }

    #[test]
    fn special_days_shift_from_reference() {
        // Reference is 2013-02-12.
        assert_eq!(resolve("vandaag").timex, "2013-02-12");
        assert_eq!(resolve("morgen").timex, "2013-02-13");
        assert_eq!(resolve("overmorgen").timex, "2013-02-14");
        assert_eq!(resolve("morgen namiddag").timex, "2013-02-14");
        assert_eq!(resolve("gisteren").timex, "2013-02-11");
        assert_eq!(resolve("eergisteren").timex, "2013-02-10");
    }

    #[test]
    fn bare_weekday_offers_both_directions() {
        // 2013-02-12 is a Tuesday; "maandag" is ambiguous.
        let res = resolve("maandag");
        assert_eq!(res.timex, "XXXX-WXX-1");
        let future = match res.future_value.unwrap() {
            ResolvedValue::DateTime(dt) => dt.date(),
            other => panic!("{other:?}"),
        };
        let past = match res.past_value.unwrap() {
            ResolvedValue::DateTime(dt) => dt.date(),
            other => panic!("{other:?}"),
        };
        assert_eq!(future, NaiveDate::from_ymd_opt(2013, 2, 18).unwrap());
        assert_eq!(past, NaiveDate::from_ymd_opt(2013, 2, 11).unwrap());
    }

    #[test]
    fn modified_weekday_picks_a_week() {
        let res = resolve("volgende dinsdag");
        assert_eq!(datetime(&res).date(), NaiveDate::from_ymd_opt(2013, 2, 19).unwrap());

        let res = resolve("vorige dinsdag");
        assert_eq!(datetime(&res).date(), NaiveDate::from_ymd_opt(2013, 2, 5).unwrap());
    }

    #[test]
    fn month_name_without_year_anchors_to_reference() {
        let res = resolve("27 april");
        assert_eq!(res.timex, "XXXX-04-27");
        assert_eq!(datetime(&res).date(), NaiveDate::from_ymd_opt(2013, 4, 27).unwrap());
        let past = match res.past_value.unwrap() {
            ResolvedValue::DateTime(dt) => dt.date(),
            other => panic!("{other:?}"),
        };
        assert_eq!(past, NaiveDate::from_ymd_opt(2012, 4, 27).unwrap());
    }

    #[test]
    fn invalid_calendar_date_is_dropped() {
        let locale = DutchLocale::new();
        let spans = locale.date_extractor.extract("31 februari 2023");
        for span in spans {
            assert!(locale.date_parser.parse(&span, Reference::default().datetime).is_none());
        }
    }
}
