//! Holiday parser.
//!
//! Resolves a holiday name plus an optional year or relative modifier.
//! Without either, the nearest occurrences in both directions are offered.
//! Holidays without a calendar rule degrade to the sentinel instant instead
//! of failing the span.

use super::{EntityParser, NO_SWIFT, at_midnight, date_timex};
use crate::holidays::Holiday;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue, min_value};
use chrono::{Datelike, NaiveDateTime};

pub struct HolidayParserConfig {
    /// Strips the characters ignored during name lookup.
    pub sanitize: fn(&str) -> String,
    /// Signed year swift for a relative modifier, or [`NO_SWIFT`].
    pub swift_year: fn(&str) -> i64,
}

pub struct HolidayParser {
    config: HolidayParserConfig,
}

impl HolidayParser {
    pub fn new(config: HolidayParserConfig) -> Self {
        HolidayParser { config }
    }
}

impl EntityParser for HolidayParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let key = (self.config.sanitize)(data.group("holiday")?);
        let holiday = Holiday::from_key(&key)?;

        let swift = data.group("rel").map(self.config.swift_year).unwrap_or(NO_SWIFT);

        // Explicitly stated year wins over any modifier.
        if let Some(year) = data.group("year") {
            let year: i32 = year.parse().ok()?;
            let date = match holiday.date_for(year) {
                Some(d) => d,
                None => return degraded(holiday),
            };
            return Some(Resolution::new(
                EntityKind::Date,
                date_timex(date),
                ResolvedValue::DateTime(at_midnight(date)),
            ));
        }

        if swift != NO_SWIFT {
            let year = reference.year() + swift as i32;
            let date = match holiday.date_for(year) {
                Some(d) => d,
                None => return degraded(holiday),
            };
            return Some(Resolution::new(
                EntityKind::Date,
                date_timex(date),
                ResolvedValue::DateTime(at_midnight(date)),
            ));
        }

        // No year, no modifier: nearest occurrence each way.
        let this_year = match holiday.date_for(reference.year()) {
            Some(d) => d,
            None => return degraded(holiday),
        };
        let future = if this_year < reference.date() {
            holiday.date_for(reference.year() + 1)?
        } else {
            this_year
        };
        let past = if this_year >= reference.date() {
            holiday.date_for(reference.year() - 1)?
        } else {
            this_year
        };

        let mut res = Resolution::new(
            EntityKind::Date,
            format!("XXXX-{:02}-{:02}", this_year.month(), this_year.day()),
            ResolvedValue::DateTime(at_midnight(future)),
        );
        res.future_value = Some(ResolvedValue::DateTime(at_midnight(future)));
        res.past_value = Some(ResolvedValue::DateTime(at_midnight(past)));
        Some(res)
    }
}

fn degraded(_holiday: Holiday) -> Option<Resolution> {
    let mut res = Resolution::new(
        EntityKind::Date,
        "XXXX-XX-XX",
        ResolvedValue::DateTime(min_value()),
    );
    // The only holidays without a rule are the Easter-family movable feasts.
    res.is_lunar = true;
    Some(res)
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;
    use crate::parsers::EntityParser;
    use crate::{ResolvedValue, api::Reference, min_value};
    use chrono::NaiveDate;

    fn resolve(text: &str) -> crate::Resolution {
        let locale = DutchLocale::new();
        let spans = locale.holiday_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.holiday_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    fn date(res: &crate::Resolution) -> NaiveDate {
        match res.value {
            ResolvedValue::DateTime(dt) => dt.date(),
            ref other => panic!("expected a datetime, got {other:?}"),
        }
    }

    #[test]
    fn holiday_with_explicit_year() {
        let res = resolve("Koningsdag 2023");
        assert_eq!(res.timex, "2023-04-27");
        assert_eq!(date(&res), NaiveDate::from_ymd_opt(2023, 4, 27).unwrap());
    }

    #[test]
    fn relative_modifier_shifts_the_year() {
        // Reference year is 2013.
        let res = resolve("volgende koningsdag");
        assert_eq!(date(&res), NaiveDate::from_ymd_opt(2014, 4, 27).unwrap());

        let res = resolve("vorige koningsdag");
        assert_eq!(date(&res), NaiveDate::from_ymd_opt(2012, 4, 27).unwrap());

        let res = resolve("deze koningsdag");
        assert_eq!(date(&res), NaiveDate::from_ymd_opt(2013, 4, 27).unwrap());
    }

    #[test]
    fn bare_holiday_offers_nearest_occurrences() {
        // 2013-02-12: Valentine's day is still ahead this year.
        let res = resolve("valentijnsdag");
        assert_eq!(res.timex, "XXXX-02-14");
        assert_eq!(date(&res), NaiveDate::from_ymd_opt(2013, 2, 14).unwrap());
        let past = match res.past_value.clone().unwrap() {
            ResolvedValue::DateTime(dt) => dt.date(),
            other => panic!("{other:?}"),
        };
        assert_eq!(past, NaiveDate::from_ymd_opt(2012, 2, 14).unwrap());

        // New Year has already passed at the reference.
        let res = resolve("nieuwjaarsdag");
        assert_eq!(date(&res), NaiveDate::from_ymd_opt(2014, 1, 1).unwrap());
    }

    #[test]
    fn sanitized_aliases_resolve() {
        let res = resolve("sint-maarten");
        assert_eq!(date(&res), NaiveDate::from_ymd_opt(2013, 11, 11).unwrap());
    }

    #[test]
    fn movable_feast_degrades_to_sentinel() {
        let res = resolve("pasen");
        assert_eq!(res.timex, "XXXX-XX-XX");
        assert_eq!(res.value, ResolvedValue::DateTime(min_value()));
        assert!(res.is_lunar);
    }
}
