//! Dutch locale bundle.
//!
//! Builds every extractor and parser from the Dutch pattern lists, tables
//! and behavior hooks, plus the merged extractor that runs them all. The
//! bundle is immutable after construction; composite extractors and parsers
//! own fresh sub-instances built from the same static configuration.

pub mod config;
pub mod patterns;
pub mod tables;

use crate::extractors::date::{DateExtractor, DateExtractorConfig};
use crate::extractors::date_period::{DatePeriodExtractor, DatePeriodExtractorConfig};
use crate::extractors::date_time::{DateTimeExtractor, DateTimeExtractorConfig};
use crate::extractors::date_time_period::{DateTimePeriodExtractor, DateTimePeriodExtractorConfig};
use crate::extractors::duration::{DurationExtractor, DurationExtractorConfig};
use crate::extractors::holiday::{HolidayExtractor, HolidayExtractorConfig};
use crate::extractors::merged::{MergedExtractor, MergedExtractorConfig};
use crate::extractors::number::{NumberExtractor, NumberExtractorConfig};
use crate::extractors::set::{SetExtractor, SetExtractorConfig};
use crate::extractors::time::{TimeExtractor, TimeExtractorConfig};
use crate::extractors::time_period::{TimePeriodExtractor, TimePeriodExtractorConfig};
use crate::extractors::timezone::{TimeZoneExtractor, TimeZoneExtractorConfig};
use crate::parsers::date::{DateParser, DateParserConfig};
use crate::parsers::date_period::{DatePeriodParser, DatePeriodParserConfig};
use crate::parsers::date_time::{DateTimeParser, DateTimeParserConfig};
use crate::parsers::date_time_period::DateTimePeriodParser;
use crate::parsers::duration::{DurationParser, DurationParserConfig};
use crate::parsers::holiday::{HolidayParser, HolidayParserConfig};
use crate::parsers::number::{NumberParser, NumberParserConfig};
use crate::parsers::set::{SetParser, SetParserConfig};
use crate::parsers::time::{TimeParser, TimeParserConfig};
use crate::parsers::time_period::{TimePeriodParser, TimePeriodParserConfig};
use crate::parsers::timezone::{TimeZoneParser, TimeZoneParserConfig};
use crate::parsers::EntityParser;
use crate::{EntityKind, ExtractResult, Resolution};
use chrono::NaiveDateTime;

fn date_extractor() -> DateExtractor {
    DateExtractor::new(DateExtractorConfig { date_patterns: patterns::date_patterns() })
}

fn time_extractor() -> TimeExtractor {
    TimeExtractor::new(TimeExtractorConfig { time_patterns: patterns::time_patterns() })
}

fn duration_extractor() -> DurationExtractor {
    DurationExtractor::new(DurationExtractorConfig {
        duration_patterns: patterns::duration_patterns(),
    })
}

fn date_period_extractor() -> DatePeriodExtractor {
    DatePeriodExtractor::new(
        DatePeriodExtractorConfig {
            simple_cases: patterns::date_period_simple_cases(),
            till_regex: patterns::till_regex(),
            range_connector_regex: patterns::range_connector_regex(),
            from_token_index: config::from_token_index,
            between_token_index: config::between_token_index,
        },
        date_extractor(),
    )
}

fn time_period_extractor() -> TimePeriodExtractor {
    TimePeriodExtractor::new(
        TimePeriodExtractorConfig {
            simple_cases: patterns::time_period_simple_cases(),
            till_regex: patterns::till_regex(),
            range_connector_regex: patterns::range_connector_regex(),
            from_token_index: config::from_token_index,
            between_token_index: config::between_token_index,
        },
        time_extractor(),
    )
}

fn date_time_extractor() -> DateTimeExtractor {
    DateTimeExtractor::new(
        DateTimeExtractorConfig {
            datetime_patterns: patterns::datetime_patterns(),
            connector_regex: patterns::datetime_connector_regex(),
        },
        date_extractor(),
        time_extractor(),
    )
}

fn date_time_period_extractor() -> DateTimePeriodExtractor {
    DateTimePeriodExtractor::new(
        DateTimePeriodExtractorConfig {
            simple_cases: patterns::datetime_period_simple_cases(),
            connector_regex: patterns::datetime_connector_regex(),
            till_regex: patterns::till_regex(),
        },
        date_extractor(),
        time_period_extractor(),
        date_time_extractor(),
    )
}

fn set_extractor() -> SetExtractor {
    SetExtractor::new(SetExtractorConfig { set_patterns: patterns::set_patterns() })
}

fn holiday_extractor() -> HolidayExtractor {
    HolidayExtractor::new(HolidayExtractorConfig { holiday_patterns: patterns::holiday_patterns() })
}

fn time_zone_extractor() -> TimeZoneExtractor {
    TimeZoneExtractor::new(TimeZoneExtractorConfig {
        timezone_patterns: patterns::timezone_patterns(),
    })
}

fn date_parser() -> DateParser {
    DateParser::new(DateParserConfig {
        month_of_year: tables::month_of_year(),
        day_of_week: tables::day_of_week(),
        next_prefix_regex: regex!(r"^(volgende|komende|aanstaande|aankomende)$"),
        previous_prefix_regex: regex!(r"^(vorige|voorbije|afgelopen)$"),
        swift_day: config::swift_day,
        check_both_before_after: true,
    })
}

fn time_parser() -> TimeParser {
    TimeParser::new(TimeParserConfig {
        hour_words: tables::hour_words(),
        am_marker_regex: regex!(r"(?i)('s ochtends|'s morgens|in de ochtend|\bam\b)"),
        pm_marker_regex: regex!(
            r"(?i)('s middags|'s avonds|'s nachts|in de middag|in de avond|in de nacht|\bpm\b)"
        ),
        get_hour: config::normalize_hour,
    })
}

fn duration_parser() -> DurationParser {
    DurationParser::new(DurationParserConfig {
        unit_map: tables::unit_map(),
        unit_seconds: tables::unit_seconds(),
        cardinal_map: tables::cardinal_map(),
    })
}

fn date_period_parser() -> DatePeriodParser {
    DatePeriodParser::new(
        DatePeriodParserConfig {
            month_of_year: tables::month_of_year(),
            season_map: tables::season_map(),
            ordinal_map: tables::period_ordinal_map(),
            swift_period: config::swift_period,
            check_both_before_after: true,
        },
        date_extractor(),
        date_parser(),
    )
}

fn time_period_parser() -> TimePeriodParser {
    TimePeriodParser::new(
        TimePeriodParserConfig { time_of_day_map: tables::time_of_day_map() },
        time_extractor(),
        time_parser(),
    )
}

fn date_time_parser() -> DateTimeParser {
    DateTimeParser::new(
        DateTimeParserConfig { matched_now_timex: config::matched_now_timex },
        date_extractor(),
        date_parser(),
        time_extractor(),
        time_parser(),
    )
}

/// The full Dutch extractor/parser set, plus the merged extractor.
pub struct DutchLocale {
    pub date_extractor: DateExtractor,
    pub time_extractor: TimeExtractor,
    pub duration_extractor: DurationExtractor,
    pub date_period_extractor: DatePeriodExtractor,
    pub time_period_extractor: TimePeriodExtractor,
    pub date_time_extractor: DateTimeExtractor,
    pub date_time_period_extractor: DateTimePeriodExtractor,
    pub set_extractor: SetExtractor,
    pub holiday_extractor: HolidayExtractor,
    pub time_zone_extractor: TimeZoneExtractor,
    pub number_extractor: NumberExtractor,
    pub ordinal_extractor: NumberExtractor,
    pub merged_extractor: MergedExtractor,

    pub date_parser: DateParser,
    pub time_parser: TimeParser,
    pub duration_parser: DurationParser,
    pub date_period_parser: DatePeriodParser,
    pub time_period_parser: TimePeriodParser,
    pub date_time_parser: DateTimeParser,
    pub date_time_period_parser: DateTimePeriodParser,
    pub set_parser: SetParser,
    pub holiday_parser: HolidayParser,
    pub time_zone_parser: TimeZoneParser,
    pub number_parser: NumberParser,
}

impl DutchLocale {
    pub fn new() -> Self {
        // Precedence within the merged extractor: composite kinds first, so
        // a holiday or datetime reading beats the date embedded in it.
        let merged_extractor = MergedExtractor::new(
            MergedExtractorConfig {
                ambiguity_filters: patterns::merged_ambiguity_filters(),
                term_filters: patterns::term_filters(),
            },
            vec![
                Box::new(holiday_extractor()),
                Box::new(date_time_period_extractor()),
                Box::new(date_time_extractor()),
                Box::new(date_period_extractor()),
                Box::new(time_period_extractor()),
                Box::new(set_extractor()),
                Box::new(duration_extractor()),
                Box::new(date_extractor()),
                Box::new(time_extractor()),
                Box::new(time_zone_extractor()),
            ],
        );

        DutchLocale {
            date_extractor: date_extractor(),
            time_extractor: time_extractor(),
            duration_extractor: duration_extractor(),
            date_period_extractor: date_period_extractor(),
            time_period_extractor: time_period_extractor(),
            date_time_extractor: date_time_extractor(),
            date_time_period_extractor: date_time_period_extractor(),
            set_extractor: set_extractor(),
            holiday_extractor: holiday_extractor(),
            time_zone_extractor: time_zone_extractor(),
            number_extractor: NumberExtractor::new(
                EntityKind::Number,
                NumberExtractorConfig {
                    patterns: patterns::number_patterns(),
                    ambiguity_filters: patterns::number_ambiguity_filters(),
                },
            ),
            ordinal_extractor: NumberExtractor::new(
                EntityKind::Ordinal,
                NumberExtractorConfig {
                    patterns: patterns::ordinal_patterns(),
                    ambiguity_filters: patterns::number_ambiguity_filters(),
                },
            ),
            merged_extractor,

            date_parser: date_parser(),
            time_parser: time_parser(),
            duration_parser: duration_parser(),
            date_period_parser: date_period_parser(),
            time_period_parser: time_period_parser(),
            date_time_parser: date_time_parser(),
            date_time_period_parser: DateTimePeriodParser::new(
                date_extractor(),
                date_parser(),
                time_period_extractor(),
                time_period_parser(),
                date_time_extractor(),
                date_time_parser(),
            ),
            set_parser: SetParser::new(SetParserConfig {
                periodic_map: tables::periodic_map(),
                unit_map: tables::unit_map(),
                day_of_week: tables::day_of_week(),
            }),
            holiday_parser: HolidayParser::new(HolidayParserConfig {
                sanitize: config::sanitize_holiday,
                swift_year: config::swift_year,
            }),
            time_zone_parser: TimeZoneParser::new(TimeZoneParserConfig {
                abbreviation_map: tables::timezone_abbreviations(),
            }),
            number_parser: NumberParser::new(NumberParserConfig {
                cardinal_map: tables::cardinal_map(),
                ordinal_map: tables::ordinal_word_map(),
                fraction_map: tables::fraction_map(),
            }),
        }
    }

    /// Dispatch a span to the parser for its kind.
    pub fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        match span.kind {
            EntityKind::Date => self.date_parser.parse(span, reference),
            EntityKind::Time => self.time_parser.parse(span, reference),
            EntityKind::Duration => self.duration_parser.parse(span, reference),
            EntityKind::DatePeriod => self.date_period_parser.parse(span, reference),
            EntityKind::TimePeriod => self.time_period_parser.parse(span, reference),
            EntityKind::DateTime => self.date_time_parser.parse(span, reference),
            EntityKind::DateTimePeriod => self.date_time_period_parser.parse(span, reference),
            EntityKind::Set => self.set_parser.parse(span, reference),
            EntityKind::Holiday => self.holiday_parser.parse(span, reference),
            EntityKind::TimeZone => self.time_zone_parser.parse(span, reference),
            EntityKind::Number
            | EntityKind::Integer
            | EntityKind::Cardinal
            | EntityKind::Ordinal
            | EntityKind::Fraction => self.number_parser.parse(span, reference),
        }
    }
}

impl Default for DutchLocale {
    fn default() -> Self {
        DutchLocale::new()
    }
}

#[cfg(test)]
mod tests {
    use super::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn extraction_is_idempotent_across_instances() {
        let text = "morgen om 15:00 en verder van 1 maart tot 15 maart";
        let a = DutchLocale::new().merged_extractor.extract(text);
        let b = DutchLocale::new().merged_extractor.extract(text);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.start, y.start);
            assert_eq!(x.length, y.length);
            assert_eq!(x.text, y.text);
            assert_eq!(x.kind, y.kind);
        }
    }

    #[test]
    fn number_and_datetime_models_are_separate() {
        let locale = DutchLocale::new();
        // The merged extractor never yields bare numbers.
        let out = locale.merged_extractor.extract("er zijn 42 deelnemers");
        assert!(out.is_empty());

        let out = locale.number_extractor.extract("er zijn 42 deelnemers");
        assert_eq!(out.len(), 1);
    }
}
