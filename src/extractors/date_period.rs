//! Date period extractor.
//!
//! Simple-case whole-phrase patterns are tried first ("volgende week",
//! "eerste kwartaal 2023"). When none claims a region, two adjacent Date
//! spans joined by a till connector ("van X tot Y") or a between/and pair
//! ("tussen X en Y") are recombined into one DatePeriod span carrying both
//! halves for the parser.

use super::date::DateExtractor;
use super::{Extractor, TaggedPattern, match_patterns, merge_spans, select_non_overlapping};
use crate::{EntityKind, ExtractResult};
use regex::Regex;

pub struct DatePeriodExtractorConfig {
    pub simple_cases: &'static [TaggedPattern],
    /// Matches a gap between two dates that acts as a till connector.
    pub till_regex: &'static Regex,
    /// Matches a gap that acts as a between/and connector.
    pub range_connector_regex: &'static Regex,
    /// Index of a trailing from-token in the text before a span, if any.
    pub from_token_index: fn(&str) -> Option<usize>,
    /// Index of a trailing between-token in the text before a span, if any.
    pub between_token_index: fn(&str) -> Option<usize>,
}

pub struct DatePeriodExtractor {
    config: DatePeriodExtractorConfig,
    date: DateExtractor,
}

impl DatePeriodExtractor {
    pub fn new(config: DatePeriodExtractorConfig, date: DateExtractor) -> Self {
        DatePeriodExtractor { config, date }
    }

    /// Combine consecutive Date spans over till / between-and connectors.
    fn merge_two_points(&self, text: &str) -> Vec<ExtractResult> {
        let dates = self.date.extract(text);
        let mut merged = Vec::new();

        for pair in dates.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            let gap = &text[left.end()..right.start];
            let gap_trimmed = gap.trim();

            if self.matches_whole(self.config.till_regex, gap_trimmed) {
                let before = &text[..left.start];
                let start = (self.config.from_token_index)(before).unwrap_or(left.start);
                merged.push(merge_spans(EntityKind::DatePeriod, "fromto", text, left, right, start));
            } else if self.matches_whole(self.config.range_connector_regex, gap_trimmed) {
                let before = &text[..left.start];
                if let Some(start) = (self.config.between_token_index)(before) {
                    merged.push(merge_spans(EntityKind::DatePeriod, "between", text, left, right, start));
                }
            }
        }

        merged
    }

    fn matches_whole(&self, re: &Regex, source: &str) -> bool {
        !source.is_empty() && re.find(source).is_some_and(|m| m.len() == source.len())
    }
}

impl Extractor for DatePeriodExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::DatePeriod
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        let mut candidates: Vec<(usize, ExtractResult)> = match_patterns(
            EntityKind::DatePeriod,
            self.config.simple_cases,
            text,
        )
        .into_iter()
        .map(|r| (0, r))
        .collect();

        // Connector-based combinations rank below the simple cases; longer
        // spans still win in the overlap resolution.
        candidates.extend(self.merge_two_points(text).into_iter().map(|r| (1, r)));

        select_non_overlapping(candidates)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn simple_case_one_word_period() {
        let locale = DutchLocale::new();
        let out = locale.date_period_extractor.extract("volgende week gaan we verder");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "volgende week");
        assert_eq!(out[0].data.tag, "oneword");
    }

    #[test]
    fn from_to_combines_two_dates() {
        let locale = DutchLocale::new();
        let out = locale.date_period_extractor.extract("van 1 maart tot 15 maart");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "fromto");
        assert_eq!(out[0].data.group("left"), Some("1 maart"));
        assert_eq!(out[0].data.group("right"), Some("15 maart"));
        assert!(out[0].text.starts_with("van"));
    }

    #[test]
    fn between_and_combines_two_dates() {
        let locale = DutchLocale::new();
        let out = locale.date_period_extractor.extract("tussen 3 april en 7 april");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "between");
        assert!(out[0].text.starts_with("tussen"));
    }

    #[test]
    fn unparseable_half_yields_no_composite() {
        let locale = DutchLocale::new();
        // The left half is not a date, so no DatePeriod span is produced.
        let out = locale.date_period_extractor.extract("van blorp tot dinsdag");
        assert!(out.iter().all(|r| r.data.tag != "fromto" && r.data.tag != "between"));
    }
}
