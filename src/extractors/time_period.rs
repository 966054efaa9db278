//! Time period extractor: pure-number hour ranges, time-of-day words, and
//! connector-based combinations of two Time spans.

use super::time::TimeExtractor;
use super::{Extractor, TaggedPattern, match_patterns, merge_spans, select_non_overlapping};
use crate::{EntityKind, ExtractResult};
use regex::Regex;

pub struct TimePeriodExtractorConfig {
    pub simple_cases: &'static [TaggedPattern],
    pub till_regex: &'static Regex,
    pub range_connector_regex: &'static Regex,
    pub from_token_index: fn(&str) -> Option<usize>,
    pub between_token_index: fn(&str) -> Option<usize>,
}

pub struct TimePeriodExtractor {
    config: TimePeriodExtractorConfig,
    time: TimeExtractor,
}

impl TimePeriodExtractor {
    pub fn new(config: TimePeriodExtractorConfig, time: TimeExtractor) -> Self {
        TimePeriodExtractor { config, time }
    }

    fn merge_two_points(&self, text: &str) -> Vec<ExtractResult> {
        let times = self.time.extract(text);
        let mut merged = Vec::new();

        for pair in times.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            let gap = text[left.end()..right.start].trim();

            if self.matches_whole(self.config.till_regex, gap) {
                let before = &text[..left.start];
                let start = (self.config.from_token_index)(before).unwrap_or(left.start);
                merged.push(merge_spans(EntityKind::TimePeriod, "fromto", text, left, right, start));
            } else if self.matches_whole(self.config.range_connector_regex, gap) {
                let before = &text[..left.start];
                if let Some(start) = (self.config.between_token_index)(before) {
                    merged.push(merge_spans(EntityKind::TimePeriod, "between", text, left, right, start));
                }
            }
        }

        merged
    }

    fn matches_whole(&self, re: &Regex, source: &str) -> bool {
        !source.is_empty() && re.find(source).is_some_and(|m| m.len() == source.len())
    }
}

impl Extractor for TimePeriodExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::TimePeriod
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        let mut candidates: Vec<(usize, ExtractResult)> = match_patterns(
            EntityKind::TimePeriod,
            self.config.simple_cases,
            text,
        )
        .into_iter()
        .map(|r| (0, r))
        .collect();

        candidates.extend(self.merge_two_points(text).into_iter().map(|r| (1, r)));

        select_non_overlapping(candidates)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn pure_number_range() {
        let locale = DutchLocale::new();
        let out = locale.time_period_extractor.extract("van 10 tot 12 uur");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "purenum");
    }

    #[test]
    fn two_times_over_a_connector() {
        let locale = DutchLocale::new();
        let out = locale.time_period_extractor.extract("van 10:00 tot 12:30");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "fromto");
        assert_eq!(out[0].data.group("left"), Some("10:00"));
        assert_eq!(out[0].data.group("right"), Some("12:30"));
    }
}
