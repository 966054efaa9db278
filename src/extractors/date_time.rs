//! DateTime extractor: now-phrases, plus a Date span and a Time span joined
//! over a short connector gap ("morgen om 15:00").

use super::date::DateExtractor;
use super::time::TimeExtractor;
use super::{Extractor, TaggedPattern, match_patterns, merge_spans, select_non_overlapping};
use crate::{EntityKind, ExtractResult};
use regex::Regex;

/// Longest raw gap (in bytes) allowed between a date and a time span.
const MAX_CONNECTOR_GAP: usize = 8;

pub struct DateTimeExtractorConfig {
    pub datetime_patterns: &'static [TaggedPattern],
    /// Matches a whole gap between a date and time acting as a connector
    /// ("om", "rond", "tegen"); an empty gap also connects.
    pub connector_regex: &'static Regex,
}

pub struct DateTimeExtractor {
    config: DateTimeExtractorConfig,
    date: DateExtractor,
    time: TimeExtractor,
}

impl DateTimeExtractor {
    pub fn new(config: DateTimeExtractorConfig, date: DateExtractor, time: TimeExtractor) -> Self {
        DateTimeExtractor { config, date, time }
    }

    fn connects(&self, gap: &str) -> bool {
        if gap.len() > MAX_CONNECTOR_GAP {
            return false;
        }
        let trimmed = gap.trim();
        trimmed.is_empty() || whole_match(self.config.connector_regex, trimmed)
    }

    fn merge_date_and_time(&self, text: &str) -> Vec<ExtractResult> {
        let dates = self.date.extract(text);
        let times = self.time.extract(text);
        let mut merged = Vec::new();

        for date in &dates {
            for time in &times {
                if time.start >= date.end() && self.connects(&text[date.end()..time.start]) {
                    merged.push(merge_spans(EntityKind::DateTime, "datetime", text, date, time, date.start));
                } else if date.start >= time.end() && self.connects(&text[time.end()..date.start]) {
                    // Time-first order: "om 15:00 morgen".
                    merged.push(merge_spans(EntityKind::DateTime, "datetime", text, time, date, time.start));
                }
            }
        }

        merged
    }
}

fn whole_match(re: &Regex, source: &str) -> bool {
    re.find(source).is_some_and(|m| m.len() == source.len())
}

impl Extractor for DateTimeExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::DateTime
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        let mut candidates: Vec<(usize, ExtractResult)> = match_patterns(
            EntityKind::DateTime,
            self.config.datetime_patterns,
            text,
        )
        .into_iter()
        .map(|r| (0, r))
        .collect();

        candidates.extend(self.merge_date_and_time(text).into_iter().map(|r| (1, r)));

        select_non_overlapping(candidates)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn date_plus_time_merges_over_connector() {
        let locale = DutchLocale::new();
        let out = locale.date_time_extractor.extract("morgen om 15:00 spreken we af");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "morgen om 15:00");
        assert_eq!(out[0].data.group("left"), Some("morgen"));
        assert_eq!(out[0].data.group("right"), Some("15:00"));
    }

    #[test]
    fn now_phrase_is_a_datetime() {
        let locale = DutchLocale::new();
        let out = locale.date_time_extractor.extract("doe het nu maar");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "now");
    }

    #[test]
    fn distant_date_and_time_do_not_merge() {
        let locale = DutchLocale::new();
        let out = locale.date_time_extractor.extract("morgen is de deadline, niet om 15:00");
        assert!(out.iter().all(|r| r.data.tag != "datetime"));
    }
}
