//! DateTimePeriod extractor: a Date span followed by a TimePeriod span
//! ("dinsdag van 10:00 tot 12:00"), or two DateTime spans over a till
//! connector.

use super::date::DateExtractor;
use super::date_time::DateTimeExtractor;
use super::time_period::TimePeriodExtractor;
use super::{Extractor, TaggedPattern, match_patterns, merge_spans, select_non_overlapping};
use crate::{EntityKind, ExtractResult};
use regex::Regex;

const MAX_CONNECTOR_GAP: usize = 8;

pub struct DateTimePeriodExtractorConfig {
    pub simple_cases: &'static [TaggedPattern],
    pub connector_regex: &'static Regex,
    pub till_regex: &'static Regex,
}

pub struct DateTimePeriodExtractor {
    config: DateTimePeriodExtractorConfig,
    date: DateExtractor,
    time_period: TimePeriodExtractor,
    date_time: DateTimeExtractor,
}

impl DateTimePeriodExtractor {
    pub fn new(
        config: DateTimePeriodExtractorConfig,
        date: DateExtractor,
        time_period: TimePeriodExtractor,
        date_time: DateTimeExtractor,
    ) -> Self {
        DateTimePeriodExtractor { config, date, time_period, date_time }
    }

    fn connects(&self, gap: &str) -> bool {
        if gap.len() > MAX_CONNECTOR_GAP {
            return false;
        }
        let trimmed = gap.trim();
        trimmed.is_empty() || whole_match(self.config.connector_regex, trimmed)
    }

    fn merge_date_with_time_period(&self, text: &str) -> Vec<ExtractResult> {
        let dates = self.date.extract(text);
        let periods = self.time_period.extract(text);
        let mut merged = Vec::new();

        for date in &dates {
            for period in &periods {
                if period.start >= date.end() && self.connects(&text[date.end()..period.start]) {
                    merged.push(merge_spans(
                        EntityKind::DateTimePeriod,
                        "date_timeperiod",
                        text,
                        date,
                        period,
                        date.start,
                    ));
                }
            }
        }

        merged
    }

    fn merge_two_datetimes(&self, text: &str) -> Vec<ExtractResult> {
        let datetimes = self.date_time.extract(text);
        let mut merged = Vec::new();

        for pair in datetimes.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            if left.data.tag == "now" || right.data.tag == "now" {
                continue;
            }
            let gap = text[left.end()..right.start].trim();
            if !gap.is_empty() && whole_match(self.config.till_regex, gap) {
                merged.push(merge_spans(EntityKind::DateTimePeriod, "dtrange", text, left, right, left.start));
            }
        }

        merged
    }
}

fn whole_match(re: &Regex, source: &str) -> bool {
    re.find(source).is_some_and(|m| m.len() == source.len())
}

impl Extractor for DateTimePeriodExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::DateTimePeriod
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        let mut candidates: Vec<(usize, ExtractResult)> = match_patterns(
            EntityKind::DateTimePeriod,
            self.config.simple_cases,
            text,
        )
        .into_iter()
        .map(|r| (0, r))
        .collect();

        candidates.extend(self.merge_date_with_time_period(text).into_iter().map(|r| (1, r)));
        candidates.extend(self.merge_two_datetimes(text).into_iter().map(|r| (2, r)));

        select_non_overlapping(candidates)
    }
}
