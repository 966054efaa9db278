//! Date extractor: explicit dates, month-name dates, weekday forms, special
//! days and weekday-plus-day-of-month combinations.

use super::{Extractor, TaggedPattern, match_patterns};
use crate::{EntityKind, ExtractResult};

pub struct DateExtractorConfig {
    /// Explicit and implicit date patterns, in priority order.
    pub date_patterns: &'static [TaggedPattern],
}

pub struct DateExtractor {
    config: DateExtractorConfig,
}

impl DateExtractor {
    pub fn new(config: DateExtractorConfig) -> Self {
        DateExtractor { config }
    }
}

impl Extractor for DateExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::Date
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        match_patterns(EntityKind::Date, self.config.date_patterns, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn extracts_explicit_and_relative_dates() {
        let locale = DutchLocale::new();
        let out = locale.date_extractor.extract("de vergadering is op 27 april 2023");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "27 april 2023");

        let out = locale.date_extractor.extract("kom morgen langs");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "morgen");
    }

    #[test]
    fn spans_within_one_call_never_overlap() {
        let locale = DutchLocale::new();
        let out = locale.date_extractor.extract("vandaag of volgende dinsdag of 3-11-2024");
        for (i, a) in out.iter().enumerate() {
            for b in out.iter().skip(i + 1) {
                assert!(!a.overlaps(b), "{:?} overlaps {:?}", a.text, b.text);
            }
        }
        assert!(out.len() >= 3);
    }
}
