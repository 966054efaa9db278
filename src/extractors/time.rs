//! Time extractor: clock forms, "X uur" forms, written times ("half drie",
//! "kwart over vier") and fixed points like middernacht.

use super::{Extractor, TaggedPattern, match_patterns};
use crate::{EntityKind, ExtractResult};

pub struct TimeExtractorConfig {
    pub time_patterns: &'static [TaggedPattern],
}

pub struct TimeExtractor {
    config: TimeExtractorConfig,
}

impl TimeExtractor {
    pub fn new(config: TimeExtractorConfig) -> Self {
        TimeExtractor { config }
    }
}

impl Extractor for TimeExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::Time
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        match_patterns(EntityKind::Time, self.config.time_patterns, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn extracts_clock_and_written_times() {
        let locale = DutchLocale::new();

        let out = locale.time_extractor.extract("we beginnen om 14:30");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "14:30");

        let out = locale.time_extractor.extract("half drie is prima");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "half drie");
    }
}
