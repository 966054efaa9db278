//! Timezone extractor: abbreviations and explicit UTC offsets.

use super::{Extractor, TaggedPattern, match_patterns};
use crate::{EntityKind, ExtractResult};

pub struct TimeZoneExtractorConfig {
    pub timezone_patterns: &'static [TaggedPattern],
}

pub struct TimeZoneExtractor {
    config: TimeZoneExtractorConfig,
}

impl TimeZoneExtractor {
    pub fn new(config: TimeZoneExtractorConfig) -> Self {
        TimeZoneExtractor { config }
    }
}

impl Extractor for TimeZoneExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::TimeZone
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        match_patterns(EntityKind::TimeZone, self.config.timezone_patterns, text)
    }
}
