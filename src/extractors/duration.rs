//! Duration extractor: number-plus-unit forms ("twee weken", "3 uur"),
//! half-unit forms and bare "een"+unit forms.

use super::{Extractor, TaggedPattern, match_patterns};
use crate::{EntityKind, ExtractResult};

pub struct DurationExtractorConfig {
    pub duration_patterns: &'static [TaggedPattern],
}

pub struct DurationExtractor {
    config: DurationExtractorConfig,
}

impl DurationExtractor {
    pub fn new(config: DurationExtractorConfig) -> Self {
        DurationExtractor { config }
    }
}

impl Extractor for DurationExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::Duration
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        match_patterns(EntityKind::Duration, self.config.duration_patterns, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn extracts_number_unit_durations() {
        let locale = DutchLocale::new();

        let out = locale.duration_extractor.extract("het duurt twee weken");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "twee weken");

        let out = locale.duration_extractor.extract("een half uur pauze");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "een half uur");
    }
}
