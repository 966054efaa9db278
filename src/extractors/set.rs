//! Set extractor: recurring expressions ("dagelijks", "elke dinsdag").

use super::{Extractor, TaggedPattern, match_patterns};
use crate::{EntityKind, ExtractResult};

pub struct SetExtractorConfig {
    pub set_patterns: &'static [TaggedPattern],
}

pub struct SetExtractor {
    config: SetExtractorConfig,
}

impl SetExtractor {
    pub fn new(config: SetExtractorConfig) -> Self {
        SetExtractor { config }
    }
}

impl Extractor for SetExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::Set
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        match_patterns(EntityKind::Set, self.config.set_patterns, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn extracts_recurring_expressions() {
        let locale = DutchLocale::new();

        let out = locale.set_extractor.extract("we vergaderen elke dag");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "elke dag");

        let out = locale.set_extractor.extract("het rapport verschijnt wekelijks");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "periodic");
    }
}
