//! Number extractors: integer, cardinal, ordinal, fraction and the combined
//! number model. Each is the same scanner over a different pattern list; the
//! number-level ambiguity filters suppress bare article readings ("een").

use super::{AmbiguityFilter, Extractor, TaggedPattern, apply_ambiguity_filters, match_patterns};
use crate::{EntityKind, ExtractResult};

pub struct NumberExtractorConfig {
    pub patterns: Vec<TaggedPattern>,
    pub ambiguity_filters: &'static [AmbiguityFilter],
}

pub struct NumberExtractor {
    kind: EntityKind,
    config: NumberExtractorConfig,
}

impl NumberExtractor {
    pub fn new(kind: EntityKind, config: NumberExtractorConfig) -> Self {
        NumberExtractor { kind, config }
    }
}

impl Extractor for NumberExtractor {
    fn kind(&self) -> EntityKind {
        self.kind
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        let spans = match_patterns(self.kind, &self.config.patterns, text);
        apply_ambiguity_filters(spans, self.config.ambiguity_filters)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn extracts_digits_and_words() {
        let locale = DutchLocale::new();

        let out = locale.number_extractor.extract("er zijn 42 deelnemers");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "42");

        let out = locale.number_extractor.extract("drieëntwintig stuks");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "drieëntwintig");
    }

    #[test]
    fn bare_article_een_is_filtered() {
        let locale = DutchLocale::new();
        // "een" is almost always the article; only the accented "één" is
        // unambiguously the numeral.
        let out = locale.number_extractor.extract("een huis");
        assert!(out.is_empty());

        let out = locale.number_extractor.extract("één huis");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn extracts_ordinals() {
        let locale = DutchLocale::new();
        let out = locale.ordinal_extractor.extract("de 3e poging en de tweede kans");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].text, "3e");
        assert_eq!(out[1].text, "tweede");
    }
}
