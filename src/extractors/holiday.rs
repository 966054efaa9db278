//! Holiday extractor: named holidays with an optional year or relative
//! prefix ("Koningsdag 2023", "volgende sinterklaas").

use super::{Extractor, TaggedPattern, match_patterns};
use crate::{EntityKind, ExtractResult};

pub struct HolidayExtractorConfig {
    pub holiday_patterns: &'static [TaggedPattern],
}

pub struct HolidayExtractor {
    config: HolidayExtractorConfig,
}

impl HolidayExtractor {
    pub fn new(config: HolidayExtractorConfig) -> Self {
        HolidayExtractor { config }
    }
}

impl Extractor for HolidayExtractor {
    fn kind(&self) -> EntityKind {
        EntityKind::Holiday
    }

    fn extract(&self, text: &str) -> Vec<ExtractResult> {
        match_patterns(EntityKind::Holiday, self.config.holiday_patterns, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;

    #[test]
    fn extracts_holiday_with_year() {
        let locale = DutchLocale::new();
        let out = locale.holiday_extractor.extract("vrij op Koningsdag 2023");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].text, "Koningsdag 2023");
        assert_eq!(out[0].data.group("holiday"), Some("koningsdag"));
        assert_eq!(out[0].data.group("year"), Some("2023"));
    }

    #[test]
    fn extracts_relative_holiday() {
        let locale = DutchLocale::new();
        let out = locale.holiday_extractor.extract("tot volgende koningsdag");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.group("rel"), Some("volgende"));
    }
}
