//! Set parser: recurring expressions resolve to a recurrence timex and the
//! `SET` sentinel value.

use super::EntityParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::{NaiveDateTime, Weekday};
use std::collections::BTreeMap;

pub struct SetParserConfig {
    /// Adverbial forms ("wekelijks" -> "P1W").
    pub periodic_map: &'static BTreeMap<&'static str, &'static str>,
    /// Unit word to canonical unit letter, shared with durations.
    pub unit_map: &'static BTreeMap<&'static str, &'static str>,
    pub day_of_week: &'static BTreeMap<&'static str, Weekday>,
}

pub struct SetParser {
    config: SetParserConfig,
}

impl SetParser {
    pub fn new(config: SetParserConfig) -> Self {
        SetParser { config }
    }

    fn set_resolution(timex: String) -> Resolution {
        Resolution::new(EntityKind::Set, timex, ResolvedValue::Ref("SET"))
    }
}

impl EntityParser for SetParser {
    fn parse(&self, span: &ExtractResult, _reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        match data.tag {
            "periodic" => {
                let timex = *self.config.periodic_map.get(data.group("periodic")?)?;
                Some(Self::set_resolution(timex.to_string()))
            }
            "eachunit" => {
                let unit = *self.config.unit_map.get(data.group("unit")?)?;
                let timex = match unit {
                    "H" | "M" | "S" => format!("PT1{unit}"),
                    "MON" => "P1M".to_string(),
                    _ => format!("P1{unit}"),
                };
                Some(Self::set_resolution(timex))
            }
            "eachday" => {
                let weekday = *self.config.day_of_week.get(data.group("weekday")?)?;
                Some(Self::set_resolution(format!(
                    "XXXX-WXX-{}",
                    super::weekday_number(weekday)
                )))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::dutch::DutchLocale;
    use crate::extractors::Extractor;
    use crate::parsers::EntityParser;
    use crate::{ResolvedValue, api::Reference};

    fn resolve(text: &str) -> crate::Resolution {
        let locale = DutchLocale::new();
        let spans = locale.set_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.set_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    #[test]
    fn adverbial_recurrences() {
        assert_eq!(resolve("dagelijks").timex, "P1D");
        assert_eq!(resolve("wekelijks").timex, "P1W");
        assert_eq!(resolve("jaarlijks").timex, "P1Y");
    }

    #[test]
    fn each_unit_and_each_weekday() {
        let res = resolve("elke dag");
        assert_eq!(res.timex, "P1D");
        assert_eq!(res.value, ResolvedValue::Ref("SET"));

        assert_eq!(resolve("elk uur").timex, "PT1H");
        assert_eq!(resolve("elke maandag").timex, "XXXX-WXX-1");
    }
}
