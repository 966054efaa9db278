//! Duration parser. Resolves to a plain number of seconds plus an ISO 8601
//! duration timex (`P2W`, `PT1H30M` style, one component per span).

use super::EntityParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

pub struct DurationParserConfig {
    /// Unit word (singular or plural) to canonical unit letter ("weken" -> "W").
    pub unit_map: &'static BTreeMap<&'static str, &'static str>,
    /// Canonical unit letter to its length in seconds.
    pub unit_seconds: &'static BTreeMap<&'static str, i64>,
    /// Spoken cardinals usable as duration counts ("twee" -> 2).
    pub cardinal_map: &'static BTreeMap<&'static str, i64>,
}

pub struct DurationParser {
    config: DurationParserConfig,
}

impl DurationParser {
    pub fn new(config: DurationParserConfig) -> Self {
        DurationParser { config }
    }

    fn count(&self, text: &str) -> Option<f64> {
        if let Ok(n) = text.parse::<f64>() {
            return Some(n);
        }
        if let Ok(n) = text.replace(',', ".").parse::<f64>() {
            return Some(n);
        }
        self.config.cardinal_map.get(text).map(|&n| n as f64)
    }

    fn resolution(&self, count: f64, unit_word: &str) -> Option<Resolution> {
        let unit = *self.config.unit_map.get(unit_word)?;
        let seconds = *self.config.unit_seconds.get(unit)?;

        let amount = if count.fract() == 0.0 { format!("{}", count as i64) } else { format!("{count}") };
        // Time-of-day units go after the T designator; "MON" is the
        // month disambiguation and prints as plain M on the date side.
        let timex = match unit {
            "H" | "M" | "S" => format!("PT{amount}{unit}"),
            "MON" => format!("P{amount}M"),
            _ => format!("P{amount}{unit}"),
        };
        Some(Resolution::new(
            EntityKind::Duration,
            timex,
            ResolvedValue::Number(count * seconds as f64),
        ))
    }
}

impl EntityParser for DurationParser {
    fn parse(&self, span: &ExtractResult, _reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        match data.tag {
            "numunit" => {
                let count = self.count(data.group("num")?)?;
                self.resolution(count, data.group("unit")?)
            }
            "halfunit" | "halveunit" => self.resolution(0.5, data.group("unit")?),
            "anderhalf" => self.resolution(1.5, data.group("unit")?),
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
        let spans = locale.duration_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.duration_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    #[test]
    fn digit_and_word_counts() {
        let res = resolve("2 weken");
        assert_eq!(res.timex, "P2W");
        assert_eq!(res.value, ResolvedValue::Number(2.0 * 604800.0));

        let res = resolve("twee weken");
        assert_eq!(res.timex, "P2W");

        let res = resolve("drie uur");
        assert_eq!(res.timex, "PT3H");
        assert_eq!(res.value, ResolvedValue::Number(3.0 * 3600.0));
    }

    #[test]
    fn fractional_durations() {
        let res = resolve("een half uur");
        assert_eq!(res.timex, "PT0.5H");
        assert_eq!(res.value, ResolvedValue::Number(1800.0));

        let res = resolve("anderhalf uur");
        assert_eq!(res.timex, "PT1.5H");
    }

    #[test]
    fn month_unit_prints_as_date_component() {
        let res = resolve("3 maanden");
        assert_eq!(res.timex, "P3M");
    }
}
