//! Timezone parser: abbreviations and explicit UTC offsets resolve to a
//! signed offset in minutes.

use super::EntityParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

pub struct TimeZoneParserConfig {
    /// Abbreviation to offset in minutes from UTC.
    pub abbreviation_map: &'static BTreeMap<&'static str, i32>,
}

pub struct TimeZoneParser {
    config: TimeZoneParserConfig,
}

fn offset_timex(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    let abs = minutes.abs();
    format!("UTC{sign}{:02}:{:02}", abs / 60, abs % 60)
}

impl TimeZoneParser {
    pub fn new(config: TimeZoneParserConfig) -> Self {
        TimeZoneParser { config }
    }
}

impl EntityParser for TimeZoneParser {
    fn parse(&self, span: &ExtractResult, _reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let minutes = match data.tag {
            "abbrev" => *self.config.abbreviation_map.get(data.group("abbrev")?)?,
            "offset" => {
                let hours: i32 = data.group("hour")?.parse().ok()?;
                let mins: i32 = data.group("min").and_then(|m| m.parse().ok()).unwrap_or(0);
                if hours > 14 || mins > 59 {
                    return None;
                }
                let total = hours * 60 + mins;
                if data.group("dir")? == "-" { -total } else { total }
            }
            _ => return None,
        };
        Some(Resolution::new(
            EntityKind::TimeZone,
            offset_timex(minutes),
            ResolvedValue::Number(minutes as f64),
        ))
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
        let spans = locale.time_zone_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.time_zone_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    #[test]
    fn abbreviations() {
        let res = resolve("CET");
        assert_eq!(res.timex, "UTC+01:00");
        assert_eq!(res.value, ResolvedValue::Number(60.0));

        assert_eq!(resolve("PST").timex, "UTC-08:00");
    }

    #[test]
    fn explicit_offsets() {
        let res = resolve("UTC+02:00");
        assert_eq!(res.value, ResolvedValue::Number(120.0));

        let res = resolve("GMT-5");
        assert_eq!(res.value, ResolvedValue::Number(-300.0));
    }
}
