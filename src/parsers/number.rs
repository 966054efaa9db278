//! Number parser: digits with Dutch separators, spoken cardinals up to the
//! thousands, ordinals and fractions.

use super::EntityParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

pub struct NumberParserConfig {
    /// Basic cardinal words: units, teens and tens.
    pub cardinal_map: &'static BTreeMap<&'static str, i64>,
    /// Ordinal words ("derde" -> 3).
    pub ordinal_map: &'static BTreeMap<&'static str, i64>,
    /// Fraction words ("driekwart" -> 0.75).
    pub fraction_map: &'static BTreeMap<&'static str, f64>,
}

pub struct NumberParser {
    config: NumberParserConfig,
}

fn number_string(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn number_resolution(kind: EntityKind, value: f64) -> Resolution {
    Resolution::new(kind, number_string(value), ResolvedValue::Number(value))
}

impl NumberParser {
    pub fn new(config: NumberParserConfig) -> Self {
        NumberParser { config }
    }

    /// Value of a compound cardinal word: "drieëntwintig", "tweehonderdvijf".
    fn cardinal_value(&self, word: &str) -> Option<i64> {
        let word = if word == "één" { "een" } else { word };
        if word.is_empty() {
            return None;
        }
        if let Some(&v) = self.config.cardinal_map.get(word) {
            return Some(v);
        }
        for (scale_word, scale) in [("duizend", 1000), ("honderd", 100)] {
            if let Some(idx) = word.find(scale_word) {
                let prefix = &word[..idx];
                let rest = &word[idx + scale_word.len()..];
                let p = if prefix.is_empty() { 1 } else { self.cardinal_value(prefix)? };
                let r = if rest.is_empty() { 0 } else { self.cardinal_value(rest)? };
                return Some(p * scale + r);
            }
        }
        // unit + en/ën + tens ("vier" "en" "twintig").
        for (tens_word, &tens) in self.config.cardinal_map.iter() {
            if tens < 20 || tens % 10 != 0 || !word.ends_with(tens_word) || word.len() == tens_word.len()
            {
                continue;
            }
            let head = &word[..word.len() - tens_word.len()];
            let Some(unit) = head.strip_suffix("ën").or_else(|| head.strip_suffix("en")) else {
                continue;
            };
            if let Some(&u) = self.config.cardinal_map.get(unit) {
                if (1..=9).contains(&u) {
                    return Some(tens + u);
                }
            }
        }
        None
    }
}

impl EntityParser for NumberParser {
    fn parse(&self, span: &ExtractResult, _reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let text = span.text.trim().to_lowercase();
        match data.tag {
            // "1.000" uses the Dutch thousands separator.
            "intnum" => {
                let v: i64 = text.replace('.', "").parse().ok()?;
                Some(number_resolution(span.kind, v as f64))
            }
            "intword" => {
                let v = self.cardinal_value(&text)?;
                Some(number_resolution(span.kind, v as f64))
            }
            "doublenum" => {
                let v: f64 = text.replace('.', "").replace(',', ".").parse().ok()?;
                Some(number_resolution(span.kind, v))
            }
            "fracnum" => {
                let num: f64 = data.group("num")?.parse().ok()?;
                let den: f64 = data.group("den")?.parse().ok()?;
                if den == 0.0 {
                    return None;
                }
                Some(number_resolution(span.kind, num / den))
            }
            "fracword" => {
                let key = data.group("frac").unwrap_or(text.as_str());
                let v = *self.config.fraction_map.get(key)?;
                Some(number_resolution(span.kind, v))
            }
            "ordnum" => {
                let v: i64 = data.group("num")?.parse().ok()?;
                Some(number_resolution(EntityKind::Ordinal, v as f64))
            }
            "ordword" => {
                let v = *self.config.ordinal_map.get(text.as_str())?;
                Some(number_resolution(EntityKind::Ordinal, v as f64))
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
        let spans = locale.number_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.number_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    fn value(text: &str) -> f64 {
        match resolve(text).value {
            ResolvedValue::Number(n) => n,
            other => panic!("expected a number, got {other:?}"),
        }
    }

    #[test]
    fn digit_forms() {
        assert_eq!(value("42"), 42.0);
        assert_eq!(value("1.000"), 1000.0);
        assert_eq!(value("3,14"), 3.14);
    }

    #[test]
    fn spoken_cardinals() {
        assert_eq!(value("nul"), 0.0);
        assert_eq!(value("twaalf"), 12.0);
        assert_eq!(value("drieëntwintig"), 23.0);
        assert_eq!(value("vierentwintig"), 24.0);
        assert_eq!(value("tweehonderdvijf"), 205.0);
        assert_eq!(value("drieduizend"), 3000.0);
    }

    #[test]
    fn fractions() {
        assert_eq!(value("3/4"), 0.75);
        assert_eq!(value("driekwart"), 0.75);
        assert_eq!(value("de helft"), 0.5);
    }

    #[test]
    fn ordinals() {
        let locale = DutchLocale::new();
        let spans = locale.ordinal_extractor.extract("de 3e keer");
        assert_eq!(spans.len(), 1);
        let res = locale.number_parser.parse(&spans[0], Reference::default().datetime).unwrap();
        assert_eq!(res.kind, crate::EntityKind::Ordinal);
        assert_eq!(res.value, ResolvedValue::Number(3.0));

        let spans = locale.ordinal_extractor.extract("tweede");
        let res = locale.number_parser.parse(&spans[0], Reference::default().datetime).unwrap();
        assert_eq!(res.value, ResolvedValue::Number(2.0));
    }
}
