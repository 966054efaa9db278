//! Public recognition API.
//!
//! `recognize` runs the merged date/time model over a text against a
//! reference instant; `recognize_number` runs the separate number model.
//! A shared locale bundle is built once and reused across calls.

use crate::dutch::DutchLocale;
use crate::extractors::Extractor;
use crate::{EntityKind, ExtractResult, Resolution};
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;

static LOCALE: Lazy<DutchLocale> = Lazy::new(DutchLocale::new);

bitflags::bitflags! {
    /// Recognition options.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct DateTimeOptions: u32 {
        /// Keep from-to halves as separate spans instead of one period.
        const SKIP_FROM_TO_MERGE = 1;
        /// Split a merged date+time span back into a date and a time.
        const SPLIT_DATE_AND_TIME = 1 << 1;
        /// Calendar mode: standalone unit words ("week") are kept.
        const CALENDAR_MODE = 1 << 2;
        /// Enables experimental recognizers (timezones).
        const EXPERIMENTAL_MODE = 1 << 3;
    }
}

/// The instant relative phrases are resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    pub datetime: NaiveDateTime,
}

impl Reference {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Reference { datetime }
    }

    pub fn now() -> Self {
        Reference { datetime: chrono::Local::now().naive_local() }
    }
}

impl Default for Reference {
    fn default() -> Self {
        #[cfg(test)]
        {
            Reference::new(
                chrono::NaiveDate::from_ymd_opt(2013, 2, 12)
                    .unwrap()
                    .and_hms_opt(4, 30, 0)
                    .unwrap(),
            )
        }
        #[cfg(not(test))]
        {
            Reference::now()
        }
    }
}

/// One recognized occurrence in the input text.
#[derive(Debug, Clone)]
pub struct Entity {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub type_name: &'static str,
    pub resolution: Resolution,
}

fn to_entity(span: &ExtractResult, resolution: Resolution) -> Entity {
    Entity {
        text: span.text.clone(),
        start: span.start,
        end: span.end(),
        type_name: resolution.kind.type_name(),
        resolution,
    }
}

/// Re-extract the halves of a composite span as standalone spans, offset
/// back into the original text.
fn split_composite(locale: &DutchLocale, span: &ExtractResult) -> Vec<ExtractResult> {
    let inner: Vec<ExtractResult> = match span.kind {
        EntityKind::DatePeriod => locale.date_extractor.extract(&span.text),
        EntityKind::TimePeriod => locale.time_extractor.extract(&span.text),
        EntityKind::DateTimePeriod => locale.date_time_extractor.extract(&span.text),
        EntityKind::DateTime => {
            let mut dates = locale.date_extractor.extract(&span.text);
            dates.extend(locale.time_extractor.extract(&span.text));
            dates
        }
        _ => Vec::new(),
    };
    inner
        .into_iter()
        .map(|mut sub| {
            sub.start += span.start;
            sub
        })
        .collect()
}

fn is_merge_tag(tag: &str) -> bool {
    matches!(tag, "fromto" | "between" | "dtrange")
}

/// Recognize date/time entities with the default reference and options.
pub fn recognize(text: &str) -> Vec<Entity> {
    recognize_with(text, Reference::default(), DateTimeOptions::empty())
}

pub fn recognize_with(text: &str, reference: Reference, options: DateTimeOptions) -> Vec<Entity> {
    let locale = &*LOCALE;
    let spans = locale
        .merged_extractor
        .extract_with(text, !options.contains(DateTimeOptions::CALENDAR_MODE));

    let mut expanded: Vec<ExtractResult> = Vec::new();
    for span in spans {
        if !options.contains(DateTimeOptions::EXPERIMENTAL_MODE) && span.kind == EntityKind::TimeZone
        {
            continue;
        }
        let split = (options.contains(DateTimeOptions::SKIP_FROM_TO_MERGE)
            && is_merge_tag(span.data.tag))
            || (options.contains(DateTimeOptions::SPLIT_DATE_AND_TIME)
                && span.data.tag == "datetime");
        if split {
            expanded.extend(split_composite(locale, &span));
        } else {
            expanded.push(span);
        }
    }

    expanded
        .iter()
        .filter_map(|span| locale.parse(span, reference.datetime).map(|res| to_entity(span, res)))
        .collect()
}

/// Recognize cardinal, fraction and ordinal numbers. Separate from the
/// date/time model; a span is never both.
pub fn recognize_number(text: &str) -> Vec<Entity> {
    let locale = &*LOCALE;
    let reference = Reference::default();

    let mut candidates: Vec<(usize, ExtractResult)> = Vec::new();
    candidates.extend(locale.number_extractor.extract(text).into_iter().map(|r| (0, r)));
    candidates.extend(locale.ordinal_extractor.extract(text).into_iter().map(|r| (1, r)));
    let spans = crate::extractors::select_non_overlapping(candidates);

    spans
        .iter()
        .filter_map(|span| locale.parse(span, reference.datetime).map(|res| to_entity(span, res)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResolvedValue;
    use chrono::NaiveDate;

    #[test]
    fn recognizes_mixed_text_end_to_end() {
        let entities = recognize("de afspraak is morgen om 15:00 en duurt twee uur");
        assert_eq!(entities.len(), 2);

        assert_eq!(entities[0].text, "morgen om 15:00");
        assert_eq!(entities[0].type_name, "datetime");
        assert_eq!(entities[0].resolution.timex, "2013-02-13T15:00");

        assert_eq!(entities[1].text, "twee uur");
        assert_eq!(entities[1].type_name, "duration");
    }

    #[test]
    fn holidays_resolve_as_dates() {
        let entities = recognize("vrij op Koningsdag 2023");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].type_name, "date");
        assert_eq!(entities[0].resolution.timex, "2023-04-27");
    }

    #[test]
    fn entity_offsets_index_the_input() {
        let text = "misschien volgende week dinsdag";
        let entities = recognize(text);
        for entity in &entities {
            assert_eq!(&text[entity.start..entity.end], entity.text);
        }
    }

    #[test]
    fn skip_from_to_merge_keeps_the_halves() {
        let text = "van 1 maart tot 15 maart";
        let merged = recognize(text);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].type_name, "daterange");

        let split = recognize_with(text, Reference::default(), DateTimeOptions::SKIP_FROM_TO_MERGE);
        assert_eq!(split.len(), 2);
        assert!(split.iter().all(|e| e.type_name == "date"));
    }

    #[test]
    fn split_date_and_time_option() {
        let text = "morgen om 15:00";
        let split = recognize_with(text, Reference::default(), DateTimeOptions::SPLIT_DATE_AND_TIME);
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].type_name, "date");
        assert_eq!(split[1].type_name, "time");
    }

    #[test]
    fn calendar_mode_keeps_bare_unit_words() {
        let text = "reserveer die week";
        assert!(recognize(text).is_empty());

        let entities = recognize_with(text, Reference::default(), DateTimeOptions::CALENDAR_MODE);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].text, "week");
    }

    #[test]
    fn timezones_are_experimental() {
        let text = "gepland in CET";
        assert!(recognize(text).is_empty());

        let entities = recognize_with(text, Reference::default(), DateTimeOptions::EXPERIMENTAL_MODE);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].type_name, "timezone");
        assert_eq!(entities[0].resolution.value, ResolvedValue::Number(60.0));
    }

    #[test]
    fn number_model_is_separate() {
        let entities = recognize_number("drieëntwintig stuks en de 3e poging");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].resolution.value, ResolvedValue::Number(23.0));
        assert_eq!(entities[1].type_name, "ordinal");
    }

    #[test]
    fn explicit_reference_moves_relative_dates() {
        let reference = Reference::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
        );
        let entities = recognize_with("morgen", reference, DateTimeOptions::empty());
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].resolution.timex, "2024-06-02");
    }
}
