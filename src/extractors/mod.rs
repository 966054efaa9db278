//! Entity extractors.
//!
//! One extractor per entity kind, each a thin scanner over a configured,
//! priority-ordered pattern list. Composite kinds (periods, datetime) invoke
//! simpler extractors and recombine adjacent spans over connector tokens.
//! The [`merged::MergedExtractor`] runs every kind over the same input and
//! resolves cross-kind overlaps.

use crate::{EntityKind, ExtractResult, MatchData};
use regex::Regex;
use std::collections::BTreeMap;

pub mod date;
pub mod date_period;
pub mod date_time;
pub mod date_time_period;
pub mod duration;
pub mod holiday;
pub mod merged;
pub mod number;
pub mod set;
pub mod time;
pub mod time_period;
pub mod timezone;

/// A compiled pattern plus the tag the matching parser dispatches on.
#[derive(Clone, Copy)]
pub struct TaggedPattern {
    pub tag: &'static str,
    pub re: &'static Regex,
}

impl std::fmt::Debug for TaggedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaggedPattern").field("tag", &self.tag).finish()
    }
}

/// A key/value regex pair used to suppress spurious matches: a span whose
/// text matches `key` is kept only when it also matches `value`.
pub struct AmbiguityFilter {
    pub key: &'static Regex,
    pub value: &'static Regex,
}

pub(crate) fn apply_ambiguity_filters(
    spans: Vec<ExtractResult>,
    filters: &[AmbiguityFilter],
) -> Vec<ExtractResult> {
    spans
        .into_iter()
        .filter(|span| {
            for filter in filters {
                if filter.key.is_match(&span.text) && !filter.value.is_match(&span.text) {
                    if crate::debug_enabled() {
                        eprintln!("[ambiguity_filter] dropped \"{}\"", span.text);
                    }
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Contract for every per-kind extractor.
///
/// Deterministic, side-effect free; malformed or empty input yields an empty
/// vector. Spans returned by a single call never overlap each other.
pub trait Extractor {
    fn kind(&self) -> EntityKind;
    fn extract(&self, text: &str) -> Vec<ExtractResult>;
}

/// Collect the named capture groups of a match into a `MatchData` payload.
pub(crate) fn capture_data(tag: &'static str, re: &'static Regex, caps: &regex::Captures<'_>) -> MatchData {
    let mut groups = BTreeMap::new();
    for name in re.capture_names().flatten() {
        if let Some(m) = caps.name(name) {
            groups.insert(name, m.as_str().to_lowercase());
        }
    }
    MatchData { tag, groups }
}

/// Run a priority-ordered pattern list and return non-overlapping spans.
///
/// Tie-break when two patterns claim overlapping ranges of the same kind:
/// the longer match wins; at equal length, the pattern earlier in the list
/// wins. Implemented by sorting candidates by (start, -length, priority) and
/// accepting greedily.
pub(crate) fn match_patterns(kind: EntityKind, patterns: &[TaggedPattern], text: &str) -> Vec<ExtractResult> {
    let mut candidates: Vec<(usize, ExtractResult)> = Vec::new();

    for (priority, pat) in patterns.iter().enumerate() {
        for caps in pat.re.captures_iter(text) {
            let m = caps.get(0).unwrap();
            if m.as_str().trim().is_empty() {
                continue;
            }
            candidates.push((
                priority,
                ExtractResult {
                    start: m.start(),
                    length: m.end() - m.start(),
                    text: m.as_str().to_string(),
                    kind,
                    data: capture_data(pat.tag, pat.re, &caps),
                },
            ));
        }
    }

    select_non_overlapping(candidates)
}

pub(crate) fn select_non_overlapping(mut candidates: Vec<(usize, ExtractResult)>) -> Vec<ExtractResult> {
    candidates.sort_by(|(pa, a), (pb, b)| {
        a.start.cmp(&b.start).then(b.length.cmp(&a.length)).then(pa.cmp(pb))
    });

    let mut accepted: Vec<ExtractResult> = Vec::new();
    for (_, cand) in candidates {
        if accepted.iter().all(|a| !a.overlaps(&cand)) {
            accepted.push(cand);
        }
    }
    accepted.sort_by_key(|r| r.start);
    accepted
}

/// Merge a left and right span (plus the text between them) into one span of
/// `kind`, storing both halves in the payload for the composite parser.
pub(crate) fn merge_spans(
    kind: EntityKind,
    tag: &'static str,
    text: &str,
    left: &ExtractResult,
    right: &ExtractResult,
    start: usize,
) -> ExtractResult {
    let end = right.end();
    let mut groups = BTreeMap::new();
    groups.insert("left", left.text.clone());
    groups.insert("right", right.text.clone());
    ExtractResult {
        start,
        length: end - start,
        text: text[start..end].to_string(),
        kind,
        data: MatchData { tag, groups },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_match_wins_at_same_start() {
        let pats: &[TaggedPattern] = patterns![("short", r"\bmaandag\b"), ("long", r"\bmaandag ochtend\b")];
        let out = match_patterns(EntityKind::Date, pats, "maandag ochtend");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "long");
        assert_eq!(out[0].text, "maandag ochtend");
    }

    #[test]
    fn equal_length_prefers_earlier_pattern() {
        let pats: &[TaggedPattern] = patterns![("first", r"\bvandaag\b"), ("second", r"\bvandaag\b")];
        let out = match_patterns(EntityKind::Date, pats, "vandaag");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].data.tag, "first");
    }

    #[test]
    fn empty_input_is_empty_output() {
        let pats: &[TaggedPattern] = patterns![("any", r"\bvandaag\b")];
        assert!(match_patterns(EntityKind::Date, pats, "").is_empty());
    }
}
