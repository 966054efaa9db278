//! Merged extractor.
//!
//! Runs every date/time extractor over the same input, resolves cross-kind
//! overlaps with longest-leftmost-first precedence, then applies the locale's
//! ambiguity filters and term filters. Output spans are pairwise
//! non-overlapping and sorted by start offset.

use super::{AmbiguityFilter, Extractor, apply_ambiguity_filters};
use crate::ExtractResult;
use regex::Regex;

pub struct MergedExtractorConfig {
    pub ambiguity_filters: &'static [AmbiguityFilter],
    /// Anchored patterns; a span whose whole text matches any of these is
    /// removed regardless of overlap (standalone ambiguous terms).
    pub term_filters: &'static [&'static Regex],
}

pub struct MergedExtractor {
    config: MergedExtractorConfig,
    extractors: Vec<Box<dyn Extractor + Send + Sync>>,
}

impl MergedExtractor {
    /// `extractors` in precedence order: at equal span boundaries the
    /// earlier extractor's reading wins.
    pub fn new(config: MergedExtractorConfig, extractors: Vec<Box<dyn Extractor + Send + Sync>>) -> Self {
        MergedExtractor { config, extractors }
    }

    pub fn extract(&self, text: &str) -> Vec<ExtractResult> {
        self.extract_with(text, true)
    }

    /// `apply_term_filters` is off in calendar mode, where standalone unit
    /// words ("week") are wanted matches.
    pub fn extract_with(&self, text: &str, apply_term_filters: bool) -> Vec<ExtractResult> {
        let mut candidates: Vec<(usize, ExtractResult)> = Vec::new();
        for (priority, extractor) in self.extractors.iter().enumerate() {
            for span in extractor.extract(text) {
                candidates.push((priority, span));
            }
        }

        // Longest-leftmost-first: sort by start, then descending length,
        // then extractor precedence, and accept greedily.
        candidates.sort_by(|(pa, a), (pb, b)| {
            a.start.cmp(&b.start).then(b.length.cmp(&a.length)).then(pa.cmp(pb))
        });

        let mut accepted: Vec<ExtractResult> = Vec::new();
        for (_, cand) in candidates {
            if accepted.iter().all(|a| !a.overlaps(&cand)) {
                accepted.push(cand);
            } else if crate::debug_enabled() {
                eprintln!("[merged] overlap dropped \"{}\" ({:?})", cand.text, cand.kind);
            }
        }

        let accepted = apply_ambiguity_filters(accepted, self.config.ambiguity_filters);

        let mut filtered: Vec<ExtractResult> = accepted
            .into_iter()
            .filter(|span| {
                if !apply_term_filters {
                    return true;
                }
                let suppressed = self.config.term_filters.iter().any(|re| re.is_match(&span.text));
                if suppressed && crate::debug_enabled() {
                    eprintln!("[term_filter] dropped \"{}\"", span.text);
                }
                !suppressed
            })
            .collect();

        filtered.sort_by_key(|r| r.start);
        filtered
    }
}
