#[macro_export]
macro_rules! regex {
    ($pat:expr) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Build a static, priority-ordered pattern list for an extractor.
///
/// Each entry pairs a tag (consumed by the matching parser) with a pattern
/// literal. Compilation happens once; a malformed pattern panics on first
/// use of the locale bundle, never mid-request.
#[macro_export]
macro_rules! patterns {
    ( $( ($tag:expr, $pat:expr) ),* $(,)? ) => {{
        static PATS: once_cell::sync::Lazy<Vec<$crate::extractors::TaggedPattern>> =
            once_cell::sync::Lazy::new(|| vec![
                $( $crate::extractors::TaggedPattern {
                    tag: $tag,
                    re: $crate::regex!($pat),
                } ),*
            ]);
        &*PATS
    }};
}
