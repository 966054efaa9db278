//! Dutch locale behavior hooks: swifts, hour normalization, connector token
//! lookups and the now-phrase classification.

use crate::parsers::NO_SWIFT;

/// Day offset of a special-day word. Longer words are checked before their
/// suffixes ("eergisteren" before "gisteren").
pub fn swift_day(text: &str) -> i64 {
    let t = text.trim().to_lowercase();
    if t.ends_with("eergisteren") || t.ends_with("eer gisteren") {
        -2
    } else if t.ends_with("overmorgen")
        || t.ends_with("namiddag")
        || t.ends_with("na middag")
        || t.ends_with("na-middag")
    {
        2
    } else if t.ends_with("gisteren") || t.ends_with("voorbije") {
        -1
    } else if t.ends_with("morgen") || t.ends_with("anderdaags") || t.ends_with("volgende dag") {
        1
    } else {
        0
    }
}

/// Period offset of a relative modifier ("volgende" -> 1, "deze" -> 0).
pub fn swift_period(text: &str) -> i64 {
    let t = text.trim().to_lowercase();
    if t.ends_with("volgende") || t.ends_with("komende") || t.ends_with("aanstaande") || t.ends_with("aankomende")
    {
        1
    } else if t.ends_with("vorige")
        || t.ends_with("vorig")
        || t.ends_with("voorbije")
        || t.ends_with("afgelopen")
        || t.ends_with("laatste")
    {
        -1
    } else {
        0
    }
}

/// Year offset of a holiday modifier, or [`NO_SWIFT`] when no modifier is
/// recognized (the nearest occurrence is used instead).
pub fn swift_year(text: &str) -> i64 {
    let t = text.trim().to_lowercase();
    if t.starts_with("volgende") || t.starts_with("komende") || t.starts_with("aanstaande") {
        1
    } else if t.starts_with("voorbije") || t.starts_with("vorige") || t.starts_with("afgelopen") {
        -1
    } else if t.starts_with("deze") {
        0
    } else {
        NO_SWIFT
    }
}

/// Hour normalization for spoken and "X uur" forms. A bare hour below 12
/// reads as afternoon/evening unless a night marker keeps it small.
pub fn normalize_hour(has_am: bool, has_pm: bool, hour: u32) -> u32 {
    if has_am {
        if hour == 12 { 0 } else { hour }
    } else if hour < 12 && !(has_pm && hour < 6) {
        hour + 12
    } else {
        hour
    }
}

/// Sentinel timex for a now-class phrase.
pub fn matched_now_timex(text: &str) -> Option<&'static str> {
    let t = text.trim().to_lowercase();
    if regex!(r"^(nu|meteen|zo meteen|op dit moment)$").is_match(&t) {
        Some("PRESENT_REF")
    } else if regex!(r"^(zojuist|zonet|daarnet|onlangs|recent)$").is_match(&t) {
        Some("PAST_REF")
    } else if regex!(r"^(binnenkort|straks|zo snel mogelijk)$").is_match(&t) {
        Some("FUTURE_REF")
    } else {
        None
    }
}

/// Canonical holiday key: lowercase with separators stripped.
pub fn sanitize_holiday(name: &str) -> String {
    name.to_lowercase().chars().filter(|c| !matches!(c, ' ' | '-' | '\'')).collect()
}

fn token_index(before: &str, tokens: &[&str]) -> Option<usize> {
    let trimmed = before.trim_end();
    for token in tokens {
        if trimmed.ends_with(token) {
            let idx = trimmed.len() - token.len();
            if idx == 0 || !trimmed[..idx].ends_with(|c: char| c.is_alphanumeric()) {
                return Some(idx);
            }
        }
    }
    None
}

/// Start of a trailing from-token before a span, so "van" is folded into the
/// merged period span.
pub fn from_token_index(before: &str) -> Option<usize> {
    token_index(before, &["vanaf", "van"])
}

pub fn between_token_index(before: &str) -> Option<usize> {
    token_index(before, &["tussen"])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_swifts() {
        assert_eq!(swift_day("vandaag"), 0);
        assert_eq!(swift_day("morgen"), 1);
        assert_eq!(swift_day("overmorgen"), 2);
        assert_eq!(swift_day("gisteren"), -1);
        assert_eq!(swift_day("eergisteren"), -2);
        assert_eq!(swift_day("eer gisteren"), -2);
        assert_eq!(swift_day("morgen namiddag"), 2);
    }

    #[test]
    fn period_swifts() {
        assert_eq!(swift_period("volgende"), 1);
        assert_eq!(swift_period("komende"), 1);
        assert_eq!(swift_period("vorige"), -1);
        assert_eq!(swift_period("afgelopen"), -1);
        assert_eq!(swift_period("deze"), 0);
    }

    #[test]
    fn year_swifts_use_a_sentinel() {
        assert_eq!(swift_year("volgende"), 1);
        assert_eq!(swift_year("voorbije"), -1);
        assert_eq!(swift_year("deze"), 0);
        assert_eq!(swift_year("mooie"), crate::parsers::NO_SWIFT);
    }

    #[test]
    fn hour_normalization() {
        // Unmarked hours below 12 read as afternoon.
        assert_eq!(normalize_hour(false, false, 5), 17);
        assert_eq!(normalize_hour(false, false, 14), 14);
        // Morning marker keeps the hour, 12 am is midnight.
        assert_eq!(normalize_hour(true, false, 5), 5);
        assert_eq!(normalize_hour(true, false, 12), 0);
        // Night marker keeps small hours small.
        assert_eq!(normalize_hour(false, true, 3), 3);
        assert_eq!(normalize_hour(false, true, 10), 22);
    }

    #[test]
    fn connector_token_lookup() {
        assert_eq!(from_token_index("afspraak van "), Some(9));
        assert_eq!(from_token_index("caravan "), None);
        assert_eq!(between_token_index("tussen "), Some(0));
        assert_eq!(between_token_index("ergens "), None);
    }
}
