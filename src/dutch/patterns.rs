//! Dutch pattern lists.
//!
//! Alternations put longer variants before their prefixes so the scanner
//! never settles for a partial word. Lists are priority-ordered: the
//! extractor prefers earlier patterns at equal match length.

use crate::extractors::{AmbiguityFilter, TaggedPattern};
use once_cell::sync::Lazy;
use regex::Regex;

const MONTH: &str = "januari|februari|maart|april|mei|juni|juli|augustus|september|oktober|november|december|sept|jan|feb|mrt|apr|jun|jul|aug|sep|okt|nov|dec";

const WEEKDAY: &str = "maandag|dinsdag|woensdag|donderdag|vrijdag|zaterdag|zondag";

const REL: &str = "volgende|komende|aanstaande|aankomende|voorbije|vorige|vorig|afgelopen|deze|dit";

const HOUR_WORD: &str = "twaalf|twee|drie|vier|vijf|zessen|zes|zeven|achten|acht|negen|tienen|tien|elf|één|een";

const DESC: &str = "'s ochtends|'s morgens|'s middags|'s avonds|'s nachts|in de ochtend|in de middag|in de avond|in de nacht|am|pm";

const NUM_WORD: &str = "dertien|veertien|vijftien|zestien|zeventien|achttien|negentien|twintig|dertig|veertig|vijftig|zestig|zeventig|tachtig|negentig|één|een|twee|drie|vier|vijf|zes|zeven|acht|negen|tien|elf|twaalf";

const DURATION_UNIT: &str = "seconden|seconde|minuten|minuut|uren|uur|dagen|dag|weken|week|maanden|maand|jaren|jaar";

const HOLIDAY: &str = "koninginnedag|koningsdag|prinsjesdag|dodenherdenking|bevrijdingsdag|sinterklaasavond|sinterklaas|pakjesavond|eerste kerstdag|tweede kerstdag|kerstavond|kerstmis|kerst|oudejaarsavond|oudjaar|nieuwjaarsdag|nieuwjaar|driekoningen|goede vrijdag|eerste paasdag|tweede paasdag|pasen|dag van de arbeid|sint[- ]maarten|keti[- ]koti|vaderdag|moederdag|valentijnsdag|halloween|allerheiligen|allerzielen|juneteenth";

pub fn date_patterns() -> &'static [TaggedPattern] {
    patterns![
        ("ymd", r"\b(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})\b"),
        ("dmy", r"\b(?P<day>\d{1,2})[-/](?P<month>\d{1,2})[-/](?P<year>\d{4})\b"),
        (
            "dm_name",
            &format!(r"\b(?P<day>\d{{1,2}})(?:e|ste|de)? (?P<month>{MONTH})(?: (?P<year>\d{{4}}))?\b")
        ),
        (
            "specialday",
            r"\b(morgen na[- ]middag|morgen namiddag|overmorgen|eergisteren|eer gisteren|vandaag|morgen|gisteren)\b"
        ),
        (
            "weekday_dom",
            &format!(r"\b(?P<weekday>{WEEKDAY}) (?:de |den )?(?P<day>\d{{1,2}})(?:e|ste|de)?\b")
        ),
        (
            "weekday",
            &format!(r"\b(?:(?P<rel>{REL}) )?(?P<weekday>{WEEKDAY})\b")
        ),
        ("on", r"\bop de (?P<day>\d{1,2})(?:e|ste|de)?\b"),
    ]
}

pub fn time_patterns() -> &'static [TaggedPattern] {
    patterns![
        (
            "basic",
            &format!(r"\b(?P<hour>\d{{1,2}}):(?P<min>\d{{2}})(?::(?P<sec>\d{{2}}))?(?: (?P<desc>{DESC}))?")
        ),
        (
            "oclock",
            &format!(r"\b(?:om )?(?P<hour>\d{{1,2}}) uur\b(?: (?P<min>\d{{1,2}})\b)?(?: (?P<desc>{DESC}))?")
        ),
        (
            "hourword",
            &format!(r"\b(?:om )?(?P<hourword>{HOUR_WORD}) uur\b(?: (?P<desc>{DESC}))?")
        ),
        (
            "relative",
            &format!(r"\b(?P<relmin>kwart|tien|vijf) (?P<reldir>over|voor) (?P<hourword>{HOUR_WORD})\b(?: (?P<desc>{DESC}))?")
        ),
        (
            "half",
            &format!(r"\bhalf (?P<hourword>{HOUR_WORD})\b(?: (?P<desc>{DESC}))?")
        ),
        ("mid", r"\b(?P<mid>middernacht|het middaguur|middaguur)\b"),
    ]
}

pub fn duration_patterns() -> &'static [TaggedPattern] {
    patterns![
        (
            "numunit",
            &format!(r"\b(?P<num>\d+(?:,\d+)?|{NUM_WORD}) (?P<unit>{DURATION_UNIT})\b")
        ),
        ("halfunit", &format!(r"\b(?:een |één )?half (?P<unit>{DURATION_UNIT})\b")),
        ("halveunit", &format!(r"\b(?:een |één )?halve (?P<unit>{DURATION_UNIT})\b")),
        ("anderhalf", &format!(r"\b(?:anderhalve|anderhalf) (?P<unit>{DURATION_UNIT})\b")),
    ]
}

pub fn date_period_simple_cases() -> &'static [TaggedPattern] {
    patterns![
        (
            "simplecase",
            &format!(r"\b(?:vanaf |van )?(?P<day1>\d{{1,2}}) tot (?P<day2>\d{{1,2}}) (?P<month>{MONTH})(?: (?P<year>\d{{4}}))?\b")
        ),
        (
            "between_days",
            &format!(r"\btussen (?P<day1>\d{{1,2}}) en (?P<day2>\d{{1,2}}) (?P<month>{MONTH})(?: (?P<year>\d{{4}}))?\b")
        ),
        (
            "weekofmonth",
            &format!(r"\b(?:de )?(?P<ord>eerste|tweede|derde|vierde|laatste) week van (?P<month>{MONTH})(?: (?P<year>\d{{4}}))?\b")
        ),
        (
            "quarter",
            &format!(r"\b(?:het )?(?P<ord>eerste|tweede|derde|vierde|1e|2e|3e|4e) kwartaal(?: van)?(?: (?P<year>\d{{4}}))?\b")
        ),
        ("quarter_q", r"\b[Qq](?P<qnum>[1-4])(?: (?P<year>\d{4}))?\b"),
        (
            "monthyear",
            &format!(r"\b(?P<month>{MONTH}) (?P<year>\d{{4}})\b")
        ),
        (
            "relmonth",
            &format!(r"\b(?P<rel>volgende|komende|aanstaande|vorige|afgelopen) (?P<month>{MONTH})\b")
        ),
        (
            "season",
            &format!(r"\b(?:de |het )?(?:(?P<rel>{REL}) )?(?P<season>lente|zomer|herfst|winter|voorjaar|najaar)\b")
        ),
        (
            "oneword",
            &format!(r"\b(?:(?P<rel>{REL}) )?(?P<unit>weekend|week|maand|jaar|kwartaal)\b")
        ),
        ("decade", r"\bde jaren (?P<decade>\d0)\b"),
        ("year", r"\b(?P<year>\d{4})\b"),
    ]
}

pub fn time_period_simple_cases() -> &'static [TaggedPattern] {
    patterns![
        (
            "purenum",
            r"\b(?:van |tussen )?(?P<hour1>\d{1,2}) (?:tot|en) (?P<hour2>\d{1,2}) uur\b"
        ),
        (
            "timeofday",
            r"\b(?P<tod>vanochtend|vanmorgen|vanmiddag|vanavond|vannacht)\b"
        ),
    ]
}

pub fn datetime_patterns() -> &'static [TaggedPattern] {
    patterns![(
        "now",
        r"\b(?P<now>zo meteen|zo snel mogelijk|op dit moment|meteen|nu|zojuist|zonet|daarnet|onlangs|recent|binnenkort|straks)\b"
    )]
}

pub fn datetime_period_simple_cases() -> &'static [TaggedPattern] {
    patterns![]
}

pub fn set_patterns() -> &'static [TaggedPattern] {
    patterns![
        ("periodic", r"\b(?P<periodic>dagelijks|wekelijks|maandelijks|jaarlijks)\b"),
        (
            "eachday",
            &format!(r"\b(?:elke|iedere) (?P<weekday>{WEEKDAY})\b")
        ),
        (
            "eachunit",
            r"\b(?:elke|elk|iedere|ieder) (?P<unit>dag|week|maand|jaar|uur|minuut|seconde)\b"
        ),
    ]
}

pub fn holiday_patterns() -> &'static [TaggedPattern] {
    patterns![(
        "holiday",
        &format!(r"(?i)\b(?:(?P<rel>volgende|komende|aanstaande|voorbije|vorige|afgelopen|deze) )?(?P<holiday>{HOLIDAY})(?: (?:van )?(?P<year>\d{{4}}))?\b")
    )]
}

pub fn timezone_patterns() -> &'static [TaggedPattern] {
    patterns![
        (
            "offset",
            r"\b(?:UTC|GMT)(?P<dir>[+-])(?P<hour>\d{1,2})(?::(?P<min>\d{2}))?"
        ),
        ("abbrev", r"\b(?P<abbrev>UTC|GMT|CET|CEST|WET|WEST|EET|EST|PST)\b"),
    ]
}

pub fn number_patterns() -> Vec<TaggedPattern> {
    patterns![
        ("doublenum", r"\b(?P<num>\d+,\d+)\b"),
        ("fracnum", r"\b(?P<num>\d+)/(?P<den>\d+)\b"),
        (
            "fracword",
            r"\b(?:de )?(?P<frac>driekwart|helft|anderhalve|anderhalf|een kwart|twee derde|een derde)\b"
        ),
        ("intnum", r"\b(?P<num>\d{1,3}(?:\.\d{3})+|\d+)\b"),
        ("intword", &int_word_pattern()),
    ]
    .to_vec()
}

pub fn ordinal_patterns() -> Vec<TaggedPattern> {
    patterns![
        ("ordnum", r"\b(?P<num>\d+)(?:ste|de|e)\b"),
        (
            "ordword",
            r"\b(?P<ord>eerste|tweede|derde|vierde|vijfde|zesde|zevende|achtste|negende|tiende|elfde|twaalfde|twintigste|dertigste|honderdste|duizendste)\b"
        ),
    ]
    .to_vec()
}

/// Compound cardinal words up to the thousands: "drieëntwintig",
/// "tweehonderdvijf", "drieduizend".
fn int_word_pattern() -> String {
    const UNIT: &str = "één|een|twee|drie|vier|vijf|zes|zeven|acht|negen";
    const TEEN: &str = "dertien|veertien|vijftien|zestien|zeventien|achttien|negentien|tien|elf|twaalf";
    const TENS: &str = "twintig|dertig|veertig|vijftig|zestig|zeventig|tachtig|negentig";

    let below_hundred = format!("(?:{UNIT})(?:ën|en)(?:{TENS})|{TENS}|{TEEN}|{UNIT}");
    let below_thousand = format!(
        "(?:(?:{UNIT})honderd(?:{below_hundred})?|honderd(?:{below_hundred})?|{below_hundred})"
    );
    format!(
        r"\b(?P<num>{below_thousand}?duizend{below_thousand}?|{below_thousand}|nul)\b"
    )
}

pub fn number_ambiguity_filters() -> &'static [AmbiguityFilter] {
    static FILTERS: Lazy<Vec<AmbiguityFilter>> = Lazy::new(|| {
        vec![AmbiguityFilter { key: regex!(r"^(een)$"), value: regex!("één") }]
    });
    &FILTERS
}

pub fn merged_ambiguity_filters() -> &'static [AmbiguityFilter] {
    static FILTERS: Lazy<Vec<AmbiguityFilter>> = Lazy::new(|| {
        vec![AmbiguityFilter { key: regex!(r"^\d{4}$"), value: regex!(r"^(19|20)\d{2}$") }]
    });
    &FILTERS
}

/// Standalone words too ambiguous to keep as a date/time span on their own.
pub fn term_filters() -> &'static [&'static Regex] {
    static FILTERS: Lazy<Vec<&'static Regex>> = Lazy::new(|| {
        vec![
            regex!(r"^(week|maand|jaar|dag|uur|kwartaal|weekend)$"),
            regex!(r"^(mei)$"),
            regex!(r"^(1 op 1|een op een|één op één)$"),
        ]
    });
    &FILTERS
}

pub fn till_regex() -> &'static Regex {
    regex!(r"tot en met|t/m|tot|-")
}

pub fn range_connector_regex() -> &'static Regex {
    regex!(r"en")
}

pub fn datetime_connector_regex() -> &'static Regex {
    regex!(r"om|rond|tegen|op|,")
}
