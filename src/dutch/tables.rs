//! Dutch lookup tables. Keys are lowercase; capture groups are lowercased
//! before lookup.

use crate::parsers::date_period::SeasonSpec;
use crate::parsers::time_period::TimeOfDaySpec;
use chrono::Weekday;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

pub fn month_of_year() -> &'static BTreeMap<&'static str, u32> {
    static MAP: Lazy<BTreeMap<&'static str, u32>> = Lazy::new(|| {
        [
            ("januari", 1),
            ("februari", 2),
            ("maart", 3),
            ("april", 4),
            ("mei", 5),
            ("juni", 6),
            ("juli", 7),
            ("augustus", 8),
            ("september", 9),
            ("oktober", 10),
            ("november", 11),
            ("december", 12),
            ("jan", 1),
            ("feb", 2),
            ("mrt", 3),
            ("apr", 4),
            ("jun", 6),
            ("jul", 7),
            ("aug", 8),
            ("sep", 9),
            ("sept", 9),
            ("okt", 10),
            ("nov", 11),
            ("dec", 12),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn day_of_week() -> &'static BTreeMap<&'static str, Weekday> {
    static MAP: Lazy<BTreeMap<&'static str, Weekday>> = Lazy::new(|| {
        [
            ("maandag", Weekday::Mon),
            ("dinsdag", Weekday::Tue),
            ("woensdag", Weekday::Wed),
            ("donderdag", Weekday::Thu),
            ("vrijdag", Weekday::Fri),
            ("zaterdag", Weekday::Sat),
            ("zondag", Weekday::Sun),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

/// Spoken hours, including the inflected forms used after "om".
pub fn hour_words() -> &'static BTreeMap<&'static str, u32> {
    static MAP: Lazy<BTreeMap<&'static str, u32>> = Lazy::new(|| {
        [
            ("een", 1),
            ("één", 1),
            ("twee", 2),
            ("drie", 3),
            ("vier", 4),
            ("vijf", 5),
            ("zes", 6),
            ("zessen", 6),
            ("zeven", 7),
            ("acht", 8),
            ("achten", 8),
            ("negen", 9),
            ("tien", 10),
            ("tienen", 10),
            ("elf", 11),
            ("twaalf", 12),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn cardinal_map() -> &'static BTreeMap<&'static str, i64> {
    static MAP: Lazy<BTreeMap<&'static str, i64>> = Lazy::new(|| {
        [
            ("nul", 0),
            ("een", 1),
            ("één", 1),
            ("twee", 2),
            ("drie", 3),
            ("vier", 4),
            ("vijf", 5),
            ("zes", 6),
            ("zeven", 7),
            ("acht", 8),
            ("negen", 9),
            ("tien", 10),
            ("elf", 11),
            ("twaalf", 12),
            ("dertien", 13),
            ("veertien", 14),
            ("vijftien", 15),
            ("zestien", 16),
            ("zeventien", 17),
            ("achttien", 18),
            ("negentien", 19),
            ("twintig", 20),
            ("dertig", 30),
            ("veertig", 40),
            ("vijftig", 50),
            ("zestig", 60),
            ("zeventig", 70),
            ("tachtig", 80),
            ("negentig", 90),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn ordinal_word_map() -> &'static BTreeMap<&'static str, i64> {
    static MAP: Lazy<BTreeMap<&'static str, i64>> = Lazy::new(|| {
        [
            ("eerste", 1),
            ("tweede", 2),
            ("derde", 3),
            ("vierde", 4),
            ("vijfde", 5),
            ("zesde", 6),
            ("zevende", 7),
            ("achtste", 8),
            ("negende", 9),
            ("tiende", 10),
            ("elfde", 11),
            ("twaalfde", 12),
            ("twintigste", 20),
            ("dertigste", 30),
            ("honderdste", 100),
            ("duizendste", 1000),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

/// Ordinals usable in period positions ("het tweede kwartaal").
pub fn period_ordinal_map() -> &'static BTreeMap<&'static str, u32> {
    static MAP: Lazy<BTreeMap<&'static str, u32>> = Lazy::new(|| {
        [
            ("eerste", 1),
            ("tweede", 2),
            ("derde", 3),
            ("vierde", 4),
            ("1e", 1),
            ("2e", 2),
            ("3e", 3),
            ("4e", 4),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn fraction_map() -> &'static BTreeMap<&'static str, f64> {
    static MAP: Lazy<BTreeMap<&'static str, f64>> = Lazy::new(|| {
        [
            ("driekwart", 0.75),
            ("helft", 0.5),
            ("een kwart", 0.25),
            ("een derde", 1.0 / 3.0),
            ("twee derde", 2.0 / 3.0),
            ("anderhalf", 1.5),
            ("anderhalve", 1.5),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn unit_map() -> &'static BTreeMap<&'static str, &'static str> {
    static MAP: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
        [
            ("seconde", "S"),
            ("seconden", "S"),
            ("minuut", "M"),
            ("minuten", "M"),
            ("uur", "H"),
            ("uren", "H"),
            ("dag", "D"),
            ("dagen", "D"),
            ("week", "W"),
            ("weken", "W"),
            ("maand", "MON"),
            ("maanden", "MON"),
            ("jaar", "Y"),
            ("jaren", "Y"),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn unit_seconds() -> &'static BTreeMap<&'static str, i64> {
    static MAP: Lazy<BTreeMap<&'static str, i64>> = Lazy::new(|| {
        [
            ("S", 1),
            ("M", 60),
            ("H", 3600),
            ("D", 86400),
            ("W", 604800),
            ("MON", 2592000),
            ("Y", 31536000),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn periodic_map() -> &'static BTreeMap<&'static str, &'static str> {
    static MAP: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
        [
            ("dagelijks", "P1D"),
            ("wekelijks", "P1W"),
            ("maandelijks", "P1M"),
            ("jaarlijks", "P1Y"),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn time_of_day_map() -> &'static BTreeMap<&'static str, TimeOfDaySpec> {
    static MAP: Lazy<BTreeMap<&'static str, TimeOfDaySpec>> = Lazy::new(|| {
        [
            ("vanochtend", ("MO", 8, 12)),
            ("vanmorgen", ("MO", 8, 12)),
            ("vanmiddag", ("AF", 12, 16)),
            ("vanavond", ("EV", 16, 20)),
            ("vannacht", ("NI", 20, 24)),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

pub fn season_map() -> &'static BTreeMap<&'static str, SeasonSpec> {
    static MAP: Lazy<BTreeMap<&'static str, SeasonSpec>> = Lazy::new(|| {
        [
            ("lente", ("SP", (3, 21), (6, 21))),
            ("voorjaar", ("SP", (3, 21), (6, 21))),
            ("zomer", ("SU", (6, 21), (9, 23))),
            ("herfst", ("FA", (9, 23), (12, 21))),
            ("najaar", ("FA", (9, 23), (12, 21))),
            ("winter", ("WI", (12, 21), (3, 21))),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}

/// Timezone abbreviations to offset minutes; keys are lowercase.
pub fn timezone_abbreviations() -> &'static BTreeMap<&'static str, i32> {
    static MAP: Lazy<BTreeMap<&'static str, i32>> = Lazy::new(|| {
        [
            ("utc", 0),
            ("gmt", 0),
            ("wet", 0),
            ("cet", 60),
            ("west", 60),
            ("cest", 120),
            ("eet", 120),
            ("est", -300),
            ("pst", -480),
        ]
        .into_iter()
        .collect()
    });
    &MAP
}
