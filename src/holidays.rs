//! Holiday calendar.
//!
//! A closed set of holidays recognized by name, each mapped to its date in a
//! given year. Fixed-date holidays cover the Dutch civil calendar plus a few
//! internationally used days; movable feasts computed from the lunar
//! calendar (Easter and its dependents) have no calendar rule here and
//! return `None`.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    Kingsday,
    Queensday,
    Prinsjesdag,
    Dodenherdenking,
    Bevrijdingsdag,
    Sinterklaas,
    FirstChristmasDay,
    SecondChristmasDay,
    ChristmasEve,
    NewYear,
    NewYearEve,
    Epiphany,
    GoodFriday,
    Easter,
    LabourDay,
    StMartinsDay,
    KetiKoti,
    FathersDay,
    MothersDay,
    ValentinesDay,
    Halloween,
    AllHallowsDay,
    AllSoulsDay,
    Juneteenth,
}

impl Holiday {
    /// Look up a holiday by its canonical key (sanitized Dutch name).
    pub fn from_key(key: &str) -> Option<Holiday> {
        let holiday = match key {
            "koningsdag" => Holiday::Kingsday,
            "koninginnedag" => Holiday::Queensday,
            "prinsjesdag" => Holiday::Prinsjesdag,
            "dodenherdenking" => Holiday::Dodenherdenking,
            "bevrijdingsdag" => Holiday::Bevrijdingsdag,
            "sinterklaas" | "sinterklaasavond" | "pakjesavond" => Holiday::Sinterklaas,
            "eerstekerstdag" | "kerstmis" | "kerst" => Holiday::FirstChristmasDay,
            "tweedekerstdag" => Holiday::SecondChristmasDay,
            "kerstavond" => Holiday::ChristmasEve,
            "nieuwjaarsdag" | "nieuwjaar" => Holiday::NewYear,
            "oudejaarsavond" | "oudjaar" => Holiday::NewYearEve,
            "driekoningen" => Holiday::Epiphany,
            "goedevrijdag" => Holiday::GoodFriday,
            "pasen" | "eerstepaasdag" | "tweedepaasdag" => Holiday::Easter,
            "dagvandearbeid" => Holiday::LabourDay,
            "sintmaarten" => Holiday::StMartinsDay,
            "ketikoti" => Holiday::KetiKoti,
            "vaderdag" => Holiday::FathersDay,
            "moederdag" => Holiday::MothersDay,
            "valentijnsdag" => Holiday::ValentinesDay,
            "halloween" => Holiday::Halloween,
            "allerheiligen" => Holiday::AllHallowsDay,
            "allerzielen" => Holiday::AllSoulsDay,
            "juneteenth" => Holiday::Juneteenth,
            _ => return None,
        };
        Some(holiday)
    }

    /// The holiday's date in `year`, or `None` for movable feasts without a
    /// calendar rule.
    pub fn date_for(self, year: i32) -> Option<NaiveDate> {
        let (month, day) = match self {
            Holiday::Kingsday => (4, 27),
            Holiday::Queensday => (4, 27),
            Holiday::Prinsjesdag => (9, 20),
            Holiday::Dodenherdenking => (5, 4),
            Holiday::Bevrijdingsdag => (5, 5),
            Holiday::Sinterklaas => (12, 6),
            Holiday::FirstChristmasDay => (12, 25),
            Holiday::SecondChristmasDay => (12, 26),
            Holiday::ChristmasEve => (12, 24),
            Holiday::NewYear => (1, 1),
            Holiday::NewYearEve => (12, 31),
            Holiday::Epiphany => (1, 6),
            Holiday::GoodFriday => (4, 15),
            Holiday::Easter => return None,
            Holiday::LabourDay => (5, 1),
            Holiday::StMartinsDay => (11, 11),
            Holiday::KetiKoti => (7, 1),
            Holiday::FathersDay => (1, 20),
            Holiday::MothersDay => (5, 8),
            Holiday::ValentinesDay => (2, 14),
            Holiday::Halloween => (10, 31),
            Holiday::AllHallowsDay => (11, 1),
            Holiday::AllSoulsDay => (11, 2),
            Holiday::Juneteenth => (6, 19),
        };
        NaiveDate::from_ymd_opt(year, month, day)
    }
}
