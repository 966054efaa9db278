//! Time parser.
//!
//! Clock times, spoken hours ("half drie", "kwart over acht") and the fixed
//! points ("middernacht"). Hours without an explicit day-half marker are
//! normalized by the locale's hour rule.

use super::{EntityParser, at_midnight};
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::{Duration, NaiveDateTime};
use regex::Regex;
use std::collections::BTreeMap;

pub struct TimeParserConfig {
    /// Spoken hour words ("drie" -> 3).
    pub hour_words: &'static BTreeMap<&'static str, u32>,
    /// Matches a morning marker anywhere in the span ("'s ochtends", "am").
    pub am_marker_regex: &'static Regex,
    /// Matches an afternoon/evening/night marker ("'s middags", "pm").
    pub pm_marker_regex: &'static Regex,
    /// Hour normalization rule given the markers present in the span.
    pub get_hour: fn(has_am: bool, has_pm: bool, hour: u32) -> u32,
}

pub struct TimeParser {
    config: TimeParserConfig,
}

impl TimeParser {
    pub fn new(config: TimeParserConfig) -> Self {
        TimeParser { config }
    }

    fn hour_word(&self, word: &str) -> Option<u32> {
        self.config.hour_words.get(word).copied()
    }

    fn markers(&self, text: &str) -> (bool, bool) {
        (self.config.am_marker_regex.is_match(text), self.config.pm_marker_regex.is_match(text))
    }

    /// Minutes written out in the span ("15:00") stay in the timex even when
    /// zero; a bare hour ("5 uur") stays hour-only.
    fn resolution(
        &self,
        reference: NaiveDateTime,
        hour: u32,
        minute: u32,
        second: u32,
        explicit_minutes: bool,
    ) -> Option<Resolution> {
        let time = at_midnight(reference.date())
            + Duration::hours(hour as i64)
            + Duration::minutes(minute as i64)
            + Duration::seconds(second as i64);
        let timex = if second > 0 {
            format!("T{hour:02}:{minute:02}:{second:02}")
        } else if minute > 0 || explicit_minutes {
            format!("T{hour:02}:{minute:02}")
        } else {
            format!("T{hour:02}")
        };
        Some(Resolution::new(EntityKind::Time, timex, ResolvedValue::DateTime(time)))
    }

    /// "14:30", "10:15:30", optionally with a day-half marker.
    fn parse_clock(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let mut hour: u32 = data.group("hour")?.parse().ok()?;
        let minute: u32 = data.group("min").and_then(|m| m.parse().ok()).unwrap_or(0);
        let second: u32 = data.group("sec").and_then(|s| s.parse().ok()).unwrap_or(0);
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }

        // A written clock time is taken at face value; markers only adjust
        // the half-day when they disagree with the digits.
        if data.group("desc").is_some() {
            let (has_am, has_pm) = self.markers(&span.text);
            if has_am && hour == 12 {
                hour = 0;
            } else if has_pm && hour < 12 {
                hour += 12;
            }
        }
        self.resolution(reference, hour, minute, second, data.group("min").is_some())
    }

    /// "3 uur", "8 uur 15" and the spoken "acht uur".
    fn parse_oclock(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let hour: u32 = match data.group("hour") {
            Some(digits) => digits.parse().ok()?,
            None => self.hour_word(data.group("hourword")?)?,
        };
        let minute: u32 = data.group("min").and_then(|m| m.parse().ok()).unwrap_or(0);
        if hour > 23 || minute > 59 {
            return None;
        }
        let (has_am, has_pm) = self.markers(&span.text);
        let hour = (self.config.get_hour)(has_am, has_pm, hour);
        self.resolution(reference, hour, minute, 0, data.group("min").is_some())
    }

    /// "kwart over drie", "tien voor acht".
    fn parse_relative(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let hour = self.hour_word(data.group("hourword")?)?;
        let delta: i64 = match data.group("relmin")? {
            "kwart" => 15,
            "tien" => 10,
            "vijf" => 5,
            _ => return None,
        };
        let (hour, minute) = match data.group("reldir")? {
            "over" => (hour, delta as u32),
            "voor" => (if hour == 0 { 23 } else { hour - 1 }, (60 - delta) as u32),
            _ => return None,
        };
        let (has_am, has_pm) = self.markers(&span.text);
        let hour = (self.config.get_hour)(has_am, has_pm, hour);
        self.resolution(reference, hour, minute, 0, true)
    }

    /// "half drie" is half past two.
    fn parse_half(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let hour = self.hour_word(data.group("hourword")?)?;
        let hour = if hour == 0 { 23 } else { hour - 1 };
        let (has_am, has_pm) = self.markers(&span.text);
        let hour = (self.config.get_hour)(has_am, has_pm, hour);
        self.resolution(reference, hour, 30, 0, true)
    }

    fn parse_fixed(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let (hour, timex) = match span.data.group("mid")? {
            "middernacht" => (0, "T00"),
            "het middaguur" | "middaguur" => (12, "T12"),
            _ => return None,
        };
        let time = at_midnight(reference.date()) + Duration::hours(hour);
        Some(Resolution::new(EntityKind::Time, timex, ResolvedValue::DateTime(time)))
    }
}

impl EntityParser for TimeParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        match span.data.tag {
            "basic" => self.parse_clock(span, reference),
            "oclock" | "hourword" => self.parse_oclock(span, reference),
            "relative" => self.parse_relative(span, reference),
            "half" => self.parse_half(span, reference),
            "mid" => self.parse_fixed(span, reference),
            _ => None,
        }
    }
}
