//! Date period parser.
//!
//! Resolves one-word periods ("volgende week"), month/quarter/season/decade
//! references and composite from-to spans. Composite halves are re-run
//! through the date extractor and parser; a half that does not yield exactly
//! one date reading discards the whole span.

use super::{
    EntityParser, at_midnight, last_day_of_month, next_weekday, period_timex, prev_weekday,
    shift_month, week_monday,
};
use crate::extractors::Extractor;
use crate::extractors::date::DateExtractor;
use crate::parsers::date::DateParser;
use crate::{EntityKind, ExtractResult, Resolution, ResolvedValue};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use std::collections::BTreeMap;

/// Season entry: timex code, inclusive start (month, day), exclusive end.
pub type SeasonSpec = (&'static str, (u32, u32), (u32, u32));

pub struct DatePeriodParserConfig {
    pub month_of_year: &'static BTreeMap<&'static str, u32>,
    pub season_map: &'static BTreeMap<&'static str, SeasonSpec>,
    pub ordinal_map: &'static BTreeMap<&'static str, u32>,
    /// Signed period swift for a relative modifier ("volgende" -> 1).
    pub swift_period: fn(&str) -> i64,
    pub check_both_before_after: bool,
}

pub struct DatePeriodParser {
    config: DatePeriodParserConfig,
    date_extractor: DateExtractor,
    date_parser: DateParser,
}

fn range_resolution(begin: NaiveDate, end: NaiveDate, timex: String) -> Resolution {
    Resolution::new(
        EntityKind::DatePeriod,
        timex,
        ResolvedValue::Range { begin: at_midnight(begin), end: at_midnight(end) },
    )
}

fn week_timex(monday: NaiveDate) -> String {
    let iso = monday.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}

impl DatePeriodParser {
    pub fn new(
        config: DatePeriodParserConfig,
        date_extractor: DateExtractor,
        date_parser: DateParser,
    ) -> Self {
        DatePeriodParser { config, date_extractor, date_parser }
    }

    fn swift(&self, data: &crate::MatchData) -> i64 {
        data.group("rel").map(self.config.swift_period).unwrap_or(0)
    }

    /// Resolve one from-to half to a single date, or bail out.
    fn half_date(&self, text: &str, reference: NaiveDateTime) -> Option<NaiveDate> {
        let spans = self.date_extractor.extract(text);
        if spans.len() != 1 {
            return None;
        }
        let res = self.date_parser.parse(&spans[0], reference)?;
        match res.value {
            ResolvedValue::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    fn parse_from_to(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let begin = self.half_date(span.data.group("left")?, reference)?;
        let end = self.half_date(span.data.group("right")?, reference)?;
        if end <= begin {
            return None;
        }
        Some(range_resolution(begin, end, period_timex(begin, end)))
    }

    fn parse_one_word(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let swift = self.swift(data);
        let today = reference.date();

        match data.group("unit")? {
            "week" => {
                let monday = week_monday(today) + Duration::weeks(swift);
                Some(range_resolution(monday, monday + Duration::weeks(1), week_timex(monday)))
            }
            "weekend" => {
                let saturday = week_monday(today) + Duration::days(5) + Duration::weeks(swift);
                let timex = format!("{}-WE", week_timex(week_monday(saturday)));
                Some(range_resolution(saturday, saturday + Duration::days(2), timex))
            }
            "maand" => {
                let (y, m) = shift_month(today.year(), today.month(), swift);
                self.month_range(y, m)
            }
            "jaar" => {
                let y = today.year() + swift as i32;
                self.year_range(y)
            }
            "kwartaal" => {
                let quarter = (today.month0() / 3) as i64 + swift;
                let (y, m) = shift_month(today.year(), 1, quarter * 3);
                self.quarter_range(y, (m - 1) / 3 + 1)
            }
            _ => None,
        }
    }

    fn month_range(&self, year: i32, month: u32) -> Option<Resolution> {
        let begin = NaiveDate::from_ymd_opt(year, month, 1)?;
        let (ny, nm) = shift_month(year, month, 1);
        let end = NaiveDate::from_ymd_opt(ny, nm, 1)?;
        Some(range_resolution(begin, end, format!("{year}-{month:02}")))
    }

    fn year_range(&self, year: i32) -> Option<Resolution> {
        let begin = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)?;
        Some(range_resolution(begin, end, format!("{year}")))
    }

    fn quarter_range(&self, year: i32, quarter: u32) -> Option<Resolution> {
        let begin = NaiveDate::from_ymd_opt(year, (quarter - 1) * 3 + 1, 1)?;
        let (ny, nm) = shift_month(year, begin.month(), 3);
        let end = NaiveDate::from_ymd_opt(ny, nm, 1)?;
        Some(range_resolution(begin, end, format!("{year}-Q{quarter}")))
    }

    fn parse_month_year(&self, span: &ExtractResult) -> Option<Resolution> {
        let data = &span.data;
        let month = *self.config.month_of_year.get(data.group("month")?)?;
        let year: i32 = data.group("year")?.parse().ok()?;
        self.month_range(year, month)
    }

    /// "volgende maart": the nearest occurrence in the stated direction.
    fn parse_rel_month(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let month = *self.config.month_of_year.get(data.group("month")?)?;
        let swift = self.swift(data);
        let mut year = reference.year();
        if swift > 0 && month <= reference.month() {
            year += 1;
        } else if swift < 0 && month >= reference.month() {
            year -= 1;
        }
        self.month_range(year, month)
    }

    fn parse_quarter(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let quarter = match data.group("ord") {
            Some(ord) => *self.config.ordinal_map.get(ord)?,
            None => data.group("qnum")?.parse().ok()?,
        };
        if !(1..=4).contains(&quarter) {
            return None;
        }
        let year = match data.group("year") {
            Some(y) => y.parse().ok()?,
            None => reference.year(),
        };
        self.quarter_range(year, quarter)
    }

    fn parse_season(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let &(code, (bm, bd), (em, ed)) = self.config.season_map.get(data.group("season")?)?;
        let year = reference.year() + self.swift(data) as i32;
        let begin = NaiveDate::from_ymd_opt(year, bm, bd)?;
        // Winter runs across the year boundary.
        let end_year = if (em, ed) <= (bm, bd) { year + 1 } else { year };
        let end = NaiveDate::from_ymd_opt(end_year, em, ed)?;
        Some(range_resolution(begin, end, format!("{year}-{code}")))
    }

    fn parse_week_of_month(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let month = *self.config.month_of_year.get(data.group("month")?)?;
        let year: i32 = match data.group("year") {
            Some(y) => y.parse().ok()?,
            None => reference.year(),
        };

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let first_monday =
            if first.weekday() == Weekday::Mon { first } else { next_weekday(first, Weekday::Mon) };

        let ord = data.group("ord")?;
        let monday = if ord == "laatste" {
            let last = NaiveDate::from_ymd_opt(year, month, last_day_of_month(year, month))?;
            if last.weekday() == Weekday::Mon { last } else { prev_weekday(last, Weekday::Mon) }
        } else {
            let n = *self.config.ordinal_map.get(ord)?;
            let monday = first_monday + Duration::weeks(n as i64 - 1);
            if monday.month() != month {
                return None;
            }
            monday
        };
        let end = monday + Duration::weeks(1);
        Some(range_resolution(monday, end, period_timex(monday, end)))
    }

    fn parse_decade(&self, span: &ExtractResult) -> Option<Resolution> {
        let decade: u32 = span.data.group("decade")?.parse().ok()?;
        let year = 1900 + decade as i32;
        let begin = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let end = NaiveDate::from_ymd_opt(year + 10, 1, 1)?;
        Some(range_resolution(begin, end, format!("{}X", year / 10)))
    }

    fn parse_year(&self, span: &ExtractResult) -> Option<Resolution> {
        let year: i32 = span.data.group("year")?.parse().ok()?;
        self.year_range(year)
    }

    /// "van 1 tot 5 april", "tussen 3 en 7 april".
    fn parse_simple_case(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        let data = &span.data;
        let day1: u32 = data.group("day1")?.parse().ok()?;
        let day2: u32 = data.group("day2")?.parse().ok()?;
        let month = *self.config.month_of_year.get(data.group("month")?)?;
        if day2 <= day1 {
            return None;
        }

        if let Some(year) = data.group("year") {
            let year: i32 = year.parse().ok()?;
            let begin = NaiveDate::from_ymd_opt(year, month, day1)?;
            let end = NaiveDate::from_ymd_opt(year, month, day2)?;
            return Some(range_resolution(begin, end, period_timex(begin, end)));
        }

        let year = reference.year();
        let begin = NaiveDate::from_ymd_opt(year, month, day1)?;
        let end = NaiveDate::from_ymd_opt(year, month, day2)?;
        let timex = format!(
            "(XXXX-{month:02}-{day1:02},XXXX-{month:02}-{day2:02},P{}D)",
            (end - begin).num_days()
        );

        let mut res = range_resolution(begin, end, timex);
        if self.config.check_both_before_after {
            let shift = |y: i32| -> Option<(NaiveDate, NaiveDate)> {
                Some((NaiveDate::from_ymd_opt(y, month, day1)?, NaiveDate::from_ymd_opt(y, month, day2)?))
            };
            let (fy, py) = if end < reference.date() { (year + 1, year) } else { (year, year - 1) };
            if let Some((b, e)) = shift(fy) {
                res.future_value =
                    Some(ResolvedValue::Range { begin: at_midnight(b), end: at_midnight(e) });
            }
            if let Some((b, e)) = shift(py) {
                res.past_value =
                    Some(ResolvedValue::Range { begin: at_midnight(b), end: at_midnight(e) });
            }
        }
        Some(res)
    }
}

impl EntityParser for DatePeriodParser {
    fn parse(&self, span: &ExtractResult, reference: NaiveDateTime) -> Option<Resolution> {
        match span.data.tag {
            "fromto" | "between" => self.parse_from_to(span, reference),
            "oneword" => self.parse_one_word(span, reference),
            "monthyear" => self.parse_month_year(span),
            "relmonth" => self.parse_rel_month(span, reference),
            "quarter" | "quarter_q" => self.parse_quarter(span, reference),
            "season" => self.parse_season(span, reference),
            "weekofmonth" => self.parse_week_of_month(span, reference),
            "decade" => self.parse_decade(span),
            "year" => self.parse_year(span),
            "simplecase" | "between_days" => self.parse_simple_case(span, reference),
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
    use chrono::NaiveDate;

    fn resolve(text: &str) -> crate::Resolution {
        let locale = DutchLocale::new();
        let spans = locale.date_period_extractor.extract(text);
        assert_eq!(spans.len(), 1, "expected one span in {text:?}");
        locale.date_period_parser.parse(&spans[0], Reference::default().datetime).unwrap()
    }

    fn range(res: &crate::Resolution) -> (NaiveDate, NaiveDate) {
        match res.value {
            ResolvedValue::Range { begin, end } => (begin.date(), end.date()),
            ref other => panic!("expected a range, got {other:?}"),
        }
    }

    #[test]
    fn relative_weeks() {
        // Reference 2013-02-12 (Tuesday) lies in the week of Monday 02-11.
        let (b, e) = range(&resolve("deze week"));
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 2, 11).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2013, 2, 18).unwrap());

        let (b, _) = range(&resolve("volgende week"));
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 2, 18).unwrap());

        let (b, e) = range(&resolve("vorig weekend"));
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 2, 9).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2013, 2, 11).unwrap());
    }

    #[test]
    fn relative_months_and_years() {
        let res = resolve("volgende maand");
        assert_eq!(res.timex, "2013-03");
        let res = resolve("vorig jaar");
        assert_eq!(res.timex, "2012");
    }

    #[test]
    fn month_with_year() {
        let res = resolve("maart 2024");
        assert_eq!(res.timex, "2024-03");
        let (b, e) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
    }

    #[test]
    fn quarters() {
        let res = resolve("het tweede kwartaal van 2023");
        assert_eq!(res.timex, "2023-Q2");
        let (b, e) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(2023, 4, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());

        assert_eq!(resolve("Q3 2023").timex, "2023-Q3");
    }

    #[test]
    fn seasons_and_decades() {
        let res = resolve("de zomer");
        assert_eq!(res.timex, "2013-SU");

        let res = resolve("de winter");
        let (b, e) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 12, 21).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2014, 3, 21).unwrap());

        let res = resolve("de jaren 90");
        assert_eq!(res.timex, "199X");
        let (b, e) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn from_to_merges_and_resolves() {
        let res = resolve("van 1 maart tot 15 maart");
        let (b, e) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 3, 1).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2013, 3, 15).unwrap());
        assert_eq!(res.timex, "(2013-03-01,2013-03-15,P14D)");
    }

    #[test]
    fn simple_case_without_year_offers_both_directions() {
        let res = resolve("van 3 tot 7 april");
        let (b, e) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 4, 3).unwrap());
        assert_eq!(e, NaiveDate::from_ymd_opt(2013, 4, 7).unwrap());
        assert!(res.past_value.is_some());
    }

    #[test]
    fn week_of_month() {
        let res = resolve("de eerste week van april 2013");
        let (b, _) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 4, 1).unwrap());

        let res = resolve("de laatste week van februari 2013");
        let (b, _) = range(&res);
        assert_eq!(b, NaiveDate::from_ymd_opt(2013, 2, 25).unwrap());
    }
}
