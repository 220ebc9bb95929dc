//! Lenient date parsing for bundled data and query parameters.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::constants::QUERY_DATE_FORMAT;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMATS: &[&str] = &[QUERY_DATE_FORMAT, "%B %d, %Y", "%b %d, %Y"];

/// Parses a date with optional time of day. Returns `None` for anything
/// that is not recognisable instead of failing.
pub fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        // keep the wall clock the author wrote, not the UTC instant
        return Some(dt.naive_local());
    }
    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(raw, format) {
            return Some(d.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Calendar date of `raw`, time of day ignored.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_date_time(raw).map(|dt| dt.date())
}

pub fn format_query_date(date: NaiveDate) -> String {
    date.format(QUERY_DATE_FORMAT).to_string()
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
    date.and_time(last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_plain_dates() {
        assert_eq!(parse_date("2019-01-01"), Some(ymd(2019, 1, 1)));
        assert_eq!(parse_date(" 2019-01-01 "), Some(ymd(2019, 1, 1)));
    }

    #[test]
    fn ignores_time_of_day() {
        assert_eq!(parse_date("2019-03-04T22:15:00Z"), Some(ymd(2019, 3, 4)));
        assert_eq!(parse_date("2019-03-04T22:15:00.123"), Some(ymd(2019, 3, 4)));
        assert_eq!(parse_date("2019-03-04T22:15:00-08:00"), Some(ymd(2019, 3, 4)));
    }

    #[test]
    fn parses_long_month_names() {
        assert_eq!(parse_date("June 1, 2015"), Some(ymd(2015, 6, 1)));
        assert_eq!(parse_date("Dec 31, 2019"), Some(ymd(2019, 12, 31)));
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2019-13-45"), None);
    }

    #[test]
    fn day_bounds() {
        let d = ymd(2020, 2, 29);
        assert_eq!(start_of_day(d).date(), d);
        assert_eq!(end_of_day(d).date(), d);
        assert!(start_of_day(d) < end_of_day(d));
        assert_eq!(format_query_date(d), "2020-02-29");
    }
}
