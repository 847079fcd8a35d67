use chrono::Datelike;
use serde::{Serialize, Serializer};
use std::fmt;

/// Three-letter English month abbreviations, January first.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Years accepted by [`MonthIndex::new`]: anything with four digits.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// A calendar month encoded as `year * 12 + month0` (January = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthIndex(i64);

impl MonthIndex {
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        if month0 >= 12 || !YEAR_RANGE.contains(&year) {
            return None;
        }
        Some(MonthIndex(year as i64 * 12 + month0 as i64))
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        MonthIndex(date.year() as i64 * 12 + date.month0() as i64)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn year(self) -> i64 {
        self.0.div_euclid(12)
    }

    pub fn month0(self) -> u32 {
        self.0.rem_euclid(12) as u32
    }

    /// Inclusive number of months from `self` to `end`.
    pub fn months_until(self, end: MonthIndex) -> i64 {
        end.0.saturating_sub(self.0).saturating_add(1)
    }
}

impl fmt::Display for MonthIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abbr = MONTH_ABBREVIATIONS[self.month0() as usize];
        let mut chars = abbr.chars();
        let first = chars.next().map(|c| c.to_ascii_uppercase()).unwrap_or_default();
        write!(f, "{}{} {:04}", first, chars.as_str(), self.year())
    }
}

impl Serialize for MonthIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Parse a `"Mon YYYY"` token into a [`MonthIndex`].
///
/// Case-insensitive, surrounding whitespace ignored, one or more whitespace
/// characters between month and year, year exactly four ASCII digits.
/// `"present"` is not a month and yields `None`.
pub fn parse_month_year(value: &str) -> Option<MonthIndex> {
    let raw = value.trim().to_lowercase();
    if raw.is_empty() || raw == "present" {
        return None;
    }

    let (month, year) = raw.split_once(char::is_whitespace)?;
    let year = year.trim_start();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let month0 = MONTH_ABBREVIATIONS.iter().position(|abbr| *abbr == month)?;
    let year: i32 = year.parse().ok()?;

    MonthIndex::new(year, month0 as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_month_and_year_round_trips() {
        for year in 1900..=2100 {
            for (month0, abbr) in MONTH_ABBREVIATIONS.iter().enumerate() {
                let expected = year as i64 * 12 + month0 as i64;
                let upper = abbr.to_uppercase();
                let mut title = upper[..1].to_string();
                title.push_str(&abbr[1..]);

                for token in [abbr.to_string(), upper, title] {
                    let parsed = parse_month_year(&format!("{} {}", token, year));
                    assert_eq!(parsed.map(MonthIndex::value), Some(expected), "{} {}", token, year);
                }
            }
        }
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(parse_month_year("  Mar 2024 "), MonthIndex::new(2024, 2));
        assert_eq!(parse_month_year("Mar    2024"), MonthIndex::new(2024, 2));
        assert_eq!(parse_month_year("Mar\t2024"), MonthIndex::new(2024, 2));
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        for token in [
            "",
            "   ",
            "present",
            "Present",
            "March 2024",
            "Mar2024",
            "Mar 24",
            "Mar 20245",
            "Mar 2024 extra",
            "Foo 2024",
            "2024 Mar",
            "Mar -024",
            "Fall 2024",
        ] {
            assert_eq!(parse_month_year(token), None, "{:?}", token);
        }
    }

    #[test]
    fn test_display_formats_as_month_year() {
        let idx = parse_month_year("sep 2022").unwrap();
        assert_eq!(idx.to_string(), "Sep 2022");
        assert_eq!(idx.year(), 2022);
        assert_eq!(idx.month0(), 8);
    }

    #[test]
    fn test_months_until_is_inclusive() {
        let jan = MonthIndex::new(2024, 0).unwrap();
        assert_eq!(jan.months_until(jan), 1);
        assert_eq!(jan.months_until(MonthIndex::new(2024, 5).unwrap()), 6);
    }

    #[test]
    fn test_new_rejects_out_of_range_month() {
        assert_eq!(MonthIndex::new(2024, 12), None);
    }

    #[test]
    fn test_new_rejects_years_without_four_digits() {
        assert_eq!(MonthIndex::new(178956970, 7), None);
        assert_eq!(MonthIndex::new(10000, 0), None);
        assert_eq!(MonthIndex::new(-1, 0), None);
        assert_eq!(MonthIndex::new(9999, 11).map(MonthIndex::value), Some(119999));
        assert_eq!(MonthIndex::new(0, 0).map(MonthIndex::value), Some(0));
    }

    #[test]
    fn test_from_date_handles_chrono_extremes() {
        use chrono::NaiveDate;
        let max = MonthIndex::from_date(&NaiveDate::MAX);
        let min = MonthIndex::from_date(&NaiveDate::MIN);
        assert!(max > min);
        assert_eq!(max.year(), NaiveDate::MAX.year() as i64);
        assert!(min.months_until(max) > 0);
    }
}
