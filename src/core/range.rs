use crate::core::clock::Clock;
use crate::core::period::{parse_month_year, MonthIndex};
use serde::Serialize;

/// Characters separating the start and end of a period: en-dash and hyphen.
///
/// Formats that use hyphens inside a date (ISO `2024-01-01`) are not supported
/// and end up with more than two segments.
pub const PERIOD_DELIMITERS: [char; 2] = ['\u{2013}', '-'];

const PRESENT: &str = "present";

/// Inclusive span of months, `end >= start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    pub(crate) start: MonthIndex,
    pub(crate) end: MonthIndex,
}

impl Interval {
    pub fn new(start: MonthIndex, end: MonthIndex) -> Option<Self> {
        (end >= start).then_some(Self { start, end })
    }

    pub fn start(&self) -> MonthIndex {
        self.start
    }

    pub fn end(&self) -> MonthIndex {
        self.end
    }

    /// Inclusive month count, saturating at `u32::MAX`.
    pub fn months(&self) -> u32 {
        u32::try_from(self.start.months_until(self.end)).unwrap_or(u32::MAX)
    }
}

/// Resolve a `"Mon YYYY - Mon YYYY"` or `"Mon YYYY – Present"` string.
///
/// Returns `None` unless the string splits into exactly two non-empty
/// segments, both resolve, and the end is not before the start.
pub fn resolve_period<C: Clock + ?Sized>(period: &str, clock: &C) -> Option<Interval> {
    let parts: Vec<&str> = period
        .split(&PERIOD_DELIMITERS[..])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();

    let [start, end] = parts.as_slice() else {
        return None;
    };

    let start = parse_month_year(start)?;
    let end = if end.to_lowercase() == PRESENT {
        clock.current_month()
    } else {
        parse_month_year(end)?
    };

    Interval::new(start, end)
}
