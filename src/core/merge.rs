use crate::core::range::Interval;
use serde::Serialize;

/// Disjoint intervals sorted by start; consecutive entries are at least two
/// months apart (`next.start > prev.end + 1`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MergedIntervalSet(Vec<Interval>);

impl MergedIntervalSet {
    pub fn intervals(&self) -> &[Interval] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum of inclusive month spans.
    pub fn total_months(&self) -> u32 {
        self.0
            .iter()
            .map(Interval::months)
            .fold(0u32, u32::saturating_add)
    }
}

impl IntoIterator for MergedIntervalSet {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Merge overlapping intervals and intervals separated by at most one month.
///
/// A role ending in April and the next starting in May count as continuous.
pub fn merge_intervals<I>(intervals: I) -> MergedIntervalSet
where
    I: IntoIterator<Item = Interval>,
{
    let mut sorted: Vec<Interval> = intervals.into_iter().collect();
    sorted.sort_by_key(|interval| interval.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if interval.start.value() <= last.end.value().saturating_add(1) => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }

    MergedIntervalSet(merged)
}
