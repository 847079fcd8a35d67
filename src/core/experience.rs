use crate::core::clock::{Clock, SystemClock};
use crate::core::merge::{merge_intervals, MergedIntervalSet};
use crate::core::range::{resolve_period, Interval};
use crate::domain::HasPeriod;
use serde::Serialize;

/// Totals under half a year are not reported.
pub const MIN_REPORTABLE_YEARS: f64 = 0.5;

/// Why an experience figure is or is not available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExperienceOutcome {
    /// No records were supplied.
    NoData,
    /// Records were supplied but none had a usable period.
    Unresolvable { rejected: usize },
    BelowThreshold { years: f64, total_months: u32 },
    Computed { years: f64, total_months: u32 },
}

impl ExperienceOutcome {
    /// The reportable figure, if any.
    pub fn years(&self) -> Option<f64> {
        match self {
            ExperienceOutcome::Computed { years, .. } => Some(*years),
            _ => None,
        }
    }

    pub fn total_months(&self) -> u32 {
        match self {
            ExperienceOutcome::Computed { total_months, .. }
            | ExperienceOutcome::BelowThreshold { total_months, .. } => *total_months,
            _ => 0,
        }
    }

    fn from_merged(merged: &MergedIntervalSet) -> Self {
        let total_months = merged.total_months();
        let years = months_to_years(total_months);
        if years >= MIN_REPORTABLE_YEARS {
            ExperienceOutcome::Computed {
                years,
                total_months,
            }
        } else {
            ExperienceOutcome::BelowThreshold {
                years,
                total_months,
            }
        }
    }
}

/// Months to years, rounded half-up to one decimal place.
pub fn months_to_years(total_months: u32) -> f64 {
    (total_months as f64 / 12.0 * 10.0).round() / 10.0
}

/// Resolve every record against `clock`, dropping the ones that do not parse.
pub(crate) fn resolve_all<R, C>(records: &[R], clock: &C) -> Vec<Interval>
where
    R: HasPeriod,
    C: Clock + ?Sized,
{
    records
        .iter()
        .filter_map(|record| {
            let resolved = resolve_period(record.period(), clock);
            if resolved.is_none() {
                tracing::debug!("Skipping unresolvable period: {:?}", record.period());
            }
            resolved
        })
        .collect()
}

pub(crate) fn outcome_for(
    supplied: usize,
    resolved: &[Interval],
    merged: &MergedIntervalSet,
) -> ExperienceOutcome {
    if supplied == 0 {
        ExperienceOutcome::NoData
    } else if resolved.is_empty() {
        ExperienceOutcome::Unresolvable { rejected: supplied }
    } else {
        ExperienceOutcome::from_merged(merged)
    }
}

/// Full assessment of a record list, keeping the reason when no figure is
/// reported.
pub fn assess_experience<R, C>(records: Option<&[R]>, clock: &C) -> ExperienceOutcome
where
    R: HasPeriod,
    C: Clock + ?Sized,
{
    let records = records.unwrap_or(&[]);
    let resolved = resolve_all(records, clock);
    let merged = merge_intervals(resolved.iter().copied());
    let outcome = outcome_for(records.len(), &resolved, &merged);

    tracing::debug!(
        records = records.len(),
        resolved = resolved.len(),
        spans = merged.len(),
        "Assessed experience: {:?}",
        outcome
    );
    outcome
}

/// Years of experience covered by `records`, measured against `clock`.
///
/// `None` when there is nothing to report: no records, no parsable records,
/// or less than half a year in total.
pub fn calculate_experience_years_at<R, C>(records: Option<&[R]>, clock: &C) -> Option<f64>
where
    R: HasPeriod,
    C: Clock + ?Sized,
{
    assess_experience(records, clock).years()
}

/// [`calculate_experience_years_at`] with the system clock.
pub fn calculate_experience_years<R: HasPeriod>(records: Option<&[R]>) -> Option<f64> {
    calculate_experience_years_at(records, &SystemClock)
}
