use crate::core::clock::Clock;
use crate::core::experience::{outcome_for, ExperienceOutcome};
use crate::core::merge::{merge_intervals, MergedIntervalSet};
use crate::core::range::{resolve_period, Interval};
use crate::domain::Labelled;
use crate::utils::error::{PortfolioError, Result};
use serde::Serialize;
use std::io::Write;

/// One input record and what its period resolved to.
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub label: String,
    pub period: String,
    pub interval: Option<Interval>,
    pub months: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceReport {
    pub entries: Vec<ReportEntry>,
    pub merged: MergedIntervalSet,
    pub total_months: u32,
    pub outcome: ExperienceOutcome,
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    label: &'a str,
    period: &'a str,
    start: String,
    end: String,
    months: u32,
    status: &'static str,
}

impl ExperienceReport {
    pub fn build<R, C>(records: &[R], clock: &C) -> Self
    where
        R: Labelled,
        C: Clock + ?Sized,
    {
        let entries: Vec<ReportEntry> = records
            .iter()
            .map(|record| {
                let interval = resolve_period(record.period(), clock);
                if interval.is_none() {
                    tracing::warn!(
                        "⚠️ Ignoring '{}': unrecognised period {:?}",
                        record.label(),
                        record.period()
                    );
                }
                ReportEntry {
                    label: record.label().to_string(),
                    period: record.period().to_string(),
                    months: interval.as_ref().map(Interval::months).unwrap_or(0),
                    interval,
                }
            })
            .collect();

        let resolved: Vec<Interval> = entries.iter().filter_map(|e| e.interval).collect();
        let merged = merge_intervals(resolved.iter().copied());
        let outcome = outcome_for(entries.len(), &resolved, &merged);

        Self {
            total_months: merged.total_months(),
            entries,
            merged,
            outcome,
        }
    }

    pub fn years(&self) -> Option<f64> {
        self.outcome.years()
    }

    /// `"1.7 Years Experience"`, or `None` when the figure should be omitted.
    pub fn display_text(&self) -> Option<String> {
        self.years().map(format_years_experience)
    }

    pub fn rejected(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|e| e.interval.is_none())
    }

    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        self.write_lines(&mut out).map_err(PortfolioError::output)
    }

    fn write_lines<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for entry in &self.entries {
            match &entry.interval {
                Some(interval) => writeln!(
                    out,
                    "  {:<32} {} - {} ({} months)",
                    entry.label,
                    interval.start(),
                    interval.end(),
                    entry.months
                )?,
                None => writeln!(out, "  {:<32} {:?} (ignored)", entry.label, entry.period)?,
            }
        }

        writeln!(out, "Merged spans:")?;
        for span in self.merged.intervals() {
            writeln!(
                out,
                "  {} - {} ({} months)",
                span.start(),
                span.end(),
                span.months()
            )?;
        }
        writeln!(out, "Total months: {}", self.total_months)?;

        match self.outcome {
            ExperienceOutcome::Computed { .. } => {
                if let Some(text) = self.display_text() {
                    writeln!(out, "{}", text)?;
                }
            }
            ExperienceOutcome::BelowThreshold { years, .. } => {
                writeln!(out, "Below reportable threshold ({:.1} years)", years)?
            }
            ExperienceOutcome::Unresolvable { rejected } => {
                writeln!(out, "No usable periods ({} rejected)", rejected)?
            }
            ExperienceOutcome::NoData => writeln!(out, "No records")?,
        }
        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: W) -> Result<()> {
        serde_json::to_writer_pretty(out, self).map_err(PortfolioError::output)
    }

    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        for entry in &self.entries {
            let (start, end, status) = match &entry.interval {
                Some(interval) => (
                    interval.start().to_string(),
                    interval.end().to_string(),
                    "included",
                ),
                None => (String::new(), String::new(), "ignored"),
            };
            writer.serialize(CsvRow {
                label: &entry.label,
                period: &entry.period,
                start,
                end,
                months: entry.months,
                status,
            })?;
        }
        writer.flush().map_err(PortfolioError::output)
    }
}

/// Presentation text for a reportable figure, one decimal place.
pub fn format_years_experience(years: f64) -> String {
    format!("{:.1} Years Experience", years)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::period::MonthIndex;
    use crate::domain::model::WorkExperience;

    fn job(company: &str, period: &str) -> WorkExperience {
        WorkExperience {
            company: company.to_string(),
            period: period.to_string(),
            position: "Frontend Developer".to_string(),
            responsibilities: vec![],
        }
    }

    fn clock() -> FixedClock {
        FixedClock(MonthIndex::new(2026, 2).unwrap())
    }

    #[test]
    fn test_report_breakdown() {
        let jobs = vec![
            job("FSoft", "Dec 2023 - Apr 2024"),
            job("Axpara", "Sep 2022 - Nov 2023"),
            job("Mystery", "sometime"),
        ];
        let report = ExperienceReport::build(&jobs, &clock());

        assert_eq!(report.entries.len(), 3);
        assert_eq!(report.entries[0].months, 5);
        assert_eq!(report.entries[1].months, 15);
        assert_eq!(report.rejected().count(), 1);
        assert_eq!(report.merged.len(), 1);
        assert_eq!(report.total_months, 20);
        assert_eq!(report.display_text().as_deref(), Some("1.7 Years Experience"));
    }

    #[test]
    fn test_display_text_omitted_below_threshold() {
        let jobs = vec![job("Startup", "Nov 2025 - Present")];
        let report = ExperienceReport::build(&jobs, &clock());
        assert_eq!(report.total_months, 5);
        assert_eq!(report.display_text(), None);
    }

    #[test]
    fn test_whole_years_keep_one_decimal() {
        assert_eq!(format_years_experience(1.0), "1.0 Years Experience");
    }

    #[test]
    fn test_write_text() {
        let jobs = vec![job("Axpara", "Sep 2022 - Nov 2023"), job("Broken", "n/a")];
        let report = ExperienceReport::build(&jobs, &clock());

        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Sep 2022 - Nov 2023 (15 months)"));
        assert!(text.contains("(ignored)"));
        assert!(text.contains("1.3 Years Experience"));
    }

    #[test]
    fn test_write_csv() {
        let jobs = vec![job("Axpara", "Sep 2022 - Nov 2023"), job("Broken", "n/a")];
        let report = ExperienceReport::build(&jobs, &clock());

        let mut out = Vec::new();
        report.write_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "label,period,start,end,months,status");
        assert_eq!(lines[1], "Axpara,Sep 2022 - Nov 2023,Sep 2022,Nov 2023,15,included");
        assert_eq!(lines[2], "Broken,n/a,,,0,ignored");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_failures_exit_with_output_code() {
        let jobs = vec![job("Axpara", "Sep 2022 - Nov 2023")];
        let report = ExperienceReport::build(&jobs, &clock());

        for result in [
            report.write_text(ClosedPipe),
            report.write_json(ClosedPipe),
            report.write_csv(ClosedPipe),
        ] {
            let err = result.unwrap_err();
            assert_eq!(err.category(), crate::utils::error::ErrorCategory::Output, "{}", err);
            assert_eq!(err.exit_code(), 3);
        }
    }

    #[test]
    fn test_write_json() {
        let jobs = vec![job("Axpara", "Sep 2022 - Nov 2023")];
        let report = ExperienceReport::build(&jobs, &clock());

        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["outcome"]["status"], "computed");
        assert_eq!(value["outcome"]["years"], 1.3);
        assert_eq!(value["merged"][0]["start"], "Sep 2022");
        assert_eq!(value["entries"][0]["interval"]["end"], "Nov 2023");
    }
}
