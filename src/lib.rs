pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::local::LocalSource;
pub use config::{toml_config::TomlConfig, CliConfig};

pub use crate::core::{
    clock::{Clock, FixedClock, SystemClock},
    experience::{
        assess_experience, calculate_experience_years, calculate_experience_years_at,
        ExperienceOutcome, MIN_REPORTABLE_YEARS,
    },
    loader::load_portfolio,
    merge::{merge_intervals, MergedIntervalSet},
    period::{parse_month_year, MonthIndex},
    range::{resolve_period, Interval, PERIOD_DELIMITERS},
    report::{format_years_experience, ExperienceReport},
    summary::PortfolioSummary,
};
pub use domain::{HasPeriod, PeriodRecord, PortfolioData};
pub use utils::error::{PortfolioError, Result};
