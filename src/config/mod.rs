pub mod toml_config;

use crate::core::period::{parse_month_year, MonthIndex};
use crate::core::ConfigProvider;
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{validate_one_of, validate_path, validate_required_field, Validate};
use serde::{Deserialize, Serialize};
use toml_config::{TomlConfig, OUTPUT_FORMATS, SECTIONS};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "portfolio-experience"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Compute years of experience from portfolio data")
)]
pub struct CliConfig {
    /// Portfolio data file (.toml or .json)
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub data: Option<String>,

    /// TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Section to measure: work, projects or education
    #[cfg_attr(feature = "cli", arg(long))]
    pub section: Option<String>,

    /// Month treated as "Present", e.g. "Mar 2026"
    #[cfg_attr(feature = "cli", arg(long))]
    pub as_of: Option<String>,

    /// Output format: text, json or csv
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub format: Option<String>,

    /// Print the portfolio summary instead of a section report
    #[cfg_attr(feature = "cli", arg(long))]
    pub summary: bool,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,

    /// Write logs to stderr as JSON lines
    #[cfg_attr(feature = "cli", arg(long))]
    pub log_json: bool,
}

impl CliConfig {
    /// 命令列參數優先，未指定時使用設定檔的值
    pub fn apply_file(&mut self, file: &TomlConfig) {
        if self.data.is_none() {
            self.data = file.data_path().map(str::to_string);
        }
        if self.section.is_none() {
            self.section = Some(file.section().to_string());
        }
        if self.as_of.is_none() {
            self.as_of = file.as_of().map(str::to_string);
        }
        if self.format.is_none() {
            self.format = Some(file.output_format().to_string());
        }
        if file.log_format() == "json" {
            self.log_json = true;
        }
    }

    /// The pinned "current" month, if `--as-of` was given.
    pub fn as_of_month(&self) -> Result<Option<MonthIndex>> {
        match self.as_of.as_deref() {
            None => Ok(None),
            Some(value) => parse_month_year(value).map(Some).ok_or_else(|| {
                PortfolioError::InvalidConfigValueError {
                    field: "as_of".to_string(),
                    value: value.to_string(),
                    reason: "Expected a month like \"Mar 2026\"".to_string(),
                }
            }),
        }
    }
}

impl ConfigProvider for CliConfig {
    fn data_path(&self) -> Option<&str> {
        self.data.as_deref()
    }

    fn section(&self) -> &str {
        self.section.as_deref().unwrap_or("work")
    }

    fn output_format(&self) -> &str {
        self.format.as_deref().unwrap_or("text")
    }

    fn as_of(&self) -> Option<&str> {
        self.as_of.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let path = validate_required_field("data", &self.data)?;
        validate_path("data", path)?;
        validate_one_of("section", self.section(), &SECTIONS)?;
        validate_one_of("format", self.output_format(), &OUTPUT_FORMATS)?;
        self.as_of_month()?;
        Ok(())
    }
}
