use clap::Parser;
use portfolio_experience::core::ConfigProvider;
use portfolio_experience::utils::{logger, validation::Validate};
use portfolio_experience::{
    format_years_experience, CliConfig, Clock, ExperienceOutcome, ExperienceReport, FixedClock,
    PortfolioData, PortfolioError, PortfolioSummary, SystemClock, TomlConfig,
};
use std::io::Write;

fn main() {
    let mut config = CliConfig::parse();

    // 載入設定檔 (若有指定)
    let mut log_level = None;
    if let Some(path) = config.config.clone() {
        let file = match TomlConfig::from_file(&path).and_then(|file| {
            file.validate()?;
            Ok(file)
        }) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        };
        log_level = file.log_level().map(str::to_string);
        config.apply_file(&file);
    }

    if config.log_json {
        logger::init_json_logger(config.verbose, log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, log_level.as_deref());
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let clock: Box<dyn Clock> = match config.as_of_month() {
        Ok(Some(month)) => {
            tracing::info!("🔧 Treating {} as the current month", month);
            Box::new(FixedClock(month))
        }
        Ok(None) => Box::new(SystemClock),
        Err(e) => fail(&e),
    };

    let data_path = config.data_path().unwrap_or_default();
    let data = match PortfolioData::from_file(data_path) {
        Ok(data) => data,
        Err(e) => fail(&e),
    };

    if let Err(e) = data.validate() {
        tracing::warn!("⚠️ Portfolio data has problems: {}", e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if config.summary {
        let summary = PortfolioSummary::from_portfolio(&data, clock.as_ref());
        let written = match config.output_format() {
            "json" => serde_json::to_writer_pretty(&mut out, &summary)
                .map_err(PortfolioError::output)
                .and_then(|_| writeln!(out).map_err(PortfolioError::output)),
            "text" => write_summary(&mut out, &summary).map_err(PortfolioError::output),
            other => fail(&PortfolioError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "The summary supports text and json".to_string(),
            }),
        };
        if let Err(e) = written.and_then(|_| out.flush().map_err(PortfolioError::output)) {
            fail(&e);
        }
        return;
    }

    let report = match config.section() {
        "projects" => ExperienceReport::build(&data.projects, clock.as_ref()),
        "education" => ExperienceReport::build(&data.education, clock.as_ref()),
        _ => ExperienceReport::build(&data.work_experience, clock.as_ref()),
    };

    let written = match config.output_format() {
        "json" => report
            .write_json(&mut out)
            .and_then(|_| writeln!(out).map_err(PortfolioError::output)),
        "csv" => report.write_csv(&mut out),
        _ => writeln!(out, "📋 {} ({})", data.personal_info.name, config.section())
            .map_err(PortfolioError::output)
            .and_then(|_| report.write_text(&mut out)),
    };
    if let Err(e) = written.and_then(|_| out.flush().map_err(PortfolioError::output)) {
        fail(&e);
    }

    match report.years() {
        Some(years) => tracing::info!("✅ {} years of {} experience", years, config.section()),
        None => tracing::info!("ℹ️ No reportable {} experience", config.section()),
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &PortfolioSummary) -> std::io::Result<()> {
    writeln!(out, "📋 {}", summary.name)?;
    writeln!(out, "  Companies:    {}", summary.companies)?;
    writeln!(out, "  Projects:     {}", summary.projects)?;
    writeln!(out, "  Technologies: {}", summary.technologies)?;
    writeln!(out, "  Certificates: {}", summary.certifications)?;
    if let Some(gpa) = &summary.gpa {
        writeln!(out, "  GPA:          {}", gpa)?;
    }
    for (label, outcome) in [
        ("Work", &summary.work_experience),
        ("Projects", &summary.project_experience),
        ("Education", &summary.education_years),
    ] {
        let text = match outcome {
            ExperienceOutcome::Computed { years, .. } => format_years_experience(*years),
            _ => "-".to_string(),
        };
        writeln!(out, "  {:<13} {}", format!("{}:", label), text)?;
    }
    Ok(())
}

fn fail(e: &PortfolioError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
