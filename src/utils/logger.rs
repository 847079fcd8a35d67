use tracing_subscriber::{
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match level {
            Some(level) => level,
            None if verbose => "debug",
            None => "info",
        };
        EnvFilter::new(format!("portfolio_experience={},warn", level))
    })
}

fn report_init(result: std::result::Result<(), TryInitError>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            eprintln!("⚠️ Failed to initialise logger: {}", e);
            false
        }
    }
}

/// 初始化 CLI 日誌 (寫到 stderr，避免干擾報表輸出)
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) -> bool {
    report_init(
        tracing_subscriber::registry()
            .with(default_filter(verbose, level))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
    )
}

/// JSON lines on stderr, for `--log-json` or `[logging] format = "json"`.
pub fn init_json_logger(verbose: bool, level: Option<&str>) -> bool {
    report_init(
        tracing_subscriber::registry()
            .with(default_filter(verbose, level))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    )
}
