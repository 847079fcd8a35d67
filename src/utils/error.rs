use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unsupported data format: {extension}")]
    UnsupportedFormatError { extension: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to write output: {message}")]
    OutputError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PortfolioError {
    /// 報表寫出失敗 (stdout 關閉、磁碟已滿等)
    pub fn output<E: std::fmt::Display>(e: E) -> Self {
        PortfolioError::OutputError {
            message: e.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PortfolioError::IoError(_) => ErrorCategory::Io,
            PortfolioError::SerializationError(_)
            | PortfolioError::TomlError(_)
            | PortfolioError::UnsupportedFormatError { .. } => ErrorCategory::Data,
            PortfolioError::CsvError(_) | PortfolioError::OutputError { .. } => {
                ErrorCategory::Output
            }
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. }
            | PortfolioError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤類型提供修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PortfolioError::IoError(_) => "Check that the data file exists and is readable",
            PortfolioError::SerializationError(_) => {
                "Check the JSON data file against the portfolio schema (camelCase keys)"
            }
            PortfolioError::TomlError(_) => "Check the TOML syntax of the data or config file",
            PortfolioError::CsvError(_) => "Retry with --format text or --format json",
            PortfolioError::UnsupportedFormatError { .. } => {
                "Use a data file ending in .toml or .json"
            }
            PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => {
                "Fix the reported field in the config file or command line"
            }
            PortfolioError::MissingConfigError { .. } => {
                "Pass --data <PATH> or set [data].path in the config file"
            }
            PortfolioError::OutputError { .. } => {
                "Check that standard output is still open and writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PortfolioError::IoError(e) => format!("Could not read the portfolio data: {}", e),
            PortfolioError::UnsupportedFormatError { extension } => {
                format!("'{}' is not a supported portfolio data format", extension)
            }
            PortfolioError::MissingConfigError { field } => {
                format!("No value was given for '{}'", field)
            }
            other => other.to_string(),
        }
    }

    /// CLI 退出碼: 1 設定錯誤, 2 資料讀取錯誤, 3 輸出寫入錯誤
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Io | ErrorCategory::Data => 2,
            ErrorCategory::Output => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
