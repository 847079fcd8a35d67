use crate::domain::{DataFormat, PortfolioSource};
use crate::utils::error::{PortfolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Portfolio data stored on the local filesystem.
#[derive(Debug, Clone)]
pub struct LocalSource {
    path: PathBuf,
}

impl LocalSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn format(&self) -> Result<DataFormat> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Ok(DataFormat::Toml),
            "json" => Ok(DataFormat::Json),
            _ => Err(PortfolioError::UnsupportedFormatError { extension }),
        }
    }
}

impl PortfolioSource for LocalSource {
    fn read_portfolio(&self) -> Result<(Vec<u8>, DataFormat)> {
        let format = self.format()?;
        let data = fs::read(&self.path)?;
        Ok((data, format))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(LocalSource::new("a/portfolio.toml").format().unwrap(), DataFormat::Toml);
        assert_eq!(LocalSource::new("portfolio.JSON").format().unwrap(), DataFormat::Json);
        assert!(matches!(
            LocalSource::new("portfolio.yaml").format(),
            Err(PortfolioError::UnsupportedFormatError { .. })
        ));
        assert!(LocalSource::new("portfolio").format().is_err());
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = LocalSource::new(dir.path().join("missing.json"));
        assert!(matches!(
            source.read_portfolio(),
            Err(PortfolioError::IoError(_))
        ));
    }

    #[test]
    fn test_read_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, b"{}").unwrap();

        let (bytes, format) = LocalSource::new(&path).read_portfolio().unwrap();
        assert_eq!(bytes, b"{}");
        assert_eq!(format, DataFormat::Json);
    }
}
