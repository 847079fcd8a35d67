use crate::utils::error::Result;
use std::path::Path;

pub trait PortfolioSource {
    /// 讀取原始資料與其格式 (副檔名)
    fn read_portfolio(&self) -> Result<(Vec<u8>, DataFormat)>;
    fn location(&self) -> &Path;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Toml,
    Json,
}

pub trait ConfigProvider {
    fn data_path(&self) -> Option<&str>;
    fn section(&self) -> &str;
    fn output_format(&self) -> &str;
    fn as_of(&self) -> Option<&str>;
}
