pub mod clock;
pub mod experience;
pub mod loader;
pub mod merge;
pub mod period;
pub mod range;
pub mod report;
pub mod summary;

pub use crate::domain::model::{HasPeriod, Labelled, PeriodRecord, PortfolioData};
pub use crate::domain::ports::{ConfigProvider, DataFormat, PortfolioSource};
pub use crate::utils::error::Result;
