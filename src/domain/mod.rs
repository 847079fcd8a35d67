// Domain layer: portfolio models and ports (interfaces).

pub mod model;
pub mod ports;

pub use model::{HasPeriod, Labelled, PeriodRecord, PortfolioData};
pub use ports::{ConfigProvider, DataFormat, PortfolioSource};
