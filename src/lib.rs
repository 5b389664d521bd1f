pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::google_ads::GoogleAdsClient;
pub use crate::adapters::google_sheets::GoogleSheetsClient;
pub use crate::config::google::ReportConfig;
pub use crate::config::CliConfig;
pub use crate::core::delimited::{DelimitedExporter, EmptyInputPolicy};
pub use crate::core::report::ReportService;
pub use crate::domain::model::{DateRange, Record, Scalar};
pub use crate::utils::error::{ReportError, Result};
