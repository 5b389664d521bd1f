pub mod delimited;
pub mod report;

pub use crate::domain::model::{Record, Scalar};
pub use crate::domain::ports::{AdsGateway, SpreadsheetGateway};
pub use crate::utils::error::Result;
