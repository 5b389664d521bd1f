use crate::domain::model::{
    AccountMetrics, CampaignMetrics, DailyTotals, DateRange, ManagerAccountInfo, TestConnection,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side: the ads reporting API.
#[async_trait]
pub trait AdsGateway: Send + Sync {
    async fn test_connection(&self) -> Result<TestConnection>;
    async fn manager_account(&self, customer_id: &str) -> Result<ManagerAccountInfo>;
    async fn campaign_metrics(
        &self,
        customer_id: &str,
        period: &DateRange,
        active_only: bool,
    ) -> Result<Vec<CampaignMetrics>>;
    async fn account_metrics(
        &self,
        customer_id: &str,
        period: &DateRange,
    ) -> Result<Vec<AccountMetrics>>;
    async fn daily_totals(
        &self,
        customer_id: &str,
        period: &DateRange,
    ) -> Result<Vec<DailyTotals>>;
}

/// Write side: a spreadsheet tab that accepts tabular rows.
#[async_trait]
pub trait SpreadsheetGateway: Send + Sync {
    async fn write_rows(
        &self,
        spreadsheet_id: &str,
        tab: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<()>;
}
