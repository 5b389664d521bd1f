use crate::core::delimited::{tabulate, DelimitedExporter};
use crate::domain::model::{
    AccountMetrics, CampaignMetrics, DailyTotals, DateRange, ManagerAccountInfo, Record,
    TestConnection,
};
use crate::domain::ports::{AdsGateway, SpreadsheetGateway};
use crate::utils::error::{ReportError, Result};
use serde::Serialize;
use std::io::Write;

/// Serializes report DTOs into flat records. This is the single decode at
/// the boundary; everything downstream works on `Record` values.
pub fn to_records<T: Serialize>(items: &[T]) -> Result<Vec<Record>> {
    items
        .iter()
        .map(|item| Record::from_value(&serde_json::to_value(item)?))
        .collect()
}

/// Report operations over the ads and spreadsheet gateways.
pub struct ReportService<A: AdsGateway, S: SpreadsheetGateway> {
    ads: A,
    sheets: S,
}

impl<A: AdsGateway, S: SpreadsheetGateway> ReportService<A, S> {
    pub fn new(ads: A, sheets: S) -> Self {
        Self { ads, sheets }
    }

    pub async fn test_connection(&self) -> Result<TestConnection> {
        self.ads.test_connection().await
    }

    pub async fn manager_account(&self, customer_id: &str) -> Result<ManagerAccountInfo> {
        self.ads.manager_account(customer_id).await
    }

    pub async fn campaign_metrics(
        &self,
        customer_id: &str,
        period: &DateRange,
        active_only: bool,
    ) -> Result<Vec<CampaignMetrics>> {
        let metrics = self
            .ads
            .campaign_metrics(customer_id, period, active_only)
            .await?;
        tracing::info!("📊 Fetched {} campaign rows", metrics.len());
        Ok(metrics)
    }

    pub async fn account_metrics(
        &self,
        customer_id: &str,
        period: &DateRange,
    ) -> Result<Vec<AccountMetrics>> {
        let metrics = self.ads.account_metrics(customer_id, period).await?;
        tracing::info!("📊 Fetched {} account metric rows", metrics.len());
        Ok(metrics)
    }

    pub async fn daily_totals(
        &self,
        customer_id: &str,
        period: &DateRange,
    ) -> Result<Vec<DailyTotals>> {
        let totals = self.ads.daily_totals(customer_id, period).await?;
        tracing::info!("📊 Fetched {} daily total rows", totals.len());
        Ok(totals)
    }

    /// Converts fetched DTOs and streams them into `sink` as delimited
    /// text. Returns the number of data rows written.
    pub fn write_csv<T: Serialize, W: Write>(
        &self,
        items: &[T],
        exporter: &DelimitedExporter,
        sink: W,
    ) -> Result<usize> {
        let records = to_records(items)?;
        exporter.write_to(&records, sink)
    }

    pub async fn campaign_metrics_to_sheets(
        &self,
        customer_id: &str,
        period: &DateRange,
        active_only: bool,
        spreadsheet_id: &str,
        tab: &str,
    ) -> Result<usize> {
        let metrics = self
            .campaign_metrics(customer_id, period, active_only)
            .await?;
        self.push_to_sheets(spreadsheet_id, tab, to_records(&metrics)?)
            .await
    }

    pub async fn account_metrics_to_sheets(
        &self,
        customer_id: &str,
        period: &DateRange,
        spreadsheet_id: &str,
        tab: &str,
    ) -> Result<usize> {
        let metrics = self.account_metrics(customer_id, period).await?;
        self.push_to_sheets(spreadsheet_id, tab, to_records(&metrics)?)
            .await
    }

    pub async fn daily_totals_to_sheets(
        &self,
        customer_id: &str,
        period: &DateRange,
        spreadsheet_id: &str,
        tab: &str,
    ) -> Result<usize> {
        let totals = self.daily_totals(customer_id, period).await?;
        self.push_to_sheets(spreadsheet_id, tab, to_records(&totals)?)
            .await
    }

    /// A push of an empty batch is rejected; there is no header to derive
    /// and nothing to write.
    async fn push_to_sheets(
        &self,
        spreadsheet_id: &str,
        tab: &str,
        records: Vec<Record>,
    ) -> Result<usize> {
        if records.is_empty() {
            return Err(ReportError::EmptyInput);
        }
        let (header, rows) = tabulate(&records);
        let count = rows.len();

        let mut values = Vec::with_capacity(count + 1);
        values.push(header);
        values.extend(rows);

        self.sheets.write_rows(spreadsheet_id, tab, values).await?;
        tracing::info!("📋 Pushed {} rows to sheet tab '{}'", count, tab);
        Ok(count)
    }
}
