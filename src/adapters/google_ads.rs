//! REST client for the Google Ads reporting API.
//!
//! Issues single-page GAQL searches against `googleAds:search`. Tokens come
//! from configuration; there is no OAuth flow, pagination, or retry here.

use crate::domain::model::{
    AccountMetrics, CampaignMetrics, DailyTotals, DateRange, ManagerAccountInfo, TestConnection,
};
use crate::domain::ports::AdsGateway;
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::normalize_customer_id;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};

const MICROS_PER_UNIT: f64 = 1_000_000.0;

pub struct GoogleAdsClient {
    client: Client,
    api_base: String,
    developer_token: String,
    access_token: String,
    login_customer_id: Option<String>,
}

impl GoogleAdsClient {
    pub fn new(
        api_base: impl Into<String>,
        developer_token: impl Into<String>,
        access_token: impl Into<String>,
        login_customer_id: Option<String>,
    ) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            api_base,
            developer_token: developer_token.into(),
            access_token: access_token.into(),
            login_customer_id: login_customer_id.map(|id| normalize_customer_id(&id)),
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .bearer_auth(&self.access_token)
            .header("developer-token", &self.developer_token);
        match &self.login_customer_id {
            Some(login) => request.header("login-customer-id", login),
            None => request,
        }
    }

    async fn search(&self, customer_id: &str, query: String) -> Result<Vec<SearchRow>> {
        let customer = normalize_customer_id(customer_id);
        let url = format!("{}/customers/{}/googleAds:search", self.api_base, customer);

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .authorized(self.client.post(&url))
            .json(&SearchRequest { query })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReportError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.results)
    }
}

#[async_trait]
impl AdsGateway for GoogleAdsClient {
    async fn test_connection(&self) -> Result<TestConnection> {
        let url = format!("{}/customers:listAccessibleCustomers", self.api_base);
        let response = self.authorized(self.client.get(&url)).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReportError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body: ListAccessibleCustomersResponse = response.json().await?;
        Ok(TestConnection {
            status: "ok".to_string(),
            accessible_customers: body.resource_names,
        })
    }

    async fn manager_account(&self, customer_id: &str) -> Result<ManagerAccountInfo> {
        let query = "SELECT customer.id, customer.descriptive_name, \
                     customer.currency_code, customer.time_zone, customer.manager, \
                     customer.test_account FROM customer"
            .to_string();
        let rows = self.search(customer_id, query).await?;
        let row = rows.into_iter().next().ok_or_else(|| ReportError::NoData {
            customer_id: customer_id.to_string(),
        })?;
        let customer = row.customer.unwrap_or_default();
        Ok(ManagerAccountInfo {
            id: customer.id,
            descriptive_name: customer.descriptive_name,
            currency_code: customer.currency_code,
            time_zone: customer.time_zone,
            manager: customer.manager,
            test_account: customer.test_account,
        })
    }

    async fn campaign_metrics(
        &self,
        customer_id: &str,
        period: &DateRange,
        active_only: bool,
    ) -> Result<Vec<CampaignMetrics>> {
        let rows = self
            .search(customer_id, campaign_metrics_query(period, active_only))
            .await?;
        Ok(rows.into_iter().map(campaign_from_row).collect())
    }

    async fn account_metrics(
        &self,
        customer_id: &str,
        period: &DateRange,
    ) -> Result<Vec<AccountMetrics>> {
        let query = format!(
            "SELECT customer.descriptive_name, metrics.impressions, metrics.clicks, \
             metrics.cost_micros, metrics.conversions, metrics.ctr, metrics.average_cpc \
             FROM customer WHERE segments.date BETWEEN '{}' AND '{}'",
            period.start, period.end
        );
        let rows = self.search(customer_id, query).await?;
        Ok(rows.into_iter().map(account_from_row).collect())
    }

    async fn daily_totals(
        &self,
        customer_id: &str,
        period: &DateRange,
    ) -> Result<Vec<DailyTotals>> {
        let query = format!(
            "SELECT segments.date, metrics.impressions, metrics.clicks, \
             metrics.cost_micros, metrics.conversions FROM customer \
             WHERE segments.date BETWEEN '{}' AND '{}' ORDER BY segments.date",
            period.start, period.end
        );
        let rows = self.search(customer_id, query).await?;
        Ok(rows.into_iter().map(daily_from_row).collect())
    }
}

fn campaign_metrics_query(period: &DateRange, active_only: bool) -> String {
    let mut query = format!(
        "SELECT campaign.id, campaign.name, campaign.status, metrics.impressions, \
         metrics.clicks, metrics.cost_micros, metrics.ctr, metrics.average_cpc, \
         metrics.conversions FROM campaign \
         WHERE segments.date BETWEEN '{}' AND '{}'",
        period.start, period.end
    );
    if active_only {
        query.push_str(" AND campaign.status = 'ENABLED'");
    }
    query
}

fn campaign_from_row(row: SearchRow) -> CampaignMetrics {
    let campaign = row.campaign.unwrap_or_default();
    let metrics = row.metrics.unwrap_or_default();
    CampaignMetrics {
        id: campaign.id,
        name: campaign.name,
        status: campaign.status,
        impressions: metrics.impressions,
        clicks: metrics.clicks,
        cost: metrics.cost_micros as f64 / MICROS_PER_UNIT,
        ctr: metrics.ctr,
        average_cpc: metrics.average_cpc / MICROS_PER_UNIT,
        conversions: metrics.conversions,
    }
}

fn account_from_row(row: SearchRow) -> AccountMetrics {
    let customer = row.customer.unwrap_or_default();
    let metrics = row.metrics.unwrap_or_default();
    AccountMetrics {
        descriptive_name: customer.descriptive_name,
        impressions: metrics.impressions,
        clicks: metrics.clicks,
        cost: metrics.cost_micros as f64 / MICROS_PER_UNIT,
        conversions: metrics.conversions,
        ctr: metrics.ctr,
        average_cpc: metrics.average_cpc / MICROS_PER_UNIT,
    }
}

fn daily_from_row(row: SearchRow) -> DailyTotals {
    let metrics = row.metrics.unwrap_or_default();
    DailyTotals {
        date: row.segments.and_then(|s| s.date).unwrap_or_default(),
        impressions: metrics.impressions,
        clicks: metrics.clicks,
        cost: metrics.cost_micros as f64 / MICROS_PER_UNIT,
        conversions: metrics.conversions,
    }
}

#[derive(Debug, Serialize)]
struct SearchRequest {
    query: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchRow>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListAccessibleCustomersResponse {
    #[serde(default)]
    resource_names: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SearchRow {
    customer: Option<WireCustomer>,
    campaign: Option<WireCampaign>,
    metrics: Option<WireMetrics>,
    segments: Option<WireSegments>,
}

// Proto3 JSON mapping encodes int64 fields as strings.
fn i64_from_string<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireCustomer {
    #[serde(deserialize_with = "i64_from_string")]
    id: i64,
    descriptive_name: String,
    currency_code: String,
    time_zone: String,
    manager: bool,
    test_account: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireCampaign {
    #[serde(deserialize_with = "i64_from_string")]
    id: i64,
    name: String,
    status: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireMetrics {
    #[serde(deserialize_with = "i64_from_string")]
    impressions: i64,
    #[serde(deserialize_with = "i64_from_string")]
    clicks: i64,
    #[serde(deserialize_with = "i64_from_string")]
    cost_micros: i64,
    ctr: f64,
    average_cpc: f64,
    conversions: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct WireSegments {
    date: Option<NaiveDate>,
}
