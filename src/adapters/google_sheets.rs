//! REST client for the Google Sheets values API.

use crate::domain::ports::SpreadsheetGateway;
use crate::utils::error::{ReportError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

pub struct GoogleSheetsClient {
    client: Client,
    api_base: String,
    access_token: String,
}

impl GoogleSheetsClient {
    pub fn new(api_base: impl Into<String>, access_token: impl Into<String>) -> Self {
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            api_base,
            access_token: access_token.into(),
        }
    }

    // Url::parse percent-encodes spaces and other odd characters in tab names.
    fn values_url(&self, spreadsheet_id: &str, tab: &str) -> Result<Url> {
        let raw = format!(
            "{}/spreadsheets/{}/values/{}!A1",
            self.api_base, spreadsheet_id, tab
        );
        Ok(Url::parse(&raw)?)
    }
}

#[async_trait]
impl SpreadsheetGateway for GoogleSheetsClient {
    async fn write_rows(
        &self,
        spreadsheet_id: &str,
        tab: &str,
        rows: Vec<Vec<String>>,
    ) -> Result<()> {
        let url = self.values_url(spreadsheet_id, tab)?;
        let body = ValueRange {
            range: format!("{}!A1", tab),
            major_dimension: "ROWS".to_string(),
            values: rows,
        };

        tracing::debug!("Making API request to: {}", url);
        let response = self
            .client
            .put(url)
            .bearer_auth(&self.access_token)
            .query(&[("valueInputOption", "RAW")])
            .json(&body)
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
        Ok(())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange {
    range: String,
    major_dimension: String,
    values: Vec<Vec<String>>,
}
