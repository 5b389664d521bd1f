use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single report cell value, decoded once at the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Canonical text form: `true`/`false`, numbers without grouping,
    /// null as the empty string.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            Scalar::Null => Cow::Borrowed(""),
            Scalar::Bool(true) => Cow::Borrowed("true"),
            Scalar::Bool(false) => Cow::Borrowed("false"),
            Scalar::Int(n) => Cow::Owned(n.to_string()),
            Scalar::Float(n) => Cow::Owned(n.to_string()),
            Scalar::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Converts a JSON value for `field`, rejecting arrays and objects.
    pub fn from_json(field: &str, value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Scalar::Null),
            serde_json::Value::Bool(b) => Ok(Scalar::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Scalar::Int(i))
                } else {
                    // u64 above i64::MAX and all fractional numbers land here
                    Ok(Scalar::Float(n.as_f64().unwrap_or(f64::NAN)))
                }
            }
            serde_json::Value::String(s) => Ok(Scalar::Text(s.clone())),
            serde_json::Value::Array(_) => Err(ReportError::UnsupportedValue {
                field: field.to_string(),
                kind: "array",
            }),
            serde_json::Value::Object(_) => Err(ReportError::UnsupportedValue {
                field: field.to_string(),
                kind: "object",
            }),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

/// One row of heterogeneous key/value metric data. Field order is the
/// insertion order, independent of any map implementation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Scalar)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, replacing an existing value in place so the
    /// original position is kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Scalar>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decodes a JSON object into a record. Anything but an object of
    /// scalars is a serialization error.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let object = value.as_object().ok_or(ReportError::UnsupportedValue {
            field: "<root>".to_string(),
            kind: "non-object",
        })?;
        let mut record = Record::new();
        for (name, value) in object {
            record.insert(name.clone(), Scalar::from_json(name, value)?);
        }
        Ok(record)
    }
}

impl FromIterator<(String, Scalar)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Scalar)>>(iter: T) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// Inclusive reporting period, already validated to `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Result of the connectivity check against the Ads API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestConnection {
    pub status: String,
    pub accessible_customers: Vec<String>,
}

/// General info of a manager (MCC) account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerAccountInfo {
    pub id: i64,
    pub descriptive_name: String,
    pub currency_code: String,
    pub time_zone: String,
    pub manager: bool,
    pub test_account: bool,
}

/// Per-campaign metrics over the requested period. Field order is the
/// column order of the exported report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub impressions: i64,
    pub clicks: i64,
    pub cost: f64,
    pub ctr: f64,
    pub average_cpc: f64,
    pub conversions: f64,
}

/// Account-level metrics aggregated over the requested period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountMetrics {
    pub descriptive_name: String,
    pub impressions: i64,
    pub clicks: i64,
    pub cost: f64,
    pub conversions: f64,
    pub ctr: f64,
    pub average_cpc: f64,
}

/// Account metrics broken down per day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub impressions: i64,
    pub clicks: i64,
    pub cost: f64,
    pub conversions: f64,
}
