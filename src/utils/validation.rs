use crate::utils::error::{ReportError, Result};
use chrono::NaiveDate;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ReportError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Accepts the `123-456-7890` and `1234567890` customer id spellings.
pub fn validate_customer_id(field_name: &str, customer_id: &str) -> Result<()> {
    let digits = normalize_customer_id(customer_id);
    if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: customer_id.to_string(),
            reason: "Customer id must be 10 digits (dashes allowed)".to_string(),
        });
    }
    Ok(())
}

pub fn normalize_customer_id(customer_id: &str) -> String {
    customer_id.chars().filter(|c| *c != '-').collect()
}

pub fn validate_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ReportError::InvalidConfigValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected YYYY-MM-DD: {}", e),
    })
}

pub fn validate_date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate)> {
    let start_date = validate_date("start_date", start)?;
    let end_date = validate_date("end_date", end)?;
    if end_date < start_date {
        return Err(ReportError::InvalidConfigValue {
            field: "end_date".to_string(),
            value: end.to_string(),
            reason: "End date is before start date".to_string(),
        });
    }
    Ok((start_date, end_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base", "https://example.com").is_ok());
        assert!(validate_url("api_base", "http://example.com").is_ok());
        assert!(validate_url("api_base", "").is_err());
        assert!(validate_url("api_base", "invalid-url").is_err());
        assert!(validate_url("api_base", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("customer_id", "1234567890").is_ok());
        assert!(validate_customer_id("customer_id", "123-456-7890").is_ok());
        assert!(validate_customer_id("customer_id", "123456789").is_err());
        assert!(validate_customer_id("customer_id", "12345678901").is_err());
        assert!(validate_customer_id("customer_id", "12345abcde").is_err());
    }

    #[test]
    fn test_normalize_customer_id() {
        assert_eq!(normalize_customer_id("123-456-7890"), "1234567890");
        assert_eq!(normalize_customer_id("1234567890"), "1234567890");
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range("2025-01-01", "2025-01-31").is_ok());
        assert!(validate_date_range("2025-01-01", "2025-01-01").is_ok());
        assert!(validate_date_range("2025-02-01", "2025-01-01").is_err());
        assert!(validate_date_range("2025-13-01", "2025-01-01").is_err());
        assert!(validate_date_range("01/01/2025", "2025-01-01").is_err());
    }
}
