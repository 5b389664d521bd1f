use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{
    validate_customer_id, validate_non_empty_string, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_ADS_API_BASE: &str = "https://googleads.googleapis.com/v17";
const DEFAULT_SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";
const DEFAULT_OUTPUT_PATH: &str = "./output";

/// TOML configuration: Google API endpoints and credentials. Replaces the
/// property-file wiring the APIs are usually configured with; tokens are
/// expected to arrive via `${VAR}` environment substitution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub google: GoogleApiConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleApiConfig {
    pub ads_api_base: Option<String>,
    pub sheets_api_base: Option<String>,
    pub developer_token: String,
    pub access_token: String,
    pub login_customer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl ReportConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ReportError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ReportError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values;
    /// unresolved placeholders are left in place.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn ads_api_base(&self) -> &str {
        self.google
            .ads_api_base
            .as_deref()
            .unwrap_or(DEFAULT_ADS_API_BASE)
    }

    pub fn sheets_api_base(&self) -> &str {
        self.google
            .sheets_api_base
            .as_deref()
            .unwrap_or(DEFAULT_SHEETS_API_BASE)
    }

    pub fn output_path(&self) -> &str {
        self.output
            .as_ref()
            .map(|o| o.path.as_str())
            .unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("google.ads_api_base", self.ads_api_base())?;
        validate_url("google.sheets_api_base", self.sheets_api_base())?;
        validate_non_empty_string("google.developer_token", &self.google.developer_token)?;
        validate_non_empty_string("google.access_token", &self.google.access_token)?;
        if let Some(login) = &self.google.login_customer_id {
            validate_customer_id("google.login_customer_id", login)?;
        }
        validate_non_empty_string("output.path", self.output_path())?;
        Ok(())
    }
}

impl Validate for ReportConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[google]
developer_token = "dev-token"
access_token = "oauth-token"
login_customer_id = "123-456-7890"

[output]
path = "./reports"
"#;

        let config = ReportConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.google.developer_token, "dev-token");
        assert_eq!(config.ads_api_base(), "https://googleads.googleapis.com/v17");
        assert_eq!(config.output_path(), "./reports");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ADS_DEV_TOKEN", "substituted-token");

        let toml_content = r#"
[google]
developer_token = "${TEST_ADS_DEV_TOKEN}"
access_token = "oauth-token"
"#;

        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.google.developer_token, "substituted-token");

        std::env::remove_var("TEST_ADS_DEV_TOKEN");
    }

    #[test]
    fn test_unresolved_env_var_left_in_place() {
        let toml_content = r#"
[google]
developer_token = "${ADS_REPORT_SURELY_UNSET_VAR}"
access_token = "oauth-token"
"#;

        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.google.developer_token,
            "${ADS_REPORT_SURELY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_config_validation_rejects_bad_base_url() {
        let toml_content = r#"
[google]
ads_api_base = "not-a-url"
developer_token = "dev-token"
access_token = "oauth-token"
"#;

        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_rejects_bad_login_customer_id() {
        let toml_content = r#"
[google]
developer_token = "dev-token"
access_token = "oauth-token"
login_customer_id = "12-34"
"#;

        let config = ReportConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[google]
developer_token = "dev-token"
access_token = "oauth-token"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = ReportConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.google.access_token, "oauth-token");
    }
}
