use ads_report::adapters::google_ads::GoogleAdsClient;
use ads_report::adapters::google_sheets::GoogleSheetsClient;
use ads_report::config::google::ReportConfig;
use ads_report::config::{CliConfig, Command};
use ads_report::core::delimited::DelimitedExporter;
use ads_report::core::report::ReportService;
use ads_report::domain::model::DateRange;
use ads_report::domain::ports::{AdsGateway, SpreadsheetGateway};
use ads_report::utils::validation::{validate_customer_id, validate_date_range, Validate};
use ads_report::utils::{error::ReportError, logger};
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting ads-report");
    tracing::info!("📁 Loading configuration from: {}", cli.config);

    let config = match ReportConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let ads = GoogleAdsClient::new(
        config.ads_api_base(),
        &config.google.developer_token,
        &config.google.access_token,
        config.google.login_customer_id.clone(),
    );
    let sheets = GoogleSheetsClient::new(config.sheets_api_base(), &config.google.access_token);
    let service = ReportService::new(ads, sheets);

    match run_command(&cli.command, &service, &config).await {
        Ok(summary) => {
            tracing::info!("✅ {}", summary);
            println!("✅ {}", summary);
        }
        Err(e) => {
            tracing::error!("❌ Report failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run_command<A: AdsGateway, S: SpreadsheetGateway>(
    command: &Command,
    service: &ReportService<A, S>,
    config: &ReportConfig,
) -> anyhow::Result<String> {
    match command {
        Command::Test => {
            let result = service.test_connection().await?;
            for resource in &result.accessible_customers {
                tracing::info!("🔗 Accessible: {}", resource);
            }
            Ok(format!(
                "Connection {}: {} accessible customers",
                result.status,
                result.accessible_customers.len()
            ))
        }

        Command::Manager { customer_id } => {
            validate_customer_id("customer_id", customer_id)?;
            let info = service.manager_account(customer_id).await?;
            Ok(format!(
                "Account {} ({}): currency {}, time zone {}, manager: {}, test account: {}",
                info.descriptive_name,
                info.id,
                info.currency_code,
                info.time_zone,
                info.manager,
                info.test_account
            ))
        }

        Command::CampaignCsv {
            customer_id,
            start_date,
            end_date,
            active,
            tsv,
            output,
        } => {
            validate_customer_id("customer_id", customer_id)?;
            let period = parse_period(start_date, end_date)?;
            let metrics = service
                .campaign_metrics(customer_id, &period, *active)
                .await?;

            let file_name = format!("campaigns-{}.{}", customer_id, extension(*tsv));
            let path = resolve_output(output.as_deref(), config, &file_name)?;
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;

            let written = service.write_csv(&metrics, &exporter(*tsv), file)?;
            Ok(format!("Wrote {} campaign rows to {}", written, path.display()))
        }

        Command::AccountCsv {
            customer_id,
            start_date,
            end_date,
            tsv,
            output,
        } => {
            validate_customer_id("customer_id", customer_id)?;
            let period = parse_period(start_date, end_date)?;
            let metrics = service.account_metrics(customer_id, &period).await?;

            // The account's descriptive name goes into the file name, so the
            // empty case has to fail before any file is created.
            let account_name = metrics
                .first()
                .map(|m| m.descriptive_name.clone())
                .ok_or(ReportError::EmptyInput)?;
            let file_name = format!(
                "account-metrics-{}-{}-{}.{}",
                account_name,
                start_date,
                end_date,
                extension(*tsv)
            );
            let path = resolve_output(output.as_deref(), config, &file_name)?;
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;

            let written = service.write_csv(&metrics, &exporter(*tsv), file)?;
            Ok(format!("Wrote {} account rows to {}", written, path.display()))
        }

        Command::CampaignSheets {
            customer_id,
            start_date,
            end_date,
            active,
            spreadsheet_id,
            tab,
        } => {
            validate_customer_id("customer_id", customer_id)?;
            let period = parse_period(start_date, end_date)?;
            let count = service
                .campaign_metrics_to_sheets(customer_id, &period, *active, spreadsheet_id, tab)
                .await?;
            Ok(format!("Pushed {} campaign rows to tab '{}'", count, tab))
        }

        Command::AccountSheets {
            customer_id,
            start_date,
            end_date,
            spreadsheet_id,
            tab,
        } => {
            validate_customer_id("customer_id", customer_id)?;
            let period = parse_period(start_date, end_date)?;
            let count = service
                .account_metrics_to_sheets(customer_id, &period, spreadsheet_id, tab)
                .await?;
            Ok(format!("Pushed {} account rows to tab '{}'", count, tab))
        }

        Command::DailySheets {
            customer_id,
            start_date,
            end_date,
            spreadsheet_id,
            tab,
        } => {
            validate_customer_id("customer_id", customer_id)?;
            let period = parse_period(start_date, end_date)?;
            let count = service
                .daily_totals_to_sheets(customer_id, &period, spreadsheet_id, tab)
                .await?;
            Ok(format!("Pushed {} daily rows to tab '{}'", count, tab))
        }
    }
}

fn parse_period(start_date: &str, end_date: &str) -> anyhow::Result<DateRange> {
    let (start, end) = validate_date_range(start_date, end_date)?;
    Ok(DateRange::new(start, end))
}

fn extension(tsv: bool) -> &'static str {
    if tsv {
        "tsv"
    } else {
        "csv"
    }
}

fn exporter(tsv: bool) -> DelimitedExporter {
    if tsv {
        DelimitedExporter::tsv()
    } else {
        DelimitedExporter::csv()
    }
}

fn resolve_output(
    output: Option<&str>,
    config: &ReportConfig,
    file_name: &str,
) -> anyhow::Result<PathBuf> {
    let path = match output {
        Some(path) => PathBuf::from(path),
        None => PathBuf::from(config.output_path()).join(file_name),
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
        }
    }
    Ok(path)
}
