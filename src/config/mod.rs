pub mod google;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ads-report")]
#[command(about = "Export Google Ads metrics to CSV or push them to Google Sheets")]
pub struct CliConfig {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "ads-report.toml")]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check connectivity and list accessible customer accounts
    Test,

    /// Show general info of a manager (MCC) account
    Manager { customer_id: String },

    /// Export campaign metrics for a period as delimited text
    CampaignCsv {
        customer_id: String,

        #[arg(long)]
        start_date: String,

        #[arg(long)]
        end_date: String,

        #[arg(long, help = "Only include campaigns with status ENABLED")]
        active: bool,

        #[arg(long, help = "Use tab as the delimiter")]
        tsv: bool,

        /// Output file; defaults to the configured output directory
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Export aggregated account metrics for a period as delimited text
    AccountCsv {
        customer_id: String,

        #[arg(long)]
        start_date: String,

        #[arg(long)]
        end_date: String,

        #[arg(long, help = "Use tab as the delimiter")]
        tsv: bool,

        /// Output file; defaults to the configured output directory
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Push campaign metrics into a spreadsheet tab
    CampaignSheets {
        customer_id: String,

        #[arg(long)]
        start_date: String,

        #[arg(long)]
        end_date: String,

        #[arg(long, help = "Only include campaigns with status ENABLED")]
        active: bool,

        #[arg(long)]
        spreadsheet_id: String,

        #[arg(long)]
        tab: String,
    },

    /// Push aggregated account metrics into a spreadsheet tab
    AccountSheets {
        customer_id: String,

        #[arg(long)]
        start_date: String,

        #[arg(long)]
        end_date: String,

        #[arg(long)]
        spreadsheet_id: String,

        #[arg(long)]
        tab: String,
    },

    /// Push per-day account totals into a spreadsheet tab
    DailySheets {
        customer_id: String,

        #[arg(long)]
        start_date: String,

        #[arg(long)]
        end_date: String,

        #[arg(long)]
        spreadsheet_id: String,

        #[arg(long)]
        tab: String,
    },
}
