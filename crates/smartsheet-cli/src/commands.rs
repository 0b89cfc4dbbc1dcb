use anyhow::{Context, Result};
use tracing::{debug, info};

use smartsheet_cli::config::{ExportConfig, load_env_file};
use smartsheet_client::SmartsheetClient;
use smartsheet_export::{ExportSummary, export_to_path};

use crate::cli::Cli;

pub fn run_export(cli: &Cli) -> Result<ExportSummary> {
    if let Some(path) = load_env_file(cli.env_file.as_deref()) {
        info!(path = %path.display(), "environment file loaded");
    }
    let config = ExportConfig::from_env(&cli.config_overrides())?;
    debug!(?config, "configuration resolved");

    let client = SmartsheetClient::new(&config.api_token, &config.api_base_url)
        .context("create Smartsheet client")?;

    println!("Fetching sheet {} ...", config.sheet_id);
    let summary = export_to_path(&client, config.sheet_id, &config.output_path)?;
    println!("Done. CSV written to {}", config.output_path.display());
    Ok(summary)
}
