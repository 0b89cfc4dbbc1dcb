//! Export configuration resolved once at startup.
//!
//! Values come from command-line overrides first, then the environment
//! (optionally seeded from a `.env` file), then built-in defaults. Values
//! are trimmed and an empty value counts as unset.

use std::fmt;
use std::path::{Path, PathBuf};

use smartsheet_client::DEFAULT_API_BASE_URL;
use smartsheet_model::{ModelError, SheetId};
use thiserror::Error;
use tracing::{debug, warn};

/// Smartsheet API access token (required).
pub const API_TOKEN_VAR: &str = "SMARTSHEET_API";
/// Sheet to export.
pub const SHEET_ID_VAR: &str = "SHEET_ID";
/// CSV output path.
pub const OUTPUT_VAR: &str = "SMARTSHEET_OUTPUT_CSV";
/// API root, for regional endpoints.
pub const API_BASE_URL_VAR: &str = "SMARTSHEET_API_BASE_URL";

pub const DEFAULT_SHEET_ID: SheetId = SheetId::new(3002834590427012);
pub const DEFAULT_OUTPUT: &str = "smartsheet_row_attachments.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Set {API_TOKEN_VAR} in .env or environment")]
    MissingCredential,
    #[error("invalid sheet id {value:?}")]
    InvalidSheetId {
        value: String,
        #[source]
        source: ModelError,
    },
}

/// Values given on the command line; they win over the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sheet_id: Option<String>,
    pub output: Option<PathBuf>,
    pub api_base_url: Option<String>,
}

#[derive(Clone)]
pub struct ExportConfig {
    pub api_token: String,
    pub sheet_id: SheetId,
    pub output_path: PathBuf,
    pub api_base_url: String,
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("api_token", &"[REDACTED]")
            .field("sheet_id", &self.sheet_id)
            .field("output_path", &self.output_path)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl ExportConfig {
    /// Resolve configuration from overrides and the process environment.
    pub fn from_env(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve configuration using `lookup` in place of the environment.
    pub fn resolve<F>(overrides: &ConfigOverrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| non_empty(lookup(key));

        let api_token = var(API_TOKEN_VAR).ok_or(ConfigError::MissingCredential)?;

        let sheet_id = match non_empty(overrides.sheet_id.clone()).or_else(|| var(SHEET_ID_VAR)) {
            Some(value) => value
                .parse::<SheetId>()
                .map_err(|source| ConfigError::InvalidSheetId { value, source })?,
            None => DEFAULT_SHEET_ID,
        };

        let output_path = overrides
            .output
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .or_else(|| var(OUTPUT_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let api_base_url = non_empty(overrides.api_base_url.clone())
            .or_else(|| var(API_BASE_URL_VAR))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            api_token,
            sheet_id,
            output_path,
            api_base_url,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Load a `.env` file into the process environment.
///
/// With `path` set only that file is read; otherwise `.env` is searched for
/// from the working directory upwards. Variables already present in the
/// environment are kept. A missing or unreadable file is never fatal.
pub fn load_env_file(path: Option<&Path>) -> Option<PathBuf> {
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    match result {
        Ok(loaded) => {
            debug!(path = %loaded.display(), "loaded environment file");
            Some(loaded)
        }
        Err(err) if err.not_found() && path.is_none() => {
            debug!("no .env file found, using process environment");
            None
        }
        Err(err) => {
            warn!(error = %err, "could not load environment file, using process environment");
            None
        }
    }
}
