//! Smartsheet API client for fetching sheets and row attachments.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

use smartsheet_model::{Attachment, Sheet, SheetId, SheetSource};

use crate::error::{ClientError, Result};
use crate::types::{ApiErrorBody, AttachmentList};

/// Smartsheet API base URL (US region).
pub const DEFAULT_API_BASE_URL: &str = "https://api.smartsheet.com/2.0";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("smartsheet-attachments/", env!("CARGO_PKG_VERSION"));

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Fallback wait reported when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Read-only Smartsheet API client.
#[derive(Debug, Clone)]
pub struct SmartsheetClient {
    client: Client,
    base_url: String,
}

impl SmartsheetClient {
    /// Creates a client authenticated with the given API access token.
    ///
    /// # Arguments
    /// * `token` - Smartsheet API access token (sent as a bearer token)
    /// * `base_url` - API root, e.g. [`DEFAULT_API_BASE_URL`]
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| ClientError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn sheet_url(&self, sheet_id: SheetId) -> String {
        format!("{}/sheets/{sheet_id}", self.base_url)
    }

    fn row_attachments_url(&self, sheet_id: SheetId, row_id: u64) -> String {
        format!(
            "{}/sheets/{sheet_id}/rows/{row_id}/attachments?includeAll=true",
            self.base_url
        )
    }

    /// Fetches a sheet with all of its columns and rows.
    pub fn get_sheet(&self, sheet_id: SheetId) -> Result<Sheet> {
        let url = self.sheet_url(sheet_id);
        debug!(%url, "fetching sheet");
        let response = self.client.get(&url).send()?;
        handle_response(response)
    }

    /// Lists every attachment on a row, unpaginated.
    pub fn list_row_attachments(&self, sheet_id: SheetId, row_id: u64) -> Result<Vec<Attachment>> {
        let url = self.row_attachments_url(sheet_id, row_id);
        debug!(%url, "listing row attachments");
        let response = self.client.get(&url).send()?;
        let list: AttachmentList = handle_response(response)?;
        Ok(list.data)
    }
}

impl SheetSource for SmartsheetClient {
    type Error = ClientError;

    fn fetch_sheet(&self, sheet_id: SheetId) -> Result<Sheet> {
        self.get_sheet(sheet_id)
    }

    fn fetch_row_attachments(&self, sheet_id: SheetId, row_id: u64) -> Result<Vec<Attachment>> {
        self.list_row_attachments(sheet_id, row_id)
    }
}

/// Checks the status and decodes a success body as JSON.
fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json()?);
    }

    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = response.text().unwrap_or_default();
    Err(error_from_response(status, retry_after.as_deref(), &body))
}

/// Maps a non-success response onto a [`ClientError`].
fn error_from_response(status: StatusCode, retry_after: Option<&str>, body: &str) -> ClientError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = retry_after
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
        return ClientError::RateLimited { retry_after_secs };
    }

    let parsed = serde_json::from_str::<ApiErrorBody>(body).ok();
    let code = parsed.as_ref().and_then(|b| b.error_code);
    let message = parsed
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            let raw = body.trim();
            if raw.is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                raw.to_string()
            }
        });

    ClientError::Api {
        status: status.as_u16(),
        code,
        message,
    }
}
