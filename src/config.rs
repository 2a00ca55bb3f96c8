//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment
//! variables: server settings, cache TTL, upstream base URLs and the map
//! of named sheet resources.

use std::collections::HashMap;
use std::env;

use crate::error::{ProxyError, Result};

// == Sheet Source ==
/// One configured tabular resource: a public sheet id plus an optional
/// tab name within the spreadsheet.
///
/// An empty sheet id is a valid "unconfigured" state and serves empty
/// data rather than failing.
#[derive(Debug, Clone)]
pub struct SheetSource {
    /// The public spreadsheet identifier
    pub sheet_id: String,
    /// Optional tab name within the spreadsheet
    pub tab: Option<String>,
}

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Default cache TTL in seconds
    pub default_ttl: u64,
    /// Background sweep task interval in seconds
    pub sweep_interval: u64,
    /// Upstream request timeout in seconds
    pub fetch_timeout: u64,
    /// Base URL for spreadsheet CSV exports
    pub sheets_base_url: String,
    /// Base URL for document HTML exports
    pub docs_base_url: String,
    /// Named sheet resources exposed by the API
    pub sheets: HashMap<String, SheetSource>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// A malformed `SHEET_SOURCES` entry is the one fatal error path:
    /// everything downstream degrades gracefully, but serving with a
    /// half-parsed resource map would silently hide data.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL` - Cache TTL in seconds (default: 600)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: 60)
    /// - `FETCH_TIMEOUT` - Upstream request timeout in seconds (default: 10)
    /// - `SHEETS_BASE_URL` - Spreadsheet export base URL
    /// - `DOCS_BASE_URL` - Document export base URL
    /// - `SHEET_SOURCES` - Comma-separated `name=sheet_id[:tab]` entries
    pub fn from_env() -> Result<Self> {
        let sheets = match env::var("SHEET_SOURCES") {
            Ok(raw) => parse_sheet_sources(&raw)?,
            Err(_) => HashMap::new(),
        };

        Ok(Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(600),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            fetch_timeout: env::var("FETCH_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            sheets_base_url: env::var("SHEETS_BASE_URL")
                .unwrap_or_else(|_| "https://docs.google.com/spreadsheets/d".to_string()),
            docs_base_url: env::var("DOCS_BASE_URL")
                .unwrap_or_else(|_| "https://docs.google.com/document/d".to_string()),
            sheets,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl: 600,
            sweep_interval: 60,
            fetch_timeout: 10,
            sheets_base_url: "https://docs.google.com/spreadsheets/d".to_string(),
            docs_base_url: "https://docs.google.com/document/d".to_string(),
            sheets: HashMap::new(),
        }
    }
}

// == Sheet Sources Parsing ==
/// Parses the `SHEET_SOURCES` resource map.
///
/// Format: comma-separated `name=sheet_id[:tab]` entries, e.g.
/// `events=1AbC,home_groups=2DeF:LR_WEBSITE`. Blank entries are skipped;
/// an entry without `=` or with an empty name is a configuration error.
fn parse_sheet_sources(raw: &str) -> Result<HashMap<String, SheetSource>> {
    let mut sheets = HashMap::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (name, source) = entry.split_once('=').ok_or_else(|| {
            ProxyError::Config(format!("Malformed SHEET_SOURCES entry '{}'", entry))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(ProxyError::Config(format!(
                "Empty resource name in SHEET_SOURCES entry '{}'",
                entry
            )));
        }

        let (sheet_id, tab) = match source.split_once(':') {
            Some((id, tab)) => (id.to_string(), Some(tab.to_string())),
            None => (source.to_string(), None),
        };

        sheets.insert(name.to_string(), SheetSource { sheet_id, tab });
    }

    Ok(sheets)
}
