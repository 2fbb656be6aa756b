use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::import::mb_to_bytes;

/// Upload limit used when `MAX_UPLOAD_MB` is unset.
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 5;
/// Largest accepted `MAX_UPLOAD_MB`. Uploads are buffered in memory.
pub const MAX_UPLOAD_MB_CEILING: u64 = 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    /// Override for the Messages API endpoint (proxies, local mocks).
    pub anthropic_api_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub max_upload_mb: u64,
    /// Chrome/Chromium binary for PDF export. Auto-detected when unset.
    pub chrome_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            anthropic_api_url: optional_env("ANTHROPIC_API_URL"),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_mb: check_upload_limit(
                parse_env("MAX_UPLOAD_MB", DEFAULT_MAX_UPLOAD_MB)
                    .context("MAX_UPLOAD_MB must be a whole number of megabytes")?,
            )?,
            chrome_path: optional_env("CHROME_PATH").map(PathBuf::from),
        })
    }

    pub fn max_upload_bytes(&self) -> u64 {
        mb_to_bytes(self.max_upload_mb)
    }
}

fn check_upload_limit(mb: u64) -> Result<u64> {
    if mb == 0 || mb > MAX_UPLOAD_MB_CEILING {
        bail!("MAX_UPLOAD_MB must be between 1 and {MAX_UPLOAD_MB_CEILING}, got {mb}");
    }
    Ok(mb)
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for {key}")),
        None => Ok(default),
    }
}
