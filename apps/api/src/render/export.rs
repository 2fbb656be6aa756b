//! PDF export via headless Chrome.
//!
//! The rendered page is written to a temp file, opened with `file://`, and
//! printed with backgrounds enabled so template colours survive.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use headless_chrome::types::PrintToPdfOptions;
use headless_chrome::{Browser, LaunchOptions};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export task failed: {0}")]
    Task(String),
}

/// Turns a standalone HTML page into PDF bytes.
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render(&self, html: String) -> Result<Vec<u8>, ExportError>;
}

pub struct ChromePdfRenderer {
    chrome_path: Option<PathBuf>,
}

impl ChromePdfRenderer {
    /// `chrome_path` of `None` lets headless_chrome locate a browser itself.
    pub fn new(chrome_path: Option<PathBuf>) -> Self {
        Self { chrome_path }
    }
}

#[async_trait]
impl PdfRenderer for ChromePdfRenderer {
    async fn render(&self, html: String) -> Result<Vec<u8>, ExportError> {
        let chrome_path = self.chrome_path.clone();
        let pdf = tokio::task::spawn_blocking(move || print_html(chrome_path, &html))
            .await
            .map_err(|e| ExportError::Task(e.to_string()))??;
        info!("Rendered PDF ({} bytes)", pdf.len());
        Ok(pdf)
    }
}

fn print_html(chrome_path: Option<PathBuf>, html: &str) -> Result<Vec<u8>, ExportError> {
    let mut page = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".html")
        .tempfile()?;
    page.write_all(html.as_bytes())?;
    page.flush()?;
    let url = format!("file://{}", page.path().display());
    debug!("Printing {url}");

    let browser = Browser::new(LaunchOptions {
        headless: true,
        path: chrome_path,
        ..Default::default()
    })
    .map_err(|e| ExportError::Browser(e.to_string()))?;

    let tab = browser
        .new_tab()
        .map_err(|e| ExportError::Browser(e.to_string()))?;
    tab.navigate_to(&url)
        .map_err(|e| ExportError::Browser(e.to_string()))?;
    tab.wait_until_navigated()
        .map_err(|e| ExportError::Browser(e.to_string()))?;

    let pdf = tab
        .print_to_pdf(Some(PrintToPdfOptions {
            print_background: Some(true),
            ..Default::default()
        }))
        .map_err(|e| ExportError::Browser(e.to_string()))?;

    tab.close(true)
        .map_err(|e| ExportError::Browser(e.to_string()))?;
    Ok(pdf)
}
