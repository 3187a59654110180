//! Building feed sources.
//!
//! A [`Source`] produces the raw feed payload text; it owns transport
//! concerns (URL, timeout, file path) and nothing else. Body shape is the
//! directory loader's business. Two sources are built in: the campus HTTP
//! API and a local JSON file for offline use and tests.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::config::Config;
use crate::directory::LoadError;

/// A provider of the raw building feed.
#[async_trait]
pub trait Source: Send + Sync {
    /// Source kind identifier (e.g. `"http"`, `"file"`).
    fn name(&self) -> &str;

    /// One-line description of where the feed comes from.
    fn describe(&self) -> String;

    /// Fetch the raw payload text. Transport failures surface as
    /// [`LoadError::Fetch`]; no retries are attempted.
    async fn fetch_raw(&self) -> Result<String, LoadError>;
}

/// Fetches the feed from the campus buildings API with a single GET.
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[async_trait]
impl Source for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch_raw(&self) -> Result<String, LoadError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LoadError::Fetch(format!(
                "server returned {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))
    }
}

/// Reads the feed from a local JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Source for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_raw(&self) -> Result<String, LoadError> {
        std::fs::read_to_string(&self.path)
            .map_err(|e| LoadError::Fetch(format!("{}: {}", self.path.display(), e)))
    }
}

/// Build the configured source.
pub fn source_from_config(config: &Config) -> Result<Box<dyn Source>> {
    match config.source.kind.as_str() {
        "http" => {
            let Some(url) = config.source.url.as_deref() else {
                bail!("source.url is not set");
            };
            Ok(Box::new(HttpSource::new(url, config.source.timeout_secs)))
        }
        "file" => {
            let Some(path) = config.source.path.as_deref() else {
                bail!("source.path is not set");
            };
            Ok(Box::new(FileSource::new(path)))
        }
        other => bail!("Unknown source kind: '{}'. Available: http, file", other),
    }
}
