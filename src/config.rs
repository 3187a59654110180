use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub source: SourceConfig,
    #[serde(default)]
    pub geocoder: GeocoderConfig,
    #[serde(default)]
    pub route: RouteConfig,
}

/// Where the building feed comes from.
#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// `"http"` or `"file"`.
    pub kind: String,
    /// Feed URL for the `http` source.
    #[serde(default)]
    pub url: Option<String>,
    /// Local JSON path for the `file` source.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeocoderConfig {
    #[serde(default = "default_geocoder_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_geocoder_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_geocoder_endpoint(),
            user_agent: default_geocoder_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_geocoder_endpoint() -> String {
    "https://nominatim.openstreetmap.org/search".to_string()
}

fn default_geocoder_user_agent() -> String {
    concat!("campus-atlas/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Travel-speed assumptions for route estimates, in meters per second.
#[derive(Debug, Deserialize, Clone)]
pub struct RouteConfig {
    #[serde(default = "default_walking_speed")]
    pub walking_speed_mps: f64,
    #[serde(default = "default_driving_speed")]
    pub driving_speed_mps: f64,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            walking_speed_mps: default_walking_speed(),
            driving_speed_mps: default_driving_speed(),
        }
    }
}

fn default_walking_speed() -> f64 {
    1.4
}

// Campus streets, not highways.
fn default_driving_speed() -> f64 {
    8.0
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    // Validate source
    match config.source.kind.as_str() {
        "http" => {
            if config.source.url.as_deref().unwrap_or("").is_empty() {
                anyhow::bail!("source.url must be set when source.kind is 'http'");
            }
        }
        "file" => {
            if config.source.path.is_none() {
                anyhow::bail!("source.path must be set when source.kind is 'file'");
            }
        }
        other => anyhow::bail!("Unknown source kind: '{}'. Must be http or file.", other),
    }

    if config.source.timeout_secs == 0 {
        anyhow::bail!("source.timeout_secs must be > 0");
    }

    // Validate route speeds
    if config.route.walking_speed_mps <= 0.0 {
        anyhow::bail!("route.walking_speed_mps must be > 0");
    }
    if config.route.driving_speed_mps <= 0.0 {
        anyhow::bail!("route.driving_speed_mps must be > 0");
    }

    // Validate geocoder
    if config.geocoder.endpoint.is_empty() {
        anyhow::bail!("geocoder.endpoint must not be empty");
    }

    Ok(config)
}
