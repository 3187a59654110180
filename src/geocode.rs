//! Forward geocoding of arbitrary addresses.
//!
//! One-shot query against a Nominatim-style endpoint: the top placemark
//! comes back or the operation fails. Not cancelable once started, never
//! retried. Used by the `atlas geocode` command.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::config::{Config, GeocoderConfig};
use crate::geo::GeoPoint;

/// A resolved address.
#[derive(Debug, Clone, PartialEq)]
pub struct Placemark {
    pub display_name: String,
    pub position: GeoPoint,
}

/// One row of a Nominatim search response. Coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct GeocoderRow {
    display_name: String,
    lat: String,
    lon: String,
}

/// Resolve `address` to its best placemark.
pub async fn geocode_address(config: &GeocoderConfig, address: &str) -> Result<Placemark> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(&config.user_agent)
        .build()?;

    let rows: Vec<GeocoderRow> = client
        .get(&config.endpoint)
        .query(&[("q", address), ("format", "json"), ("limit", "1")])
        .send()
        .await
        .with_context(|| format!("Geocoder request failed: {}", config.endpoint))?
        .error_for_status()?
        .json()
        .await
        .context("Geocoder returned an unreadable response")?;

    let Some(row) = rows.into_iter().next() else {
        bail!("no placemark found for '{}'", address);
    };

    let latitude: f64 = row
        .lat
        .parse()
        .context("Geocoder returned a non-numeric latitude")?;
    let longitude: f64 = row
        .lon
        .parse()
        .context("Geocoder returned a non-numeric longitude")?;

    Ok(Placemark {
        display_name: row.display_name,
        position: GeoPoint::new(latitude, longitude),
    })
}

/// CLI entry point for `atlas geocode`.
pub async fn run_geocode(config: &Config, address: &str) -> Result<()> {
    let placemark = geocode_address(&config.geocoder, address).await?;

    println!("{}", placemark.display_name);
    println!("  latitude:  {:.7}", placemark.position.latitude);
    println!("  longitude: {:.7}", placemark.position.longitude);

    Ok(())
}
