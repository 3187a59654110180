//! Building detail lookup.
//!
//! Prints every retained field for one building and, on request, downloads
//! the plain-text description behind its `description_url`. Used by the
//! `atlas show` command.

use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::config::Config;
use crate::directory::Directory;

/// CLI entry point for `atlas show`.
pub async fn run_show(
    config: &Config,
    directory: &Directory,
    name: &str,
    with_description: bool,
) -> Result<()> {
    let Some(building) = directory.get(name) else {
        bail!(
            "no building named '{}'. Names are matched exactly; try `atlas list`.",
            name
        );
    };

    println!("--- {} ---", building.name);
    println!("abbreviation: {}", building.abbreviation);
    println!("category:     {}", building.category);
    println!("latitude:     {:.10}", building.latitude);
    println!("longitude:    {:.10}", building.longitude);
    println!("description:  {}", building.description_url);
    if building.has_image() {
        println!("image:        {}", building.image_url);
    } else {
        println!("image:        (none)");
    }

    if with_description {
        let text = fetch_description(config, &building.description_url).await?;
        println!();
        println!("--- Description ---");
        println!("{}", text.trim_end());
    }

    Ok(())
}

async fn fetch_description(config: &Config, url: &str) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.source.timeout_secs))
        .build()?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch description from {}", url))?
        .error_for_status()?;

    Ok(response.text().await?)
}
