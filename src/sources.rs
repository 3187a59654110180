use anyhow::Result;

use crate::config::Config;
use crate::source::source_from_config;

pub fn list_sources(config: &Config) -> Result<()> {
    let source = source_from_config(config)?;

    // A file source is healthy when the file exists; HTTP reachability is
    // only known once a load is attempted.
    let status = match config.source.kind.as_str() {
        "file" => {
            if config.source.path.as_ref().is_some_and(|p| p.exists()) {
                "OK"
            } else {
                "NOT FOUND"
            }
        }
        _ => "UNVERIFIED",
    };

    println!("{:<8} {:<12} LOCATION", "SOURCE", "STATUS");
    println!("{:<8} {:<12} {}", source.name(), status, source.describe());

    Ok(())
}
