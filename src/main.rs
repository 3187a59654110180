//! # Campus Atlas CLI (`atlas`)
//!
//! The `atlas` binary is the primary interface for Campus Atlas. It loads
//! the building directory once per invocation and provides commands for
//! browsing, detail lookup, map summaries, nearest-building search, travel
//! estimates, and forward geocoding.
//!
//! ## Usage
//!
//! ```bash
//! atlas --config ./config/atlas.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `atlas list` | Sectioned alphabetic listing of every building |
//! | `atlas show <name>` | Full detail for one building |
//! | `atlas map` | Region summary and annotation list |
//! | `atlas nearest <lat> <lon>` | Buildings closest to a position |
//! | `atlas route <from> <to>` | Distance, heading, and travel estimate |
//! | `atlas geocode <address>` | Resolve an arbitrary address |
//! | `atlas sources` | Show the configured feed source |
//!
//! ## Examples
//!
//! ```bash
//! # Browse the A section
//! atlas list --letter A
//!
//! # Everything about one building, including its description text
//! atlas show "Agnew Hall" --description
//!
//! # Walk from one building to another
//! atlas route "Agnew Hall" "Wright House" --mode walking
//!
//! # Where is the closest building?
//! atlas nearest 37.2249 -80.4249 --count 3
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use campus_atlas::{config, directory, geocode, info, list, map, nearest, route, source, sources};

/// Campus Atlas CLI — a campus building directory and wayfinding toolkit.
///
/// All commands accept a `--config` flag pointing to a TOML configuration
/// file. See `config/atlas.example.toml` for a full example.
#[derive(Parser)]
#[command(
    name = "atlas",
    about = "Campus Atlas — a campus building directory and wayfinding toolkit",
    version,
    long_about = "Campus Atlas loads a campus building feed (remote API or local file), \
    validates it into an immutable directory, and exposes browsing, detail lookup, map \
    summaries, nearest-building search, travel estimates, and forward geocoding."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/atlas.toml`. The feed source, geocoder, and
    /// travel-speed settings are read from this file.
    #[arg(long, global = true, default_value = "./config/atlas.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List every building, sectioned by first letter.
    ///
    /// One section per distinct leading letter, rows showing the building
    /// name and category.
    List {
        /// Restrict the listing to one section (case-insensitive).
        #[arg(long)]
        letter: Option<char>,
    },

    /// Show full detail for one building.
    ///
    /// Names are matched exactly as they appear in `atlas list`.
    Show {
        /// Building name (exact match).
        name: String,

        /// Also fetch and print the description text behind the building's
        /// description URL.
        #[arg(long)]
        description: bool,
    },

    /// Summarize the campus map region.
    ///
    /// Prints the center, the north-south and east-west span in meters, and
    /// every building annotation with its coordinates.
    Map {
        /// Only include buildings in this category (case-insensitive).
        #[arg(long)]
        category: Option<String>,
    },

    /// Rank buildings by distance from a position.
    // Western-hemisphere longitudes are negative.
    #[command(allow_negative_numbers = true)]
    Nearest {
        /// Latitude in decimal degrees.
        latitude: f64,

        /// Longitude in decimal degrees.
        longitude: f64,

        /// Number of buildings to show.
        #[arg(long, default_value_t = 5)]
        count: usize,
    },

    /// Estimate the leg between two buildings.
    ///
    /// Reports great-circle distance, initial compass heading, and an
    /// expected travel time for the chosen mode.
    Route {
        /// Starting building name (exact match).
        from: String,

        /// Destination building name (exact match).
        to: String,

        /// Travel mode used for the time estimate.
        #[arg(long, value_enum, default_value = "walking")]
        mode: route::TravelMode,
    },

    /// Resolve an arbitrary address to coordinates.
    ///
    /// Sends one query to the configured geocoding endpoint and prints the
    /// top placemark. The request is one-shot; nothing is retried.
    Geocode {
        /// Free-form address or place name.
        address: String,
    },

    /// Show the configured feed source and its status.
    Sources,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(&cli.config)?;

    // Commands that don't need the directory
    match &cli.command {
        Commands::Sources => {
            sources::list_sources(&cfg)?;
            return Ok(());
        }
        Commands::Geocode { address } => {
            geocode::run_geocode(&cfg, address).await?;
            return Ok(());
        }
        _ => {}
    }

    // One-shot load: every remaining command assumes a fully-populated,
    // immutable directory, so completion is awaited before any of them run.
    let feed = source::source_from_config(&cfg)?;
    let dir = match directory::load_directory(feed.as_ref()).await {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::List { letter } => {
            list::run_list(&dir, letter)?;
        }
        Commands::Show { name, description } => {
            info::run_show(&cfg, &dir, &name, description).await?;
        }
        Commands::Map { category } => {
            map::run_map(&dir, category.as_deref())?;
        }
        Commands::Nearest {
            latitude,
            longitude,
            count,
        } => {
            nearest::run_nearest(&dir, latitude, longitude, count)?;
        }
        Commands::Route { from, to, mode } => {
            route::run_route(&cfg, &dir, &from, &to, mode)?;
        }
        Commands::Geocode { .. } | Commands::Sources => {
            // Handled above (before the directory load)
            unreachable!()
        }
    }

    Ok(())
}
