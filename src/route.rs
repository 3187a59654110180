//! Point-to-point travel estimates between two buildings.
//!
//! Reports the great-circle leg: distance, initial heading, and an expected
//! travel time from the configured per-mode speed. No turn-by-turn routing
//! is attempted. Used by the `atlas route` command.

use anyhow::{bail, Result};
use clap::ValueEnum;

use crate::config::Config;
use crate::directory::Directory;
use crate::geo::{compass_point, format_distance, haversine_meters, initial_bearing_degrees};

const METERS_PER_MILE: f64 = 1609.344;

/// How the user intends to travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TravelMode {
    Walking,
    Driving,
}

impl TravelMode {
    fn label(self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
            TravelMode::Driving => "driving",
        }
    }

    fn speed_mps(self, config: &Config) -> f64 {
        match self {
            TravelMode::Walking => config.route.walking_speed_mps,
            TravelMode::Driving => config.route.driving_speed_mps,
        }
    }
}

/// CLI entry point for `atlas route`.
pub fn run_route(
    config: &Config,
    directory: &Directory,
    from: &str,
    to: &str,
    mode: TravelMode,
) -> Result<()> {
    if from == to {
        bail!("the selected buildings are the same; choose two different buildings");
    }

    let Some(origin) = directory.get(from) else {
        bail!("no building named '{}'. Try `atlas list`.", from);
    };
    let Some(destination) = directory.get(to) else {
        bail!("no building named '{}'. Try `atlas list`.", to);
    };

    let meters = haversine_meters(origin.position(), destination.position());
    let bearing = initial_bearing_degrees(origin.position(), destination.position());
    let seconds = meters / mode.speed_mps(config);

    println!("route {} to {}", origin.name, destination.name);
    println!("  mode:     {}", mode.label());
    println!(
        "  distance: {} ({:.2} mi)",
        format_distance(meters),
        meters / METERS_PER_MILE
    );
    println!("  heading:  {:.0}° ({})", bearing, compass_point(bearing));
    println!("  expected: {}", format_duration(seconds));
    println!("  note:     straight-line estimate; paths on the ground run longer");

    Ok(())
}

/// Render seconds as a coarse travel time.
fn format_duration(seconds: f64) -> String {
    if seconds < 60.0 {
        return "under a minute".to_string();
    }
    let minutes = (seconds / 60.0).round() as u64;
    if minutes < 60 {
        format!("{} min", minutes)
    } else {
        format!("{} h {} min", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_under_a_minute() {
        assert_eq!(format_duration(12.0), "under a minute");
        assert_eq!(format_duration(59.9), "under a minute");
    }

    #[test]
    fn test_duration_minutes() {
        assert_eq!(format_duration(60.0), "1 min");
        assert_eq!(format_duration(290.0 / 1.4), "3 min");
        assert_eq!(format_duration(59.0 * 60.0), "59 min");
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(format_duration(3600.0), "1 h 0 min");
        assert_eq!(format_duration(4380.0), "1 h 13 min");
    }
}
