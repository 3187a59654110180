//! Nearest buildings to a position.
//!
//! Ranks the directory by great-circle distance from a caller-supplied
//! coordinate, typically the user's current location. Used by the
//! `atlas nearest` command.

use anyhow::{bail, Result};

use crate::directory::Directory;
use crate::geo::{format_distance, haversine_meters, GeoPoint};
use crate::models::Building;

/// All buildings paired with their distance from `origin`, closest first.
pub fn rank_by_distance<'a>(directory: &'a Directory, origin: GeoPoint) -> Vec<(&'a Building, f64)> {
    let mut ranked: Vec<(&Building, f64)> = directory
        .buildings()
        .map(|b| (b, haversine_meters(origin, b.position())))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

/// CLI entry point for `atlas nearest`.
pub fn run_nearest(directory: &Directory, latitude: f64, longitude: f64, count: usize) -> Result<()> {
    let origin = GeoPoint::new(latitude, longitude);
    if !origin.is_valid() {
        bail!("invalid position: latitude must be within ±90 and longitude within ±180");
    }

    let mut ranked = rank_by_distance(directory, origin);
    if ranked.is_empty() {
        bail!("the directory is empty");
    }
    ranked.truncate(count.max(1));

    println!("nearest to {:.7}, {:.7}", latitude, longitude);
    for (building, meters) in &ranked {
        println!(
            "  {:<44} {:>9}  {}",
            building.name,
            format_distance(*meters),
            building.category
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::parse_directory;
    use serde_json::json;

    fn fixture() -> Directory {
        parse_directory(&json!([
            {
                "name": "Agnew Hall", "abbreviation": "AGNEW", "category": "Academic",
                "descriptionUrl": "http://example.edu/agnew.txt", "imageUrl": "",
                "latitude": 37.2247741885, "longitude": -80.4241237773
            },
            {
                "name": "Wright House", "abbreviation": "WRGHT", "category": "Academic",
                "descriptionUrl": "http://example.edu/wrght.txt", "imageUrl": "",
                "latitude": 37.2268104329, "longitude": -80.4261888832
            }
        ]))
        .unwrap()
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let directory = fixture();
        // Standing on Agnew Hall's doorstep.
        let ranked = rank_by_distance(&directory, GeoPoint::new(37.2248, -80.4241));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].0.name, "Agnew Hall");
        assert!(ranked[0].1 < 10.0);
        assert_eq!(ranked[1].0.name, "Wright House");
        assert!(ranked[1].1 > ranked[0].1);
    }

    #[test]
    fn test_rank_covers_every_building() {
        let directory = fixture();
        let ranked = rank_by_distance(&directory, GeoPoint::new(37.0, -80.0));
        assert_eq!(ranked.len(), directory.len());
    }
}
