//! Campus region summary.
//!
//! Computes the visible region a map of the directory would need (center
//! plus north-south and east-west span in meters) and lists every building
//! annotation with its coordinates. Used by the `atlas map` command.

use anyhow::{bail, Result};

use crate::directory::Directory;
use crate::geo::{haversine_meters, GeoPoint};
use crate::models::Building;

/// The region enclosing a set of buildings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: GeoPoint,
    pub north_south_meters: f64,
    pub east_west_meters: f64,
}

/// Bounding region of `buildings`. Returns `None` for an empty set.
pub fn bounding_region<'a, I>(buildings: I) -> Option<Region>
where
    I: IntoIterator<Item = &'a Building>,
{
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    let mut seen = false;

    for building in buildings {
        seen = true;
        min_lat = min_lat.min(building.latitude);
        max_lat = max_lat.max(building.latitude);
        min_lon = min_lon.min(building.longitude);
        max_lon = max_lon.max(building.longitude);
    }

    if !seen {
        return None;
    }

    let center = GeoPoint::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0);
    let north_south_meters = haversine_meters(
        GeoPoint::new(min_lat, center.longitude),
        GeoPoint::new(max_lat, center.longitude),
    );
    let east_west_meters = haversine_meters(
        GeoPoint::new(center.latitude, min_lon),
        GeoPoint::new(center.latitude, max_lon),
    );

    Some(Region {
        center,
        north_south_meters,
        east_west_meters,
    })
}

/// CLI entry point for `atlas map`.
pub fn run_map(directory: &Directory, category: Option<&str>) -> Result<()> {
    let buildings: Vec<&Building> = directory
        .buildings()
        .filter(|b| category.map_or(true, |c| b.category.eq_ignore_ascii_case(c)))
        .collect();

    let Some(region) = bounding_region(buildings.iter().copied()) else {
        match category {
            Some(c) => bail!("no buildings in category '{}'", c),
            None => bail!("the directory is empty"),
        }
    };

    println!("region");
    println!(
        "  center:      {:.7}, {:.7}",
        region.center.latitude, region.center.longitude
    );
    println!("  north-south: {:.0} m", region.north_south_meters);
    println!("  east-west:   {:.0} m", region.east_west_meters);
    println!("  annotations: {}", buildings.len());
    println!();

    for building in &buildings {
        println!(
            "  {:<44} {:>12.7} {:>13.7}  {}",
            building.name, building.latitude, building.longitude, building.abbreviation
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(name: &str, latitude: f64, longitude: f64) -> Building {
        Building {
            name: name.to_string(),
            abbreviation: name.to_uppercase(),
            category: "Academic".to_string(),
            description_url: "http://example.edu/desc.txt".to_string(),
            image_url: String::new(),
            latitude,
            longitude,
        }
    }

    #[test]
    fn test_empty_set_has_no_region() {
        assert!(bounding_region(std::iter::empty::<&Building>()).is_none());
    }

    #[test]
    fn test_single_building_region_is_a_point() {
        let b = building("Agnew Hall", 37.2247741885, -80.4241237773);
        let region = bounding_region([&b]).unwrap();
        assert_eq!(region.center, b.position());
        assert_eq!(region.north_south_meters, 0.0);
        assert_eq!(region.east_west_meters, 0.0);
    }

    #[test]
    fn test_region_encloses_both_corners() {
        let a = building("Agnew Hall", 37.2247741885, -80.4241237773);
        let w = building("Wright House", 37.2268104329, -80.4261888832);
        let region = bounding_region([&a, &w]).unwrap();

        assert!((region.center.latitude - 37.22579231).abs() < 1e-6);
        assert!((region.center.longitude - (-80.42515633)).abs() < 1e-6);
        // Spans match the coordinate deltas at campus scale.
        assert!((region.north_south_meters - 226.0).abs() < 5.0);
        assert!((region.east_west_meters - 183.0).abs() < 5.0);
    }
}
