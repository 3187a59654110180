//! Core data models used throughout Campus Atlas.
//!
//! These types represent the buildings that flow from the data source
//! through the directory into the presentation commands.

/// One campus building, validated and normalized by the directory loader.
///
/// Every field except `image_url` is guaranteed non-empty / present once a
/// load has succeeded. `image_url` is `""` for buildings without a photo.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub name: String,
    pub abbreviation: String,
    pub category: String,
    pub description_url: String,
    pub image_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Building {
    /// The building's position as a [`GeoPoint`](crate::geo::GeoPoint).
    pub fn position(&self) -> crate::geo::GeoPoint {
        crate::geo::GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// Whether the source feed carried a photo URL for this building.
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
