//! Geocoded places: the lodging and the base shape of every event.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::ID_LENGTH;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// A named place whose address has already been resolved to a coordinate.
///
/// There is no way to change the address of an existing `Location`: a new
/// address means a new resolution and a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: String,
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

/// The single home base of an itinerary ("QG").
pub type Lodging = Location;

impl Location {
    pub fn new(name: impl Into<String>, address: impl Into<String>, coordinate: Coordinate) -> Self {
        Self::with_id(generate_id(), name, address, coordinate)
    }

    pub fn with_id(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Location {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.address)
    }
}

/// Short random alphanumeric token, e.g. `k3x9q0a7b`.
///
/// Collisions are only avoided probabilistically.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()[..ID_LENGTH].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), ID_LENGTH);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generate_id_differs() {
        assert_ne!(generate_id(), generate_id());
    }

    #[test]
    fn test_location_serializes_flat_fields() {
        let loc = Location::with_id(
            "abc",
            "Ibis Savassi",
            "Rua Bahia, 1000",
            Coordinate::new(-19.93, -43.93),
        );
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["name"], "Ibis Savassi");
        assert_eq!(json["address"], "Rua Bahia, 1000");
        assert_eq!(json["latitude"], -19.93);
        assert_eq!(json["longitude"], -43.93);
    }

    #[test]
    fn test_coordinate_accessor() {
        let loc = Location::new("Casa", "Rua X", Coordinate::new(1.5, -2.5));
        assert_eq!(loc.coordinate(), Coordinate::new(1.5, -2.5));
    }
}
