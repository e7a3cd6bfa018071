//! Fixed values shared across the crate.

use crate::location::Coordinate;

/// Key the whole itinerary is stored under.
pub const STATE_KEY: &str = "carnaval_bh_data";

/// Appended to every address before it is geocoded.
pub const DEFAULT_CITY_CONTEXT: &str = "Belo Horizonte, MG, Brasil";

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Map center used when there is nothing to show (Praça Sete, BH).
pub const DEFAULT_MAP_CENTER: Coordinate = Coordinate {
    latitude: -19.9245,
    longitude: -43.9352,
};

pub const DEFAULT_ZOOM: u8 = 14;
pub const SELECTED_ZOOM: u8 = 16;

/// Extra margin around the markers' bounding box when fitting the map.
pub const BOUNDS_PADDING: f64 = 0.3;

/// Form defaults for a new event.
pub const DEFAULT_EVENT_DATE: &str = "2025-03-01";
pub const DEFAULT_EVENT_TIME: &str = "10:00";

/// Length of generated location identifiers.
pub const ID_LENGTH: usize = 9;
