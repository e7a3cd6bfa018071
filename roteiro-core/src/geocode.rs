//! Address resolution against a Nominatim-compatible search service.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::GeocodeError;
use crate::location::Coordinate;

/// Outcome of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Found(Coordinate),
    /// The service answered but had no match. Not an error.
    NotFound,
}

/// Turns free-text addresses into coordinates.
#[allow(async_fn_in_trait)]
pub trait Geocoder {
    async fn resolve(&self, address: &str, city_context: &str)
    -> Result<Resolution, GeocodeError>;
}

/// Builds the free-text query sent to the service.
pub fn build_query(address: &str, city_context: &str) -> String {
    let address = address.trim();
    let city_context = city_context.trim();
    if city_context.is_empty() {
        address.to_string()
    } else {
        format!("{address}, {city_context}")
    }
}

#[derive(Deserialize)]
struct Place {
    lat: String,
    lon: String,
}

/// Interpret a search response body: first result wins, empty means not found.
pub fn parse_response(body: &str) -> Result<Resolution, GeocodeError> {
    let places: Vec<Place> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Malformed(e.to_string()))?;

    let Some(first) = places.into_iter().next() else {
        return Ok(Resolution::NotFound);
    };

    let latitude: f64 = first
        .lat
        .trim()
        .parse()
        .map_err(|_| GeocodeError::Malformed(format!("bad latitude '{}'", first.lat)))?;
    let longitude: f64 = first
        .lon
        .trim()
        .parse()
        .map_err(|_| GeocodeError::Malformed(format!("bad longitude '{}'", first.lon)))?;

    Ok(Resolution::Found(Coordinate::new(latitude, longitude)))
}

#[derive(Clone)]
pub struct NominatimGeocoder {
    client: reqwest::Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(NominatimGeocoder {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

impl Geocoder for NominatimGeocoder {
    async fn resolve(
        &self,
        address: &str,
        city_context: &str,
    ) -> Result<Resolution, GeocodeError> {
        let query = build_query(address, city_context);
        debug!(query = %query, "geocoding address");

        let response = self
            .client
            .get(self.search_url())
            .query(&[("format", "json"), ("q", query.as_str()), ("limit", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "geocoder returned an error status");
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let resolution = parse_response(&body)?;
        debug!(?resolution, "geocoding finished");
        Ok(resolution)
    }
}
