//! Projecting an itinerary onto a map.
//!
//! The core never draws anything itself. Callers inject a [`MapService`]
//! and [`render_itinerary`] feeds it markers, routes and a focus point.

use serde_json::{Value, json};

use crate::constants::{BOUNDS_PADDING, DEFAULT_MAP_CENTER, DEFAULT_ZOOM, SELECTED_ZOOM};
use crate::itinerary::Itinerary;
use crate::location::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Lodging,
    Event,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub kind: MarkerKind,
    pub label: String,
    pub address: String,
    pub at: Coordinate,
    pub selected: bool,
}

/// Straight line from the lodging to an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub event_id: String,
    pub from: Coordinate,
    pub to: Coordinate,
    pub highlighted: bool,
}

pub trait MapService {
    fn add_marker(&mut self, marker: Marker);
    fn add_route(&mut self, route: Route);
    fn focus(&mut self, center: Coordinate, zoom: u8);
    fn clear_all(&mut self);
}

/// Axis-aligned box around a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    pub fn around(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Bounds {
            south: first.latitude,
            west: first.longitude,
            north: first.latitude,
            east: first.longitude,
        };
        for p in &points[1..] {
            bounds.south = bounds.south.min(p.latitude);
            bounds.north = bounds.north.max(p.latitude);
            bounds.west = bounds.west.min(p.longitude);
            bounds.east = bounds.east.max(p.longitude);
        }
        Some(bounds)
    }

    /// Grow each side by `ratio` of the box's span.
    pub fn pad(self, ratio: f64) -> Self {
        let lat = (self.north - self.south) * ratio;
        let lon = (self.east - self.west) * ratio;
        Bounds {
            south: self.south - lat,
            west: self.west - lon,
            north: self.north + lat,
            east: self.east + lon,
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

/// Id used for the lodging marker when selecting it. Generated ids never
/// contain a colon, so no event can share it.
pub const LODGING_MARKER_ID: &str = "lodging:qg";

/// Redraw `itinerary` on `map`, optionally focusing one marker.
pub fn render_itinerary<M: MapService + ?Sized>(
    itinerary: &Itinerary,
    selected: Option<&str>,
    map: &mut M,
) {
    map.clear_all();

    let mut points = Vec::new();
    let mut focus = None;

    if let Some(lodging) = &itinerary.lodging {
        let is_selected = selected == Some(LODGING_MARKER_ID);
        let at = lodging.coordinate();
        map.add_marker(Marker {
            id: LODGING_MARKER_ID.to_string(),
            kind: MarkerKind::Lodging,
            label: lodging.name().to_string(),
            address: lodging.address().to_string(),
            at,
            selected: is_selected,
        });
        points.push(at);
        if is_selected {
            focus = Some(at);
        }
    }

    for event in &itinerary.events {
        let is_selected = selected == Some(event.id());
        let at = event.coordinate();

        if let Some(lodging) = &itinerary.lodging {
            map.add_route(Route {
                event_id: event.id().to_string(),
                from: lodging.coordinate(),
                to: at,
                highlighted: is_selected,
            });
        }

        map.add_marker(Marker {
            id: event.id().to_string(),
            kind: MarkerKind::Event,
            label: event.name().to_string(),
            address: event.address().to_string(),
            at,
            selected: is_selected,
        });
        points.push(at);
        if is_selected {
            focus = Some(at);
        }
    }

    match (focus, Bounds::around(&points)) {
        (Some(at), _) => map.focus(at, SELECTED_ZOOM),
        (None, Some(bounds)) => map.focus(bounds.pad(BOUNDS_PADDING).center(), DEFAULT_ZOOM),
        (None, None) => map.focus(DEFAULT_MAP_CENTER, DEFAULT_ZOOM),
    }
}

/// Collects what would be drawn as a GeoJSON `FeatureCollection`.
#[derive(Debug, Default)]
pub struct GeoJsonMap {
    features: Vec<Value>,
    focus: Option<(Coordinate, u8)>,
}

impl GeoJsonMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    pub fn to_value(&self) -> Value {
        let mut collection = json!({
            "type": "FeatureCollection",
            "features": self.features,
        });
        if let Some((center, zoom)) = self.focus {
            collection["properties"] = json!({
                "center": position(center),
                "zoom": zoom,
            });
        }
        collection
    }
}

/// GeoJSON positions are `[longitude, latitude]`.
fn position(c: Coordinate) -> Value {
    json!([c.longitude, c.latitude])
}

impl MapService for GeoJsonMap {
    fn add_marker(&mut self, marker: Marker) {
        let kind = match marker.kind {
            MarkerKind::Lodging => "lodging",
            MarkerKind::Event => "event",
        };
        self.features.push(json!({
            "type": "Feature",
            "id": marker.id,
            "geometry": { "type": "Point", "coordinates": position(marker.at) },
            "properties": {
                "kind": kind,
                "name": marker.label,
                "address": marker.address,
                "selected": marker.selected,
            },
        }));
    }

    fn add_route(&mut self, route: Route) {
        self.features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "LineString",
                "coordinates": [position(route.from), position(route.to)],
            },
            "properties": {
                "kind": "route",
                "event": route.event_id,
                "highlighted": route.highlighted,
            },
        }));
    }

    fn focus(&mut self, center: Coordinate, zoom: u8) {
        self.focus = Some((center, zoom));
    }

    fn clear_all(&mut self) {
        self.features.clear();
        self.focus = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Location;
    use crate::ordering::test_support::event;

    #[derive(Default)]
    struct RecordingMap {
        calls: Vec<String>,
        markers: Vec<Marker>,
        routes: Vec<Route>,
        focus: Option<(Coordinate, u8)>,
    }

    impl MapService for RecordingMap {
        fn add_marker(&mut self, marker: Marker) {
            self.calls.push(format!("marker:{}", marker.id));
            self.markers.push(marker);
        }

        fn add_route(&mut self, route: Route) {
            self.calls.push(format!("route:{}", route.event_id));
            self.routes.push(route);
        }

        fn focus(&mut self, center: Coordinate, zoom: u8) {
            self.calls.push("focus".to_string());
            self.focus = Some((center, zoom));
        }

        fn clear_all(&mut self) {
            self.calls.push("clear".to_string());
        }
    }

    #[test]
    fn test_event_id_never_selects_lodging() {
        let mut map = RecordingMap::default();
        let itinerary = Itinerary {
            lodging: Some(Location::with_id("h", "QG", "Rua A", Coordinate::new(-20.0, -44.0))),
            events: vec![event("hotel", "2025-03-01", "10:00")],
            ..Default::default()
        };
        render_itinerary(&itinerary, Some("hotel"), &mut map);

        let lodging = map.markers.iter().find(|m| m.kind == MarkerKind::Lodging).unwrap();
        let bloco = map.markers.iter().find(|m| m.kind == MarkerKind::Event).unwrap();
        assert!(!lodging.selected);
        assert!(bloco.selected);
        assert_ne!(lodging.id, bloco.id);
        assert_eq!(map.focus, Some((bloco.at, SELECTED_ZOOM)));
    }

    #[test]
    fn test_generated_ids_cannot_be_lodging_marker() {
        for _ in 0..50 {
            assert_ne!(crate::location::generate_id(), LODGING_MARKER_ID);
        }
        assert!(LODGING_MARKER_ID.contains(':'));
    }

    fn itinerary_with_lodging() -> Itinerary {
        Itinerary {
            lodging: Some(Location::with_id("h", "QG", "Rua A", Coordinate::new(-20.0, -44.0))),
            events: vec![event("a", "2025-03-01", "10:00"), event("b", "2025-03-02", "10:00")],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_itinerary_focuses_city() {
        let mut map = RecordingMap::default();
        render_itinerary(&Itinerary::default(), None, &mut map);
        assert_eq!(map.calls, vec!["clear", "focus"]);
        assert_eq!(map.focus, Some((DEFAULT_MAP_CENTER, DEFAULT_ZOOM)));
    }

    #[test]
    fn test_routes_from_lodging_to_each_event() {
        let mut map = RecordingMap::default();
        render_itinerary(&itinerary_with_lodging(), None, &mut map);

        assert_eq!(
            map.calls,
            vec!["clear", "marker:lodging:qg", "route:a", "marker:a", "route:b", "marker:b", "focus"]
        );
        assert!(map.routes.iter().all(|r| r.from == Coordinate::new(-20.0, -44.0)));
        assert!(map.routes.iter().all(|r| !r.highlighted));
    }

    #[test]
    fn test_no_routes_without_lodging() {
        let mut map = RecordingMap::default();
        let itinerary = Itinerary {
            events: vec![event("a", "2025-03-01", "10:00")],
            ..Default::default()
        };
        render_itinerary(&itinerary, None, &mut map);
        assert!(map.routes.is_empty());
        assert_eq!(map.markers.len(), 1);
    }

    #[test]
    fn test_selected_event_highlighted_and_focused() {
        let mut map = RecordingMap::default();
        render_itinerary(&itinerary_with_lodging(), Some("b"), &mut map);

        let route_b = map.routes.iter().find(|r| r.event_id == "b").unwrap();
        assert!(route_b.highlighted);
        let marker_b = map.markers.iter().find(|m| m.id == "b").unwrap();
        assert!(marker_b.selected);
        assert_eq!(map.focus, Some((marker_b.at, SELECTED_ZOOM)));
    }

    #[test]
    fn test_unselected_fits_bounds_center() {
        let mut map = RecordingMap::default();
        let itinerary = Itinerary {
            lodging: Some(Location::with_id("h", "QG", "Rua A", Coordinate::new(-20.0, -44.0))),
            events: vec![],
            ..Default::default()
        };
        render_itinerary(&itinerary, Some("missing"), &mut map);
        assert_eq!(map.focus, Some((Coordinate::new(-20.0, -44.0), DEFAULT_ZOOM)));
    }

    #[test]
    fn test_bounds_pad_and_center() {
        let bounds = Bounds::around(&[Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 20.0)])
            .unwrap()
            .pad(0.3);
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(bounds.south, -3.0));
        assert!(close(bounds.north, 13.0));
        assert!(close(bounds.west, -6.0));
        assert!(close(bounds.east, 26.0));
        assert!(close(bounds.center().latitude, 5.0));
        assert!(close(bounds.center().longitude, 10.0));
    }

    #[test]
    fn test_geojson_export() {
        let mut map = GeoJsonMap::new();
        render_itinerary(&itinerary_with_lodging(), None, &mut map);

        // lodging marker + 2 routes + 2 event markers
        assert_eq!(map.feature_count(), 5);
        let value = map.to_value();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["properties"]["kind"], "lodging");
        assert_eq!(value["features"][0]["geometry"]["coordinates"], json!([-44.0, -20.0]));
        assert_eq!(value["features"][1]["geometry"]["type"], "LineString");
        assert_eq!(value["properties"]["zoom"], DEFAULT_ZOOM);
    }

    #[test]
    fn test_geojson_rerender_clears_previous() {
        let mut map = GeoJsonMap::new();
        render_itinerary(&itinerary_with_lodging(), None, &mut map);
        render_itinerary(&Itinerary::default(), None, &mut map);
        assert_eq!(map.feature_count(), 0);
    }
}
