use std::path::Path;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use roteiro_core::itinerary::Itinerary;
use roteiro_core::map::{GeoJsonMap, LODGING_MARKER_ID, render_itinerary};

pub fn run(itinerary: &Itinerary, selected: Option<&str>, output: Option<&Path>) -> Result<()> {
    if let Some(id) = selected {
        let known = id == LODGING_MARKER_ID || itinerary.event(id).is_some();
        if !known {
            anyhow::bail!("Nothing with id '{}' on the map", id);
        }
    }

    let mut map = GeoJsonMap::new();
    render_itinerary(itinerary, selected, &mut map);

    let json = serde_json::to_string_pretty(&map.to_value())?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            let summary = format!(
                "  Wrote {} map feature(s) to {}",
                map.feature_count(),
                path.display()
            );
            println!("{}", summary.green());
        }
        None => println!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roteiro_core::event::{Event, EventDate, StartTime};
    use roteiro_core::itinerary::TransportMode;
    use roteiro_core::location::{Coordinate, Location};

    #[test]
    fn test_writes_geojson_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.geojson");
        let itinerary = Itinerary::new(
            Some(Location::with_id("h", "QG", "Rua A", Coordinate::new(-19.9, -43.9))),
            vec![],
            TransportMode::Walking,
        );

        run(&itinerary, Some(LODGING_MARKER_ID), Some(&path)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["type"], "FeatureCollection");
        assert_eq!(written["features"][0]["properties"]["selected"], true);
    }

    #[test]
    fn test_event_named_hotel_selects_only_itself() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.geojson");
        let bloco = Event::new(
            Location::with_id("hotel", "Bloco do Hotel", "Rua B", Coordinate::new(-19.8, -43.8)),
            EventDate::parse("2025-03-01").unwrap(),
            StartTime::parse("10:00").unwrap(),
        );
        let itinerary = Itinerary::new(
            Some(Location::with_id("h", "QG", "Rua A", Coordinate::new(-19.9, -43.9))),
            vec![bloco],
            TransportMode::Walking,
        );

        run(&itinerary, Some("hotel"), Some(&path)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let features = written["features"].as_array().unwrap();
        let lodging = features.iter().find(|f| f["properties"]["kind"] == "lodging").unwrap();
        let event = features.iter().find(|f| f["properties"]["kind"] == "event").unwrap();
        assert_eq!(lodging["properties"]["selected"], false);
        assert_eq!(event["properties"]["selected"], true);
    }

    #[test]
    fn test_unknown_selection_rejected() {
        assert!(run(&Itinerary::default(), Some("ghost"), None).is_err());
    }
}
