//! The itinerary aggregate: one optional lodging plus ordered events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::location::Lodging;
use crate::ordering::sort_in_place;

/// How the user plans to get around. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransportMode {
    #[default]
    #[serde(rename = "caminhada")]
    Walking,
    #[serde(rename = "transporte_publico")]
    Transit,
    #[serde(rename = "carro")]
    Driving,
}

impl TransportMode {
    pub const ALL: [TransportMode; 3] = [
        TransportMode::Walking,
        TransportMode::Transit,
        TransportMode::Driving,
    ];

    /// The value written to durable state.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Walking => "caminhada",
            TransportMode::Transit => "transporte_publico",
            TransportMode::Driving => "carro",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Walking => "A pé",
            TransportMode::Transit => "Transporte público",
            TransportMode::Driving => "Carro",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransportMode::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<_> = TransportMode::ALL.iter().map(|m| m.as_str()).collect();
                format!("Unknown transport mode '{}'. Expected one of: {}", s, valid.join(", "))
            })
    }
}

/// Everything the user has planned.
///
/// `events` is always sorted by `(date, start_time)`; only
/// [`ItineraryStore`](crate::store::ItineraryStore) mutates it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "ItineraryRecord")]
pub struct Itinerary {
    pub(crate) lodging: Option<Lodging>,
    #[serde(rename = "bloquinhos")]
    pub(crate) events: Vec<Event>,
    #[serde(rename = "selectedMode")]
    pub(crate) selected_mode: TransportMode,
}

/// Stored shape. Older records name the lodging `hotel`; when both keys
/// are present `lodging` wins.
#[derive(Deserialize)]
struct ItineraryRecord {
    #[serde(default)]
    lodging: Option<Lodging>,
    #[serde(default)]
    hotel: Option<Lodging>,
    #[serde(default)]
    bloquinhos: Vec<Event>,
    #[serde(rename = "selectedMode", default)]
    selected_mode: TransportMode,
}

impl From<ItineraryRecord> for Itinerary {
    fn from(record: ItineraryRecord) -> Self {
        Itinerary::new(
            record.lodging.or(record.hotel),
            record.bloquinhos,
            record.selected_mode,
        )
    }
}

impl Itinerary {
    /// Events are put in `(date, start_time)` order.
    pub fn new(lodging: Option<Lodging>, mut events: Vec<Event>, selected_mode: TransportMode) -> Self {
        sort_in_place(&mut events);
        Itinerary {
            lodging,
            events,
            selected_mode,
        }
    }

    pub fn lodging(&self) -> Option<&Lodging> {
        self.lodging.as_ref()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn selected_mode(&self) -> TransportMode {
        self.selected_mode
    }

    pub fn is_empty(&self) -> bool {
        self.lodging.is_none() && self.events.is_empty()
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let itinerary = Itinerary::default();
        assert!(itinerary.is_empty());
        assert_eq!(itinerary.selected_mode(), TransportMode::Walking);
    }

    #[test]
    fn test_record_field_names() {
        let json = serde_json::to_value(Itinerary::default()).unwrap();
        assert!(json["lodging"].is_null());
        assert_eq!(json["bloquinhos"], serde_json::json!([]));
        assert_eq!(json["selectedMode"], "caminhada");
    }

    fn lodging_json(name: &str) -> String {
        format!(
            r#"{{"id":"{name}","name":"{name}","address":"Rua A","latitude":-19.9,"longitude":-43.9}}"#
        )
    }

    #[test]
    fn test_record_with_lodging_and_hotel_prefers_lodging() {
        let raw = format!(
            r#"{{"lodging":{},"hotel":{},"bloquinhos":[],"selectedMode":"carro"}}"#,
            lodging_json("novo"),
            lodging_json("antigo")
        );
        let itinerary: Itinerary = serde_json::from_str(&raw).unwrap();
        assert_eq!(itinerary.lodging().map(|l| l.id()), Some("novo"));
        assert_eq!(itinerary.selected_mode(), TransportMode::Driving);
    }

    #[test]
    fn test_record_with_only_hotel() {
        let raw = format!(r#"{{"hotel":{}}}"#, lodging_json("antigo"));
        let itinerary: Itinerary = serde_json::from_str(&raw).unwrap();
        assert_eq!(itinerary.lodging().map(|l| l.id()), Some("antigo"));
        assert!(itinerary.events().is_empty());
    }

    #[test]
    fn test_written_record_has_no_hotel_key() {
        let raw = format!(r#"{{"hotel":{}}}"#, lodging_json("antigo"));
        let itinerary: Itinerary = serde_json::from_str(&raw).unwrap();
        let json = serde_json::to_value(&itinerary).unwrap();
        assert_eq!(json["lodging"]["id"], "antigo");
        assert!(json.get("hotel").is_none());
    }

    #[test]
    fn test_new_orders_events() {
        use crate::ordering::test_support::{event, ids};

        let itinerary = Itinerary::new(
            None,
            vec![event("late", "2025-03-02", "10:00"), event("early", "2025-03-01", "22:00")],
            TransportMode::Walking,
        );
        assert_eq!(ids(itinerary.events()), vec!["early", "late"]);
        assert_eq!(itinerary.event("late").map(|e| e.id()), Some("late"));
    }

    #[test]
    fn test_transport_mode_from_str() {
        assert_eq!("carro".parse::<TransportMode>().unwrap(), TransportMode::Driving);
        assert_eq!(
            "transporte_publico".parse::<TransportMode>().unwrap(),
            TransportMode::Transit
        );
        assert!("bike".parse::<TransportMode>().is_err());
    }

    #[test]
    fn test_transport_mode_serde_matches_as_str() {
        for mode in TransportMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.as_str()));
        }
    }
}
