use anyhow::Result;
use owo_colors::OwoColorize;
use roteiro_core::itinerary::TransportMode;
use roteiro_core::storage::KeyValueStorage;
use roteiro_core::store::ItineraryStore;

pub fn run<S: KeyValueStorage>(store: &mut ItineraryStore<S>, mode: Option<&str>) -> Result<()> {
    let Some(mode) = mode else {
        let current = store.itinerary().selected_mode();
        for m in TransportMode::ALL {
            let line = format!("{:<20} {}", m.as_str(), m.label());
            if m == current {
                println!("{} {}", "*".green(), line.green());
            } else {
                println!("  {}", line.dimmed());
            }
        }
        return Ok(());
    };

    let mode: TransportMode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    println!("{}", format!("  Getting around: {}", mode.label()).green());
    store.set_transport_mode(mode)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roteiro_core::storage::MemoryStorage;

    #[test]
    fn test_set_mode_persists() {
        let mut store = ItineraryStore::open(MemoryStorage::new());
        run(&mut store, Some("transporte_publico")).unwrap();
        assert_eq!(store.itinerary().selected_mode(), TransportMode::Transit);

        let reopened = ItineraryStore::open(store.storage().clone());
        assert_eq!(reopened.itinerary().selected_mode(), TransportMode::Transit);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let mut store = ItineraryStore::open(MemoryStorage::new());
        assert!(run(&mut store, Some("patinete")).is_err());
        assert_eq!(store.itinerary().selected_mode(), TransportMode::Walking);
    }

    #[test]
    fn test_show_mode_leaves_state() {
        let mut store = ItineraryStore::open(MemoryStorage::new());
        run(&mut store, None).unwrap();
        assert_eq!(store.itinerary().selected_mode(), TransportMode::Walking);
    }
}
