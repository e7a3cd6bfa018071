//! The itinerary store: sole owner and mutator of the aggregate.
//!
//! Every mutation is written through to storage as a whole record. There is
//! no partial persistence; a failed write leaves the in-memory state ahead of
//! what is on disk.

use tracing::{debug, info, warn};

use crate::constants::STATE_KEY;
use crate::error::{CoreError, CoreResult};
use crate::event::Event;
use crate::itinerary::{Itinerary, TransportMode};
use crate::location::Lodging;
use crate::ordering::sort_in_place;
use crate::storage::KeyValueStorage;

type Listener = Box<dyn Fn(&Itinerary)>;

/// Read the stored itinerary.
///
/// Absent, unreadable and unparseable state all yield the empty default.
/// Events come back sorted even if the record was not.
fn load<S: KeyValueStorage>(storage: &S) -> Itinerary {
    let raw = match storage.get(STATE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no stored itinerary, starting empty");
            return Itinerary::default();
        }
        Err(e) => {
            warn!(error = %e, "could not read stored itinerary, starting empty");
            return Itinerary::default();
        }
    };

    match serde_json::from_str::<Itinerary>(&raw) {
        Ok(itinerary) => {
            debug!(events = itinerary.events.len(), "loaded itinerary");
            itinerary
        }
        Err(e) => {
            warn!(error = %e, "discarding unparseable itinerary");
            Itinerary::default()
        }
    }
}

/// Write the whole aggregate, replacing whatever was stored.
fn persist<S: KeyValueStorage>(storage: &mut S, itinerary: &Itinerary) -> CoreResult<()> {
    let json = serde_json::to_string(itinerary)
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    storage.set(STATE_KEY, &json)?;
    debug!(bytes = json.len(), "persisted itinerary");
    Ok(())
}

pub struct ItineraryStore<S: KeyValueStorage> {
    storage: S,
    itinerary: Itinerary,
    listeners: Vec<Listener>,
}

impl<S: KeyValueStorage> ItineraryStore<S> {
    /// Load the stored itinerary and take ownership of it.
    pub fn open(storage: S) -> Self {
        let itinerary = load(&storage);
        ItineraryStore {
            storage,
            itinerary,
            listeners: Vec::new(),
        }
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Called with the new state after every mutation that reached storage.
    pub fn subscribe(&mut self, listener: impl Fn(&Itinerary) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn persist(&mut self) -> CoreResult<()> {
        persist(&mut self.storage, &self.itinerary)
    }

    /// Replace the lodging wholesale.
    pub fn set_lodging(&mut self, lodging: Lodging) -> CoreResult<&Itinerary> {
        info!(id = lodging.id(), name = lodging.name(), "setting lodging");
        self.itinerary.lodging = Some(lodging);
        self.commit()
    }

    /// Insert an event, keeping `(date, start_time)` order.
    pub fn add_event(&mut self, event: Event) -> CoreResult<&Itinerary> {
        info!(id = event.id(), date = %event.date, time = %event.start_time, "adding event");
        self.itinerary.events.push(event);
        sort_in_place(&mut self.itinerary.events);
        self.commit()
    }

    /// Remove the event with `id`. Unknown ids are a no-op.
    pub fn remove_event(&mut self, id: &str) -> CoreResult<&Itinerary> {
        let before = self.itinerary.events.len();
        self.itinerary.events.retain(|e| e.id() != id);
        if self.itinerary.events.len() == before {
            debug!(id, "no event to remove");
        } else {
            info!(id, "removed event");
        }
        self.commit()
    }

    pub fn set_transport_mode(&mut self, mode: TransportMode) -> CoreResult<&Itinerary> {
        info!(mode = %mode, "setting transport mode");
        self.itinerary.selected_mode = mode;
        self.commit()
    }

    fn commit(&mut self) -> CoreResult<&Itinerary> {
        self.persist()?;
        for listener in &self.listeners {
            listener(&self.itinerary);
        }
        Ok(&self.itinerary)
    }
}
