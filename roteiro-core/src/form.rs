//! Capture forms for the lodging and for events.
//!
//! Both share one state machine:
//!
//! ```text
//! Editing ──begin_resolve──▶ Resolving ──finish_resolve──▶ Resolved | ResolutionFailed
//!    ▲                                                          │
//!    └──────────────────── set_address (changed) ◀──────────────┘
//! ```
//!
//! Editing the address while a lookup is in flight leaves the form in
//! `Resolving`; the late answer is then dropped and the form goes back to
//! `Editing`.
//!
//! Only `Resolved` can be saved. Nothing reaches the store from any other
//! state.

use tracing::{debug, warn};

use crate::constants::{DEFAULT_EVENT_DATE, DEFAULT_EVENT_TIME};
use crate::error::{CoreError, CoreResult, GeocodeError};
use crate::event::{Event, EventDate, StartTime};
use crate::geocode::{Geocoder, Resolution};
use crate::location::{Coordinate, Location, Lodging};

#[derive(Debug, Clone, PartialEq)]
pub enum FormState {
    Editing,
    Resolving,
    Resolved(Coordinate),
    ResolutionFailed(ResolveFailure),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResolveFailure {
    NotFound,
    Lookup(String),
}

impl ResolveFailure {
    /// Message shown to the user; both cases can be retried.
    pub fn notice(&self) -> String {
        match self {
            ResolveFailure::NotFound => {
                "Address not found. Try something more specific, like a street name and number."
                    .to_string()
            }
            ResolveFailure::Lookup(reason) => {
                format!("Address lookup failed ({reason}). Check your connection and try again.")
            }
        }
    }
}

/// Name + address + resolution state.
#[derive(Debug, Clone)]
pub struct LocationForm {
    name: String,
    address: String,
    state: FormState,
}

impl Default for LocationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationForm {
    pub fn new() -> Self {
        LocationForm {
            name: String::new(),
            address: String::new(),
            state: FormState::Editing,
        }
    }

    /// A form pre-filled from a saved location; starts out resolved.
    pub fn from_existing(location: &Location) -> Self {
        LocationForm {
            name: location.name().to_string(),
            address: location.address().to_string(),
            state: FormState::Resolved(location.coordinate()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.state {
            FormState::Resolved(c) => Some(c),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        self.state == FormState::Resolving
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Changing the address discards any held coordinate. During a lookup
    /// the address still changes, which makes the pending answer stale.
    pub fn set_address(&mut self, address: impl Into<String>) {
        let address = address.into();
        if address == self.address {
            return;
        }
        self.address = address;
        if matches!(
            self.state,
            FormState::Resolved(_) | FormState::ResolutionFailed(_)
        ) {
            self.state = FormState::Editing;
        }
    }

    /// Enter `Resolving` and hand back the address to look up.
    pub fn begin_resolve(&mut self) -> CoreResult<String> {
        if self.is_resolving() {
            return Err(CoreError::LookupInProgress);
        }
        if self.address.trim().is_empty() {
            return Err(CoreError::MissingField("address"));
        }
        self.state = FormState::Resolving;
        Ok(self.address.clone())
    }

    /// Settle a lookup started by `begin_resolve`. `looked_up` is the
    /// address it returned; an answer for any other address is discarded.
    pub fn finish_resolve(
        &mut self,
        looked_up: &str,
        outcome: Result<Resolution, GeocodeError>,
    ) -> &FormState {
        if !self.is_resolving() || looked_up != self.address {
            debug!(looked_up, current = %self.address, "dropping stale lookup result");
            self.state = FormState::Editing;
            return &self.state;
        }
        self.state = match outcome {
            Ok(Resolution::Found(coordinate)) => FormState::Resolved(coordinate),
            Ok(Resolution::NotFound) => FormState::ResolutionFailed(ResolveFailure::NotFound),
            Err(e) => {
                warn!(error = %e, "address lookup failed");
                FormState::ResolutionFailed(ResolveFailure::Lookup(e.to_string()))
            }
        };
        &self.state
    }

    /// One-shot lookup of the current address.
    pub async fn resolve_with<G: Geocoder>(
        &mut self,
        geocoder: &G,
        city_context: &str,
    ) -> CoreResult<&FormState> {
        let address = self.begin_resolve()?;
        let outcome = geocoder.resolve(&address, city_context).await;
        Ok(self.finish_resolve(&address, outcome))
    }

    fn validated(&self) -> CoreResult<Coordinate> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name"));
        }
        if self.address.trim().is_empty() {
            return Err(CoreError::MissingField("address"));
        }
        self.coordinate().ok_or(CoreError::Unresolved)
    }

    /// Build the lodging. Replacing an existing lodging keeps its id.
    pub fn save_lodging(&self, existing: Option<&Lodging>) -> CoreResult<Lodging> {
        let coordinate = self.validated()?;
        let name = self.name.trim();
        let address = self.address.trim();
        Ok(match existing {
            Some(current) => Location::with_id(current.id(), name, address, coordinate),
            None => Location::new(name, address, coordinate),
        })
    }
}

/// Event capture: a location form plus schedule details.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub location: LocationForm,
    pub date: String,
    pub time: String,
    pub music_style: String,
    pub notes: String,
}

impl Default for EventForm {
    fn default() -> Self {
        EventForm {
            location: LocationForm::new(),
            date: DEFAULT_EVENT_DATE.to_string(),
            time: DEFAULT_EVENT_TIME.to_string(),
            music_style: String::new(),
            notes: String::new(),
        }
    }
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self) -> CoreResult<Event> {
        let coordinate = self.location.validated()?;
        let date = EventDate::parse(&self.date)?;
        let start_time = StartTime::parse(&self.time)?;

        let location = Location::new(
            self.location.name().trim(),
            self.location.address().trim(),
            coordinate,
        );

        Ok(Event::new(location, date, start_time)
            .with_music_style(Some(self.music_style.clone()))
            .with_notes(Some(self.notes.clone())))
    }
}
