//! Core types for roteiro, a Carnival itinerary planner.
//!
//! - `location` / `event` / `itinerary`: the data model
//! - `ordering`: (date, time) ordering and day grouping
//! - `store`: the write-through itinerary store
//! - `geocode` / `form`: address resolution and the capture forms built on it
//! - `map`: the injected map capability

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod form;
pub mod geocode;
pub mod itinerary;
pub mod location;
pub mod map;
pub mod ordering;
pub mod storage;
pub mod store;

pub use error::{CoreError, CoreResult, GeocodeError};
pub use event::{Event, EventDate, StartTime};
pub use itinerary::{Itinerary, TransportMode};
pub use location::{Coordinate, Location, Lodging};
