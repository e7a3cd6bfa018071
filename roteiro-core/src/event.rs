//! Street-party events ("bloquinhos").
//!
//! Dates and times are kept as fixed-width strings so that plain string
//! comparison orders them chronologically. The newtypes below are the only
//! way in, and they reject anything that is not zero-padded.

use std::fmt;
use std::ops::Deref;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::{Coordinate, Location};

/// A calendar day in `YYYY-MM-DD` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EventDate(String);

impl EventDate {
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        // Round-trip so only the canonical zero-padded form gets through
        match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) if s.len() == 10 && date.format("%Y-%m-%d").to_string() == s => {
                Ok(EventDate(s.to_string()))
            }
            _ => Err(CoreError::InvalidDate(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_naive(&self) -> NaiveDate {
        // Validated on construction
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").unwrap_or_default()
    }
}

/// A 24-hour wall clock time in `HH:MM` form.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StartTime(String);

impl StartTime {
    pub fn parse(s: &str) -> CoreResult<Self> {
        let s = s.trim();
        match NaiveTime::parse_from_str(s, "%H:%M") {
            Ok(time) if time.format("%H:%M").to_string() == s => Ok(StartTime(s.to_string())),
            _ => Err(CoreError::InvalidTime(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

macro_rules! string_newtype_impls {
    ($ty:ident) => {
        impl Deref for $ty {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $ty::parse(&raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

string_newtype_impls!(EventDate);
string_newtype_impls!(StartTime);

/// A scheduled street party with its own location and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(flatten)]
    pub location: Location,
    pub date: EventDate,
    pub start_time: StartTime,
    /// Reserved. Always equal to `start_time`; carries no duration.
    pub end_time: StartTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Event {
    pub fn new(location: Location, date: EventDate, start_time: StartTime) -> Self {
        Event {
            location,
            date,
            end_time: start_time.clone(),
            start_time,
            music_style: None,
            notes: None,
        }
    }

    pub fn with_music_style(mut self, style: Option<String>) -> Self {
        self.music_style = non_empty(style);
        self
    }

    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = non_empty(notes);
        self
    }

    pub fn id(&self) -> &str {
        self.location.id()
    }

    pub fn name(&self) -> &str {
        self.location.name()
    }

    pub fn address(&self) -> &str {
        self.location.address()
    }

    pub fn coordinate(&self) -> Coordinate {
        self.location.coordinate()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.start_time, self.location.name())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
