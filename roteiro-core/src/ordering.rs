//! Ordering and day-grouping of events.
//!
//! All comparisons are on the raw `YYYY-MM-DD` / `HH:MM` strings.

use std::collections::HashMap;

use crate::event::{Event, EventDate};

/// Events of a single day, in schedule order.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySchedule {
    pub date: EventDate,
    pub events: Vec<Event>,
}

/// Stable sort by `(date, start_time)`. Ties keep insertion order.
pub fn sort_events(mut events: Vec<Event>) -> Vec<Event> {
    sort_in_place(&mut events);
    events
}

pub(crate) fn sort_in_place(events: &mut [Event]) {
    // slice::sort_by is stable
    events.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

/// Bucket events per day, keeping each bucket's relative order.
pub fn group_by_date(events: &[Event]) -> HashMap<EventDate, Vec<Event>> {
    let mut grouped: HashMap<EventDate, Vec<Event>> = HashMap::new();
    for event in events {
        grouped
            .entry(event.date.clone())
            .or_default()
            .push(event.clone());
    }
    grouped
}

/// Bucket keys in ascending order.
pub fn ordered_date_keys(grouped: &HashMap<EventDate, Vec<Event>>) -> Vec<EventDate> {
    let mut keys: Vec<EventDate> = grouped.keys().cloned().collect();
    keys.sort();
    keys
}

/// Day-by-day view of an already sorted event list.
pub fn days(events: &[Event]) -> Vec<DaySchedule> {
    let mut grouped = group_by_date(events);
    ordered_date_keys(&grouped)
        .into_iter()
        .map(|date| {
            let events = grouped.remove(&date).unwrap_or_default();
            DaySchedule { date, events }
        })
        .collect()
}
