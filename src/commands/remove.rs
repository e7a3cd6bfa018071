use anyhow::Result;
use owo_colors::OwoColorize;
use roteiro_core::storage::KeyValueStorage;
use roteiro_core::store::ItineraryStore;

use crate::render::Render;

pub fn run<S: KeyValueStorage>(store: &mut ItineraryStore<S>, id: &str) -> Result<()> {
    match store.itinerary().event(id) {
        Some(event) => println!("{} {}", "  Removing".red(), event.render()),
        None => println!("{}", format!("  No bloquinho with id '{id}'").dimmed()),
    }

    store.remove_event(id)?;
    Ok(())
}
