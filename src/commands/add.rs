use anyhow::Result;
use owo_colors::OwoColorize;
use roteiro_core::config::RoteiroConfig;
use roteiro_core::event::{EventDate, StartTime};
use roteiro_core::form::EventForm;
use roteiro_core::geocode::NominatimGeocoder;
use roteiro_core::storage::KeyValueStorage;
use roteiro_core::store::ItineraryStore;

use super::{prompt_optional, prompt_text, resolve_address};
use crate::render::Render;

/// Raw command-line input for a new event.
pub struct EventInput {
    pub name: Option<String>,
    pub address: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub genre: Option<String>,
    pub note: Option<String>,
}

pub async fn run<S: KeyValueStorage>(
    store: &mut ItineraryStore<S>,
    config: &RoteiroConfig,
    input: EventInput,
) -> Result<()> {
    let interactive = input.name.is_none() || input.address.is_none();
    let mut form = EventForm::new();

    let name = match input.name {
        Some(n) => n,
        None => prompt_text("  Bloco name", None)?,
    };
    form.location.set_name(name);

    let address = match input.address {
        Some(a) => a,
        None => prompt_text("  Where?", None)?,
    };
    form.location.set_address(address);

    if let Some(date) = input.date {
        form.date = date;
    } else if interactive {
        form.date = prompt_valid("  Date (YYYY-MM-DD)", &form.date, EventDate::parse)?;
    }

    if let Some(time) = input.time {
        form.time = time;
    } else if interactive {
        form.time = prompt_valid("  Time (HH:MM)", &form.time, StartTime::parse)?;
    }

    if let Some(genre) = input.genre {
        form.music_style = genre;
    } else if interactive {
        form.music_style = prompt_optional("  Music style (skip)")?;
    }

    if let Some(note) = input.note {
        form.notes = note;
    } else if interactive {
        form.notes = prompt_optional("  Notes (skip)")?;
    }

    // Reject a malformed date/time before spending a lookup on it
    EventDate::parse(&form.date)?;
    StartTime::parse(&form.time)?;

    let geocoder = NominatimGeocoder::new(&config.geocoder_url, &config.user_agent)?;
    resolve_address(&mut form.location, &geocoder, &config.city_context, interactive).await?;

    let event = form.save()?;
    println!("{}", "  Added:".green());
    println!("  {}", event.render());

    store.add_event(event)?;
    Ok(())
}

/// Prompt until `check` accepts the input.
fn prompt_valid<T, E>(prompt: &str, default: &str, check: fn(&str) -> Result<T, E>) -> Result<String>
where
    E: std::fmt::Display,
{
    loop {
        let value = prompt_text(prompt, Some(default))?;
        match check(&value) {
            Ok(_) => return Ok(value.trim().to_string()),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}
