use anyhow::Result;
use owo_colors::OwoColorize;
use roteiro_core::config::RoteiroConfig;
use roteiro_core::form::LocationForm;
use roteiro_core::geocode::NominatimGeocoder;
use roteiro_core::storage::KeyValueStorage;
use roteiro_core::store::ItineraryStore;

use super::{prompt_text, resolve_address};
use crate::render::Render;

pub async fn run<S: KeyValueStorage>(
    store: &mut ItineraryStore<S>,
    config: &RoteiroConfig,
    name: Option<String>,
    address: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || address.is_none();
    let existing = store.itinerary().lodging().cloned();

    // Start from the current QG so an unchanged address needs no lookup
    let mut form = existing
        .as_ref()
        .map(LocationForm::from_existing)
        .unwrap_or_default();

    let name = match name {
        Some(n) => n,
        None => prompt_text("  Hotel / house name", existing.as_ref().map(|l| l.name()))?,
    };
    form.set_name(name);

    let address = match address {
        Some(a) => a,
        None => prompt_text("  Address", existing.as_ref().map(|l| l.address()))?,
    };
    form.set_address(address);

    let geocoder = NominatimGeocoder::new(&config.geocoder_url, &config.user_agent)?;
    resolve_address(&mut form, &geocoder, &config.city_context, interactive).await?;

    let lodging = form.save_lodging(existing.as_ref())?;
    let verb = if existing.is_some() { "Updated" } else { "Set" };
    println!("{}", format!("  {verb} your QG:").green());
    println!("  {}", lodging.render());

    store.set_lodging(lodging)?;
    Ok(())
}
