use anyhow::Result;
use owo_colors::OwoColorize;
use roteiro_core::itinerary::Itinerary;
use roteiro_core::ordering::days;

use crate::render::{day_heading, schedule_entry};

pub fn run(itinerary: &Itinerary) -> Result<()> {
    if itinerary.is_empty() {
        println!("{}", "🗓️  Nothing planned yet...".dimmed());
        return Ok(());
    }

    println!("{}", "Cronograma".bold());

    let schedule = days(itinerary.events());
    for day in &schedule {
        println!();
        println!("{}", day_heading(&day.date).on_blue().white().bold());
        for (i, event) in day.events.iter().enumerate() {
            for line in schedule_entry(i, event) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
