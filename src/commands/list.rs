use anyhow::Result;
use owo_colors::OwoColorize;
use roteiro_core::itinerary::Itinerary;

use crate::render::Render;

pub fn run(itinerary: &Itinerary) -> Result<()> {
    match itinerary.lodging() {
        Some(lodging) => println!("{}", lodging.render()),
        None => println!(
            "{}",
            "No lodging yet. Set one with: roteiro lodging".dimmed()
        ),
    }
    println!(
        "{}",
        format!("Getting around: {}", itinerary.selected_mode().label()).dimmed()
    );
    println!();

    if itinerary.events().is_empty() {
        println!("{}", "No bloquinhos yet. Add one with: roteiro add".dimmed());
        return Ok(());
    }

    println!("{}", format!("Seus Blocos ({})", itinerary.events().len()).bold());
    for event in itinerary.events() {
        println!("  {}", event.render());
        println!("    {}", format!("📍 {}", event.address()).dimmed());
    }

    Ok(())
}
