use anyhow::Result;
use owo_colors::OwoColorize;
use roteiro_core::config::RoteiroConfig;
use roteiro_core::constants::STATE_KEY;
use roteiro_core::itinerary::Itinerary;

pub fn run(config: &RoteiroConfig, itinerary: &Itinerary) -> Result<()> {
    println!("{}", "🎭 roteiro: your Carnival, planned".bold());
    println!();
    println!("  1. {}  roteiro lodging", "Set your QG".bold());
    println!("     Where you rest between one bloco and the next.");
    println!("  2. {}  roteiro add", "Add bloquinhos".bold());
    println!("     Every address is located in {}.", config.city_context.cyan());
    println!("  3. {}  roteiro schedule / roteiro map", "Follow the plan".bold());
    println!("     Day by day, with routes from your QG to each bloco.");
    println!();

    let data_file = config.storage().path_for(STATE_KEY);
    println!(
        "{}",
        format!("  Your data stays on this device: {}", data_file.display()).dimmed()
    );
    if itinerary.is_empty() {
        println!("{}", "  Nothing planned yet.".dimmed());
    } else {
        let status = format!(
            "  {} bloquinho(s) planned, lodging {}",
            itinerary.events().len(),
            if itinerary.lodging().is_some() { "set" } else { "not set" }
        );
        println!("{}", status.dimmed());
    }

    Ok(())
}
