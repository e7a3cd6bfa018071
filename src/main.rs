mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use roteiro_core::config::RoteiroConfig;
use roteiro_core::store::ItineraryStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "roteiro")]
#[command(about = "Plan your Carnival: where you stay, which bloquinhos you catch, and how to get there")]
struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// How roteiro works and where your data lives
    Info,
    /// Set your lodging (QG), replacing the current one
    Lodging {
        /// Hotel or house name (prompted if missing)
        #[arg(short, long)]
        name: Option<String>,

        /// Street address, located in the configured city (prompted if missing)
        #[arg(short, long)]
        address: Option<String>,
    },
    /// Add a bloquinho to your itinerary
    Add {
        /// Name of the bloco (prompted if missing)
        #[arg(short, long)]
        name: Option<String>,

        /// Where it happens (prompted if missing)
        #[arg(short, long)]
        address: Option<String>,

        /// Day, YYYY-MM-DD
        #[arg(short, long)]
        date: Option<String>,

        /// Start time, HH:MM (24-hour)
        #[arg(short, long)]
        time: Option<String>,

        /// Music style (e.g. "Axé", "Samba")
        #[arg(short, long)]
        genre: Option<String>,

        /// Meeting point, costume ideas...
        #[arg(long)]
        note: Option<String>,
    },
    /// Remove a bloquinho by id
    Remove { id: String },
    /// List your lodging and bloquinhos with their ids
    List,
    /// Day-by-day schedule
    Schedule,
    /// Export markers and routes as GeoJSON
    Map {
        /// Focus on this event id (or "lodging:qg" for the lodging)
        #[arg(short, long)]
        selected: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
    /// Show or change how you get around
    Mode {
        /// caminhada, transporte_publico or carro
        mode: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RoteiroConfig::load().context("Failed to load configuration")?;
    let mut store = ItineraryStore::open(config.storage());
    store.subscribe(|itinerary| {
        let summary = format!(
            "  Saved. {} bloquinho(s) planned{}",
            itinerary.events().len(),
            if itinerary.lodging().is_some() { "" } else { ", no lodging yet" }
        );
        println!("{}", summary.dimmed());
    });

    match cli.command {
        Commands::Info => commands::info::run(&config, store.itinerary()),
        Commands::Lodging { name, address } => {
            commands::lodging::run(&mut store, &config, name, address).await
        }
        Commands::Add {
            name,
            address,
            date,
            time,
            genre,
            note,
        } => {
            let input = commands::add::EventInput {
                name,
                address,
                date,
                time,
                genre,
                note,
            };
            commands::add::run(&mut store, &config, input).await
        }
        Commands::Remove { id } => commands::remove::run(&mut store, &id),
        Commands::List => commands::list::run(store.itinerary()),
        Commands::Schedule => commands::schedule::run(store.itinerary()),
        Commands::Map { selected, output } => {
            commands::map::run(store.itinerary(), selected.as_deref(), output.as_deref())
        }
        Commands::Mode { mode } => commands::mode::run(&mut store, mode.as_deref()),
    }
}

/// Logs go to stderr so they never mix with exported data on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
