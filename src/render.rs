//! TUI rendering for roteiro-core types.
//!
//! Extension traits that add colored terminal rendering using owo_colors.

use chrono::{Datelike, Weekday};
use owo_colors::OwoColorize;
use roteiro_core::event::{Event, EventDate};
use roteiro_core::location::Location;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Location {
    fn render(&self) -> String {
        format!(
            "🏨 {} {}",
            self.name().bold(),
            format!("({})", self.address()).dimmed()
        )
    }
}

impl Render for Event {
    fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            short_date(&self.date).cyan(),
            self.start_time.as_str().yellow(),
            self.name(),
            format!("[{}]", self.id()).dimmed()
        )
    }
}

/// `dd/mm`
pub fn short_date(date: &EventDate) -> String {
    date.to_naive().format("%d/%m").to_string()
}

/// `dd/mm (Sábado)`
pub fn day_heading(date: &EventDate) -> String {
    format!("{} ({})", short_date(date), weekday_pt(date.to_naive().weekday()))
}

fn weekday_pt(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Segunda",
        Weekday::Tue => "Terça",
        Weekday::Wed => "Quarta",
        Weekday::Thu => "Quinta",
        Weekday::Fri => "Sexta",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// Schedule card for one event, numbered within its day.
pub fn schedule_entry(index: usize, event: &Event) -> Vec<String> {
    let mut lines = vec![
        format!(
            "  {} {} {}",
            format!("Bloco {}", index + 1).magenta().bold(),
            format!("⏰ {}", event.start_time).dimmed(),
            event.name().bold()
        ),
        format!("     📍 {}", event.address()),
    ];

    if let Some(style) = &event.music_style {
        lines.push(format!("     {}", format!("🎸 {style}").italic()));
    }
    if let Some(notes) = &event.notes {
        lines.push(format!("     {} {}", "📝 Nota:".yellow().bold(), notes));
    }

    lines
}
