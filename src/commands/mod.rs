pub mod add;
pub mod info;
pub mod list;
pub mod lodging;
pub mod map;
pub mod mode;
pub mod remove;
pub mod schedule;

use anyhow::Result;
use dialoguer::Input;
use owo_colors::OwoColorize;
use roteiro_core::form::{FormState, LocationForm};
use roteiro_core::geocode::Geocoder;

use crate::utils::tui::create_spinner;

/// Look the form's address up until it resolves.
///
/// Interactive sessions re-prompt for the address after a miss; otherwise
/// the first miss is an error.
pub async fn resolve_address<G: Geocoder>(
    form: &mut LocationForm,
    geocoder: &G,
    city_context: &str,
    interactive: bool,
) -> Result<()> {
    while form.coordinate().is_none() {
        let spinner = create_spinner(format!("  Locating \"{}\"", form.address()));
        let state = form.resolve_with(geocoder, city_context).await;
        spinner.finish_and_clear();

        match state? {
            FormState::Resolved(at) => {
                println!("{}", format!("  📍 Found at {at}").green());
            }
            FormState::ResolutionFailed(failure) => {
                let notice = failure.notice();
                if !interactive {
                    anyhow::bail!(notice);
                }
                eprintln!("  {}", notice.red());
                let address = prompt_text("  Address", Some(form.address()))?;
                form.set_address(address);
            }
            FormState::Editing | FormState::Resolving => {}
        }
    }

    Ok(())
}

/// Prompt for a value, pre-filled with `default` when given.
pub fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(d) = default.filter(|d| !d.is_empty()) {
        input = input.default(d.to_string());
    }
    Ok(input.interact_text()?)
}

/// Prompt for a value that may be left blank.
pub fn prompt_optional(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?)
}
