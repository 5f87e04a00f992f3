use colored::Colorize;
use inquire::{Select, Text};

use crate::{error::AppError, git, profile, store::ProfileStore};

/// Sentinel menu entry that starts the interactive add flow
const CREATE_OPTION: &str = "[create a new profile]";

/// Interactive switch flow: pick a stored profile and apply it as the
/// global Git identity.
///
/// A missing profiles file seeds one and returns without selecting, so a
/// first run leaves the user with a file to edit.
pub fn run_switch(store: &ProfileStore) -> Result<(), AppError> {
    if !store.path().exists() {
        let path = store.generate()?;
        println!("{} {}", "no profiles file found, created".yellow(), path.display());
        return Ok(());
    }

    let profiles = store.load()?;
    if profiles.is_empty() {
        println!("{}", "no profiles to switch to".red());
        return Ok(());
    }

    let mut options: Vec<String> = profiles.iter().map(|profile| profile.key.clone()).collect();
    options.push(CREATE_OPTION.to_string());

    let selected: String =
        Select::new(&format!("{}", "select profile to switch:".blue()), options).prompt()?;

    if selected == CREATE_OPTION {
        return menu_add_profile(store);
    }

    if let Some(chosen) = profile::find(&profiles, &selected) {
        git::apply_profile(chosen)?;
        println!("{} {}", "switched to profile:".green(), chosen.key);
    }

    Ok(())
}

/// Menu for adding a new profile
fn menu_add_profile(store: &ProfileStore) -> Result<(), AppError> {
    let key: String = prompt_non_blank(&format!("{}", "enter profile key:".blue()))?;
    let name: String = prompt_non_blank(&format!("{}", "enter git name:".blue()))?;
    let email: String = prompt_non_blank(&format!("{}", "enter git email:".blue()))?;

    store.add(&key, &name, &email)?;
    println!("{} {}", "added profile:".green(), key);
    Ok(())
}

/// Prompts until the user provides a non-blank value
fn prompt_non_blank(prompt_message: &str) -> Result<String, AppError> {
    loop {
        let input: String = Text::new(prompt_message).prompt()?;
        if input.trim().is_empty() {
            println!("{}", "input cannot be empty".red());
        } else {
            break Ok(input);
        }
    }
}
