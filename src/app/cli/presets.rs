//! Preset subcommands.

use clap::Subcommand;

use super::ComposeArgs;
use crate::app::api;
use crate::domain::{AppError, Category, Preset};

#[derive(Subcommand)]
pub enum PresetCommands {
    /// List built-in and saved presets
    #[clap(visible_alias = "ls")]
    List,
    /// Show the values of a preset
    Show {
        /// Preset id
        id: String,
    },
    /// Save an assembled prompt as a new preset
    Save {
        /// Name for the new preset
        name: String,
        #[command(flatten)]
        compose: ComposeArgs,
    },
}

pub fn run_presets(command: PresetCommands) -> Result<(), AppError> {
    match command {
        PresetCommands::List => run_list(),
        PresetCommands::Show { id } => run_show(&id),
        PresetCommands::Save { name, compose } => run_save(&name, compose),
    }
}

fn run_list() -> Result<(), AppError> {
    let listing = api::list_presets()?;

    println!("Built-in presets:");
    for preset in &listing.builtin {
        println!("  {:<22} {}", preset.id, preset.name);
    }

    println!("\nMy presets:");
    if listing.user.is_empty() {
        println!("  (none)");
    }
    for preset in &listing.user {
        println!("  {:<38} {}", preset.id, preset.name);
    }
    Ok(())
}

fn run_show(id: &str) -> Result<(), AppError> {
    let preset = api::show_preset(id)?;
    print!("{}", format_preset(&preset));
    Ok(())
}

fn run_save(name: &str, compose: ComposeArgs) -> Result<(), AppError> {
    let request = compose.into_request()?;
    let preset = api::save_preset(name, &request)?;
    println!("✅ Saved preset '{}' ({})", preset.name, preset.id);
    Ok(())
}

pub(crate) fn format_preset(preset: &Preset) -> String {
    let origin = if preset.built_in { "built-in" } else { "saved" };
    let mut out = format!("{} ({}, {})\n", preset.name, preset.id, origin);
    for category in Category::ALL {
        let values: Vec<String> = category
            .attributes()
            .filter_map(|attribute| {
                preset.values.get(&attribute).map(|value| {
                    let shown = if value.trim().is_empty() { "(empty)" } else { value.as_str() };
                    format!("  {}: {}\n", attribute.display_name(), shown)
                })
            })
            .collect();
        if values.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", category.display_name()));
        out.extend(values);
    }
    out
}
