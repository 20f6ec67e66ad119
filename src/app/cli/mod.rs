//! CLI Adapter.

mod build;
mod presets;

use crate::app::api::{self, ComposeRequest, FieldAssignment, GenerateOptions};
use crate::domain::{AppError, Attribute, Category, OutputFormat, TargetSelection};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "vprompt")]
#[command(version)]
#[command(
    about = "Assemble video and image generation prompts from categorized fields",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a prompt and print VEO 3 / Imagen output
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        compose: ComposeArgs,
        /// Output format: text, json, or all
        #[arg(short, long)]
        format: Option<OutputFormat>,
        /// Target model: veo3, imagen, or all
        #[arg(short, long)]
        target: Option<TargetSelection>,
    },
    /// List, inspect and save presets
    #[clap(visible_alias = "p")]
    Presets {
        #[command(subcommand)]
        command: presets::PresetCommands,
    },
    /// List prompt fields grouped by category
    #[clap(visible_alias = "f")]
    Fields,
    /// Build a prompt interactively
    #[clap(visible_alias = "b")]
    Build,
}

/// Preset and field edits shared by commands that assemble a prompt.
#[derive(Args, Debug, Default)]
pub struct ComposeArgs {
    /// Preset id to start from
    #[arg(short, long)]
    preset: Option<String>,
    /// Set a field, e.g. --set mood="calm and quiet" (repeatable)
    #[arg(short = 's', long = "set", value_name = "ATTRIBUTE=VALUE")]
    set: Vec<String>,
}

impl ComposeArgs {
    pub(crate) fn into_request(self) -> Result<ComposeRequest, AppError> {
        let assignments = self
            .set
            .iter()
            .map(|raw| raw.parse::<FieldAssignment>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ComposeRequest { preset: self.preset, assignments })
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { compose, format, target } => run_generate(compose, format, target),
        Commands::Presets { command } => presets::run_presets(command),
        Commands::Fields => {
            print_fields();
            Ok(())
        }
        Commands::Build => build::run_build(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    compose: ComposeArgs,
    format: Option<OutputFormat>,
    target: Option<TargetSelection>,
) -> Result<(), AppError> {
    let options = GenerateOptions { request: compose.into_request()?, format, target };
    let result = api::generate(&options)?;
    println!("{}", result.rendered);
    Ok(())
}

fn print_fields() {
    for category in Category::ALL {
        println!("{}", category.display_name());
        for attribute in category.attributes() {
            println!("  {:<20} {}", attribute.identifier(), describe_attribute(attribute));
        }
    }
}

fn describe_attribute(attribute: Attribute) -> String {
    let suggestions = attribute.suggestions();
    if !suggestions.is_empty() {
        return format!("{} [{}]", attribute.display_name(), suggestions.join(", "));
    }
    match attribute.hint() {
        Some(hint) => format!("{} (e.g., {})", attribute.display_name(), hint),
        None => attribute.display_name().to_string(),
    }
}
