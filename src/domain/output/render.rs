//! Text rendering of generated outputs for terminal display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

use super::PromptOutput;

const EMPTY_PLACEHOLDER: &str = "No content generated";

/// A downstream generation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Veo3,
    Imagen,
}

impl Target {
    pub fn title(&self) -> &'static str {
        match self {
            Target::Veo3 => "VEO 3",
            Target::Imagen => "Imagen 3/4",
        }
    }
}

/// Which targets to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetSelection {
    Veo3,
    Imagen,
    #[default]
    All,
}

impl TargetSelection {
    pub fn targets(&self) -> &'static [Target] {
        match self {
            TargetSelection::Veo3 => &[Target::Veo3],
            TargetSelection::Imagen => &[Target::Imagen],
            TargetSelection::All => &[Target::Veo3, Target::Imagen],
        }
    }
}

impl FromStr for TargetSelection {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veo3" | "veo" => Ok(TargetSelection::Veo3),
            "imagen" => Ok(TargetSelection::Imagen),
            "all" => Ok(TargetSelection::All),
            other => Err(AppError::config_error(format!(
                "Invalid target '{other}': must be one of veo3, imagen, all"
            ))),
        }
    }
}

impl fmt::Display for TargetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetSelection::Veo3 => "veo3",
            TargetSelection::Imagen => "imagen",
            TargetSelection::All => "all",
        };
        write!(f, "{name}")
    }
}

/// Which serializations to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    #[default]
    All,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "all" => Ok(OutputFormat::All),
            other => Err(AppError::config_error(format!(
                "Invalid format '{other}': must be one of text, json, all"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::All => "all",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub targets: TargetSelection,
    pub pretty: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { format: OutputFormat::All, targets: TargetSelection::All, pretty: true }
    }
}

/// Render generated output for display.
///
/// A single target in a single format prints the bare payload so it can be
/// piped. Anything wider is printed as titled sections.
pub fn render(output: &PromptOutput, options: RenderOptions) -> Result<String, AppError> {
    let targets = options.targets.targets();

    if let [target] = targets {
        match options.format {
            OutputFormat::Text => return Ok(text_for(output, *target).to_string()),
            OutputFormat::Json => return json_for(output, *target, options.pretty),
            OutputFormat::All => {}
        }
    }

    let mut sections = Vec::new();
    if matches!(options.format, OutputFormat::Text | OutputFormat::All) {
        for target in targets {
            let text = text_for(output, *target);
            let body = if text.is_empty() { EMPTY_PLACEHOLDER } else { text };
            sections.push(format!("{} Prompt:\n{}", target.title(), body));
        }
    }
    if matches!(options.format, OutputFormat::Json | OutputFormat::All) {
        for target in targets {
            sections.push(format!(
                "{} JSON:\n{}",
                target.title(),
                json_for(output, *target, options.pretty)?
            ));
        }
    }

    Ok(sections.join("\n\n"))
}

fn text_for(output: &PromptOutput, target: Target) -> &str {
    match target {
        Target::Veo3 => &output.natural_language.veo3,
        Target::Imagen => &output.natural_language.imagen,
    }
}

fn json_for(output: &PromptOutput, target: Target, pretty: bool) -> Result<String, AppError> {
    let rendered = match (target, pretty) {
        (Target::Veo3, true) => serde_json::to_string_pretty(&output.json.veo3)?,
        (Target::Veo3, false) => serde_json::to_string(&output.json.veo3)?,
        (Target::Imagen, true) => serde_json::to_string_pretty(&output.json.imagen)?,
        (Target::Imagen, false) => serde_json::to_string(&output.json.imagen)?,
    };
    Ok(rendered)
}
