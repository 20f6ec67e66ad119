//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use tracing::warn;

use crate::app::config::{self, VpromptConfig};
use crate::app::{
    AppContext,
    commands::{generate, presets},
};
use crate::ports::KeyValueStore;
use crate::services::{FileKeyValueStore, MemoryKeyValueStore};

pub use crate::app::commands::compose::{ComposeRequest, FieldAssignment};
pub use crate::app::commands::presets::PresetListing;
pub use crate::domain::{AppError, OutputFormat, Preset, PromptOutput, TargetSelection};

/// Context over whichever storage is available to this process.
pub type DynContext = AppContext<Box<dyn KeyValueStore>>;

/// Options for [`generate`].
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub request: ComposeRequest,
    /// Overrides `[output].format` from config.
    pub format: Option<OutputFormat>,
    /// Overrides `[output].target` from config.
    pub target: Option<TargetSelection>,
}

/// Generated output together with its rendering for display.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub output: PromptOutput,
    pub rendered: String,
}

/// Create an `AppContext` over the data directory at `data_dir`.
pub fn create_context_at(data_dir: &Path) -> Result<AppContext<FileKeyValueStore>, AppError> {
    let config = config::load_config(data_dir)?;
    Ok(AppContext::new(FileKeyValueStore::in_dir(data_dir), config))
}

/// Create an `AppContext` over the resolved data directory.
///
/// Without a data directory, user presets live for this process only.
pub fn create_context() -> Result<DynContext, AppError> {
    match config::resolve_data_dir() {
        Some(data_dir) => {
            let config = config::load_config(&data_dir)?;
            let storage: Box<dyn KeyValueStore> = Box::new(FileKeyValueStore::in_dir(&data_dir));
            Ok(AppContext::new(storage, config))
        }
        None => {
            warn!("no data directory (set VPROMPT_HOME or HOME); user presets will not be kept");
            let storage: Box<dyn KeyValueStore> = Box::new(MemoryKeyValueStore::new());
            Ok(AppContext::new(storage, VpromptConfig::default()))
        }
    }
}

// =============================================================================
// Generate Command API
// =============================================================================

/// Assemble a prompt and generate both target outputs.
pub fn generate(options: &GenerateOptions) -> Result<GenerateResult, AppError> {
    generate_with(&create_context()?, options)
}

/// Assemble a prompt using the data directory at `data_dir`.
pub fn generate_at(data_dir: &Path, options: &GenerateOptions) -> Result<GenerateResult, AppError> {
    generate_with(&create_context_at(data_dir)?, options)
}

fn generate_with<S: KeyValueStore>(
    ctx: &AppContext<S>,
    options: &GenerateOptions,
) -> Result<GenerateResult, AppError> {
    let output = generate::execute(ctx, &options.request)?;
    let render_options = ctx.config().output.render_options(options.format, options.target);
    let rendered = crate::domain::render(&output, render_options)?;
    Ok(GenerateResult { output, rendered })
}

// =============================================================================
// Preset Command API
// =============================================================================

/// List built-in and user presets.
pub fn list_presets() -> Result<PresetListing, AppError> {
    Ok(presets::list(&create_context()?))
}

pub fn list_presets_at(data_dir: &Path) -> Result<PresetListing, AppError> {
    Ok(presets::list(&create_context_at(data_dir)?))
}

/// Look up a preset by id.
pub fn show_preset(id: &str) -> Result<Preset, AppError> {
    presets::show(&create_context()?, id)
}

pub fn show_preset_at(data_dir: &Path, id: &str) -> Result<Preset, AppError> {
    presets::show(&create_context_at(data_dir)?, id)
}

/// Compose a prompt and save it as a user preset.
pub fn save_preset(name: &str, request: &ComposeRequest) -> Result<Preset, AppError> {
    presets::save(&create_context()?, name, request)
}

pub fn save_preset_at(
    data_dir: &Path,
    name: &str,
    request: &ComposeRequest,
) -> Result<Preset, AppError> {
    presets::save(&create_context_at(data_dir)?, name, request)
}
