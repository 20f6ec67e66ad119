//! vprompt: assemble categorized video/image generation prompts and export them as text and JSON.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::api::{
    ComposeRequest, DynContext, FieldAssignment, GenerateOptions, GenerateResult, PresetListing,
    create_context, create_context_at, generate, generate_at, list_presets, list_presets_at,
    save_preset, save_preset_at, show_preset, show_preset_at,
};
pub use app::store::SessionStore;
pub use domain::{
    Action, AppError, Attribute, Category, DataSource, OutputFormat, Preset, Prompt, PromptField,
    PromptOutput, TargetSelection,
};
