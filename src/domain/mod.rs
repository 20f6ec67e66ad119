pub mod attribute;
pub mod error;
pub mod field;
pub mod output;
pub mod preset;
pub mod prompt;
pub mod session;

pub use attribute::{Attribute, Category};
pub use error::AppError;
pub use field::{DataSource, PromptField, create_field};
pub use output::{
    ImagenJson, LabelFormatter, OutputFormat, PromptOutput, RenderOptions, SpacedLowercase,
    TargetSelection, Veo3Json, generate, generate_with, render,
};
pub use preset::{
    Preset, PresetCatalog, PresetValues, apply_preset, builtin_presets, create_user_preset,
};
pub use prompt::Prompt;
pub use session::{Action, Outcome, Rejection, SessionState, reduce};
