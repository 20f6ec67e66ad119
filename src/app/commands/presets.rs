//! Preset listing, inspection and saving.

use crate::app::AppContext;
use crate::app::commands::compose::{ComposeRequest, compose};
use crate::domain::{Action, AppError, Outcome, Preset};
use crate::ports::KeyValueStore;

/// Presets available to the user, split by origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetListing {
    pub builtin: Vec<Preset>,
    pub user: Vec<Preset>,
}

pub fn list<S: KeyValueStore>(ctx: &AppContext<S>) -> PresetListing {
    let session = ctx.open_session();
    let catalog = &session.state().catalog;
    PresetListing { builtin: catalog.builtin().to_vec(), user: catalog.user().to_vec() }
}

pub fn show<S: KeyValueStore>(ctx: &AppContext<S>, id: &str) -> Result<Preset, AppError> {
    let session = ctx.open_session();
    session
        .state()
        .catalog
        .find(id)
        .cloned()
        .ok_or_else(|| AppError::PresetNotFound(id.to_string()))
}

/// Compose a prompt and save it as a new user preset named `name`.
pub fn save<S: KeyValueStore>(
    ctx: &AppContext<S>,
    name: &str,
    request: &ComposeRequest,
) -> Result<Preset, AppError> {
    if name.trim().is_empty() {
        return Err(AppError::EmptyPresetName);
    }

    let mut session = ctx.open_session();
    compose(&mut session, request)?;
    match session.dispatch(Action::SaveAsPreset { name: name.to_string() }) {
        Outcome::PresetSaved(preset) => {
            session.settle();
            Ok(preset)
        }
        Outcome::Rejected(rejection) => Err(rejection.into_error()),
        other => unreachable!("saving a preset yields PresetSaved or Rejected, got {other:?}"),
    }
}
