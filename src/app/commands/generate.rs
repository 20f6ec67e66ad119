//! `generate`: assemble a prompt and derive both target outputs.

use crate::app::AppContext;
use crate::app::commands::compose::{ComposeRequest, compose};
use crate::domain::{AppError, PromptOutput, generate};
use crate::ports::KeyValueStore;

/// Build a prompt from a fresh session and generate its outputs.
pub fn execute<S: KeyValueStore>(
    ctx: &AppContext<S>,
    request: &ComposeRequest,
) -> Result<PromptOutput, AppError> {
    let mut session = ctx.open_session();
    compose(&mut session, request)?;
    Ok(generate(&session.state().prompt))
}
