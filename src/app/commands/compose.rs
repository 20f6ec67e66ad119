//! Assembling a prompt from a preset and field assignments.

use std::str::FromStr;

use crate::app::store::SessionStore;
use crate::domain::{Action, AppError, Attribute, Outcome};
use crate::ports::KeyValueStore;

/// A manual `attribute=value` edit given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub attribute: Attribute,
    pub value: String,
}

impl FromStr for FieldAssignment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) =
            s.split_once('=').ok_or_else(|| AppError::InvalidAssignment(s.to_string()))?;
        if name.trim().is_empty() {
            return Err(AppError::InvalidAssignment(s.to_string()));
        }
        Ok(Self { attribute: Attribute::parse(name)?, value: value.to_string() })
    }
}

/// Starting preset plus ordered manual edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeRequest {
    pub preset: Option<String>,
    pub assignments: Vec<FieldAssignment>,
}

/// Apply the request to a session: preset first, then each assignment in order.
pub fn compose<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    request: &ComposeRequest,
) -> Result<(), AppError> {
    if let Some(id) = &request.preset
        && let Outcome::Rejected(rejection) = store.dispatch(Action::SelectPreset(id.clone()))
    {
        return Err(rejection.into_error());
    }

    for assignment in &request.assignments {
        store.dispatch(Action::manual(assignment.attribute, assignment.value.clone()));
    }
    Ok(())
}
