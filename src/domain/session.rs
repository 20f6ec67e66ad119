//! Session state and the reducer that is the only way to change it.

use crate::domain::{
    AppError, Attribute, DataSource, Preset, PresetCatalog, Prompt, apply_preset,
    create_user_preset,
};

/// Immutable snapshot of an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub prompt: Prompt,
    pub selected_preset: Option<String>,
    pub catalog: PresetCatalog,
}

impl SessionState {
    /// Fresh prompt over the given user presets.
    pub fn new(user_presets: Vec<Preset>) -> Self {
        Self {
            prompt: Prompt::new(),
            selected_preset: None,
            catalog: PresetCatalog::new(user_presets),
        }
    }
}

/// An edit requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    UpdateField { attribute: Attribute, value: String, source: DataSource },
    SelectPreset(String),
    StartFresh,
    SaveAsPreset { name: String },
}

impl Action {
    /// Manual edit of one field.
    pub fn manual(attribute: Attribute, value: impl Into<String>) -> Self {
        Action::UpdateField { attribute, value: value.into(), source: DataSource::Manual }
    }
}

/// Why an action left the state unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    UnknownPreset(String),
    EmptyPresetName,
}

impl Rejection {
    pub fn into_error(self) -> AppError {
        match self {
            Rejection::UnknownPreset(id) => AppError::PresetNotFound(id),
            Rejection::EmptyPresetName => AppError::EmptyPresetName,
        }
    }
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    FieldUpdated(Attribute),
    PresetApplied(String),
    Cleared,
    PresetSaved(Preset),
    Rejected(Rejection),
}

impl Outcome {
    /// True when the user preset collection grew.
    pub fn changes_user_presets(&self) -> bool {
        matches!(self, Outcome::PresetSaved(_))
    }
}

/// Compute the next state. Rejected actions return the input state unchanged.
pub fn reduce(state: &SessionState, action: Action) -> (SessionState, Outcome) {
    match action {
        Action::UpdateField { attribute, value, source } => {
            let next = SessionState {
                prompt: state.prompt.update_field(attribute, value, source),
                ..state.clone()
            };
            (next, Outcome::FieldUpdated(attribute))
        }
        Action::SelectPreset(id) => match state.catalog.find(&id) {
            Some(preset) => {
                let next = SessionState {
                    prompt: apply_preset(preset, &state.prompt),
                    selected_preset: Some(id.clone()),
                    catalog: state.catalog.clone(),
                };
                (next, Outcome::PresetApplied(id))
            }
            None => (state.clone(), Outcome::Rejected(Rejection::UnknownPreset(id))),
        },
        Action::StartFresh => {
            let next = SessionState {
                prompt: state.prompt.reset(),
                selected_preset: None,
                catalog: state.catalog.clone(),
            };
            (next, Outcome::Cleared)
        }
        Action::SaveAsPreset { name } => match create_user_preset(&name, &state.prompt) {
            Ok(preset) => {
                let mut catalog = state.catalog.clone();
                catalog.push_user(preset.clone());
                let next = SessionState {
                    prompt: state.prompt.clone(),
                    selected_preset: Some(preset.id.clone()),
                    catalog,
                };
                (next, Outcome::PresetSaved(preset))
            }
            Err(_) => (state.clone(), Outcome::Rejected(Rejection::EmptyPresetName)),
        },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::{Category, builtin_presets};

    #[test]
    fn select_preset_applies_values_and_records_selection() {
        let state = SessionState::new(Vec::new());
        let (next, outcome) = reduce(&state, Action::SelectPreset("cinematic-drama".into()));

        assert_eq!(outcome, Outcome::PresetApplied("cinematic-drama".into()));
        assert_eq!(next.selected_preset.as_deref(), Some("cinematic-drama"));
        assert_eq!(next.prompt.value(Attribute::FrameRate), "24fps");
        assert_eq!(next.prompt.field(Attribute::FrameRate).source, DataSource::Preset);
    }

    #[test]
    fn unknown_preset_is_rejected_without_change() {
        let state = SessionState::new(Vec::new());
        let (next, outcome) = reduce(&state, Action::SelectPreset("nope".into()));

        assert_eq!(next, state);
        assert_eq!(outcome, Outcome::Rejected(Rejection::UnknownPreset("nope".into())));
    }

    #[test]
    fn whitespace_preset_name_leaves_collection_unchanged() {
        let state = SessionState::new(Vec::new());
        let (state, _) = reduce(&state, Action::manual(Attribute::Mood, "calm"));
        let (next, outcome) = reduce(&state, Action::SaveAsPreset { name: "  ".into() });

        assert_eq!(outcome, Outcome::Rejected(Rejection::EmptyPresetName));
        assert!(next.catalog.user().is_empty());
        assert!(!outcome.changes_user_presets());
    }

    #[test]
    fn save_as_preset_appends_and_selects() {
        let state = SessionState::new(Vec::new());
        let (state, _) = reduce(&state, Action::manual(Attribute::Props, "lantern"));
        let (next, outcome) = reduce(&state, Action::SaveAsPreset { name: "Night Walk".into() });

        let Outcome::PresetSaved(preset) = &outcome else {
            panic!("expected PresetSaved, got {outcome:?}");
        };
        assert!(outcome.changes_user_presets());
        assert_eq!(next.catalog.user(), std::slice::from_ref(preset));
        assert_eq!(next.selected_preset.as_deref(), Some(preset.id.as_str()));
        assert_eq!(preset.values[&Attribute::Props], "lantern");
    }

    #[test]
    fn saved_preset_can_be_reapplied_after_start_fresh() {
        let state = SessionState::new(Vec::new());
        let (state, _) = reduce(&state, Action::manual(Attribute::Location, "pier"));
        let (state, outcome) = reduce(&state, Action::SaveAsPreset { name: "Pier".into() });
        let Outcome::PresetSaved(preset) = outcome else { panic!("preset not saved") };

        let (state, outcome) = reduce(&state, Action::StartFresh);
        assert_eq!(outcome, Outcome::Cleared);
        assert!(state.prompt.is_blank());
        assert_eq!(state.selected_preset, None);

        let (state, _) = reduce(&state, Action::SelectPreset(preset.id));
        assert_eq!(state.prompt.value(Attribute::Location), "pier");
    }

    #[test]
    fn manual_edit_after_preset_only_touches_that_field() {
        let state = SessionState::new(Vec::new());
        let (state, _) = reduce(&state, Action::SelectPreset("artistic-portrait".into()));
        let (next, _) = reduce(&state, Action::manual(Attribute::Lighting, "candlelit"));

        assert_eq!(next.prompt.field(Attribute::Lighting).source, DataSource::Manual);
        assert_eq!(
            next.prompt.field(Attribute::ColorGrade),
            state.prompt.field(Attribute::ColorGrade)
        );
        assert_eq!(next.prompt.field(Attribute::Lighting).category, Category::Cinematography);
    }

    fn attribute_strategy() -> impl Strategy<Value = Attribute> {
        (0..Attribute::COUNT).prop_map(|i| Attribute::ALL[i])
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        let preset_ids: Vec<String> = builtin_presets().into_iter().map(|p| p.id).collect();
        prop_oneof![
            (attribute_strategy(), "[a-z ]{0,8}").prop_map(|(a, v)| Action::manual(a, v)),
            prop::sample::select(preset_ids).prop_map(Action::SelectPreset),
            Just(Action::StartFresh),
            "[a-z ]{0,4}".prop_map(|name| Action::SaveAsPreset { name }),
        ]
    }

    proptest! {
        #[test]
        fn categories_never_change(actions in prop::collection::vec(action_strategy(), 0..20)) {
            let mut state = SessionState::new(Vec::new());
            for action in actions {
                state = reduce(&state, action).0;
                for (attribute, field) in state.prompt.iter() {
                    prop_assert_eq!(field.category, attribute.category());
                }
            }
        }

        #[test]
        fn apply_preset_preserves_categories(
            preset_index in 0usize..5,
            edits in prop::collection::vec((attribute_strategy(), "[a-z]{0,5}"), 0..10)
        ) {
            let prompt = edits.iter().fold(Prompt::new(), |p, (a, v)| {
                p.update_field(*a, v.as_str(), DataSource::Manual)
            });
            let preset = builtin_presets().remove(preset_index);
            let applied = apply_preset(&preset, &prompt);
            for ((_, before), (_, after)) in prompt.iter().zip(applied.iter()) {
                prop_assert_eq!(before.category, after.category);
            }
        }
    }
}
