//! Interactive prompt builder.

use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::api;
use crate::app::store::SessionStore;
use crate::domain::{
    Action, AppError, Attribute, DataSource, Outcome, Rejection, RenderOptions, generate, render,
};
use crate::ports::KeyValueStore;

const MENU_GENERATE: &str = "[generate]";
const MENU_PRESET: &str = "[apply preset]";
const MENU_SAVE: &str = "[save as preset]";
const MENU_CLEAR: &str = "[clear all]";
const MENU_QUIT: &str = "[quit]";
const START_FRESH: &str = "-- Start Fresh --";
const CUSTOM_VALUE: &str = "(custom value)";
const CLEAR_VALUE: &str = "(clear)";

enum MenuChoice {
    Edit(Attribute),
    Generate,
    Preset,
    Save,
    Clear,
    Quit,
}

pub fn run_build() -> Result<(), AppError> {
    let ctx = api::create_context()?;
    let render_options = ctx.config().output.render_options(None, None);
    let mut session = ctx.open_session();

    prompt_preset(&mut session)?;

    loop {
        match prompt_menu(&session)? {
            MenuChoice::Edit(attribute) => prompt_field(&mut session, attribute)?,
            MenuChoice::Generate => print_output(&session, render_options)?,
            MenuChoice::Preset => prompt_preset(&mut session)?,
            MenuChoice::Save => prompt_save(&mut session)?,
            MenuChoice::Clear => {
                session.dispatch(Action::StartFresh);
            }
            MenuChoice::Quit => break,
        }
        session.settle();
    }
    Ok(())
}

fn prompt_preset<S: KeyValueStore>(session: &mut SessionStore<S>) -> Result<(), AppError> {
    let presets: Vec<(String, String)> = session
        .state()
        .catalog
        .iter()
        .map(|preset| {
            let label = if preset.built_in {
                preset.name.clone()
            } else {
                format!("{} (saved)", preset.name)
            };
            (preset.id.clone(), label)
        })
        .collect();

    let mut items = vec![START_FRESH.to_string()];
    items.extend(presets.iter().map(|(_, label)| label.clone()));

    let Some(index) = select("Choose a starting point", &items, 0)? else {
        return Ok(());
    };

    if index == 0 {
        session.dispatch(Action::StartFresh);
    } else if let Outcome::Rejected(rejection) =
        session.dispatch(Action::SelectPreset(presets[index - 1].0.clone()))
    {
        return Err(rejection.into_error());
    }
    Ok(())
}

fn prompt_menu<S: KeyValueStore>(session: &SessionStore<S>) -> Result<MenuChoice, AppError> {
    let prompt = &session.state().prompt;
    let mut items: Vec<String> = prompt
        .iter()
        .map(|(attribute, field)| {
            let marker = match field.source {
                DataSource::Default => " ",
                DataSource::Manual => "✎",
                DataSource::Preset => "◆",
                DataSource::AiEnhanced => "✦",
            };
            format!(
                "{} {:<14} {:<20} {}",
                marker,
                attribute.category().display_name(),
                attribute.display_name(),
                field.value
            )
        })
        .collect();
    items.extend([MENU_GENERATE, MENU_PRESET, MENU_SAVE, MENU_CLEAR, MENU_QUIT].map(String::from));

    let Some(index) = select("Edit a field or choose an action", &items, Attribute::COUNT)? else {
        return Ok(MenuChoice::Quit);
    };

    let choice = match index.checked_sub(Attribute::COUNT) {
        None => MenuChoice::Edit(Attribute::ALL[index]),
        Some(0) => MenuChoice::Generate,
        Some(1) => MenuChoice::Preset,
        Some(2) => MenuChoice::Save,
        Some(3) => MenuChoice::Clear,
        Some(_) => MenuChoice::Quit,
    };
    Ok(choice)
}

fn prompt_field<S: KeyValueStore>(
    session: &mut SessionStore<S>,
    attribute: Attribute,
) -> Result<(), AppError> {
    let current = session.state().prompt.value(attribute).to_string();
    let suggestions = attribute.suggestions();

    let value = if suggestions.is_empty() {
        let label = match attribute.hint() {
            Some(hint) => format!("{} (e.g., {})", attribute.display_name(), hint),
            None => attribute.display_name().to_string(),
        };
        input(&label, &current)?
    } else {
        let mut items: Vec<&str> = suggestions.to_vec();
        items.push(CUSTOM_VALUE);
        items.push(CLEAR_VALUE);
        let default = suggestions.iter().position(|s| *s == current).unwrap_or(0);

        match select(attribute.display_name(), &items, default)? {
            None => None,
            Some(index) if items[index] == CUSTOM_VALUE => {
                input(attribute.display_name(), &current)?
            }
            Some(index) if items[index] == CLEAR_VALUE => Some(String::new()),
            Some(index) => Some(items[index].to_string()),
        }
    };

    if let Some(value) = value {
        session.dispatch(Action::manual(attribute, value));
    }
    Ok(())
}

fn prompt_save<S: KeyValueStore>(session: &mut SessionStore<S>) -> Result<(), AppError> {
    let Some(name) = input("Preset name", "")? else {
        return Ok(());
    };

    match session.dispatch(Action::SaveAsPreset { name }) {
        Outcome::PresetSaved(preset) => {
            println!("✅ Saved preset '{}' ({})", preset.name, preset.id);
        }
        Outcome::Rejected(Rejection::EmptyPresetName) => {
            println!("⚠️  Preset name must not be empty; nothing saved");
        }
        _ => {}
    }
    Ok(())
}

fn print_output<S: KeyValueStore>(
    session: &SessionStore<S>,
    options: RenderOptions,
) -> Result<(), AppError> {
    let output = generate(&session.state().prompt);
    println!("\n{}\n", render(&output, options)?);
    Ok(())
}

fn select<T: ToString>(
    prompt: &str,
    items: &[T],
    default: usize,
) -> Result<Option<usize>, AppError> {
    match Select::new().with_prompt(prompt).items(items).default(default).interact_opt() {
        Ok(selection) => Ok(selection),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("{}: {}", prompt, err))),
    }
}

fn input(prompt: &str, initial: &str) -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("{}: {}", prompt, err))),
    }
}
