//! Output generation: pure derivation from a prompt snapshot to both target schemas.

mod label;
mod render;
mod schema;

pub use label::{DisplayName, LabelFormatter, SpacedLowercase};
pub use render::{OutputFormat, RenderOptions, Target, TargetSelection, render};
pub use schema::{
    AudioTrackSection, CinematographySection, ImagenJson, JsonOutput, NaturalLanguageOutput,
    PromptOutput, SceneSection, ShotSection, SubjectSection, Veo3Json, VisualDetailsSection,
};

use crate::domain::{Attribute, Prompt};

/// Attributes feeding the secondary schema, in output order.
pub const IMAGEN_ATTRIBUTES: [Attribute; 5] = [
    Attribute::SubjectDescription,
    Attribute::Environment,
    Attribute::Lighting,
    Attribute::Mood,
    Attribute::VisualStyle,
];

/// Generate all outputs using the default label strategy.
pub fn generate(prompt: &Prompt) -> PromptOutput {
    generate_with(prompt, &SpacedLowercase)
}

/// Generate all outputs, labelling natural-language segments with `formatter`.
pub fn generate_with(prompt: &Prompt, formatter: &dyn LabelFormatter) -> PromptOutput {
    let v = |attribute: Attribute| prompt.field(attribute).trimmed().to_string();

    let veo3 = Veo3Json {
        shot: ShotSection {
            composition: v(Attribute::Composition),
            camera_motion: v(Attribute::CameraMotion),
            frame_rate: v(Attribute::FrameRate),
            shot_size: v(Attribute::ShotSize),
        },
        subject: SubjectSection {
            description: v(Attribute::SubjectDescription),
            wardrobe: v(Attribute::Wardrobe),
        },
        scene: SceneSection {
            location: v(Attribute::Location),
            time_of_day: v(Attribute::TimeOfDay),
            environment: v(Attribute::Environment),
        },
        visual_details: VisualDetailsSection {
            action: v(Attribute::Action),
            props: v(Attribute::Props),
        },
        cinematography: CinematographySection {
            lighting: v(Attribute::Lighting),
            color_grade: v(Attribute::ColorGrade),
            visual_style: v(Attribute::VisualStyle),
        },
        audio_track: AudioTrackSection {
            ambient_sound: v(Attribute::AmbientSound),
            music_style: v(Attribute::MusicStyle),
            mood: v(Attribute::Mood),
        },
    };

    let imagen = ImagenJson {
        subject: v(Attribute::SubjectDescription),
        environment: v(Attribute::Environment),
        lighting: v(Attribute::Lighting),
        mood: v(Attribute::Mood),
        visual_style: v(Attribute::VisualStyle),
    };

    let veo3_text = prompt
        .iter()
        .filter(|(_, field)| !field.trimmed().is_empty())
        .map(|(attribute, field)| format!("{}: {}", formatter.label(attribute), field.trimmed()))
        .collect::<Vec<_>>()
        .join(", ");

    let imagen_text = IMAGEN_ATTRIBUTES
        .iter()
        .map(|attribute| prompt.field(*attribute).trimmed())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    PromptOutput {
        json: JsonOutput { veo3, imagen },
        natural_language: NaturalLanguageOutput { veo3: veo3_text, imagen: imagen_text },
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::Value;

    use super::*;
    use crate::domain::{DataSource, PresetCatalog, apply_preset};

    fn object_keys(value: &Value) -> Vec<String> {
        value.as_object().expect("object").keys().cloned().collect()
    }

    fn assert_veo3_shape(veo3: &Value) {
        let mut groups = object_keys(veo3);
        groups.sort();
        assert_eq!(
            groups,
            ["audio_track", "cinematography", "scene", "shot", "subject", "visual_details"]
        );
        let expected: [(&str, &[&str]); 6] = [
            ("shot", &["camera_motion", "composition", "frame_rate", "shot_size"]),
            ("subject", &["description", "wardrobe"]),
            ("scene", &["environment", "location", "time_of_day"]),
            ("visual_details", &["action", "props"]),
            ("cinematography", &["color_grade", "lighting", "visual_style"]),
            ("audio_track", &["ambient_sound", "mood", "music_style"]),
        ];
        for (group, keys) in expected {
            let mut actual = object_keys(&veo3[group]);
            actual.sort();
            assert_eq!(actual, keys, "keys of {group}");
        }
    }

    fn prompt_from(values: &[String]) -> Prompt {
        Attribute::ALL.into_iter().zip(values).fold(Prompt::new(), |prompt, (attribute, value)| {
            prompt.update_field(attribute, value.as_str(), DataSource::Manual)
        })
    }

    #[test]
    fn empty_prompt_yields_empty_strings_and_full_schema() {
        let output = generate(&Prompt::new());

        assert_eq!(output.natural_language.veo3, "");
        assert_eq!(output.natural_language.imagen, "");
        let json = serde_json::to_value(&output.json).unwrap();
        assert_veo3_shape(&json["veo3"]);
        let mut imagen = object_keys(&json["imagen"]);
        imagen.sort();
        assert_eq!(imagen, ["environment", "lighting", "mood", "subject", "visual_style"]);
    }

    #[test]
    fn documentary_neutral_omits_music_segment() {
        let catalog = PresetCatalog::new(Vec::new());
        let preset = catalog.find("documentary-neutral").unwrap();
        let output = generate(&apply_preset(preset, &Prompt::new()));

        assert!(!output.natural_language.veo3.contains("music style"));
        assert!(output.natural_language.veo3.contains("camera motion: static tripod"));
        assert_eq!(output.json.veo3.audio_track.music_style, "");

        let json = serde_json::to_value(&output.json.veo3).unwrap();
        assert_eq!(json["audio_track"]["music_style"], "");
    }

    #[test]
    fn natural_language_follows_attribute_order_and_trims() {
        let prompt = Prompt::new()
            .update_field(Attribute::Mood, "  calm ", DataSource::Manual)
            .update_field(Attribute::Composition, "symmetrical", DataSource::Manual)
            .update_field(Attribute::SubjectDescription, "a fox", DataSource::Manual);
        let output = generate(&prompt);

        assert_eq!(
            output.natural_language.veo3,
            "composition: symmetrical, subject description: a fox, mood: calm"
        );
        assert_eq!(output.natural_language.imagen, "a fox, calm");
        assert_eq!(output.json.veo3.audio_track.mood, "calm");
    }

    #[test]
    fn imagen_schema_maps_subject_description() {
        let prompt = Prompt::new().update_field(
            Attribute::SubjectDescription,
            "a lighthouse",
            DataSource::Manual,
        );
        let output = generate(&prompt);

        assert_eq!(output.json.imagen.subject, "a lighthouse");
        assert_eq!(output.json.veo3.subject.description, "a lighthouse");
    }

    #[test]
    fn custom_formatter_changes_labels_only() {
        let prompt = Prompt::new().update_field(Attribute::TimeOfDay, "dusk", DataSource::Manual);
        let output = generate_with(&prompt, &DisplayName);

        assert_eq!(output.natural_language.veo3, "Time of Day: dusk");
        assert_eq!(output.json.veo3.scene.time_of_day, "dusk");
    }

    #[test]
    fn output_serializes_with_camel_case_envelope() {
        let json = serde_json::to_value(generate(&Prompt::new())).unwrap();
        assert!(json.get("naturalLanguage").is_some());
        assert!(json["json"].get("veo3").is_some());
        assert!(json["json"].get("imagen").is_some());
    }

    proptest! {
        #[test]
        fn veo3_schema_is_closed(values in prop::collection::vec("[a-z ]{0,6}", Attribute::COUNT)) {
            let output = generate(&prompt_from(&values));
            let json = serde_json::to_value(&output.json.veo3).unwrap();
            assert_veo3_shape(&json);
        }

        #[test]
        fn segment_count_matches_non_empty_fields(
            values in prop::collection::vec("[a-z ]{0,6}", Attribute::COUNT)
        ) {
            let prompt = prompt_from(&values);
            let output = generate(&prompt);
            let non_empty = values.iter().filter(|v| !v.trim().is_empty()).count();
            let segments = if output.natural_language.veo3.is_empty() {
                0
            } else {
                output.natural_language.veo3.split(", ").count()
            };
            prop_assert_eq!(segments, non_empty);
        }
    }
}
