//! Structured output shapes consumed by downstream generation tools.
//!
//! Every key is always present; empty attributes serialize as `""`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Veo3Json {
    pub shot: ShotSection,
    pub subject: SubjectSection,
    pub scene: SceneSection,
    pub visual_details: VisualDetailsSection,
    pub cinematography: CinematographySection,
    pub audio_track: AudioTrackSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShotSection {
    pub composition: String,
    pub camera_motion: String,
    pub frame_rate: String,
    pub shot_size: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectSection {
    pub description: String,
    pub wardrobe: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneSection {
    pub location: String,
    pub time_of_day: String,
    pub environment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VisualDetailsSection {
    pub action: String,
    pub props: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CinematographySection {
    pub lighting: String,
    pub color_grade: String,
    pub visual_style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AudioTrackSection {
    pub ambient_sound: String,
    pub music_style: String,
    pub mood: String,
}

/// Flat secondary schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImagenJson {
    pub subject: String,
    pub environment: String,
    pub lighting: String,
    pub mood: String,
    pub visual_style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonOutput {
    pub veo3: Veo3Json,
    pub imagen: ImagenJson,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaturalLanguageOutput {
    pub veo3: String,
    pub imagen: String,
}

/// Both serializations for both targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptOutput {
    pub json: JsonOutput,
    pub natural_language: NaturalLanguageOutput,
}
