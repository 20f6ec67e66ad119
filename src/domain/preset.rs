//! Presets: named bundles of attribute values used to seed a prompt.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::domain::{AppError, Attribute, DataSource, Prompt};

/// Attribute values carried by a preset. May cover only part of the attributes.
pub type PresetValues = BTreeMap<Attribute, String>;

/// A named, reusable bundle of attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_values")]
    pub values: PresetValues,
    #[serde(rename = "builtIn", default)]
    pub built_in: bool,
}

/// Keys that name no attribute are dropped so the rest of the preset survives.
fn deserialize_values<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<PresetValues, D::Error> {
    let raw = BTreeMap::<String, String>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| Attribute::parse(&key).ok().map(|attribute| (attribute, value)))
        .collect())
}

/// Overwrite every attribute the preset names with `preset` provenance.
///
/// Attributes absent from the preset keep their current field. Categories
/// are never taken from the preset.
pub fn apply_preset(preset: &Preset, prompt: &Prompt) -> Prompt {
    preset.values.iter().fold(prompt.clone(), |next, (attribute, value)| {
        next.update_field(*attribute, value.as_str(), DataSource::Preset)
    })
}

/// Snapshot the prompt's raw values under a fresh identifier.
///
/// Fails with [`AppError::EmptyPresetName`] when the trimmed name is empty.
pub fn create_user_preset(name: &str, prompt: &Prompt) -> Result<Preset, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyPresetName);
    }

    let values =
        prompt.iter().map(|(attribute, field)| (attribute, field.value.clone())).collect();

    Ok(Preset { id: Uuid::new_v4().to_string(), name: name.to_string(), values, built_in: false })
}

struct BuiltinPreset {
    id: &'static str,
    name: &'static str,
    /// Values in [`Attribute::ALL`] order.
    values: [&'static str; Attribute::COUNT],
}

const BUILTIN_PRESETS: [BuiltinPreset; 5] = [
    BuiltinPreset {
        id: "cinematic-drama",
        name: "Cinematic Drama",
        values: [
            "rule of thirds",
            "tracking",
            "24fps",
            "medium shot",
            "two characters in intense conversation",
            "contemporary business attire",
            "modern urban apartment",
            "golden hour",
            "warm lighting through large windows",
            "engaged in serious discussion",
            "coffee cups on table, documents scattered",
            "dramatic natural lighting",
            "warm cinematic grade",
            "cinematic realism",
            "subtle city traffic, muffled voices",
            "orchestral underscore",
            "tense, emotional, high stakes",
        ],
    },
    BuiltinPreset {
        id: "high-energy-action",
        name: "High-Energy Action",
        values: [
            "dynamic angles",
            "handheld tracking",
            "60fps",
            "wide shot",
            "multiple characters in coordinated movement",
            "tactical gear, athletic wear",
            "industrial warehouse",
            "night",
            "dramatic overhead lighting, shadows",
            "fast-paced chase sequence",
            "metal crates, machinery, vehicles",
            "harsh industrial lighting",
            "cool blue-teal grade",
            "high-contrast commercial",
            "metal clanking, footsteps echoing",
            "electronic percussive",
            "intense, adrenaline-fueled, urgent",
        ],
    },
    BuiltinPreset {
        id: "documentary-neutral",
        name: "Documentary Neutral",
        values: [
            "balanced center frame",
            "static tripod",
            "30fps",
            "medium close-up",
            "single speaker in natural pose",
            "professional casual attire",
            "office or home study",
            "daytime",
            "natural daylight, clean background",
            "speaking directly to camera",
            "minimal - desk, bookshelf, plants",
            "natural soft lighting",
            "neutral realistic grade",
            "documentary realism",
            "subtle room tone",
            "",
            "authentic, trustworthy, informative",
        ],
    },
    BuiltinPreset {
        id: "commercial-product",
        name: "Commercial Product",
        values: [
            "product-focused framing",
            "smooth dolly movement",
            "24fps",
            "close-up to medium",
            "attractive model with product",
            "stylish contemporary fashion",
            "modern minimalist studio",
            "studio lighting",
            "clean white backdrop, soft shadows",
            "demonstrating product features",
            "featured product, elegant accessories",
            "professional studio lighting",
            "vibrant commercial grade",
            "polished commercial",
            "clean studio atmosphere",
            "upbeat contemporary",
            "aspirational, energetic, appealing",
        ],
    },
    BuiltinPreset {
        id: "artistic-portrait",
        name: "Artistic Portrait",
        values: [
            "artistic asymmetrical framing",
            "subtle push-in",
            "24fps",
            "medium to close-up",
            "expressive portrait subject",
            "artistic or period costume",
            "atmospheric interior space",
            "magic hour",
            "textured walls, natural elements",
            "contemplative poses, natural movement",
            "vintage furniture, artistic objects",
            "dramatic chiaroscuro lighting",
            "desaturated artistic grade",
            "fine art cinematography",
            "subtle environmental textures",
            "ambient atmospheric",
            "contemplative, artistic, emotional depth",
        ],
    },
];

/// The built-in preset catalog, in display order.
pub fn builtin_presets() -> Vec<Preset> {
    BUILTIN_PRESETS
        .iter()
        .map(|builtin| Preset {
            id: builtin.id.to_string(),
            name: builtin.name.to_string(),
            values: Attribute::ALL
                .into_iter()
                .zip(builtin.values)
                .map(|(attribute, value)| (attribute, value.to_string()))
                .collect(),
            built_in: true,
        })
        .collect()
}

/// Built-in presets followed by the user's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    builtin: Vec<Preset>,
    user: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new(user: Vec<Preset>) -> Self {
        Self { builtin: builtin_presets(), user }
    }

    pub fn builtin(&self) -> &[Preset] {
        &self.builtin
    }

    pub fn user(&self) -> &[Preset] {
        &self.user
    }

    /// Look up a preset by id, built-ins first.
    pub fn find(&self, id: &str) -> Option<&Preset> {
        self.builtin.iter().chain(self.user.iter()).find(|preset| preset.id == id)
    }

    /// Append a user preset. Existing presets are never edited.
    pub fn push_user(&mut self, preset: Preset) {
        self.user.push(preset);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.builtin.iter().chain(self.user.iter())
    }
}
