//! The closed set of prompt attributes and their fixed categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Semantic grouping of prompt attributes, used for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Technical camera details.
    Shot,
    /// Character appearance and wardrobe.
    Subject,
    /// Setting and environment.
    Scene,
    /// Actions and props.
    VisualDetails,
    /// Artistic visual style.
    Cinematography,
    /// Sound elements.
    AudioTrack,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::Shot,
        Category::Subject,
        Category::Scene,
        Category::VisualDetails,
        Category::Cinematography,
        Category::AudioTrack,
    ];

    /// Serialized identifier for this category.
    pub fn identifier(&self) -> &'static str {
        match self {
            Category::Shot => "shot",
            Category::Subject => "subject",
            Category::Scene => "scene",
            Category::VisualDetails => "visualDetails",
            Category::Cinematography => "cinematography",
            Category::AudioTrack => "audioTrack",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Shot => "Shot",
            Category::Subject => "Subject",
            Category::Scene => "Scene",
            Category::VisualDetails => "Visual Details",
            Category::Cinematography => "Cinematography",
            Category::AudioTrack => "Audio Track",
        }
    }

    /// Attributes belonging to this category, in attribute order.
    pub fn attributes(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL.into_iter().filter(move |attribute| attribute.category() == *self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One slot of the prompt. The set is closed; every prompt carries all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Composition,
    CameraMotion,
    FrameRate,
    ShotSize,
    SubjectDescription,
    Wardrobe,
    Location,
    TimeOfDay,
    Environment,
    Action,
    Props,
    Lighting,
    ColorGrade,
    VisualStyle,
    AmbientSound,
    MusicStyle,
    Mood,
}

impl Attribute {
    /// Number of attributes in a prompt.
    pub const COUNT: usize = 17;

    /// All attributes in their fixed order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Composition,
        Attribute::CameraMotion,
        Attribute::FrameRate,
        Attribute::ShotSize,
        Attribute::SubjectDescription,
        Attribute::Wardrobe,
        Attribute::Location,
        Attribute::TimeOfDay,
        Attribute::Environment,
        Attribute::Action,
        Attribute::Props,
        Attribute::Lighting,
        Attribute::ColorGrade,
        Attribute::VisualStyle,
        Attribute::AmbientSound,
        Attribute::MusicStyle,
        Attribute::Mood,
    ];

    /// Position of this attribute in [`Attribute::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The category this attribute belongs to. Fixed for the life of the program.
    pub fn category(&self) -> Category {
        match self {
            Attribute::Composition
            | Attribute::CameraMotion
            | Attribute::FrameRate
            | Attribute::ShotSize => Category::Shot,
            Attribute::SubjectDescription | Attribute::Wardrobe => Category::Subject,
            Attribute::Location | Attribute::TimeOfDay | Attribute::Environment => Category::Scene,
            Attribute::Action | Attribute::Props => Category::VisualDetails,
            Attribute::Lighting | Attribute::ColorGrade | Attribute::VisualStyle => {
                Category::Cinematography
            }
            Attribute::AmbientSound | Attribute::MusicStyle | Attribute::Mood => {
                Category::AudioTrack
            }
        }
    }

    /// camelCase identifier, as used in stored presets.
    pub fn identifier(&self) -> &'static str {
        match self {
            Attribute::Composition => "composition",
            Attribute::CameraMotion => "cameraMotion",
            Attribute::FrameRate => "frameRate",
            Attribute::ShotSize => "shotSize",
            Attribute::SubjectDescription => "subjectDescription",
            Attribute::Wardrobe => "wardrobe",
            Attribute::Location => "location",
            Attribute::TimeOfDay => "timeOfDay",
            Attribute::Environment => "environment",
            Attribute::Action => "action",
            Attribute::Props => "props",
            Attribute::Lighting => "lighting",
            Attribute::ColorGrade => "colorGrade",
            Attribute::VisualStyle => "visualStyle",
            Attribute::AmbientSound => "ambientSound",
            Attribute::MusicStyle => "musicStyle",
            Attribute::Mood => "mood",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Attribute::Composition => "Composition",
            Attribute::CameraMotion => "Camera Motion",
            Attribute::FrameRate => "Frame Rate",
            Attribute::ShotSize => "Shot Size",
            Attribute::SubjectDescription => "Subject Description",
            Attribute::Wardrobe => "Wardrobe",
            Attribute::Location => "Location",
            Attribute::TimeOfDay => "Time of Day",
            Attribute::Environment => "Environment Details",
            Attribute::Action => "Action",
            Attribute::Props => "Props",
            Attribute::Lighting => "Lighting Style",
            Attribute::ColorGrade => "Color Grade",
            Attribute::VisualStyle => "Visual Style",
            Attribute::AmbientSound => "Ambient Sound",
            Attribute::MusicStyle => "Music Style",
            Attribute::Mood => "Mood",
        }
    }

    /// Suggested values for attributes picked from a fixed list.
    ///
    /// Empty for free-text attributes. Suggestions never restrict input.
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            Attribute::CameraMotion => &["static", "tracking", "dolly", "crane", "handheld"],
            Attribute::FrameRate => &["24fps", "30fps", "60fps", "120fps"],
            Attribute::ShotSize => {
                &["extreme-closeup", "closeup", "medium", "wide", "extreme-wide"]
            }
            Attribute::TimeOfDay => &[
                "dawn",
                "morning",
                "midday",
                "afternoon",
                "golden-hour",
                "dusk",
                "night",
                "late-night",
            ],
            Attribute::Lighting => {
                &["natural", "dramatic", "soft", "harsh", "backlit", "neon", "candlelit"]
            }
            Attribute::ColorGrade => {
                &["warm", "cool", "desaturated", "vibrant", "monochrome", "sepia"]
            }
            Attribute::VisualStyle => {
                &["cinematic", "documentary", "commercial", "artistic", "vintage", "modern"]
            }
            Attribute::MusicStyle => {
                &["orchestral", "electronic", "acoustic", "jazz", "ambient", "minimal", "none"]
            }
            _ => &[],
        }
    }

    /// Example input for free-text attributes.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Attribute::Composition => Some("rule of thirds, symmetrical"),
            Attribute::SubjectDescription => Some("professional woman, 30s"),
            Attribute::Wardrobe => Some("business suit, casual wear"),
            Attribute::Location => Some("modern office, urban street"),
            Attribute::Environment => Some("bustling atmosphere, quiet solitude"),
            Attribute::Action => Some("walking confidently, typing at computer"),
            Attribute::Props => Some("smartphone, coffee cup, documents"),
            Attribute::AmbientSound => Some("city traffic, ocean waves"),
            Attribute::Mood => Some("tense and urgent, calm and peaceful"),
            _ => None,
        }
    }

    /// Parse an attribute name.
    ///
    /// Accepts the camelCase identifier as well as snake_case and kebab-case
    /// spellings, ignoring case.
    pub fn parse(name: &str) -> Result<Attribute, AppError> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();

        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.identifier().to_lowercase() == normalized)
            .ok_or_else(|| AppError::UnknownAttribute(name.to_string()))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_position_in_all() {
        for (position, attribute) in Attribute::ALL.iter().enumerate() {
            assert_eq!(attribute.index(), position);
        }
    }

    #[test]
    fn every_category_has_attributes() {
        for category in Category::ALL {
            assert!(category.attributes().next().is_some(), "{category} has no attributes");
        }
        let total: usize = Category::ALL.iter().map(|c| c.attributes().count()).sum();
        assert_eq!(total, Attribute::COUNT);
    }

    #[test]
    fn category_table_matches_layout() {
        assert_eq!(Attribute::FrameRate.category(), Category::Shot);
        assert_eq!(Attribute::Wardrobe.category(), Category::Subject);
        assert_eq!(Attribute::TimeOfDay.category(), Category::Scene);
        assert_eq!(Attribute::Props.category(), Category::VisualDetails);
        assert_eq!(Attribute::ColorGrade.category(), Category::Cinematography);
        assert_eq!(Attribute::Mood.category(), Category::AudioTrack);
    }

    #[test]
    fn serde_names_match_identifiers() {
        for attribute in Attribute::ALL {
            let json = serde_json::to_string(&attribute).unwrap();
            assert_eq!(json, format!("\"{}\"", attribute.identifier()));
        }
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.identifier()));
        }
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(Attribute::parse("cameraMotion").unwrap(), Attribute::CameraMotion);
        assert_eq!(Attribute::parse("camera_motion").unwrap(), Attribute::CameraMotion);
        assert_eq!(Attribute::parse("Camera-Motion").unwrap(), Attribute::CameraMotion);
        assert_eq!(Attribute::parse(" mood ").unwrap(), Attribute::Mood);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = Attribute::parse("fps").unwrap_err();
        assert!(matches!(err, AppError::UnknownAttribute(name) if name == "fps"));
    }

    #[test]
    fn free_text_attributes_have_hints_instead_of_suggestions() {
        for attribute in Attribute::ALL {
            assert!(
                attribute.suggestions().is_empty() != attribute.hint().is_none(),
                "{attribute} should have either suggestions or a hint"
            );
        }
    }
}
