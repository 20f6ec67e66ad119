use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::Category;

/// How a field's current value was set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataSource {
    /// Typed by the user.
    Manual,
    /// Copied from a preset.
    Preset,
    /// Produced by an external enhancement step.
    AiEnhanced,
    /// Never written since the prompt was created.
    Default,
}

impl DataSource {
    pub fn identifier(&self) -> &'static str {
        match self {
            DataSource::Manual => "manual",
            DataSource::Preset => "preset",
            DataSource::AiEnhanced => "ai-enhanced",
            DataSource::Default => "default",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// A single prompt attribute value tagged with its category and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptField {
    pub value: String,
    pub category: Category,
    pub source: DataSource,
    /// Unix epoch milliseconds of the last write.
    pub timestamp: i64,
}

/// Create a field stamped with the current time.
pub fn create_field(
    value: impl Into<String>,
    category: Category,
    source: DataSource,
) -> PromptField {
    PromptField { value: value.into(), category, source, timestamp: Utc::now().timestamp_millis() }
}

impl PromptField {
    /// Empty field in its initial state.
    pub fn empty(category: Category) -> Self {
        create_field(String::new(), category, DataSource::Default)
    }

    /// Value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// A new field carrying this field's category.
    pub fn rewrite(&self, value: impl Into<String>, source: DataSource) -> Self {
        create_field(value, self.category, source)
    }
}
