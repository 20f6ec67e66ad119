//! Prompt state: one field per attribute.

use crate::domain::{Attribute, DataSource, PromptField};

/// Snapshot of every prompt field.
///
/// Storage is a fixed array indexed by [`Attribute`], so the key set can
/// never grow or shrink. Updates return a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    fields: [PromptField; Attribute::COUNT],
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt {
    /// All fields empty with `default` provenance.
    pub fn new() -> Self {
        Self { fields: std::array::from_fn(|i| PromptField::empty(Attribute::ALL[i].category())) }
    }

    pub fn field(&self, attribute: Attribute) -> &PromptField {
        &self.fields[attribute.index()]
    }

    /// Current raw value of an attribute.
    pub fn value(&self, attribute: Attribute) -> &str {
        &self.field(attribute).value
    }

    /// Replace one field's value, source and timestamp.
    ///
    /// The category is carried over from the existing field.
    pub fn update_field(
        &self,
        attribute: Attribute,
        value: impl Into<String>,
        source: DataSource,
    ) -> Prompt {
        let mut next = self.clone();
        next.fields[attribute.index()] = self.field(attribute).rewrite(value, source);
        next
    }

    /// The initial all-empty prompt.
    pub fn reset(&self) -> Prompt {
        Prompt::new()
    }

    /// Fields in attribute order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &PromptField)> {
        Attribute::ALL.into_iter().zip(self.fields.iter())
    }

    /// True when every trimmed value is empty.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|field| field.trimmed().is_empty())
    }
}
