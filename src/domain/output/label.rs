use crate::domain::Attribute;

/// Strategy for turning an attribute into a natural-language label.
pub trait LabelFormatter {
    fn label(&self, attribute: Attribute) -> String;
}

/// Splits the camelCase identifier at each internal capital and lowercases it.
///
/// `subjectDescription` becomes `subject description`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedLowercase;

impl LabelFormatter for SpacedLowercase {
    fn label(&self, attribute: Attribute) -> String {
        let identifier = attribute.identifier();
        let mut label = String::with_capacity(identifier.len() + 4);
        for (i, c) in identifier.chars().enumerate() {
            if c.is_uppercase() && i > 0 {
                label.push(' ');
            }
            label.extend(c.to_lowercase());
        }
        label
    }
}

/// Uses each attribute's display name as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayName;

impl LabelFormatter for DisplayName {
    fn label(&self, attribute: Attribute) -> String {
        attribute.display_name().to_string()
    }
}
