#![forbid(unsafe_code)]

//! Named input sources and the capture record read from them.

use std::fmt;

/// Identifies one of the three form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    /// Project title. Required.
    Title,
    /// Free-text description. Required, with a minimum length.
    Description,
    /// Number of people, entered as text and parsed to a number.
    People,
}

impl FieldId {
    /// All fields in form order.
    pub const ALL: [FieldId; 3] = [FieldId::Title, FieldId::Description, FieldId::People];

    /// Stable identifier, matching the input's element id.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::People => "People",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user-editable string input.
///
/// Read at capture time; written only to clear it after a successful submit
/// (or by whatever UI is feeding it keystrokes).
pub trait FieldSource {
    /// Current raw value.
    fn value(&self) -> &str;

    /// Replace the raw value.
    fn set_value(&mut self, value: String);

    /// Reset to the empty string.
    fn clear(&mut self) {
        self.set_value(String::new());
    }
}

/// An in-memory single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    placeholder: String,
}

impl TextField {
    /// Create an empty field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Placeholder shown while the field is empty.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Returns `true` if the value is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl FieldSource for TextField {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
    }

    fn clear(&mut self) {
        self.value.clear();
    }
}

/// The three inputs of the project form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields<S = TextField> {
    /// Source for [`FieldId::Title`].
    pub title: S,
    /// Source for [`FieldId::Description`].
    pub description: S,
    /// Source for [`FieldId::People`].
    pub people: S,
}

impl Default for FormFields<TextField> {
    fn default() -> Self {
        Self {
            title: TextField::new().with_placeholder("Project title"),
            description: TextField::new().with_placeholder("At least 5 characters"),
            people: TextField::new().with_placeholder("1-5"),
        }
    }
}

impl<S: FieldSource> FormFields<S> {
    /// Group three sources.
    pub fn new(title: S, description: S, people: S) -> Self {
        Self {
            title,
            description,
            people,
        }
    }

    /// Access a source by id.
    #[must_use]
    pub fn get(&self, id: FieldId) -> &S {
        match id {
            FieldId::Title => &self.title,
            FieldId::Description => &self.description,
            FieldId::People => &self.people,
        }
    }

    /// Access a source mutably by id.
    pub fn get_mut(&mut self, id: FieldId) -> &mut S {
        match id {
            FieldId::Title => &mut self.title,
            FieldId::Description => &mut self.description,
            FieldId::People => &mut self.people,
        }
    }

    /// Set a source's value by id.
    pub fn set(&mut self, id: FieldId, value: impl Into<String>) {
        self.get_mut(id).set_value(value.into());
    }

    /// Read the current raw values.
    #[must_use]
    pub fn capture(&self) -> FieldCapture {
        FieldCapture {
            title: self.title.value().to_string(),
            description: self.description.value().to_string(),
            people_raw: self.people.value().to_string(),
        }
    }

    /// Clear all three sources.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

/// Raw strings read from the inputs at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCapture {
    /// Title as typed.
    pub title: String,
    /// Description as typed.
    pub description: String,
    /// People count as typed, before [`parse_people`].
    pub people_raw: String,
}

/// Parse the people count.
///
/// The same conversion feeds both validation and the emitted output.
/// Anything that is not a number after trimming becomes `NaN`, which no
/// numeric bound accepts.
#[must_use]
pub fn parse_people(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids() {
        assert_eq!(FieldId::ALL.len(), 3);
        assert_eq!(FieldId::People.as_str(), "people");
        assert_eq!(FieldId::Description.to_string(), "description");
        assert_eq!(FieldId::Title.label(), "Title");
    }

    #[test]
    fn text_field_value_and_clear() {
        let mut field = TextField::new().with_value("shed");
        assert_eq!(field.value(), "shed");
        field.set_value("barn".into());
        assert_eq!(field.value(), "barn");
        field.clear();
        assert!(field.is_empty());
    }

    #[test]
    fn capture_reads_current_values() {
        let mut fields = FormFields::default();
        fields.set(FieldId::Title, "Build a shed");
        fields.set(FieldId::Description, "A small shed");
        fields.set(FieldId::People, " 3 ");
        let capture = fields.capture();
        assert_eq!(capture.title, "Build a shed");
        assert_eq!(capture.description, "A small shed");
        assert_eq!(capture.people_raw, " 3 ");

        fields.set(FieldId::Title, "Changed");
        assert_eq!(fields.capture().title, "Changed");
    }

    #[test]
    fn clear_resets_everything() {
        let mut fields = FormFields::default();
        for id in FieldId::ALL {
            fields.set(id, "x");
        }
        fields.clear();
        for id in FieldId::ALL {
            assert_eq!(fields.get(id).value(), "");
        }
        assert_eq!(fields.people.placeholder(), "1-5");
    }

    #[test]
    fn parse_people_numbers() {
        assert_eq!(parse_people("3"), 3.0);
        assert_eq!(parse_people("  5 "), 5.0);
        assert_eq!(parse_people("2.5"), 2.5);
        assert_eq!(parse_people("1e0"), 1.0);
    }

    #[test]
    fn parse_people_garbage_is_nan() {
        assert!(parse_people("").is_nan());
        assert!(parse_people("   ").is_nan());
        assert!(parse_people("3 people").is_nan());
        assert!(parse_people("three").is_nan());
    }
}
