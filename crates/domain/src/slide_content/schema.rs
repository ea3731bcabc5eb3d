//! Attribute schema descriptors for the content registry.

/// Semantic type of a payload attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Text,
    Boolean,
    Integer,
    /// JSON array kept as authored (buttons, lesson-end actions)
    JsonList,
    /// Rows of `{label, speech}` cells
    SpeechLines,
    /// Guided-repeat practice items
    PracticeElements,
    /// Choice-match options
    ChoiceElements,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub attribute_type: AttributeType,
}

const UNIVERSAL: [AttributeSpec; 12] = [
    AttributeSpec::new("label", AttributeType::Text),
    AttributeSpec::new("title", AttributeType::Text),
    AttributeSpec::new("subtitle", AttributeType::Text),
    AttributeSpec::new("body", AttributeType::Text),
    AttributeSpec::new("buttons", AttributeType::JsonList),
    AttributeSpec::new("lang", AttributeType::Text),
    AttributeSpec::new("audioId", AttributeType::Text),
    AttributeSpec::new("isInteractive", AttributeType::Boolean),
    AttributeSpec::new("allowSkip", AttributeType::Boolean),
    AttributeSpec::new("allowRetry", AttributeType::Boolean),
    AttributeSpec::new("maxAttempts", AttributeType::Integer),
    AttributeSpec::new("minAttemptsBeforeSkip", AttributeType::Integer),
];

const PASSTHROUGH: [AttributeSpec; 6] = [
    AttributeSpec::new("label", AttributeType::Text),
    AttributeSpec::new("title", AttributeType::Text),
    AttributeSpec::new("buttons", AttributeType::JsonList),
    AttributeSpec::new("isInteractive", AttributeType::Boolean),
    AttributeSpec::new("allowSkip", AttributeType::Boolean),
    AttributeSpec::new("allowRetry", AttributeType::Boolean),
];

impl AttributeSpec {
    pub const fn new(name: &'static str, attribute_type: AttributeType) -> Self {
        Self {
            name,
            attribute_type,
        }
    }

    /// Attributes shared by every recognized variant.
    pub fn universal() -> &'static [AttributeSpec] {
        &UNIVERSAL
    }

    /// The only attributes an unrecognized variant carries.
    pub fn passthrough() -> &'static [AttributeSpec] {
        &PASSTHROUGH
    }
}
