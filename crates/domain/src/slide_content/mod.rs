//! Slide content type registry.
//!
//! Every slide stores its content in one opaque JSON slot. This module is
//! the closed set of shapes that slot can take: one struct per variant,
//! wrapped in [`SlideContent`]. Callers decode with [`SlideContent::decode`]
//! and match (or use the `as_*` narrowing accessors) before touching
//! variant-specific fields.
//!
//! | Tag | Variant-specific attributes |
//! |-----|-----------------------------|
//! | `title` | - |
//! | `text` | - |
//! | `lesson-end` | `message`, `actions` (no `subtitle`) |
//! | `speech-repeat` | `lines`: rows of `{label, speech}` |
//! | `guided-repeat` | `elements`: `{samplePrompt, referenceText, speech}` |
//! | `choice-match` | `elements`: `{label, speech}` |
//! | anything else | passthrough of label, title, buttons, flags |

mod common;
mod kind;
mod schema;
mod speech;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;

use common::null_as_default;
pub use common::{InteractionFlags, SlideCommon};
pub use kind::SlideKind;
pub use schema::{AttributeSpec, AttributeType};
pub use speech::{ChoiceElement, PracticeElement, SpeechCell, SpokenForm};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleContent {
    #[serde(flatten)]
    pub common: SlideCommon,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(flatten)]
    pub common: SlideCommon,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonEndContent {
    #[serde(flatten)]
    pub common: SlideCommon,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRepeatContent {
    #[serde(flatten)]
    pub common: SlideCommon,
    #[serde(default, deserialize_with = "null_as_default")]
    pub lines: Vec<Vec<SpeechCell>>,
}

impl SpeechRepeatContent {
    /// Cell labels in encounter order, row grouping discarded.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().flatten().map(|cell| cell.label.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidedRepeatContent {
    #[serde(flatten)]
    pub common: SlideCommon,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<PracticeElement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceMatchContent {
    #[serde(flatten)]
    pub common: SlideCommon,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<ChoiceElement>,
}

/// Content of a slide whose tag is not recognized.
///
/// Only the label, title, buttons and interaction flags survive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassthroughContent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buttons: Vec<Value>,
    #[serde(flatten)]
    pub flags: InteractionFlags,
}

/// Typed view of a slide's content payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Title(TitleContent),
    Text(TextContent),
    LessonEnd(LessonEndContent),
    SpeechRepeat(SpeechRepeatContent),
    GuidedRepeat(GuidedRepeatContent),
    ChoiceMatch(ChoiceMatchContent),
    Other {
        tag: String,
        content: PassthroughContent,
    },
}

impl SlideContent {
    /// Decode a stored payload according to `kind`.
    ///
    /// A `null` payload decodes as the empty map, so every attribute takes
    /// its default. Anything other than a map, or a recognized attribute of
    /// the wrong JSON type, is a parse error.
    pub fn decode(kind: &SlideKind, payload: &Value) -> Result<Self, DomainError> {
        let payload = match payload {
            Value::Null => Value::Object(Map::new()),
            Value::Object(_) => payload.clone(),
            other => {
                return Err(DomainError::parse(format!(
                    "{} payload must be an object, found {}",
                    kind,
                    json_type_name(other)
                )))
            }
        };

        let content = match kind {
            SlideKind::Title => Self::Title(from_payload(kind, payload)?),
            SlideKind::Text => Self::Text(from_payload(kind, payload)?),
            SlideKind::LessonEnd => Self::LessonEnd(from_payload(kind, payload)?),
            SlideKind::SpeechRepeat => Self::SpeechRepeat(from_payload(kind, payload)?),
            SlideKind::GuidedRepeat => Self::GuidedRepeat(from_payload(kind, payload)?),
            SlideKind::ChoiceMatch => Self::ChoiceMatch(from_payload(kind, payload)?),
            SlideKind::Other(tag) => Self::Other {
                tag: tag.clone(),
                content: from_payload(kind, payload)?,
            },
        };
        Ok(content)
    }

    /// Encode back into the stored payload shape.
    pub fn to_payload(&self) -> Value {
        let encoded = match self {
            Self::Title(content) => serde_json::to_value(content),
            Self::Text(content) => serde_json::to_value(content),
            Self::LessonEnd(content) => serde_json::to_value(content),
            Self::SpeechRepeat(content) => serde_json::to_value(content),
            Self::GuidedRepeat(content) => serde_json::to_value(content),
            Self::ChoiceMatch(content) => serde_json::to_value(content),
            Self::Other { content, .. } => serde_json::to_value(content),
        };
        // Only string-keyed structs are encoded here, which cannot fail.
        encoded.unwrap_or_else(|_| Value::Object(Map::new()))
    }

    pub fn kind(&self) -> SlideKind {
        match self {
            Self::Title(_) => SlideKind::Title,
            Self::Text(_) => SlideKind::Text,
            Self::LessonEnd(_) => SlideKind::LessonEnd,
            Self::SpeechRepeat(_) => SlideKind::SpeechRepeat,
            Self::GuidedRepeat(_) => SlideKind::GuidedRepeat,
            Self::ChoiceMatch(_) => SlideKind::ChoiceMatch,
            Self::Other { tag, .. } => SlideKind::Other(tag.clone()),
        }
    }

    /// Universal attributes; `None` for the passthrough variant.
    pub fn common(&self) -> Option<&SlideCommon> {
        match self {
            Self::Title(content) => Some(&content.common),
            Self::Text(content) => Some(&content.common),
            Self::LessonEnd(content) => Some(&content.common),
            Self::SpeechRepeat(content) => Some(&content.common),
            Self::GuidedRepeat(content) => Some(&content.common),
            Self::ChoiceMatch(content) => Some(&content.common),
            Self::Other { .. } => None,
        }
    }

    pub fn flags(&self) -> InteractionFlags {
        match self {
            Self::Other { content, .. } => content.flags,
            _ => self.common().map(|common| common.flags).unwrap_or_default(),
        }
    }

    pub fn as_title(&self) -> Option<&TitleContent> {
        match self {
            Self::Title(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextContent> {
        match self {
            Self::Text(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_lesson_end(&self) -> Option<&LessonEndContent> {
        match self {
            Self::LessonEnd(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_speech_repeat(&self) -> Option<&SpeechRepeatContent> {
        match self {
            Self::SpeechRepeat(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_guided_repeat(&self) -> Option<&GuidedRepeatContent> {
        match self {
            Self::GuidedRepeat(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_choice_match(&self) -> Option<&ChoiceMatchContent> {
        match self {
            Self::ChoiceMatch(content) => Some(content),
            _ => None,
        }
    }

    pub fn as_passthrough(&self) -> Option<&PassthroughContent> {
        match self {
            Self::Other { content, .. } => Some(content),
            _ => None,
        }
    }
}

fn from_payload<T: serde::de::DeserializeOwned>(
    kind: &SlideKind,
    payload: Value,
) -> Result<T, DomainError> {
    serde_json::from_value(payload)
        .map_err(|e| DomainError::parse(format!("invalid {} payload: {}", kind, e)))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
