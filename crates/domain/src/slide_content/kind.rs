//! Slide type tags.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::schema::{AttributeSpec, AttributeType};
use super::{
    ChoiceMatchContent, GuidedRepeatContent, LessonEndContent, PassthroughContent, SlideContent,
    SpeechRepeatContent, TextContent, TitleContent,
};

/// Discriminant selecting which content shape and rules apply to a slide.
///
/// Unrecognized tags are kept verbatim in [`SlideKind::Other`] so a slide
/// can round-trip through the editor without losing its type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SlideKind {
    Title,
    Text,
    LessonEnd,
    SpeechRepeat,
    GuidedRepeat,
    ChoiceMatch,
    Other(String),
}

impl SlideKind {
    /// Every recognized kind, in authoring-menu order.
    pub const RECOGNIZED: [SlideKind; 6] = [
        SlideKind::Title,
        SlideKind::Text,
        SlideKind::LessonEnd,
        SlideKind::SpeechRepeat,
        SlideKind::GuidedRepeat,
        SlideKind::ChoiceMatch,
    ];

    /// Parse a stored tag. Case-insensitive, `_` is accepted for `-`.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "title" => Self::Title,
            "text" => Self::Text,
            "lesson-end" => Self::LessonEnd,
            "speech-repeat" => Self::SpeechRepeat,
            "guided-repeat" => Self::GuidedRepeat,
            "choice-match" => Self::ChoiceMatch,
            _ => Self::Other(tag.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Title => "title",
            Self::Text => "text",
            Self::LessonEnd => "lesson-end",
            Self::SpeechRepeat => "speech-repeat",
            Self::GuidedRepeat => "guided-repeat",
            Self::ChoiceMatch => "choice-match",
            Self::Other(tag) => tag,
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, Self::Title)
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    pub fn is_lesson_end(&self) -> bool {
        matches!(self, Self::LessonEnd)
    }

    pub fn is_speech_repeat(&self) -> bool {
        matches!(self, Self::SpeechRepeat)
    }

    pub fn is_guided_repeat(&self) -> bool {
        matches!(self, Self::GuidedRepeat)
    }

    pub fn is_choice_match(&self) -> bool {
        matches!(self, Self::ChoiceMatch)
    }

    pub fn is_other(&self) -> bool {
        matches!(self, Self::Other(_))
    }

    /// Payload written when a slide of this kind is created.
    pub fn default_content(&self) -> SlideContent {
        match self {
            Self::Title => SlideContent::Title(TitleContent::default()),
            Self::Text => SlideContent::Text(TextContent::default()),
            Self::LessonEnd => SlideContent::LessonEnd(LessonEndContent::default()),
            Self::SpeechRepeat => SlideContent::SpeechRepeat(SpeechRepeatContent::default()),
            Self::GuidedRepeat => SlideContent::GuidedRepeat(GuidedRepeatContent::default()),
            Self::ChoiceMatch => SlideContent::ChoiceMatch(ChoiceMatchContent::default()),
            Self::Other(tag) => SlideContent::Other {
                tag: tag.clone(),
                content: PassthroughContent::default(),
            },
        }
    }

    /// Attributes recognized in the payload of this kind.
    pub fn attributes(&self) -> Vec<AttributeSpec> {
        use AttributeType::*;

        if self.is_other() {
            return AttributeSpec::passthrough().to_vec();
        }

        let mut attributes: Vec<AttributeSpec> = AttributeSpec::universal()
            .iter()
            .filter(|spec| !(self.is_lesson_end() && spec.name == "subtitle"))
            .copied()
            .collect();

        match self {
            Self::LessonEnd => {
                attributes.push(AttributeSpec::new("message", Text));
                attributes.push(AttributeSpec::new("actions", JsonList));
            }
            Self::SpeechRepeat => attributes.push(AttributeSpec::new("lines", SpeechLines)),
            Self::GuidedRepeat => attributes.push(AttributeSpec::new("elements", PracticeElements)),
            Self::ChoiceMatch => attributes.push(AttributeSpec::new("elements", ChoiceElements)),
            Self::Title | Self::Text | Self::Other(_) => {}
        }
        attributes
    }
}

impl fmt::Display for SlideKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl From<String> for SlideKind {
    fn from(value: String) -> Self {
        Self::from_tag(&value)
    }
}

impl From<SlideKind> for String {
    fn from(value: SlideKind) -> Self {
        value.tag().to_string()
    }
}

impl std::str::FromStr for SlideKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}
