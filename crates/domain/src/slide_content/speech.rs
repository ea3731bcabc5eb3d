//! Spoken forms and the list items that carry them.

use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// How a phrase is voiced: synthesized from text, or a stored audio file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum SpokenForm {
    Tts {
        #[serde(default)]
        text: String,
        #[serde(default)]
        lang: String,
    },
    File {
        #[serde(default)]
        uri: String,
    },
}

impl SpokenForm {
    pub fn tts(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::Tts {
            text: text.into(),
            lang: lang.into(),
        }
    }

    pub fn file(uri: impl Into<String>) -> Self {
        Self::File { uri: uri.into() }
    }

    /// Stored file URI, when this is a non-empty file reference.
    pub fn file_uri(&self) -> Option<&str> {
        match self {
            Self::File { uri } if !uri.is_empty() => Some(uri),
            _ => None,
        }
    }

    /// Explicit language tag of a synthesized form.
    pub fn tts_lang(&self) -> Option<&str> {
        match self {
            Self::Tts { lang, .. } if !lang.trim().is_empty() => Some(lang),
            _ => None,
        }
    }
}

/// One cell of a speech-repeat row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechCell {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpokenForm>,
}

/// One guided-repeat practice item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PracticeElement {
    #[serde(deserialize_with = "null_as_default")]
    pub sample_prompt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub reference_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpokenForm>,
}

/// One choice-match option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceElement {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech: Option<SpokenForm>,
}
