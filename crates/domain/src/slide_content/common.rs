//! Attributes shared across slide variants.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Treat an explicit `null` in a stored payload like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Learner interaction switches.
///
/// Always serialized, even when false: a missing flag in a saved payload
/// is never read as "false".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InteractionFlags {
    #[serde(deserialize_with = "null_as_default")]
    pub is_interactive: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_skip: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub allow_retry: bool,
}

/// Universal attributes of every recognized variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SlideCommon {
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub subtitle: String,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub buttons: Vec<Value>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub lang: String,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub audio_id: String,
    #[serde(flatten)]
    pub flags: InteractionFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_attempts_before_skip: Option<u32>,
}
