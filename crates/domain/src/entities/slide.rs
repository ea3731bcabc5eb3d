//! Slide entity - leaf of the curriculum tree
//!
//! A slide stores its variant-specific content in one opaque JSON slot
//! (`content_payload`). The `slide_type` tag selects which shape applies;
//! use [`Slide::content`] to get a typed view instead of reading the map.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::ids::{GroupId, LessonId, SlideId};
use crate::slide_content::{SlideContent, SlideKind};

/// Meta attribute carrying the activity name shown in score reports
pub const ACTIVITY_NAME_KEY: &str = "activityName";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    pub id: SlideId,
    #[serde(default)]
    pub lesson_id: Option<LessonId>,
    #[serde(default)]
    pub group_id: Option<GroupId>,
    #[serde(default)]
    pub order_index: Option<i32>,
    /// Variant discriminant as stored
    #[serde(rename = "type")]
    pub slide_type: String,
    #[serde(default = "empty_object")]
    pub content_payload: Value,
    #[serde(default = "empty_object")]
    pub meta_payload: Value,
    #[serde(default)]
    pub is_activity: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

impl Slide {
    /// Create a slide of the given kind with the registry's default payload.
    pub fn new(lesson_id: LessonId, kind: &SlideKind) -> Self {
        Self {
            id: SlideId::new(),
            lesson_id: Some(lesson_id),
            group_id: None,
            order_index: None,
            slide_type: kind.tag().to_string(),
            content_payload: kind.default_content().to_payload(),
            meta_payload: empty_object(),
            is_activity: false,
            updated_at: None,
        }
    }

    pub fn with_id(mut self, id: SlideId) -> Self {
        self.id = id;
        self
    }

    pub fn in_group(mut self, group_id: GroupId) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.content_payload = payload;
        self
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta_payload = meta;
        self
    }

    pub fn as_activity(mut self) -> Self {
        self.is_activity = true;
        self
    }

    pub fn without_lesson(mut self) -> Self {
        self.lesson_id = None;
        self
    }

    pub fn kind(&self) -> SlideKind {
        SlideKind::from_tag(&self.slide_type)
    }

    /// Decode the stored payload into the variant selected by `slide_type`.
    pub fn content(&self) -> Result<SlideContent, DomainError> {
        SlideContent::decode(&self.kind(), &self.content_payload)
    }

    /// Non-empty activity name from the meta payload.
    pub fn activity_name(&self) -> Option<&str> {
        self.meta_payload
            .get(ACTIVITY_NAME_KEY)
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
    }
}

/// Partial record handed to the content store's `update_slide`.
///
/// `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_activity: Option<bool>,
}

impl SlideUpdate {
    /// Apply this update to a slide in place.
    pub fn apply_to(&self, slide: &mut Slide) {
        if let Some(payload) = &self.content_payload {
            slide.content_payload = payload.clone();
        }
        if let Some(meta) = &self.meta_payload {
            slide.meta_payload = meta.clone();
        }
        if let Some(is_activity) = self.is_activity {
            slide.is_activity = is_activity;
        }
    }
}
