//! Group entity - optional scoring bucket of slides inside a lesson

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, LessonId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    #[serde(default)]
    pub lesson_id: Option<LessonId>,
    #[serde(default)]
    pub order_index: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub scoring: ScoringConfig,
}

/// How a group's activity slides are scored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    /// Fraction (0.0 - 1.0) of the max score needed to pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<u32>,
    /// Relative weight of this group within the lesson score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
}

impl Group {
    pub fn new(lesson_id: LessonId, title: impl Into<String>) -> Self {
        Self {
            id: GroupId::new(),
            lesson_id: Some(lesson_id),
            order_index: None,
            title: title.into(),
            scoring: ScoringConfig::default(),
        }
    }

    pub fn with_id(mut self, id: GroupId) -> Self {
        self.id = id;
        self
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn without_lesson(mut self) -> Self {
        self.lesson_id = None;
        self
    }
}
