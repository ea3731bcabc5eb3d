//! Lesson entity - ordered child of a module

use serde::{Deserialize, Serialize};

use crate::ids::{LessonId, ModuleId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    /// Parent module. Missing only for partially migrated rows.
    #[serde(default)]
    pub module_id: Option<ModuleId>,
    #[serde(default)]
    pub order_index: Option<i32>,
    pub title: String,
    pub slug: String,
}

impl Lesson {
    pub fn new(module_id: ModuleId, slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: LessonId::new(),
            module_id: Some(module_id),
            order_index: None,
            title: title.into(),
            slug: slug.into(),
        }
    }

    pub fn with_id(mut self, id: LessonId) -> Self {
        self.id = id;
        self
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    /// Detach from the parent module (models rows with a null module id).
    pub fn without_module(mut self) -> Self {
        self.module_id = None;
        self
    }
}
