//! Module entity - top of the curriculum tree below the level
//!
//! A module belongs to a proficiency level (e.g. "a1") and holds lessons.

use serde::{Deserialize, Serialize};

use crate::ids::ModuleId;

/// A course module within one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: ModuleId,
    pub slug: String,
    /// Proficiency level as stored (case is not normalized)
    pub level: String,
    #[serde(default)]
    pub order_index: Option<i32>,
    pub title: String,
    #[serde(default)]
    pub status: ModuleStatus,
    #[serde(default)]
    pub visibility: Visibility,
}

/// Publication status of a module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModuleStatus {
    #[default]
    Draft,
    Published,
    Archived,
    /// Unknown status (for forward compatibility)
    #[serde(other)]
    Unknown,
}

/// Who can see a module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Visibility {
    #[default]
    Private,
    Unlisted,
    Public,
    #[serde(other)]
    Unknown,
}

impl Module {
    pub fn new(slug: impl Into<String>, level: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: ModuleId::new(),
            slug: slug.into(),
            level: level.into(),
            order_index: None,
            title: title.into(),
            status: ModuleStatus::default(),
            visibility: Visibility::default(),
        }
    }

    pub fn with_id(mut self, id: ModuleId) -> Self {
        self.id = id;
        self
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }

    pub fn with_status(mut self, status: ModuleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Level key used for grouping modules (upper-cased, trimmed).
    pub fn level_key(&self) -> String {
        self.level.trim().to_uppercase()
    }
}
