//! Content store port.

use async_trait::async_trait;
use lessonbldr_domain::{
    Group, GroupId, Lesson, LessonId, Module, ModuleId, Slide, SlideId, SlideUpdate,
};

use super::error::RepoError;

// =============================================================================
// Content Store
// =============================================================================

/// CRUD and query primitives over the four curriculum tables.
///
/// Getters return [`RepoError::NotFound`] for a missing row and
/// [`RepoError::QueryFailed`] when the store itself fails. List queries
/// make no ordering promise; callers sort with the sibling comparator.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    // Modules
    async fn get_module(&self, id: ModuleId) -> Result<Module, RepoError>;
    async fn list_modules(&self) -> Result<Vec<Module>, RepoError>;

    // Lessons
    async fn get_lesson(&self, id: LessonId) -> Result<Lesson, RepoError>;
    async fn list_lessons_by_module(&self, module_id: ModuleId) -> Result<Vec<Lesson>, RepoError>;

    // Groups
    async fn get_group(&self, id: GroupId) -> Result<Group, RepoError>;
    async fn list_groups_by_lesson(&self, lesson_id: LessonId) -> Result<Vec<Group>, RepoError>;

    // Slides
    async fn get_slide(&self, id: SlideId) -> Result<Slide, RepoError>;
    /// Every slide of the lesson, grouped or not.
    async fn list_slides_by_lesson(&self, lesson_id: LessonId) -> Result<Vec<Slide>, RepoError>;
    async fn list_slides_by_group(&self, group_id: GroupId) -> Result<Vec<Slide>, RepoError>;
    /// Apply `update` and return the stored row.
    async fn update_slide(&self, id: SlideId, update: SlideUpdate) -> Result<Slide, RepoError>;
    async fn create_slide(&self, slide: &Slide) -> Result<(), RepoError>;
}
