//! Ancestor resolution for breadcrumbs and editor context.
//!
//! Walks parent links through the content store, one fetch per level. The
//! chain is always module, lesson, then an optional group. On the slide
//! path the group fetch does not wait for the lesson chain.

use std::sync::Arc;

use futures_util::future::join;
use lessonbldr_domain::{Group, GroupId, Lesson, LessonId, Module, SlideId};

use crate::infrastructure::ports::{ContentStore, RepoError};

/// Errors that can occur while resolving ancestors.
#[derive(Debug, thiserror::Error)]
pub enum AncestorError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    /// A row exists but its parent link is missing
    #[error("Invalid hierarchy: {0}")]
    Invalid(String),
    #[error("Repository error: {0}")]
    Store(RepoError),
}

impl From<RepoError> for AncestorError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { entity_type, id } => Self::NotFound { entity_type, id },
            other => Self::Store(other),
        }
    }
}

/// Which leaf to resolve from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestorTarget {
    Lesson(LessonId),
    Group(GroupId),
    Slide(SlideId),
}

/// Parent chain of a lesson, group or slide.
#[derive(Debug, Clone, PartialEq)]
pub struct AncestorBundle {
    pub module: Module,
    pub lesson: Lesson,
    /// Always set on the group path; on the slide path, `None` when the
    /// slide is ungrouped or its group could not be fetched
    pub group: Option<Group>,
}

pub struct AncestorResolver {
    store: Arc<dyn ContentStore>,
}

impl AncestorResolver {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn resolve(&self, target: AncestorTarget) -> Result<AncestorBundle, AncestorError> {
        match target {
            AncestorTarget::Lesson(id) => self.for_lesson(id).await,
            AncestorTarget::Group(id) => self.for_group(id).await,
            AncestorTarget::Slide(id) => self.for_slide(id).await,
        }
    }

    pub async fn for_lesson(&self, lesson_id: LessonId) -> Result<AncestorBundle, AncestorError> {
        let lesson = self.store.get_lesson(lesson_id).await?;
        let module_id = lesson.module_id.ok_or_else(|| {
            AncestorError::Invalid(format!("Lesson {} has no module", lesson_id))
        })?;
        let module = self.store.get_module(module_id).await?;
        Ok(AncestorBundle {
            module,
            lesson,
            group: None,
        })
    }

    pub async fn for_group(&self, group_id: GroupId) -> Result<AncestorBundle, AncestorError> {
        let group = self.store.get_group(group_id).await?;
        let lesson_id = group.lesson_id.ok_or_else(|| {
            AncestorError::Invalid(format!("Group {} has no lesson", group_id))
        })?;
        let bundle = self.for_lesson(lesson_id).await?;
        Ok(AncestorBundle {
            group: Some(group),
            ..bundle
        })
    }

    /// The group lookup never fails the resolution: a dangling or
    /// unreadable group reference yields `group: None`. It runs alongside
    /// the lesson and module fetches.
    pub async fn for_slide(&self, slide_id: SlideId) -> Result<AncestorBundle, AncestorError> {
        let slide = self.store.get_slide(slide_id).await?;
        let lesson_id = slide.lesson_id.ok_or_else(|| {
            AncestorError::Invalid(format!("Slide {} has no lesson", slide_id))
        })?;

        let group_lookup = async {
            let group_id = slide.group_id?;
            match self.store.get_group(group_id).await {
                Ok(group) => Some(group),
                Err(e) => {
                    tracing::debug!(
                        slide_id = %slide_id,
                        group_id = %group_id,
                        error = %e,
                        "Group lookup failed, resolving slide without group"
                    );
                    None
                }
            }
        };

        let (bundle, group) = join(self.for_lesson(lesson_id), group_lookup).await;
        Ok(AncestorBundle { group, ..bundle? })
    }
}
