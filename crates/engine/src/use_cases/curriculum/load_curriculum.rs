//! Load curriculum use case - fetches every row and builds the hierarchy.

use std::sync::Arc;

use futures_util::future::{try_join, try_join_all};
use lessonbldr_domain::{CurriculumHierarchy, Lesson};

use crate::infrastructure::config::OrphanPolicy;
use crate::infrastructure::ports::{ContentStore, RepoError};

/// Errors that can occur while loading the curriculum.
#[derive(Debug, thiserror::Error)]
pub enum CurriculumError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Fetches modules, then their lessons, then each lesson's groups and
/// slides, and feeds them to the hierarchy builder.
///
/// Queries at the same depth run concurrently. Nothing is cached; each call
/// sees whatever the store holds at that moment.
///
/// Lessons are only fetched through their module, and groups and slides only
/// through their lesson. Rows with no `moduleId` or `lessonId` are therefore
/// never seen here, so the only orphans this use case can report (and warn
/// about under [`OrphanPolicy::Warn`]) are modules with a blank level.
/// Callers holding raw rows can pass them to [`CurriculumHierarchy::build`]
/// directly to get the full orphan report.
pub struct LoadCurriculum {
    store: Arc<dyn ContentStore>,
    orphan_policy: OrphanPolicy,
}

impl LoadCurriculum {
    pub fn new(store: Arc<dyn ContentStore>, orphan_policy: OrphanPolicy) -> Self {
        Self {
            store,
            orphan_policy,
        }
    }

    pub async fn execute(&self) -> Result<CurriculumHierarchy, CurriculumError> {
        let modules = self.store.list_modules().await?;

        let lessons: Vec<Lesson> = try_join_all(
            modules
                .iter()
                .map(|module| self.store.list_lessons_by_module(module.id)),
        )
        .await?
        .into_iter()
        .flatten()
        .collect();

        let per_lesson = try_join_all(lessons.iter().map(|lesson| {
            try_join(
                self.store.list_groups_by_lesson(lesson.id),
                self.store.list_slides_by_lesson(lesson.id),
            )
        }))
        .await?;

        let (groups, slides): (Vec<_>, Vec<_>) = per_lesson.into_iter().unzip();
        let hierarchy = CurriculumHierarchy::build(
            modules,
            lessons,
            groups.into_iter().flatten(),
            slides.into_iter().flatten(),
        );

        if self.orphan_policy == OrphanPolicy::Warn {
            for orphan in &hierarchy.orphans {
                tracing::warn!(
                    kind = %orphan.kind,
                    id = %orphan.id,
                    missing = orphan.missing,
                    "Row left out of curriculum hierarchy"
                );
            }
        }

        tracing::debug!(
            levels = hierarchy.modules_by_level.len(),
            slides = hierarchy.slide_count(),
            orphans = hierarchy.orphans.len(),
            "Curriculum hierarchy built"
        );

        Ok(hierarchy)
    }
}
