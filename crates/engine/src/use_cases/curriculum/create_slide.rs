//! Create slide use case.
//!
//! Appends a new slide of a given kind at the end of its siblings.

use std::sync::Arc;

use lessonbldr_domain::{GroupId, LessonId, Slide, SlideKind};

use crate::infrastructure::ports::{ClockPort, ContentStore, RepoError};

/// Errors that can occur while creating a slide.
#[derive(Debug, thiserror::Error)]
pub enum CreateSlideError {
    #[error("Lesson not found: {0}")]
    LessonNotFound(LessonId),
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),
    #[error("Group {group_id} does not belong to lesson {lesson_id}")]
    GroupNotInLesson {
        group_id: GroupId,
        lesson_id: LessonId,
    },
    #[error("No order index left after {0}")]
    OrderIndexExhausted(i32),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

/// Creates a slide with the registry's default payload and an empty meta.
///
/// The new slide's order index is one past the highest sibling index
/// (ungrouped siblings when no group is given), or 0 when it is the first.
pub struct CreateSlide {
    store: Arc<dyn ContentStore>,
    clock: Arc<dyn ClockPort>,
}

impl CreateSlide {
    pub fn new(store: Arc<dyn ContentStore>, clock: Arc<dyn ClockPort>) -> Self {
        Self { store, clock }
    }

    pub async fn execute(
        &self,
        lesson_id: LessonId,
        group_id: Option<GroupId>,
        kind: SlideKind,
    ) -> Result<Slide, CreateSlideError> {
        self.store
            .get_lesson(lesson_id)
            .await
            .map_err(|e| match e {
                e if e.is_not_found() => CreateSlideError::LessonNotFound(lesson_id),
                e => CreateSlideError::Repo(e),
            })?;

        let siblings = match group_id {
            Some(group_id) => {
                let group = self.store.get_group(group_id).await.map_err(|e| match e {
                    e if e.is_not_found() => CreateSlideError::GroupNotFound(group_id),
                    e => CreateSlideError::Repo(e),
                })?;
                if group.lesson_id != Some(lesson_id) {
                    return Err(CreateSlideError::GroupNotInLesson {
                        group_id,
                        lesson_id,
                    });
                }
                self.store.list_slides_by_group(group_id).await?
            }
            None => self
                .store
                .list_slides_by_lesson(lesson_id)
                .await?
                .into_iter()
                .filter(|slide| slide.group_id.is_none())
                .collect(),
        };

        let order_index = match siblings
            .iter()
            .map(|slide| slide.order_index.unwrap_or(0))
            .max()
        {
            Some(max) => max
                .checked_add(1)
                .ok_or(CreateSlideError::OrderIndexExhausted(max))?,
            None => 0,
        };

        let mut slide = Slide::new(lesson_id, &kind).with_order(order_index);
        if let Some(group_id) = group_id {
            slide = slide.in_group(group_id);
        }
        slide.updated_at = Some(self.clock.now());

        self.store.create_slide(&slide).await?;

        tracing::info!(
            slide_id = %slide.id,
            lesson_id = %lesson_id,
            kind = %kind,
            order_index,
            "Created slide"
        );

        Ok(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockClockPort, MockContentStore};
    use chrono::{TimeZone, Utc};
    use lessonbldr_domain::{Group, Lesson, ModuleId};
    use mockall::predicate::*;
    use serde_json::json;

    fn clock() -> Arc<MockClockPort> {
        let mut clock = MockClockPort::new();
        let now = Utc.with_ymd_and_hms(2026, 5, 4, 8, 0, 0).unwrap();
        clock.expect_now().returning(move || now);
        Arc::new(clock)
    }

    #[tokio::test]
    async fn first_ungrouped_slide_gets_order_zero() {
        let mut store = MockContentStore::new();
        let lesson = Lesson::new(ModuleId::new(), "hello", "Hello");
        let lesson_id = lesson.id;

        store
            .expect_get_lesson()
            .with(eq(lesson_id))
            .returning(move |_| Ok(lesson.clone()));
        let grouped = Slide::new(lesson_id, &SlideKind::Text)
            .in_group(GroupId::new())
            .with_order(7);
        store
            .expect_list_slides_by_lesson()
            .returning(move |_| Ok(vec![grouped.clone()]));
        store
            .expect_create_slide()
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateSlide::new(Arc::new(store), clock());
        let slide = use_case
            .execute(lesson_id, None, SlideKind::SpeechRepeat)
            .await
            .unwrap();

        assert_eq!(slide.order_index, Some(0));
        assert_eq!(slide.group_id, None);
        assert_eq!(slide.slide_type, "speech-repeat");
        assert_eq!(
            slide.content_payload,
            SlideKind::SpeechRepeat.default_content().to_payload()
        );
        assert_eq!(slide.meta_payload, json!({}));
        assert!(slide.updated_at.is_some());
    }

    #[tokio::test]
    async fn grouped_slide_goes_after_highest_sibling() {
        let mut store = MockContentStore::new();
        let lesson = Lesson::new(ModuleId::new(), "hello", "Hello");
        let lesson_id = lesson.id;
        let group = Group::new(lesson_id, "Practice");
        let group_id = group.id;

        store
            .expect_get_lesson()
            .returning(move |_| Ok(lesson.clone()));
        store
            .expect_get_group()
            .with(eq(group_id))
            .returning(move |_| Ok(group.clone()));
        let siblings = vec![
            Slide::new(lesson_id, &SlideKind::Text).in_group(group_id).with_order(3),
            Slide::new(lesson_id, &SlideKind::Text).in_group(group_id),
        ];
        store
            .expect_list_slides_by_group()
            .with(eq(group_id))
            .returning(move |_| Ok(siblings.clone()));
        store
            .expect_create_slide()
            .withf(move |slide: &Slide| slide.group_id == Some(group_id))
            .returning(|_| Ok(()));

        let use_case = CreateSlide::new(Arc::new(store), clock());
        let slide = use_case
            .execute(lesson_id, Some(group_id), SlideKind::ChoiceMatch)
            .await
            .unwrap();

        assert_eq!(slide.order_index, Some(4));
    }

    #[tokio::test]
    async fn group_from_another_lesson_is_rejected() {
        let mut store = MockContentStore::new();
        let lesson = Lesson::new(ModuleId::new(), "hello", "Hello");
        let lesson_id = lesson.id;
        let foreign = Group::new(LessonId::new(), "Elsewhere");
        let foreign_id = foreign.id;

        store
            .expect_get_lesson()
            .returning(move |_| Ok(lesson.clone()));
        store
            .expect_get_group()
            .returning(move |_| Ok(foreign.clone()));
        store.expect_create_slide().never();

        let use_case = CreateSlide::new(Arc::new(store), clock());
        let result = use_case
            .execute(lesson_id, Some(foreign_id), SlideKind::Text)
            .await;

        assert!(matches!(
            result,
            Err(CreateSlideError::GroupNotInLesson { .. })
        ));
    }

    #[tokio::test]
    async fn sibling_at_max_order_index_is_an_error() {
        let mut store = MockContentStore::new();
        let lesson = Lesson::new(ModuleId::new(), "hello", "Hello");
        let lesson_id = lesson.id;

        store
            .expect_get_lesson()
            .returning(move |_| Ok(lesson.clone()));
        let last = Slide::new(lesson_id, &SlideKind::Text).with_order(i32::MAX);
        store
            .expect_list_slides_by_lesson()
            .returning(move |_| Ok(vec![last.clone()]));
        store.expect_create_slide().never();

        let use_case = CreateSlide::new(Arc::new(store), clock());
        let result = use_case.execute(lesson_id, None, SlideKind::Text).await;

        assert!(matches!(
            result,
            Err(CreateSlideError::OrderIndexExhausted(i32::MAX))
        ));
    }

    #[tokio::test]
    async fn missing_lesson_is_reported() {
        let mut store = MockContentStore::new();
        store
            .expect_get_lesson()
            .returning(|id| Err(RepoError::not_found("Lesson", id)));

        let use_case = CreateSlide::new(Arc::new(store), clock());
        let lesson_id = LessonId::new();
        let result = use_case.execute(lesson_id, None, SlideKind::Title).await;

        assert!(matches!(result, Err(CreateSlideError::LessonNotFound(id)) if id == lesson_id));
    }
}
