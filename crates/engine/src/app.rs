//! Application composition.

use std::sync::Arc;

use anyhow::Context;

use crate::infrastructure::{
    clock::SystemClock,
    config::AuthoringConfig,
    memory_store::InMemoryContentStore,
    ports::{ClockPort, ContentStore, MediaResolver},
    storage_urls::PublicStorageUrls,
};
use crate::use_cases::{AncestorResolver, CreateSlide, LoadCurriculum, LoadSlideEditor, SaveSlide};

/// Main application state.
///
/// Holds the configuration, the ports, and every use case built on them.
pub struct App {
    pub config: AuthoringConfig,
    pub store: Arc<dyn ContentStore>,
    pub media: Arc<dyn MediaResolver>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub curriculum: Arc<LoadCurriculum>,
    pub ancestors: Arc<AncestorResolver>,
    pub create_slide: Arc<CreateSlide>,
    pub slide_editor: Arc<LoadSlideEditor>,
    pub save_slide: Arc<SaveSlide>,
}

impl App {
    pub fn new(
        config: AuthoringConfig,
        store: Arc<dyn ContentStore>,
        media: Arc<dyn MediaResolver>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let ctx = config.editing_context();
        let use_cases = UseCases {
            curriculum: Arc::new(LoadCurriculum::new(store.clone(), config.orphan_policy)),
            ancestors: Arc::new(AncestorResolver::new(store.clone())),
            create_slide: Arc::new(CreateSlide::new(store.clone(), clock)),
            slide_editor: Arc::new(LoadSlideEditor::new(store.clone(), ctx.clone())),
            save_slide: Arc::new(SaveSlide::new(store.clone(), media.clone(), ctx)),
        };

        Self {
            config,
            store,
            media,
            use_cases,
        }
    }

    /// Compose from environment configuration over an in-memory store.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = AuthoringConfig::from_env().context("Failed to load authoring configuration")?;
        tracing::info!(
            media_bucket = %config.media_bucket,
            default_language = %config.default_language,
            orphan_policy = %config.orphan_policy,
            "Composing LessonBldr engine"
        );

        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let store = Arc::new(InMemoryContentStore::new(clock.clone()));
        let media = Arc::new(PublicStorageUrls::new(&config.storage_public_base_url));
        Ok(Self::new(config, store, media, clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::config::OrphanPolicy;
    use crate::use_cases::AncestorTarget;
    use chrono::{TimeZone, Utc};
    use lessonbldr_domain::{
        ChoiceDraft, Group, Lesson, Module, SlideKind, SpokenForm, VariantDraft,
    };
    use serde_json::json;

    struct Harness {
        app: App,
        store: Arc<InMemoryContentStore>,
        module: Module,
        lesson: Lesson,
        group: Group,
    }

    fn harness() -> Harness {
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap(),
        ));
        let store = Arc::new(InMemoryContentStore::new(clock.clone()));
        let module = Module::new("greetings", "a1", "Greetings");
        let lesson = Lesson::new(module.id, "hello", "Hello");
        let group = Group::new(lesson.id, "Practice");
        store.insert_module(module.clone());
        store.insert_lesson(lesson.clone());
        store.insert_group(group.clone());

        let config = AuthoringConfig {
            default_language: "fr".to_string(),
            ..AuthoringConfig::default()
        }
        .with_orphan_policy(OrphanPolicy::Warn);
        let media = Arc::new(PublicStorageUrls::new(&config.storage_public_base_url));
        let app = App::new(config, store.clone(), media, clock);

        Harness {
            app,
            store,
            module,
            lesson,
            group,
        }
    }

    #[tokio::test]
    async fn create_edit_save_and_reload_a_choice_slide() {
        let h = harness();
        let uc = &h.app.use_cases;

        let slide = uc
            .create_slide
            .execute(h.lesson.id, Some(h.group.id), SlideKind::ChoiceMatch)
            .await
            .unwrap();
        assert_eq!(slide.order_index, Some(0));

        let mut state = uc.slide_editor.execute(slide.id).await.unwrap();
        if let Some(choices) = state.choice_match_mut() {
            choices.push(ChoiceDraft::synthesized("chat", ""));
            choices.push(ChoiceDraft::file("chien", "fr/chien.mp3"));
        }
        uc.save_slide.execute(slide.id, &state).await.unwrap();

        let stored = h.store.get_slide(slide.id).await.unwrap();
        let content = stored.content().unwrap();
        let elements = &content.as_choice_match().unwrap().elements;
        assert_eq!(elements[0].speech, Some(SpokenForm::tts("chat", "fr")));
        assert_eq!(
            elements[1].speech,
            Some(SpokenForm::file(
                "http://localhost:54321/storage/v1/object/public/audio/fr/chien.mp3"
            ))
        );

        let reloaded = uc.slide_editor.execute(slide.id).await.unwrap();
        let drafts = reloaded.choice_match().unwrap().elements();
        assert_eq!(drafts[1].audio_path, "fr/chien.mp3");
        assert_eq!(drafts[0].lang, "fr");
    }

    #[tokio::test]
    async fn curriculum_and_ancestors_follow_the_store() {
        let h = harness();
        let uc = &h.app.use_cases;

        let first = uc
            .create_slide
            .execute(h.lesson.id, None, SlideKind::Title)
            .await
            .unwrap();
        let second = uc
            .create_slide
            .execute(h.lesson.id, None, SlideKind::LessonEnd)
            .await
            .unwrap();
        let grouped = uc
            .create_slide
            .execute(h.lesson.id, Some(h.group.id), SlideKind::SpeechRepeat)
            .await
            .unwrap();
        assert_eq!(second.order_index, Some(1));

        let hierarchy = uc.curriculum.execute().await.unwrap();
        assert_eq!(hierarchy.modules_by_level["A1"], vec![h.module.clone()]);
        let ungrouped: Vec<_> = hierarchy
            .ungrouped_slides_of(h.lesson.id)
            .iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ungrouped, vec![first.id, second.id]);
        assert_eq!(hierarchy.slides_of_group(h.group.id).len(), 1);

        let bundle = uc
            .ancestors
            .resolve(AncestorTarget::Slide(grouped.id))
            .await
            .unwrap();
        assert_eq!(bundle.group.as_ref().map(|g| g.id), Some(h.group.id));

        h.store.remove_group(h.group.id);
        let bundle = uc
            .ancestors
            .resolve(AncestorTarget::Slide(grouped.id))
            .await
            .unwrap();
        assert_eq!(bundle.group, None);
        assert_eq!(bundle.module, h.module);
    }

    #[tokio::test]
    async fn lesson_end_save_round_trips_through_the_store() {
        let h = harness();
        let uc = &h.app.use_cases;
        let slide = uc
            .create_slide
            .execute(h.lesson.id, None, SlideKind::LessonEnd)
            .await
            .unwrap();

        let mut state = uc.slide_editor.execute(slide.id).await.unwrap();
        state.universal.title = "Fin".to_string();
        state.universal.max_attempts = "3".to_string();
        state.universal.min_attempts_before_skip = "5".to_string();
        state.variant = VariantDraft::LessonEnd {
            message: "Bravo !".to_string(),
            actions_json: "[{\"type\": \"restart\"}]".to_string(),
        };
        let saved = uc.save_slide.execute(slide.id, &state).await.unwrap();

        assert_eq!(saved.content_payload["message"], json!("Bravo !"));
        assert_eq!(saved.content_payload["minAttemptsBeforeSkip"], json!(3));
        assert_eq!(
            saved.updated_at,
            Some(Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap())
        );

        let reloaded = uc.slide_editor.execute(slide.id).await.unwrap();
        assert_eq!(reloaded.universal.min_attempts_before_skip, "3");
        assert!(matches!(
            &reloaded.variant,
            VariantDraft::LessonEnd { message, actions_json }
                if message == "Bravo !" && actions_json.contains("restart")
        ));
    }
}
