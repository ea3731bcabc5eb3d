//! Payload to editing state.

use serde_json::Value;

use crate::common::is_blank;
use crate::entities::Slide;
use crate::error::DomainError;
use crate::slide_content::{
    ChoiceElement, PassthroughContent, PracticeElement, SlideCommon, SlideContent, SpokenForm,
};
use crate::value_objects::{normalize_language, resolve_language, storage_relative_path};

use super::state::{
    ChoiceDraft, ChoiceMatchDraft, ChoiceMode, GuidedElementDraft, SlideEditingState,
    UniversalFields, VariantDraft,
};
use super::EditingContext;

impl SlideEditingState {
    /// Load the editing state for a stored slide.
    pub fn load(slide: &Slide, ctx: &EditingContext) -> Result<Self, DomainError> {
        let content = slide.content()?;
        let mut state = Self::from_content(&content, ctx);
        state.universal.activity_name = slide.activity_name().unwrap_or_default().to_string();
        state.universal.is_activity = slide.is_activity;
        Ok(state)
    }

    /// Load from decoded content alone (no meta or activity flag).
    pub fn from_content(content: &SlideContent, ctx: &EditingContext) -> Self {
        let universal = match content {
            SlideContent::Other { content, .. } => passthrough_fields(content),
            SlideContent::LessonEnd(lesson_end) => UniversalFields {
                subtitle: String::new(),
                ..common_fields(&lesson_end.common)
            },
            _ => content.common().map(common_fields).unwrap_or_default(),
        };

        let variant = match content {
            SlideContent::Title(_) => VariantDraft::Title,
            SlideContent::Text(_) => VariantDraft::Text,
            SlideContent::LessonEnd(lesson_end) => VariantDraft::LessonEnd {
                message: lesson_end.message.clone(),
                actions_json: pretty_json_list(&lesson_end.actions),
            },
            SlideContent::SpeechRepeat(speech_repeat) => VariantDraft::SpeechRepeat {
                phrases: speech_repeat.phrases().collect::<Vec<_>>().join("\n"),
            },
            SlideContent::GuidedRepeat(guided) => VariantDraft::GuidedRepeat {
                elements: guided
                    .elements
                    .iter()
                    .map(|element| guided_draft(element, ctx))
                    .collect(),
            },
            SlideContent::ChoiceMatch(choice) => {
                let slide_lang = resolve_language(&universal.lang, &ctx.default_language);
                let drafts = choice
                    .elements
                    .iter()
                    .map(|element| choice_draft(element, &slide_lang, ctx))
                    .collect();
                VariantDraft::ChoiceMatch(ChoiceMatchDraft::pristine(
                    choice.elements.clone(),
                    drafts,
                ))
            }
            SlideContent::Other { tag, .. } => VariantDraft::Other { tag: tag.clone() },
        };

        Self { universal, variant }
    }
}

fn common_fields(common: &SlideCommon) -> UniversalFields {
    UniversalFields {
        label: common.label.clone(),
        title: common.title.clone(),
        subtitle: common.subtitle.clone(),
        body: common.body.clone(),
        buttons_json: pretty_json_list(&common.buttons),
        lang: common.lang.clone(),
        audio_id: common.audio_id.clone(),
        is_interactive: common.flags.is_interactive,
        allow_skip: common.flags.allow_skip,
        allow_retry: common.flags.allow_retry,
        max_attempts: number_text(common.max_attempts),
        min_attempts_before_skip: number_text(common.min_attempts_before_skip),
        activity_name: String::new(),
        is_activity: false,
    }
}

fn passthrough_fields(content: &PassthroughContent) -> UniversalFields {
    UniversalFields {
        label: content.label.clone(),
        title: content.title.clone(),
        buttons_json: pretty_json_list(&content.buttons),
        is_interactive: content.flags.is_interactive,
        allow_skip: content.flags.allow_skip,
        allow_retry: content.flags.allow_retry,
        ..Default::default()
    }
}

fn guided_draft(element: &PracticeElement, ctx: &EditingContext) -> GuidedElementDraft {
    GuidedElementDraft {
        sample_prompt: element.sample_prompt.clone(),
        reference_text: element.reference_text.clone(),
        audio_path: element
            .speech
            .as_ref()
            .and_then(SpokenForm::file_uri)
            .map(|uri| storage_relative_path(uri, &ctx.media_bucket))
            .unwrap_or_default(),
    }
}

fn choice_draft(element: &ChoiceElement, slide_lang: &str, ctx: &EditingContext) -> ChoiceDraft {
    let lang = element
        .speech
        .as_ref()
        .and_then(SpokenForm::tts_lang)
        .and_then(normalize_language)
        .unwrap_or_else(|| slide_lang.to_string());

    match &element.speech {
        Some(SpokenForm::File { uri }) => ChoiceDraft {
            label: element.label.clone(),
            mode: ChoiceMode::File,
            audio_path: storage_relative_path(uri, &ctx.media_bucket),
            text: String::new(),
            lang,
        },
        // Text that only repeats the label stays empty; save falls back to the label.
        Some(SpokenForm::Tts { text, .. }) => ChoiceDraft {
            label: element.label.clone(),
            mode: ChoiceMode::Synthesized,
            audio_path: String::new(),
            text: if is_blank(text) || *text == element.label {
                String::new()
            } else {
                text.clone()
            },
            lang,
        },
        None => ChoiceDraft {
            label: element.label.clone(),
            lang,
            ..Default::default()
        },
    }
}

/// Formatted JSON text for a list attribute.
pub(crate) fn pretty_json_list(items: &[Value]) -> String {
    serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string())
}

fn number_text(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_default()
}
