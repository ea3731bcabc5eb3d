//! Editing state to payload: parse, validate, build.
//!
//! Each stage can stop the save with a [`DomainError`]; nothing is written
//! until [`SlideEditingState::prepare_save`] has produced the whole
//! [`BuiltSlide`].

use serde_json::{json, Map, Value};

use crate::common::{is_blank, non_blank_lines};
use crate::entities::{SlideUpdate, ACTIVITY_NAME_KEY};
use crate::error::DomainError;
use crate::slide_content::{
    ChoiceElement, ChoiceMatchContent, GuidedRepeatContent, InteractionFlags, LessonEndContent,
    PassthroughContent, PracticeElement, SlideCommon, SlideContent, SpeechCell,
    SpeechRepeatContent, SpokenForm, TextContent, TitleContent,
};
use crate::value_objects::{is_absolute_uri, resolve_language};

use super::state::{
    ChoiceDraft, ChoiceMatchDraft, ChoiceMode, GuidedElementDraft, SlideEditingState,
    UniversalFields, VariantDraft,
};
use super::EditingContext;

/// Text fields of the editing state, parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFields {
    pub buttons: Vec<Value>,
    /// Lesson-end actions; empty for every other variant
    pub actions: Vec<Value>,
    pub max_attempts: Option<u32>,
    pub min_attempts_before_skip: Option<u32>,
}

/// Everything the single persist call writes.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltSlide {
    pub content: SlideContent,
    pub meta_payload: Value,
    pub is_activity: bool,
}

impl BuiltSlide {
    pub fn into_update(self) -> SlideUpdate {
        SlideUpdate {
            content_payload: Some(self.content.to_payload()),
            meta_payload: Some(self.meta_payload),
            is_activity: Some(self.is_activity),
        }
    }
}

impl SlideEditingState {
    /// Run parse, validate and build in order, stopping at the first failure.
    pub fn prepare_save(
        &self,
        ctx: &EditingContext,
        resolve_uri: &dyn Fn(&str) -> String,
    ) -> Result<BuiltSlide, DomainError> {
        let parsed = self.parse()?;
        self.validate()?;
        Ok(self.build(parsed, ctx, resolve_uri))
    }

    /// Parse stage: JSON text fields and attempt limits.
    pub fn parse(&self) -> Result<ParsedFields, DomainError> {
        let buttons = parse_json_list(&self.universal.buttons_json, "buttons")?;
        let actions = match &self.variant {
            VariantDraft::LessonEnd { actions_json, .. } => {
                parse_json_list(actions_json, "actions")?
            }
            _ => Vec::new(),
        };
        Ok(ParsedFields {
            buttons,
            actions,
            max_attempts: parse_count(&self.universal.max_attempts, "maxAttempts")?,
            min_attempts_before_skip: parse_count(
                &self.universal.min_attempts_before_skip,
                "minAttemptsBeforeSkip",
            )?,
        })
    }

    /// Validate stage: per-variant completeness.
    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.variant {
            VariantDraft::SpeechRepeat { phrases } => {
                if non_blank_lines(phrases).is_empty() {
                    return Err(DomainError::validation(
                        "Add at least one phrase to repeat",
                    ));
                }
            }
            VariantDraft::GuidedRepeat { elements } => {
                if elements.is_empty() {
                    return Err(DomainError::validation(
                        "Add at least one practice element",
                    ));
                }
                if elements.iter().all(|e| is_blank(&e.sample_prompt)) {
                    return Err(DomainError::validation(
                        "At least one practice element needs a sample prompt",
                    ));
                }
            }
            VariantDraft::ChoiceMatch(draft) => {
                let has_valid = draft.valid_elements().next().is_some();
                if !has_valid && !draft.preserves_originals() {
                    return Err(DomainError::validation(
                        "Add at least one choice with a label and audio or text",
                    ));
                }
            }
            VariantDraft::Title
            | VariantDraft::Text
            | VariantDraft::LessonEnd { .. }
            | VariantDraft::Other { .. } => {}
        }
        Ok(())
    }

    /// Build stage: assemble the payload. Assumes `validate` passed.
    pub fn build(
        &self,
        parsed: ParsedFields,
        ctx: &EditingContext,
        resolve_uri: &dyn Fn(&str) -> String,
    ) -> BuiltSlide {
        let lang = resolve_language(&self.universal.lang, &ctx.default_language);
        let ParsedFields {
            buttons,
            actions,
            max_attempts,
            min_attempts_before_skip,
        } = parsed;
        let min_attempts_before_skip = match (min_attempts_before_skip, max_attempts) {
            (Some(min), Some(max)) if min > max => Some(max),
            (min, _) => min,
        };
        let common = build_common(
            &self.universal,
            buttons,
            max_attempts,
            min_attempts_before_skip,
        );

        let content = match &self.variant {
            VariantDraft::Title => SlideContent::Title(TitleContent { common }),
            VariantDraft::Text => SlideContent::Text(TextContent { common }),
            VariantDraft::LessonEnd { message, .. } => SlideContent::LessonEnd(LessonEndContent {
                common: SlideCommon {
                    subtitle: String::new(),
                    ..common
                },
                message: message.clone(),
                actions,
            }),
            VariantDraft::SpeechRepeat { phrases } => {
                SlideContent::SpeechRepeat(SpeechRepeatContent {
                    common,
                    lines: speech_lines(phrases, &lang),
                })
            }
            VariantDraft::GuidedRepeat { elements } => {
                SlideContent::GuidedRepeat(GuidedRepeatContent {
                    common,
                    elements: practice_elements(elements, &lang, resolve_uri),
                })
            }
            VariantDraft::ChoiceMatch(draft) => SlideContent::ChoiceMatch(ChoiceMatchContent {
                common,
                elements: choice_elements(draft, &lang, resolve_uri),
            }),
            VariantDraft::Other { tag } => SlideContent::Other {
                tag: tag.clone(),
                content: PassthroughContent {
                    label: common.label,
                    title: common.title,
                    buttons: common.buttons,
                    flags: common.flags,
                },
            },
        };

        BuiltSlide {
            content,
            meta_payload: meta_payload(&self.universal.activity_name),
            is_activity: self.universal.is_activity,
        }
    }
}

fn parse_json_list(text: &str, field: &str) -> Result<Vec<Value>, DomainError> {
    if is_blank(text) {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(_) => Err(DomainError::malformed_input(format!(
            "The {} field must be a JSON list",
            field
        ))),
        Err(_) => Err(DomainError::malformed_input(format!(
            "Invalid JSON in {} field",
            field
        ))),
    }
}

fn parse_count(text: &str, field: &str) -> Result<Option<u32>, DomainError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| DomainError::malformed_input(format!("Invalid number in {} field", field)))
}

fn build_common(
    universal: &UniversalFields,
    buttons: Vec<Value>,
    max_attempts: Option<u32>,
    min_attempts_before_skip: Option<u32>,
) -> SlideCommon {
    SlideCommon {
        label: universal.label.clone(),
        title: universal.title.clone(),
        subtitle: universal.subtitle.clone(),
        body: universal.body.clone(),
        buttons,
        lang: universal.lang.trim().to_string(),
        audio_id: universal.audio_id.trim().to_string(),
        flags: InteractionFlags {
            is_interactive: universal.is_interactive,
            allow_skip: universal.allow_skip,
            allow_retry: universal.allow_retry,
        },
        max_attempts,
        min_attempts_before_skip,
    }
}

/// All phrases as one row of synthesized cells.
fn speech_lines(phrases: &str, lang: &str) -> Vec<Vec<SpeechCell>> {
    let row: Vec<SpeechCell> = non_blank_lines(phrases)
        .into_iter()
        .map(|phrase| SpeechCell {
            speech: Some(SpokenForm::tts(phrase.clone(), lang)),
            label: phrase,
        })
        .collect();
    if row.is_empty() {
        Vec::new()
    } else {
        vec![row]
    }
}

fn practice_elements(
    drafts: &[GuidedElementDraft],
    lang: &str,
    resolve_uri: &dyn Fn(&str) -> String,
) -> Vec<PracticeElement> {
    drafts
        .iter()
        .filter(|draft| !is_blank(&draft.sample_prompt))
        .map(|draft| {
            let reference_text = if is_blank(&draft.reference_text) {
                draft.sample_prompt.clone()
            } else {
                draft.reference_text.clone()
            };
            let speech = if is_blank(&draft.audio_path) {
                SpokenForm::tts(reference_text.clone(), lang)
            } else {
                SpokenForm::file(public_uri(&draft.audio_path, resolve_uri))
            };
            PracticeElement {
                sample_prompt: draft.sample_prompt.clone(),
                reference_text,
                speech: Some(speech),
            }
        })
        .collect()
}

fn choice_elements(
    draft: &ChoiceMatchDraft,
    slide_lang: &str,
    resolve_uri: &dyn Fn(&str) -> String,
) -> Vec<ChoiceElement> {
    if draft.preserves_originals() {
        return draft.originals().to_vec();
    }
    draft
        .valid_elements()
        .map(|choice| choice_element(choice, slide_lang, resolve_uri))
        .collect()
}

fn choice_element(
    choice: &ChoiceDraft,
    slide_lang: &str,
    resolve_uri: &dyn Fn(&str) -> String,
) -> ChoiceElement {
    let label = choice.label.clone();
    let speech = match choice.mode {
        ChoiceMode::File => SpokenForm::file(public_uri(&choice.audio_path, resolve_uri)),
        ChoiceMode::Synthesized => {
            let text = if is_blank(&choice.text) {
                label.clone()
            } else {
                choice.text.clone()
            };
            SpokenForm::tts(text, resolve_language(&choice.lang, slide_lang))
        }
    };
    ChoiceElement {
        label,
        speech: Some(speech),
    }
}

fn public_uri(path: &str, resolve_uri: &dyn Fn(&str) -> String) -> String {
    let path = path.trim();
    if is_absolute_uri(path) {
        path.to_string()
    } else {
        resolve_uri(path)
    }
}

fn meta_payload(activity_name: &str) -> Value {
    let name = activity_name.trim();
    if name.is_empty() {
        Value::Object(Map::new())
    } else {
        json!({ ACTIVITY_NAME_KEY: name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::ChoiceEditorState;
    use crate::entities::Slide;
    use crate::ids::LessonId;
    use crate::slide_content::SlideKind;

    const BASE: &str = "https://proj.supabase.co/storage/v1/object/public/audio/";

    fn ctx() -> EditingContext {
        EditingContext::new("audio", "en")
    }

    fn resolver(path: &str) -> String {
        format!("{}{}", BASE, path)
    }

    fn load(kind: SlideKind, payload: Value) -> SlideEditingState {
        let slide = Slide::new(LessonId::new(), &kind).with_payload(payload);
        SlideEditingState::load(&slide, &ctx()).unwrap()
    }

    fn save(state: &SlideEditingState) -> Result<BuiltSlide, DomainError> {
        state.prepare_save(&ctx(), &resolver)
    }

    fn empty_state(kind: SlideKind) -> SlideEditingState {
        SlideEditingState {
            universal: UniversalFields::default(),
            variant: VariantDraft::empty(&kind),
        }
    }

    #[test]
    fn invalid_buttons_json_is_malformed_input() {
        let mut state = empty_state(SlideKind::Title);
        state.universal.buttons_json = "[{".to_string();
        let err = save(&state).unwrap_err();
        assert_eq!(
            err,
            DomainError::malformed_input("Invalid JSON in buttons field")
        );
    }

    #[test]
    fn invalid_actions_json_is_malformed_input() {
        let mut state = empty_state(SlideKind::LessonEnd);
        state.variant = VariantDraft::LessonEnd {
            message: "Bravo".to_string(),
            actions_json: "not json".to_string(),
        };
        let err = save(&state).unwrap_err();
        assert_eq!(err.reason(), "Invalid JSON in actions field");
    }

    #[test]
    fn parse_failure_wins_over_validation_failure() {
        let mut state = empty_state(SlideKind::SpeechRepeat);
        state.universal.buttons_json = "{".to_string();
        assert!(matches!(
            save(&state).unwrap_err(),
            DomainError::MalformedInput(_)
        ));
    }

    #[test]
    fn non_numeric_attempts_are_malformed_input() {
        let mut state = empty_state(SlideKind::Text);
        state.universal.max_attempts = "three".to_string();
        assert_eq!(
            save(&state).unwrap_err().reason(),
            "Invalid number in maxAttempts field"
        );
    }

    #[test]
    fn min_attempts_are_clamped_to_max() {
        let mut state = empty_state(SlideKind::Text);
        state.universal.min_attempts_before_skip = "5".to_string();
        state.universal.max_attempts = "3".to_string();
        let payload = save(&state).unwrap().content.to_payload();
        assert_eq!(payload["minAttemptsBeforeSkip"], json!(3));
        assert_eq!(payload["maxAttempts"], json!(3));
    }

    #[test]
    fn min_attempts_without_max_are_kept() {
        let mut state = empty_state(SlideKind::Text);
        state.universal.min_attempts_before_skip = " 5 ".to_string();
        let payload = save(&state).unwrap().content.to_payload();
        assert_eq!(payload["minAttemptsBeforeSkip"], json!(5));
        assert!(payload.get("maxAttempts").is_none());
    }

    #[test]
    fn flags_are_always_written() {
        let payload = save(&empty_state(SlideKind::Title))
            .unwrap()
            .content
            .to_payload();
        assert_eq!(payload["isInteractive"], json!(false));
        assert_eq!(payload["allowSkip"], json!(false));
        assert_eq!(payload["allowRetry"], json!(false));
    }

    #[test]
    fn blank_speech_repeat_fails_validation() {
        let mut state = empty_state(SlideKind::SpeechRepeat);
        state.variant = VariantDraft::SpeechRepeat {
            phrases: "  \n\t\n ".to_string(),
        };
        assert!(matches!(
            save(&state).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn single_phrase_builds_one_row_with_one_cell() {
        let mut state = empty_state(SlideKind::SpeechRepeat);
        state.universal.lang = "French".to_string();
        state.variant = VariantDraft::SpeechRepeat {
            phrases: "\n  Bonjour  \n".to_string(),
        };
        let built = save(&state).unwrap();
        let content = built.content.as_speech_repeat().unwrap();
        assert_eq!(content.lines.len(), 1);
        assert_eq!(
            content.lines[0],
            vec![SpeechCell {
                label: "Bonjour".to_string(),
                speech: Some(SpokenForm::tts("Bonjour", "fr")),
            }]
        );
    }

    #[test]
    fn speech_repeat_round_trip_keeps_phrase_sequence() {
        let payload = json!({
            "lang": "fr",
            "lines": [
                [{"label": "Bonjour"}, {"label": "Bonsoir"}],
                [{"label": "Merci"}],
                [{"label": "Au revoir"}]
            ]
        });
        let original = SlideContent::decode(&SlideKind::SpeechRepeat, &payload).unwrap();
        let state = load(SlideKind::SpeechRepeat, payload);
        let built = save(&state).unwrap();

        let before: Vec<&str> = original.as_speech_repeat().unwrap().phrases().collect();
        let after: Vec<&str> = built.content.as_speech_repeat().unwrap().phrases().collect();
        assert_eq!(before, after);
        assert_eq!(built.content.as_speech_repeat().unwrap().lines.len(), 1);
    }

    #[test]
    fn guided_repeat_requires_a_sample_prompt() {
        let mut state = empty_state(SlideKind::GuidedRepeat);
        assert!(matches!(
            save(&state).unwrap_err(),
            DomainError::Validation(_)
        ));

        state.variant = VariantDraft::GuidedRepeat {
            elements: vec![GuidedElementDraft::new("   ")],
        };
        assert!(matches!(
            save(&state).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn guided_repeat_synthesizes_from_sample_prompt() {
        let mut state = empty_state(SlideKind::GuidedRepeat);
        state.variant = VariantDraft::GuidedRepeat {
            elements: vec![GuidedElementDraft {
                sample_prompt: "Hello".to_string(),
                reference_text: String::new(),
                audio_path: String::new(),
            }],
        };
        let built = save(&state).unwrap();
        let elements = &built.content.as_guided_repeat().unwrap().elements;
        assert_eq!(
            elements,
            &vec![PracticeElement {
                sample_prompt: "Hello".to_string(),
                reference_text: "Hello".to_string(),
                speech: Some(SpokenForm::tts("Hello", "en")),
            }]
        );
    }

    #[test]
    fn guided_repeat_drops_blank_prompts_and_resolves_audio() {
        let mut state = empty_state(SlideKind::GuidedRepeat);
        state.universal.lang = "german".to_string();
        state.variant = VariantDraft::GuidedRepeat {
            elements: vec![
                GuidedElementDraft::new(""),
                GuidedElementDraft {
                    sample_prompt: "Guten Tag".to_string(),
                    reference_text: "guten tag".to_string(),
                    audio_path: "de/guten_tag.mp3".to_string(),
                },
                GuidedElementDraft {
                    sample_prompt: "Danke".to_string(),
                    reference_text: "danke schön".to_string(),
                    audio_path: String::new(),
                },
            ],
        };
        let built = save(&state).unwrap();
        let elements = &built.content.as_guided_repeat().unwrap().elements;
        assert_eq!(elements.len(), 2);
        assert_eq!(
            elements[0].speech,
            Some(SpokenForm::file(format!("{}de/guten_tag.mp3", BASE)))
        );
        assert_eq!(
            elements[1].speech,
            Some(SpokenForm::tts("danke schön", "de"))
        );
    }

    fn stored_choices() -> Vec<ChoiceElement> {
        vec![
            ChoiceElement {
                label: "chien".to_string(),
                speech: Some(SpokenForm::tts("chien", "fr")),
            },
            ChoiceElement {
                label: "".to_string(),
                speech: None,
            },
        ]
    }

    #[test]
    fn pristine_empty_choices_preserve_originals() {
        let mut state = empty_state(SlideKind::ChoiceMatch);
        state.variant =
            VariantDraft::ChoiceMatch(ChoiceMatchDraft::pristine(stored_choices(), Vec::new()));
        let built = save(&state).unwrap();
        assert_eq!(
            built.content.as_choice_match().unwrap().elements,
            stored_choices()
        );
    }

    #[test]
    fn touched_empty_choices_fail_validation() {
        let mut draft = ChoiceMatchDraft::pristine(stored_choices(), Vec::new());
        draft.mark_touched();
        assert_eq!(draft.editor_state(), ChoiceEditorState::EditedEmpty);

        let mut state = empty_state(SlideKind::ChoiceMatch);
        state.variant = VariantDraft::ChoiceMatch(draft);
        assert!(matches!(
            save(&state).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn choices_with_nothing_stored_fail_validation() {
        assert!(matches!(
            save(&empty_state(SlideKind::ChoiceMatch)).unwrap_err(),
            DomainError::Validation(_)
        ));
    }

    #[test]
    fn only_valid_choices_are_written() {
        let mut draft = ChoiceMatchDraft::pristine(Vec::new(), Vec::new());
        draft.set_elements(vec![
            ChoiceDraft::synthesized("chat", ""),
            ChoiceDraft::file("oiseau", "oiseau.mp3"),
            ChoiceDraft::file("no audio", ""),
            ChoiceDraft::synthesized("", "fr"),
            ChoiceDraft {
                text: "the dog".to_string(),
                ..ChoiceDraft::synthesized("dog", "english")
            },
            ChoiceDraft::file("remote", "https://cdn.example/remote.mp3"),
        ]);
        let mut state = empty_state(SlideKind::ChoiceMatch);
        state.universal.lang = "french".to_string();
        state.variant = VariantDraft::ChoiceMatch(draft);

        let built = save(&state).unwrap();
        let elements = &built.content.as_choice_match().unwrap().elements;
        assert_eq!(
            elements,
            &vec![
                ChoiceElement {
                    label: "chat".to_string(),
                    speech: Some(SpokenForm::tts("chat", "fr")),
                },
                ChoiceElement {
                    label: "oiseau".to_string(),
                    speech: Some(SpokenForm::file(format!("{}oiseau.mp3", BASE))),
                },
                ChoiceElement {
                    label: "dog".to_string(),
                    speech: Some(SpokenForm::tts("the dog", "en")),
                },
                ChoiceElement {
                    label: "remote".to_string(),
                    speech: Some(SpokenForm::file("https://cdn.example/remote.mp3")),
                },
            ]
        );
    }

    #[test]
    fn choice_text_falls_back_to_label_across_reload() {
        let first = load(
            SlideKind::ChoiceMatch,
            json!({"elements": [
                {"label": "chat", "speech": {"mode": "tts", "text": "", "lang": "fr"}},
                {"label": "chien"}
            ]}),
        );
        let first_elements = first.choice_match().unwrap().elements().to_vec();
        assert!(first_elements.iter().all(|e| e.text.is_empty()));

        let built = save(&first).unwrap();
        assert_eq!(
            built.content.as_choice_match().unwrap().elements,
            vec![
                ChoiceElement {
                    label: "chat".to_string(),
                    speech: Some(SpokenForm::tts("chat", "fr")),
                },
                ChoiceElement {
                    label: "chien".to_string(),
                    speech: Some(SpokenForm::tts("chien", "en")),
                },
            ]
        );

        let second = load(SlideKind::ChoiceMatch, built.content.to_payload());
        assert_eq!(second.choice_match().unwrap().elements(), &first_elements[..]);
    }

    #[test]
    fn lesson_end_builds_message_and_actions_without_subtitle() {
        let mut state = empty_state(SlideKind::LessonEnd);
        state.universal.subtitle = "stale".to_string();
        state.variant = VariantDraft::LessonEnd {
            message: "Bien joué".to_string(),
            actions_json: r#"[{"type": "next-lesson"}]"#.to_string(),
        };
        let payload = save(&state).unwrap().content.to_payload();
        assert_eq!(payload["message"], json!("Bien joué"));
        assert_eq!(payload["actions"], json!([{"type": "next-lesson"}]));
        assert!(payload.get("subtitle").is_none());
    }

    #[test]
    fn meta_carries_only_non_empty_activity_name() {
        let mut state = empty_state(SlideKind::Text);
        state.universal.activity_name = "   ".to_string();
        state.universal.is_activity = true;
        let built = save(&state).unwrap();
        assert_eq!(built.meta_payload, json!({}));
        assert!(built.is_activity);

        state.universal.activity_name = " Dictée ".to_string();
        let update = save(&state).unwrap().into_update();
        assert_eq!(update.meta_payload, Some(json!({"activityName": "Dictée"})));
        assert_eq!(update.is_activity, Some(true));
    }

    #[test]
    fn reload_after_save_gives_same_editing_state() {
        let cases = vec![
            (
                SlideKind::Text,
                json!({
                    "label": "Intro",
                    "title": "Bienvenue",
                    "subtitle": "Leçon 1",
                    "body": "Texte",
                    "buttons": [{"label": "Next", "action": "next"}],
                    "lang": "fr",
                    "audioId": "intro-audio",
                    "isInteractive": true,
                    "allowSkip": false,
                    "allowRetry": true,
                    "maxAttempts": 4,
                    "minAttemptsBeforeSkip": 2
                }),
            ),
            (
                SlideKind::GuidedRepeat,
                json!({
                    "lang": "fr",
                    "elements": [
                        {
                            "samplePrompt": "Bonjour",
                            "referenceText": "bonjour",
                            "speech": {"mode": "file", "uri": format!("{}fr/bonjour.mp3", BASE)}
                        },
                        {
                            "samplePrompt": "Merci",
                            "referenceText": "merci",
                            "speech": {"mode": "tts", "text": "merci", "lang": "fr"}
                        }
                    ]
                }),
            ),
            (
                SlideKind::ChoiceMatch,
                json!({
                    "lang": "fr",
                    "elements": [
                        {"label": "chat", "speech": {"mode": "tts", "text": "chat", "lang": "fr"}},
                        {"label": "dog", "speech": {"mode": "tts", "text": "dog", "lang": "en"}},
                        {"label": "oiseau", "speech": {"mode": "file", "uri": format!("{}oiseau.mp3", BASE)}}
                    ]
                }),
            ),
            (
                SlideKind::ChoiceMatch,
                json!({
                    "lang": "fr",
                    "elements": [
                        {"label": "chat", "speech": {"mode": "tts", "text": ""}},
                        {"label": "chien"},
                        {"label": " lapin ", "speech": {"mode": "tts", "text": " le lapin ", "lang": "fr"}},
                        {"label": "souris", "speech": {"mode": "tts", "text": "  "}}
                    ]
                }),
            ),
        ];

        for (kind, payload) in cases {
            let first = load(kind.clone(), payload);
            let built = save(&first).unwrap();
            let second = load(kind.clone(), built.content.to_payload());
            assert_eq!(first.universal, second.universal, "universal for {}", kind);
            match (&first.variant, &second.variant) {
                (VariantDraft::ChoiceMatch(a), VariantDraft::ChoiceMatch(b)) => {
                    assert_eq!(a.elements(), b.elements());
                }
                (a, b) => assert_eq!(a, b, "variant for {}", kind),
            }
        }
    }

    #[test]
    fn other_kind_keeps_its_tag() {
        let state = load(
            SlideKind::from_tag("matching-pairs"),
            json!({"title": "Pairs", "allowSkip": true}),
        );
        let built = save(&state).unwrap();
        assert_eq!(built.content.kind().tag(), "matching-pairs");
        assert_eq!(
            built.content.to_payload(),
            json!({
                "label": "",
                "title": "Pairs",
                "buttons": [],
                "isInteractive": false,
                "allowSkip": true,
                "allowRetry": false
            })
        );
    }
}
