//! Editing state types.
//!
//! The editing state is split into the fields every slide has
//! ([`UniversalFields`]) and a variant-specific draft ([`VariantDraft`]).
//! Text that is authored as JSON (buttons, lesson-end actions) and numbers
//! typed into text boxes stay as strings here; they are parsed on save.

use crate::common::is_blank;
use crate::slide_content::{ChoiceElement, SlideKind};

/// Fields shared by every variant, as the authoring surface holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniversalFields {
    pub label: String,
    pub title: String,
    pub subtitle: String,
    pub body: String,
    /// Buttons as formatted JSON text
    pub buttons_json: String,
    pub lang: String,
    pub audio_id: String,
    pub is_interactive: bool,
    pub allow_skip: bool,
    pub allow_retry: bool,
    /// Decimal text, empty when unset
    pub max_attempts: String,
    /// Decimal text, empty when unset
    pub min_attempts_before_skip: String,
    pub activity_name: String,
    pub is_activity: bool,
}

/// One guided-repeat item being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidedElementDraft {
    pub sample_prompt: String,
    pub reference_text: String,
    /// Storage-relative audio path, empty when the item is synthesized
    pub audio_path: String,
}

impl GuidedElementDraft {
    pub fn new(sample_prompt: impl Into<String>) -> Self {
        Self {
            sample_prompt: sample_prompt.into(),
            ..Default::default()
        }
    }
}

/// How a choice is voiced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChoiceMode {
    /// Uploaded audio referenced by path
    File,
    /// Text-to-speech from `text`, or the label when `text` is blank
    #[default]
    Synthesized,
}

/// One choice-match option being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceDraft {
    pub label: String,
    pub mode: ChoiceMode,
    pub audio_path: String,
    pub text: String,
    pub lang: String,
}

impl ChoiceDraft {
    pub fn synthesized(label: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            mode: ChoiceMode::Synthesized,
            lang: lang.into(),
            ..Default::default()
        }
    }

    pub fn file(label: impl Into<String>, audio_path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            mode: ChoiceMode::File,
            audio_path: audio_path.into(),
            ..Default::default()
        }
    }

    /// A choice is kept on save only if it has a label and something to play.
    pub fn is_valid(&self) -> bool {
        if is_blank(&self.label) {
            return false;
        }
        match self.mode {
            ChoiceMode::File => !is_blank(&self.audio_path),
            ChoiceMode::Synthesized => !is_blank(&self.text) || !is_blank(&self.label),
        }
    }
}

/// Where the choice editor stands this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceEditorState {
    /// Never changed since load
    Pristine,
    /// Changed, and at least one valid choice remains
    EditedNonEmpty,
    /// Changed, and no valid choice remains
    EditedEmpty,
}

/// Choice-match drafts plus what was stored when the slide was loaded.
///
/// Every mutation goes through a method so the editor state cannot drift
/// from what actually happened to the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceMatchDraft {
    elements: Vec<ChoiceDraft>,
    originals: Vec<ChoiceElement>,
    touched: bool,
}

impl ChoiceMatchDraft {
    /// Drafts as loaded, with the stored list kept for preservation.
    pub fn pristine(originals: Vec<ChoiceElement>, elements: Vec<ChoiceDraft>) -> Self {
        Self {
            elements,
            originals,
            touched: false,
        }
    }

    pub fn elements(&self) -> &[ChoiceDraft] {
        &self.elements
    }

    pub fn originals(&self) -> &[ChoiceElement] {
        &self.originals
    }

    pub fn set_elements(&mut self, elements: Vec<ChoiceDraft>) {
        self.elements = elements;
        self.touched = true;
    }

    pub fn push(&mut self, element: ChoiceDraft) {
        self.elements.push(element);
        self.touched = true;
    }

    pub fn remove(&mut self, index: usize) -> Option<ChoiceDraft> {
        if index >= self.elements.len() {
            return None;
        }
        self.touched = true;
        Some(self.elements.remove(index))
    }

    pub fn element_mut(&mut self, index: usize) -> Option<&mut ChoiceDraft> {
        let element = self.elements.get_mut(index)?;
        self.touched = true;
        Some(element)
    }

    pub fn mark_touched(&mut self) {
        self.touched = true;
    }

    pub fn valid_elements(&self) -> impl Iterator<Item = &ChoiceDraft> {
        self.elements.iter().filter(|e| e.is_valid())
    }

    pub fn editor_state(&self) -> ChoiceEditorState {
        if !self.touched {
            ChoiceEditorState::Pristine
        } else if self.valid_elements().next().is_some() {
            ChoiceEditorState::EditedNonEmpty
        } else {
            ChoiceEditorState::EditedEmpty
        }
    }

    /// Saving nothing keeps the stored list: nothing was entered, something
    /// was stored, and the editor was never touched.
    pub fn preserves_originals(&self) -> bool {
        self.elements.is_empty()
            && !self.originals.is_empty()
            && self.editor_state() == ChoiceEditorState::Pristine
    }
}

/// Variant-specific part of the editing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantDraft {
    Title,
    Text,
    LessonEnd {
        message: String,
        /// Actions as formatted JSON text
        actions_json: String,
    },
    SpeechRepeat {
        /// One phrase per line
        phrases: String,
    },
    GuidedRepeat {
        elements: Vec<GuidedElementDraft>,
    },
    ChoiceMatch(ChoiceMatchDraft),
    Other {
        tag: String,
    },
}

impl VariantDraft {
    /// Empty draft for a newly created slide of `kind`.
    pub fn empty(kind: &SlideKind) -> Self {
        match kind {
            SlideKind::Title => Self::Title,
            SlideKind::Text => Self::Text,
            SlideKind::LessonEnd => Self::LessonEnd {
                message: String::new(),
                actions_json: "[]".to_string(),
            },
            SlideKind::SpeechRepeat => Self::SpeechRepeat {
                phrases: String::new(),
            },
            SlideKind::GuidedRepeat => Self::GuidedRepeat {
                elements: Vec::new(),
            },
            SlideKind::ChoiceMatch => Self::ChoiceMatch(ChoiceMatchDraft::default()),
            SlideKind::Other(tag) => Self::Other { tag: tag.clone() },
        }
    }

    pub fn kind(&self) -> SlideKind {
        match self {
            Self::Title => SlideKind::Title,
            Self::Text => SlideKind::Text,
            Self::LessonEnd { .. } => SlideKind::LessonEnd,
            Self::SpeechRepeat { .. } => SlideKind::SpeechRepeat,
            Self::GuidedRepeat { .. } => SlideKind::GuidedRepeat,
            Self::ChoiceMatch(_) => SlideKind::ChoiceMatch,
            Self::Other { tag } => SlideKind::Other(tag.clone()),
        }
    }
}

/// Everything an authoring surface edits for one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideEditingState {
    pub universal: UniversalFields,
    pub variant: VariantDraft,
}

impl SlideEditingState {
    pub fn kind(&self) -> SlideKind {
        self.variant.kind()
    }

    pub fn choice_match(&self) -> Option<&ChoiceMatchDraft> {
        match &self.variant {
            VariantDraft::ChoiceMatch(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn choice_match_mut(&mut self) -> Option<&mut ChoiceMatchDraft> {
        match &mut self.variant {
            VariantDraft::ChoiceMatch(draft) => Some(draft),
            _ => None,
        }
    }

    pub fn guided_elements_mut(&mut self) -> Option<&mut Vec<GuidedElementDraft>> {
        match &mut self.variant {
            VariantDraft::GuidedRepeat { elements } => Some(elements),
            _ => None,
        }
    }
}
