//! Slide editing state normalizer.
//!
//! [`SlideEditingState::load`] turns a stored slide into the flat, text-heavy
//! state an authoring surface edits. [`SlideEditingState::prepare_save`]
//! runs the reverse trip in three stages (parse, validate, build) and
//! yields a [`BuiltSlide`] ready for a single persist call.
//!
//! Loading then saving without edits reproduces an equivalent payload,
//! except that speech-repeat rows collapse into one row.

mod load;
mod save;
mod state;

pub use save::{BuiltSlide, ParsedFields};
pub use state::{
    ChoiceDraft, ChoiceEditorState, ChoiceMatchDraft, ChoiceMode, GuidedElementDraft,
    SlideEditingState, UniversalFields, VariantDraft,
};

/// Settings the normalizer needs from outside the slide itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingContext {
    /// Storage bucket that holds uploaded audio
    pub media_bucket: String,
    /// Language used when neither the choice nor the slide names one
    pub default_language: String,
}

impl EditingContext {
    pub fn new(media_bucket: impl Into<String>, default_language: impl Into<String>) -> Self {
        Self {
            media_bucket: media_bucket.into(),
            default_language: default_language.into(),
        }
    }
}
