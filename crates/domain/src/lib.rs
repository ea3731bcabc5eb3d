//! LessonBldr domain: curriculum entities, the slide content registry, the
//! hierarchy builder and the editing state normalizer.
//!
//! Everything here is synchronous and free of I/O. Storage and logging live
//! in the engine crate.

pub mod common;
pub mod editing;
pub mod entities;
pub mod error;
pub mod hierarchy;
pub mod ids;
pub mod slide_content;
pub mod value_objects;

pub use editing::{
    BuiltSlide, ChoiceDraft, ChoiceEditorState, ChoiceMatchDraft, ChoiceMode, EditingContext,
    GuidedElementDraft, ParsedFields, SlideEditingState, UniversalFields, VariantDraft,
};
pub use entities::{
    Group, Lesson, Module, ModuleStatus, ScoringConfig, Slide, SlideUpdate, Visibility,
    ACTIVITY_NAME_KEY,
};
pub use error::DomainError;
pub use hierarchy::{CurriculumHierarchy, Orphan, OrphanKind};
pub use ids::{GroupId, LessonId, ModuleId, SlideId};
pub use slide_content::{
    AttributeSpec, AttributeType, ChoiceElement, ChoiceMatchContent, GuidedRepeatContent,
    InteractionFlags, LessonEndContent, PassthroughContent, PracticeElement, SlideCommon,
    SlideContent, SlideKind, SpeechCell, SpeechRepeatContent, SpokenForm, TextContent,
    TitleContent,
};
pub use value_objects::{
    compare_siblings, is_absolute_uri, normalize_language, resolve_language, sort_siblings,
    storage_relative_path, SiblingOrder,
};
