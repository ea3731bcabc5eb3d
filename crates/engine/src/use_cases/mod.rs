//! Use cases - authoring story orchestration.
//!
//! Each module contains use cases for one authoring area. Use cases hold
//! their ports as `Arc<dyn Port>` and expose a single `execute`.

pub mod ancestors;
pub mod curriculum;
pub mod slide_editor;

// Re-export main types
pub use ancestors::{AncestorBundle, AncestorError, AncestorResolver, AncestorTarget};
pub use curriculum::{CreateSlide, CreateSlideError, CurriculumError, LoadCurriculum};
pub use slide_editor::{LoadSlideEditor, SaveSlide, SaveSlideError, SlideEditorError};
