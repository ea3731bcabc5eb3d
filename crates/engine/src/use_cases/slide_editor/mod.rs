//! Slide editor use cases.
//!
//! Loading a slide into editing state, and saving editing state back
//! through the parse, validate, build and persist stages.

mod error;
mod load_editor;
mod save_slide;

pub use error::{SaveSlideError, SlideEditorError};
pub use load_editor::LoadSlideEditor;
pub use save_slide::SaveSlide;
