//! Curriculum use cases.
//!
//! Loading the whole curriculum as a hierarchy, and adding slides to it.

mod create_slide;
mod load_curriculum;

pub use create_slide::{CreateSlide, CreateSlideError};
pub use load_curriculum::{CurriculumError, LoadCurriculum};
