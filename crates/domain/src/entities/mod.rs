//! Domain entities - curriculum rows with identity

mod group;
mod lesson;
mod module;
mod slide;

pub use group::{Group, ScoringConfig};
pub use lesson::Lesson;
pub use module::{Module, ModuleStatus, Visibility};
pub use slide::{Slide, SlideUpdate, ACTIVITY_NAME_KEY};
