//! Value objects - small pure helpers with no identity

mod language;
mod media_path;
mod sibling_order;

pub use language::{normalize_language, resolve_language};
pub use media_path::{is_absolute_uri, storage_relative_path};
pub use sibling_order::{compare_siblings, sort_siblings, SiblingOrder};
