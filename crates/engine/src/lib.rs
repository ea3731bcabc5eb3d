//! LessonBldr Engine library.
//!
//! Authoring backend for slide-based lessons: the content store port and
//! its adapters, plus the use cases an authoring surface calls.
//!
//! ## Structure
//!
//! - `use_cases/` - Authoring story orchestration over the domain crate
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
