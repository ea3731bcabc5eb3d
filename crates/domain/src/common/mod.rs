//! Common utility functions shared across the LessonBldr crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Minimal dependencies** - std only

pub mod string;

pub use string::{is_blank, non_blank_lines};
