//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Content storage (could swap the in-memory store for a hosted database)
//! - Media URI resolution (could swap public bucket URLs for signed URLs)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

pub use error::RepoError;
pub use external::MediaResolver;
pub use repos::ContentStore;
pub use testing::ClockPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockMediaResolver;
#[cfg(test)]
pub use repos::MockContentStore;
#[cfg(test)]
pub use testing::MockClockPort;
