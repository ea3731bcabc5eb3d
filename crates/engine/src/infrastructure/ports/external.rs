//! External service ports.

/// Turns a storage-relative media path into a URI a learner's browser can
/// fetch.
#[cfg_attr(test, mockall::automock)]
pub trait MediaResolver: Send + Sync {
    fn resolve_public_uri(&self, bucket: &str, relative_path: &str) -> String;
}
