//! Public bucket URLs for uploaded media.

use lessonbldr_domain::is_absolute_uri;

use crate::infrastructure::ports::MediaResolver;

/// Builds `<base>/storage/v1/object/public/<bucket>/<path>`.
///
/// Paths that are already absolute `http(s)` URIs come back unchanged.
#[derive(Debug, Clone)]
pub struct PublicStorageUrls {
    base_url: String,
}

impl PublicStorageUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl MediaResolver for PublicStorageUrls {
    fn resolve_public_uri(&self, bucket: &str, relative_path: &str) -> String {
        let path = relative_path.trim();
        if is_absolute_uri(path) {
            return path.to_string();
        }
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            bucket.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
