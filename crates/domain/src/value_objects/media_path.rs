//! Storage-relative media paths.

/// Marker segment preceding the bucket name in public storage URLs.
const PUBLIC_OBJECT_SEGMENT: &str = "/object/public/";

/// Strip the `.../object/public/<bucket>/` prefix from a public URL.
///
/// URLs that do not point into `bucket` (and plain relative paths) come
/// back unchanged.
///
/// # Examples
///
/// ```
/// use lessonbldr_domain::storage_relative_path;
///
/// let uri = "https://x.supabase.co/storage/v1/object/public/audio/fr/bonjour.mp3";
/// assert_eq!(storage_relative_path(uri, "audio"), "fr/bonjour.mp3");
/// assert_eq!(storage_relative_path("fr/bonjour.mp3", "audio"), "fr/bonjour.mp3");
/// ```
pub fn storage_relative_path(uri: &str, bucket: &str) -> String {
    let prefix = format!("{}{}/", PUBLIC_OBJECT_SEGMENT, bucket.trim_matches('/'));
    match uri.find(&prefix) {
        Some(index) => uri[index + prefix.len()..].to_string(),
        None => uri.to_string(),
    }
}

/// True for `http://` and `https://` URLs.
pub fn is_absolute_uri(path: &str) -> bool {
    let lowered = path.trim_start().to_ascii_lowercase();
    lowered.starts_with("http://") || lowered.starts_with("https://")
}
