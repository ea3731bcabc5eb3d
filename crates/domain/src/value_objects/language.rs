//! Language tag normalization.
//!
//! Slides store their default language the way authors typed it
//! ("French", "fr", "fr-FR"). Speech entries need a short code.

/// Known language names and the code they map to.
const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("english", "en"),
    ("french", "fr"),
    ("spanish", "es"),
    ("german", "de"),
    ("italian", "it"),
    ("portuguese", "pt"),
    ("dutch", "nl"),
    ("russian", "ru"),
    ("japanese", "ja"),
    ("chinese", "zh"),
    ("mandarin", "zh"),
    ("korean", "ko"),
    ("arabic", "ar"),
];

/// Map a language name to its code; other non-blank tags pass through
/// trimmed and lower-cased. Blank input yields `None`.
///
/// # Examples
///
/// ```
/// use lessonbldr_domain::normalize_language;
///
/// assert_eq!(normalize_language("French"), Some("fr".to_string()));
/// assert_eq!(normalize_language("fr-FR"), Some("fr-fr".to_string()));
/// assert_eq!(normalize_language("  "), None);
/// ```
pub fn normalize_language(tag: &str) -> Option<String> {
    let lowered = tag.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    let code = LANGUAGE_CODES
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, code)| (*code).to_string())
        .unwrap_or(lowered);
    Some(code)
}

/// Normalize `tag`, falling back to `default` (also normalized) when blank.
pub fn resolve_language(tag: &str, default: &str) -> String {
    normalize_language(tag)
        .or_else(|| normalize_language(default))
        .unwrap_or_default()
}
