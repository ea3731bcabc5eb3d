//! String helpers for text typed into the authoring surface.

/// True when the string is empty or whitespace only.
///
/// # Examples
///
/// ```
/// use lessonbldr_domain::common::is_blank;
///
/// assert!(is_blank(" \t"));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Splits text on newlines, trims each line and drops the blank ones.
///
/// # Examples
///
/// ```
/// use lessonbldr_domain::common::non_blank_lines;
///
/// assert_eq!(non_blank_lines(" Bonjour \n\n  \nMerci"), vec!["Bonjour", "Merci"]);
/// ```
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
