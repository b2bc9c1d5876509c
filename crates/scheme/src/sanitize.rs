//! Filename sanitization.

/// Characters that are illegal in filenames on at least one mainstream
/// filesystem (Windows and Unix combined).
pub const ILLEGAL_CHARS: &[char] = &['\\', ':', '?', '*', '<', '>', '|', '"', '/'];

/// Replaces every occurrence of a character from [`ILLEGAL_CHARS`] with
/// `replacement`; all other characters pass through unchanged.
///
/// Character count and ordering are preserved. Pure and deterministic, and
/// idempotent as long as `replacement` is itself a legal character.
///
/// ```
/// use remeta_scheme::sanitize;
///
/// assert_eq!(sanitize("2003-09-03 12:52:43", '_'), "2003-09-03 12_52_43");
/// ```
pub fn sanitize(name: &str, replacement: char) -> String {
    name.chars().map(|c| if ILLEGAL_CHARS.contains(&c) { replacement } else { c }).collect()
}
