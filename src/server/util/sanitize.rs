/// Strips every character other than Unicode letters and digits, `_` and `-`.
///
/// Used to derive the URL/filesystem safe `sanitized_name` of a collection and to match
/// collection names given in request paths.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Case-insensitive comparison of a request path segment with a stored sanitized name.
pub fn matches_sanitized(sanitized_name: &str, requested: &str) -> bool {
    sanitized_name.to_lowercase() == sanitize_name(requested).to_lowercase()
}
