//! MQTT-style pattern matching over `/`-separated paths.

/// Check whether a concrete `path` matches `pattern`.
///
/// - `brew/flow` matches only `brew/flow`
/// - `brew/+` matches `brew/flow`, `brew/draft`, but not `brew/form/x`
/// - `brew/#` matches `brew/flow`, `brew/form/x`, and `brew` itself
/// - `#` matches everything
///
/// An empty path never matches.
pub fn matches(pattern: &str, path: &str) -> bool {
    if path.is_empty() {
        return false;
    }

    let mut pat = pattern.split('/');
    let mut segs = path.split('/');

    loop {
        match (pat.next(), segs.next()) {
            (Some("#"), _) => return true,
            (Some("+"), Some(_)) => {}
            (Some(p), Some(s)) if p == s => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Check whether a pattern is well formed: no empty segments and `#`
/// only in the last position.
pub fn is_valid(pattern: &str) -> bool {
    if pattern.is_empty() {
        return false;
    }
    let segments: Vec<&str> = pattern.split('/').collect();
    let last = segments.len() - 1;
    segments
        .iter()
        .enumerate()
        .all(|(i, s)| !s.is_empty() && (*s != "#" || i == last))
}
