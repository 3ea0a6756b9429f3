//! Small URL helpers.

/// Join URL segments with a single `/` at every boundary.
///
/// Slashes on both sides of a boundary are collapsed into one. The start of
/// the first segment (scheme, `//`) and the end of the last segment are kept
/// as given. Segments that are empty, or only slashes once trimmed, are
/// ignored.
pub fn join_url<S: AsRef<str>>(parts: &[S]) -> String {
    let parts: Vec<&str> = parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .collect();
    let last = parts.len().saturating_sub(1);
    parts
        .iter()
        .enumerate()
        .map(|(i, &part)| {
            let mut part = part;
            if i > 0 {
                part = part.trim_start_matches('/');
            }
            if i < last {
                part = part.trim_end_matches('/');
            }
            part
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
