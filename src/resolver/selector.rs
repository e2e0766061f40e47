use crate::domain::ParsedTag;

/// Picks the most recent tag out of an unordered tag list.
///
/// Versions are ordered by semver precedence, anything that does not parse
/// is ordered by its raw text. Candidates are visited in text order so the
/// answer only depends on which tags exist, never on the order the source
/// returned them in.
///
/// # Returns
/// * `Some(tag)` - The most recent tag
/// * `None` - If `tags` is empty
///
/// # Example
/// ```
/// use tag_release::resolver::select_previous_tag;
///
/// let tags = ["v1.2.0", "v1.275.0", "v1.99.0", "v1.1.0"];
/// assert_eq!(select_previous_tag(&tags), Some("v1.275.0"));
/// ```
pub fn select_previous_tag<S: AsRef<str>>(tags: &[S]) -> Option<&str> {
    let mut names: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
    names.sort_unstable();

    names
        .into_iter()
        .map(ParsedTag::parse)
        .reduce(|best, candidate| {
            if candidate.recency(&best).is_gt() {
                candidate
            } else {
                best
            }
        })
        .map(|tag| tag.raw())
}

/// Tags that cannot be read as a version and only take part in text ordering
pub fn unparsed_tags<S: AsRef<str>>(tags: &[S]) -> Vec<&str> {
    tags.iter()
        .map(AsRef::as_ref)
        .filter(|tag| !ParsedTag::parse(tag).is_parsed())
        .collect()
}
