use std::cmp::Ordering;

use super::ParsedVersion;

const TAG_REF_PREFIX: &str = "refs/tags/";

/// Drop a leading `refs/tags/` from a ref name
pub fn strip_tag_ref(reference: &str) -> &str {
    reference.strip_prefix(TAG_REF_PREFIX).unwrap_or(reference)
}

/// Outcome of parsing a tag name as a version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedTag<'a> {
    Parsed {
        raw: &'a str,
        version: ParsedVersion,
    },
    Unparsed(&'a str),
}

impl<'a> ParsedTag<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match ParsedVersion::parse(raw) {
            Some(version) => ParsedTag::Parsed { raw, version },
            None => ParsedTag::Unparsed(raw),
        }
    }

    /// The tag text exactly as it was given
    pub fn raw(&self) -> &'a str {
        match self {
            ParsedTag::Parsed { raw, .. } => *raw,
            ParsedTag::Unparsed(raw) => *raw,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, ParsedTag::Parsed { .. })
    }

    /// Ordering used to find the most recent tag.
    ///
    /// Two versions compare by semver precedence, with the raw text deciding
    /// between equal versions (`v1.0.0` vs `1.0.0`). Anything involving an
    /// unparsed tag compares the raw text byte by byte.
    pub fn recency(&self, other: &ParsedTag<'_>) -> Ordering {
        match (self, other) {
            (
                ParsedTag::Parsed { raw, version },
                ParsedTag::Parsed {
                    raw: other_raw,
                    version: other_version,
                },
            ) => version
                .precedence(other_version)
                .then_with(|| raw.cmp(other_raw)),
            _ => self.raw().cmp(other.raw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tag_ref() {
        assert_eq!(strip_tag_ref("refs/tags/v1.0.0"), "v1.0.0");
        assert_eq!(strip_tag_ref("v1.0.0"), "v1.0.0");
    }

    #[test]
    fn test_strip_only_leading_ref() {
        assert_eq!(strip_tag_ref("v1-refs/tags/x"), "v1-refs/tags/x");
    }

    #[test]
    fn test_parse_variants() {
        assert!(ParsedTag::parse("v1.2.0").is_parsed());
        assert_eq!(ParsedTag::parse("zzz"), ParsedTag::Unparsed("zzz"));
        assert_eq!(ParsedTag::parse("zzz").raw(), "zzz");
    }

    #[test]
    fn test_recency_semantic() {
        let newer = ParsedTag::parse("v1.275.0");
        let older = ParsedTag::parse("v1.99.0");
        assert_eq!(newer.recency(&older), Ordering::Greater);
    }

    #[test]
    fn test_recency_equal_versions_use_text() {
        let plain = ParsedTag::parse("1.0.0");
        let prefixed = ParsedTag::parse("v1.0.0");
        assert_eq!(prefixed.recency(&plain), Ordering::Greater);
        assert_eq!(plain.recency(&plain), Ordering::Equal);
    }

    #[test]
    fn test_recency_mixed_falls_back_to_text() {
        let version = ParsedTag::parse("v2.0.0");
        let text = ParsedTag::parse("abc-def");
        assert_eq!(version.recency(&text), Ordering::Greater);

        let later_text = ParsedTag::parse("zzz");
        assert_eq!(version.recency(&later_text), Ordering::Less);
    }
}
