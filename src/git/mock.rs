use crate::error::{ReleaseError, Result};
use crate::git::TagSource;

/// Mock tag source for testing without a repository
pub struct MockTagSource {
    tags: Vec<String>,
    failure: Option<String>,
}

impl MockTagSource {
    /// Create a new source with no tags
    pub fn new() -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: None,
        }
    }

    /// Create a source returning `tags` in the given order
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockTagSource {
            tags: tags.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a source whose listing always fails
    pub fn failing(message: impl Into<String>) -> Self {
        MockTagSource {
            tags: Vec::new(),
            failure: Some(message.into()),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }
}

impl Default for MockTagSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TagSource for MockTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        match &self.failure {
            Some(message) => Err(ReleaseError::TagListing(message.clone())),
            None => Ok(self.tags.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_list_tags() {
        let mut source = MockTagSource::new();
        source.add_tag("v1.0.0");
        source.add_tag("refs/tags/v1.1.0");
        assert_eq!(source.list_tags().unwrap(), vec!["v1.0.0", "refs/tags/v1.1.0"]);
    }

    #[test]
    fn test_mock_failing() {
        let source = MockTagSource::failing("offline");
        assert!(source.list_tags().unwrap_err().to_string().contains("offline"));
    }
}
