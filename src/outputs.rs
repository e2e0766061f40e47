//! Action outputs reported back to the host workflow.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;

pub const PREVIOUS_TAG: &str = "previous_tag";
pub const CURRENT_TAG: &str = "current_tag";
pub const ID: &str = "id";
pub const HTML_URL: &str = "html_url";
pub const UPLOAD_URL: &str = "upload_url";

/// Ordered `key=value` outputs collected during a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutputs {
    entries: Vec<(String, String)>,
}

impl ActionOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an output, replacing an earlier value for the same key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every output in the `GITHUB_OUTPUT` file format
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        for (key, value) in &self.entries {
            if value.contains('\n') {
                let delimiter = format!("tag_release_{}_eof", key);
                writeln!(writer, "{}<<{}", key, delimiter)?;
                writeln!(writer, "{}", value)?;
                writeln!(writer, "{}", delimiter)?;
            } else {
                writeln!(writer, "{}={}", key, value)?;
            }
        }
        Ok(())
    }

    /// Append the outputs to `path`, or print them when there is no file
    pub fn persist(&self, path: Option<&Path>) -> Result<()> {
        match path {
            Some(path) => {
                let mut file = OpenOptions::new().create(true).append(true).open(path)?;
                self.write_to(&mut file)
            }
            None => self.write_to(&mut std::io::stdout().lock()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut outputs = ActionOutputs::new();
        outputs.set(PREVIOUS_TAG, "v1.0.0");
        outputs.set(CURRENT_TAG, "v1.0.1");
        outputs.set(CURRENT_TAG, "v1.0.2");

        assert_eq!(outputs.get(PREVIOUS_TAG), Some("v1.0.0"));
        assert_eq!(outputs.get(CURRENT_TAG), Some("v1.0.2"));
        assert_eq!(outputs.entries().len(), 2);
        assert_eq!(outputs.get(ID), None);
    }

    #[test]
    fn test_write_format() {
        let mut outputs = ActionOutputs::new();
        outputs.set(PREVIOUS_TAG, "v1");
        outputs.set(CURRENT_TAG, "v2");

        let mut buffer = Vec::new();
        outputs.write_to(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "previous_tag=v1\ncurrent_tag=v2\n"
        );
    }

    #[test]
    fn test_write_multiline_value() {
        let mut outputs = ActionOutputs::new();
        outputs.set("notes", "a\nb");

        let mut buffer = Vec::new();
        outputs.write_to(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "notes<<tag_release_notes_eof\na\nb\ntag_release_notes_eof\n"
        );
    }

    #[test]
    fn test_persist_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "existing=1\n").unwrap();

        let mut outputs = ActionOutputs::new();
        outputs.set(CURRENT_TAG, "v3");
        outputs.persist(Some(&path)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "existing=1\ncurrent_tag=v3\n"
        );
    }
}
