use std::fs;
use std::io::Write;
use std::path::PathBuf;

use super::{PublishedRelease, ReleasePublisher, ReleaseRequest};
use crate::error::{ReleaseError, Result};

/// Writes the release request as a TOML manifest.
///
/// Without a path the manifest goes to stdout.
#[derive(Debug, Clone, Default)]
pub struct ManifestPublisher {
    path: Option<PathBuf>,
}

impl ManifestPublisher {
    pub fn new(path: Option<PathBuf>) -> Self {
        ManifestPublisher { path }
    }

    /// Render the manifest without writing it
    pub fn render(request: &ReleaseRequest) -> Result<String> {
        toml::to_string(request)
            .map_err(|e| ReleaseError::publish(format!("Cannot encode release request: {}", e)))
    }
}

impl ReleasePublisher for ManifestPublisher {
    fn create_release(&self, request: &ReleaseRequest) -> Result<PublishedRelease> {
        let manifest = Self::render(request)?;

        match &self.path {
            Some(path) => fs::write(path, manifest).map_err(|e| {
                ReleaseError::publish(format!("Cannot write {}: {}", path.display(), e))
            })?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(manifest.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(PublishedRelease::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReleaseRequest {
        ReleaseRequest {
            tag_name: "v1.2.0".to_string(),
            name: "v1.2.0".to_string(),
            body: "Fixes\n- one".to_string(),
            draft: true,
            prerelease: false,
        }
    }

    #[test]
    fn test_render_round_trips() {
        let rendered = ManifestPublisher::render(&request()).unwrap();
        assert!(rendered.contains("tag_name = \"v1.2.0\""));
        assert!(rendered.contains("draft = true"));
        let decoded: ReleaseRequest = toml::from_str(&rendered).unwrap();
        assert_eq!(decoded, request());
    }

    #[test]
    fn test_writes_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.toml");
        let publisher = ManifestPublisher::new(Some(path.clone()));

        let published = publisher.create_release(&request()).unwrap();
        assert_eq!(published, PublishedRelease::default());

        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("name = \"v1.2.0\""));
    }

    #[test]
    fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("release.toml");
        let err = ManifestPublisher::new(Some(path))
            .create_release(&request())
            .unwrap_err();
        assert!(matches!(err, ReleaseError::Publish(_)));
    }
}
