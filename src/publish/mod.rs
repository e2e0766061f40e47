//! Release creation abstraction layer
//!
//! Once the tag is known, a [ReleaseRequest] is handed to a
//! [ReleasePublisher]. Creating the hosted release itself is left to the
//! hosting tooling:
//!
//! - [manifest::ManifestPublisher]: writes the request as TOML for the host to pick up
//! - [mock::RecordingPublisher]: records requests for testing

pub mod manifest;
pub mod mock;

pub use manifest::ManifestPublisher;
pub use mock::RecordingPublisher;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Everything needed to create a hosted release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub body: String,
    pub draft: bool,
    pub prerelease: bool,
}

/// What the host reported back about the created release
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishedRelease {
    pub id: Option<String>,
    pub html_url: Option<String>,
    pub upload_url: Option<String>,
}

/// Issues the create-release request
pub trait ReleasePublisher {
    /// Create a release for `request`
    ///
    /// # Returns
    /// * `Ok(PublishedRelease)` - Whatever identifiers the host reported
    /// * `Err` - If the release could not be created
    fn create_release(&self, request: &ReleaseRequest) -> Result<PublishedRelease>;
}
