use std::sync::Mutex;

use super::{PublishedRelease, ReleasePublisher, ReleaseRequest};
use crate::error::{ReleaseError, Result};

/// Publisher that records requests instead of creating releases
pub struct RecordingPublisher {
    requests: Mutex<Vec<ReleaseRequest>>,
    response: PublishedRelease,
    failure: Option<String>,
}

impl RecordingPublisher {
    /// Create a publisher that reports no release identifiers
    pub fn new() -> Self {
        RecordingPublisher {
            requests: Mutex::new(Vec::new()),
            response: PublishedRelease::default(),
            failure: None,
        }
    }

    /// Create a publisher answering every request with `response`
    pub fn responding(response: PublishedRelease) -> Self {
        RecordingPublisher {
            response,
            ..Self::new()
        }
    }

    /// Create a publisher whose requests always fail
    pub fn failing(message: impl Into<String>) -> Self {
        RecordingPublisher {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<ReleaseRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Default for RecordingPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleasePublisher for RecordingPublisher {
    fn create_release(&self, request: &ReleaseRequest) -> Result<PublishedRelease> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        match &self.failure {
            Some(message) => Err(ReleaseError::publish(message.clone())),
            None => Ok(self.response.clone()),
        }
    }
}
