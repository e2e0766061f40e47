//! Tag listing abstraction layer
//!
//! The resolver only needs the names of the tags that already exist. They are
//! fetched once through the [TagSource] trait and then treated as a snapshot.
//!
//! - [repository::Git2TagSource]: reads tags from a local repository with `git2`
//! - [repository::LazyGit2TagSource]: the same, opening the repository on first use
//! - [mock::MockTagSource]: a fixed list of tags for testing
//!
//! ```rust
//! # use tag_release::git::{MockTagSource, TagSource};
//! let source = MockTagSource::with_tags(["v1.0.0", "v1.1.0"]);
//! assert_eq!(source.list_tags().unwrap().len(), 2);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagSource;
pub use repository::{Git2TagSource, LazyGit2TagSource};

use crate::error::Result;

/// Source of the tags that currently exist for a repository
pub trait TagSource {
    /// Get all tag names, in no particular order
    ///
    /// Names may carry a `refs/tags/` prefix; callers strip it.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self) -> Result<Vec<String>>;
}
