//! Domain logic - pure versioning rules independent of git and the host

pub mod scheme;
pub mod tag;
pub mod version;

pub use scheme::{BumpType, Scheme};
pub use tag::{strip_tag_ref, ParsedTag};
pub use version::{checked_prerelease, Identifier, IncrementError, ParsedVersion};
