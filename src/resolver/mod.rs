//! Tag resolution engine: pick the previous tag, then derive the next one

pub mod bumper;
pub mod selector;

pub use bumper::{next_tag, BumpSettings, DEFAULT_PRERELEASE_SUFFIX};
pub use selector::{select_previous_tag, unparsed_tags};
