//! User interface module.
//!
//! tag-release runs unattended in CI, so there are no prompts; this module
//! only re-exports the formatting helpers.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_proposed_tag, display_status,
    display_success, display_warning, format_proposed_tag,
};
