//! Command-line workflow

pub mod orchestration;

pub use orchestration::{resolve_tag, run_release_workflow, ResolvedTag, WorkflowResult};
