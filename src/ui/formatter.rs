//! Pure formatting functions for UI output.
//!
//! Everything is printed to stderr; stdout is left to the tag, the outputs
//! and the manifest.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a warning in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("WARNING:").yellow(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display the tag change (or the initial tag).
///
/// # Arguments
/// * `old_tag` - Previous tag (None if this is the initial tag)
/// * `new_tag` - The resolved tag
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    eprintln!("{}", format_proposed_tag(old_tag, new_tag));
}

/// Text shown by [display_proposed_tag]
pub fn format_proposed_tag(old_tag: Option<&str>, new_tag: &str) -> String {
    match old_tag {
        Some(old) => format!(
            "\n{}\n  From: {}\n  To:   {}",
            style("Next Tag:").bold(),
            style(old).red(),
            style(new_tag).green()
        ),
        None => format!(
            "\n{}\n  New tag: {}",
            style("Initial Tag:").bold(),
            style(new_tag).green()
        ),
    }
}

/// Display a boundary warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    display_warning(&warning.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_proposed_tag_with_previous() {
        let text = console::strip_ansi_codes(&format_proposed_tag(Some("v1"), "v2")).to_string();
        assert!(text.contains("From: v1"));
        assert!(text.contains("To:   v2"));
    }

    #[test]
    fn test_format_initial_tag() {
        let text = console::strip_ansi_codes(&format_proposed_tag(None, "v1.0.0")).to_string();
        assert!(text.contains("Initial Tag:"));
        assert!(text.contains("New tag: v1.0.0"));
    }
}
