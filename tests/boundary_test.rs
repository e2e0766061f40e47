use tag_release::boundary::BoundaryWarning;
use tag_release::domain::Scheme;
use tag_release::ui;

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_ignored_increment_type_display() {
    let warning = BoundaryWarning::IgnoredIncrementType {
        value: "weekly".to_string(),
        scheme: Scheme::Continuous,
        fallback: "major".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("'weekly'"),
        "Message should quote the ignored value, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("continuous scheme"),
        "Message should name the scheme, got: {}",
        display_msg
    );
    assert!(
        display_msg.ends_with("using 'major'"),
        "Message should name the fallback, got: {}",
        display_msg
    );
}

#[test]
fn test_textual_comparison_display() {
    let warning = BoundaryWarning::TextualTagComparison {
        tags: vec!["nightly".to_string(), "latest".to_string()],
    };

    assert_eq!(
        warning.to_string(),
        "2 tag(s) are not versions and were compared as text: nightly, latest"
    );
}

#[test]
fn test_textual_comparison_display_truncates() {
    let tags: Vec<String> = (0..8).map(|i| format!("build{}", i)).collect();
    let warning = BoundaryWarning::TextualTagComparison { tags };

    let display_msg = warning.to_string();
    assert!(display_msg.starts_with("8 tag(s)"));
    assert!(display_msg.contains("build4"));
    assert!(!display_msg.contains("build5"));
    assert!(display_msg.ends_with("... and 3 more"));
}

#[test]
fn test_boundary_warning_equality() {
    let a = BoundaryWarning::TextualTagComparison {
        tags: vec!["x".to_string()],
    };
    let b = a.clone();
    assert_eq!(a, b);
}

#[test]
fn test_display_boundary_warning_does_not_panic() {
    let warning = BoundaryWarning::TextualTagComparison { tags: Vec::new() };
    ui::display_boundary_warning(&warning);
}
