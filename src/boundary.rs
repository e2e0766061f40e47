use std::fmt;

use crate::domain::Scheme;

/// Non-fatal conditions met while resolving a tag.
/// These should be reported to the user but never stop the release.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The configured increment type is not one the scheme understands
    IgnoredIncrementType {
        value: String,
        scheme: Scheme,
        fallback: String,
    },
    /// Tags that could not be read as versions and were ordered as plain text
    TextualTagComparison { tags: Vec<String> },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::IgnoredIncrementType {
                value,
                scheme,
                fallback,
            } => write!(
                f,
                "Increment type '{}' is not supported by the {} scheme, using '{}'",
                value, scheme, fallback
            ),
            BoundaryWarning::TextualTagComparison { tags } => {
                const SHOWN: usize = 5;
                let listed: Vec<&str> = tags.iter().take(SHOWN).map(String::as_str).collect();
                write!(
                    f,
                    "{} tag(s) are not versions and were compared as text: {}",
                    tags.len(),
                    listed.join(", ")
                )?;
                if tags.len() > SHOWN {
                    write!(f, ", ... and {} more", tags.len() - SHOWN)?;
                }
                Ok(())
            }
        }
    }
}
