use std::fmt;
use std::str::FromStr;

use crate::error::{ReleaseError, Result};

/// Versioning scheme used to derive the next tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// A single incrementing integer (`v1`, `v2`, `v3-beta.0`)
    Continuous,
    /// Full `major.minor.patch[-prerelease]`
    Semantic,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Continuous => "continuous",
            Scheme::Semantic => "semantic",
        }
    }

    /// Tag used when the repository has no tags yet
    pub fn initial_tag(&self) -> &'static str {
        match self {
            Scheme::Continuous => "v1",
            Scheme::Semantic => "v1.0.0",
        }
    }

    /// Bump applied when none is configured
    pub fn default_bump(&self) -> BumpType {
        match self {
            Scheme::Continuous => BumpType::Major,
            Scheme::Semantic => BumpType::Patch,
        }
    }
}

impl FromStr for Scheme {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "continuous" => Ok(Scheme::Continuous),
            "semantic" => Ok(Scheme::Semantic),
            other => Err(ReleaseError::InvalidScheme(other.to_string())),
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of a version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpType {
    Major,
    Minor,
    Patch,
    Premajor,
    Prerelease,
}

impl BumpType {
    /// Every accepted bump type, in the order they are reported to users.
    pub const ALL: [BumpType; 5] = [
        BumpType::Major,
        BumpType::Minor,
        BumpType::Patch,
        BumpType::Premajor,
        BumpType::Prerelease,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpType::Major => "major",
            BumpType::Minor => "minor",
            BumpType::Patch => "patch",
            BumpType::Premajor => "premajor",
            BumpType::Prerelease => "prerelease",
        }
    }

    /// Comma separated list of accepted names, e.g. for error messages
    pub fn accepted_list() -> String {
        BumpType::ALL
            .iter()
            .map(BumpType::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for BumpType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        BumpType::ALL
            .into_iter()
            .find(|bump| bump.as_str() == s)
            .ok_or_else(|| ReleaseError::UnsupportedBumpType(s.to_string()))
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parse() {
        assert_eq!("continuous".parse::<Scheme>().unwrap(), Scheme::Continuous);
        assert_eq!("semantic".parse::<Scheme>().unwrap(), Scheme::Semantic);
    }

    #[test]
    fn test_scheme_parse_is_case_sensitive() {
        assert!(matches!(
            "Semantic".parse::<Scheme>(),
            Err(ReleaseError::InvalidScheme(value)) if value == "Semantic"
        ));
    }

    #[test]
    fn test_scheme_defaults() {
        assert_eq!(Scheme::Continuous.initial_tag(), "v1");
        assert_eq!(Scheme::Semantic.initial_tag(), "v1.0.0");
        assert_eq!(Scheme::Continuous.default_bump(), BumpType::Major);
        assert_eq!(Scheme::Semantic.default_bump(), BumpType::Patch);
    }

    #[test]
    fn test_bump_type_round_trips_names() {
        for bump in BumpType::ALL {
            assert_eq!(bump.as_str().parse::<BumpType>().unwrap(), bump);
        }
    }

    #[test]
    fn test_bump_type_unknown() {
        let err = "xyz".parse::<BumpType>().unwrap_err();
        assert!(matches!(err, ReleaseError::UnsupportedBumpType(ref v) if v == "xyz"));
    }

    #[test]
    fn test_accepted_list_order() {
        assert_eq!(
            BumpType::accepted_list(),
            "major, minor, patch, premajor, prerelease"
        );
    }
}
