use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Prerelease};
use thiserror::Error;

use super::BumpType;

/// First `major[.minor[.patch]]` run of digits in free text
static COERCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\D)(\d{1,16})(?:\.(\d{1,16}))?(?:\.(\d{1,16}))?(?:$|\D)")
        .expect("invalid regex")
});

/// One dot-separated component of a prerelease suffix.
///
/// Variant order matters: numeric identifiers sort below textual ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Identifier {
    Numeric(u64),
    Text(String),
}

impl Identifier {
    /// Classify a prerelease component.
    ///
    /// All-digit components that fit in a `u64` are numeric, anything else
    /// (including oversized numbers) is kept as text.
    pub fn new(component: &str) -> Self {
        if !component.is_empty() && component.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = component.parse() {
                return Identifier::Numeric(n);
            }
        }
        Identifier::Text(component.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

/// Why a version could not be incremented
#[derive(Debug, Error)]
pub enum IncrementError {
    #[error("{field} version number overflowed")]
    Overflow { field: &'static str },

    #[error("invalid prerelease '{prerelease}': {source}")]
    InvalidPrerelease {
        prerelease: String,
        #[source]
        source: semver::Error,
    },
}

/// Structured view of a tag produced by a best-effort parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
    /// `v` when the tag started with one, restored on every derived tag
    pub prefix: String,
}

impl ParsedVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ParsedVersion {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            prefix: String::new(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_prerelease(mut self, prerelease: Vec<Identifier>) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Parse a tag such as `v1.2.3`, `release-7` or `v1.2.0-beta.3`.
    ///
    /// Everything before the first `-` is coerced into a numeric triple, the
    /// segment after it (up to the next `-`) is the prerelease. Returns `None`
    /// when no digits can be found or the prerelease is not valid semver.
    pub fn parse(tag: &str) -> Option<Self> {
        let mut segments = tag.split('-');
        let core = segments.next().unwrap_or_default();
        let (major, minor, patch) = coerce(core)?;

        let prerelease = match segments.next() {
            Some(pre) if !pre.is_empty() => parse_prerelease(pre)?,
            _ => Vec::new(),
        };

        let prefix = if tag.starts_with('v') { "v" } else { "" };

        Some(
            ParsedVersion::new(major, minor, patch)
                .with_prerelease(prerelease)
                .with_prefix(prefix),
        )
    }

    pub fn has_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// First prerelease component, e.g. `beta` for `1.0.0-beta.2`
    pub fn prerelease_name(&self) -> Option<String> {
        self.prerelease.first().map(Identifier::to_string)
    }

    /// Prerelease components joined with `.`
    pub fn prerelease_string(&self) -> String {
        self.prerelease
            .iter()
            .map(Identifier::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Semantic version precedence, ignoring the prefix
    pub fn precedence(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.has_prerelease(), other.has_prerelease()) {
                (false, false) => Ordering::Equal,
                (false, true) => Ordering::Greater,
                (true, false) => Ordering::Less,
                (true, true) => self.prerelease.cmp(&other.prerelease),
            })
    }

    /// Apply a bump, naming any fresh prerelease `name`.
    ///
    /// - **Major**: releases `X.0.0-pre` as `X.0.0`, otherwise major += 1
    /// - **Minor**: releases `X.Y.0-pre` as `X.Y.0`, otherwise minor += 1
    /// - **Patch**: releases `X.Y.Z-pre` as `X.Y.Z`, otherwise patch += 1
    /// - **Premajor**: major += 1 with a fresh `name.0` prerelease
    /// - **Prerelease**: bumps the prerelease counter, or patch += 1 with a
    ///   fresh `name.0` when there is no prerelease yet
    pub fn increment(&self, bump: BumpType, name: &str) -> Result<Self, IncrementError> {
        let mut next = self.clone();
        match bump {
            BumpType::Major => next.bump_major()?,
            BumpType::Minor => next.bump_minor()?,
            BumpType::Patch => next.bump_patch()?,
            BumpType::Premajor => {
                next.prerelease.clear();
                next.major = checked_inc(next.major, "major")?;
                next.minor = 0;
                next.patch = 0;
                next.bump_prerelease(name)?;
            }
            BumpType::Prerelease => {
                if !next.has_prerelease() {
                    next.bump_patch()?;
                }
                next.bump_prerelease(name)?;
            }
        }
        next.to_semver()?;
        Ok(next)
    }

    /// Convert to a `semver::Version`, validating the prerelease
    pub fn to_semver(&self) -> Result<semver::Version, IncrementError> {
        let pre = if self.has_prerelease() {
            checked_prerelease(&self.prerelease_string())?
        } else {
            Prerelease::EMPTY
        };

        Ok(semver::Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre,
            build: BuildMetadata::EMPTY,
        })
    }

    fn bump_major(&mut self) -> Result<(), IncrementError> {
        if self.minor != 0 || self.patch != 0 || !self.has_prerelease() {
            self.major = checked_inc(self.major, "major")?;
        }
        self.minor = 0;
        self.patch = 0;
        self.prerelease.clear();
        Ok(())
    }

    fn bump_minor(&mut self) -> Result<(), IncrementError> {
        if self.patch != 0 || !self.has_prerelease() {
            self.minor = checked_inc(self.minor, "minor")?;
        }
        self.patch = 0;
        self.prerelease.clear();
        Ok(())
    }

    fn bump_patch(&mut self) -> Result<(), IncrementError> {
        if !self.has_prerelease() {
            self.patch = checked_inc(self.patch, "patch")?;
        }
        self.prerelease.clear();
        Ok(())
    }

    fn bump_prerelease(&mut self, name: &str) -> Result<(), IncrementError> {
        let counter = self.prerelease.iter_mut().rev().find_map(|id| match id {
            Identifier::Numeric(n) => Some(n),
            Identifier::Text(_) => None,
        });
        match counter {
            Some(n) => *n = checked_inc(*n, "prerelease")?,
            None => self.prerelease.push(Identifier::Numeric(0)),
        }

        if name.is_empty() {
            return Ok(());
        }
        let head = Identifier::new(name);
        let keeps_counter = self.prerelease.first() == Some(&head)
            && matches!(self.prerelease.get(1), Some(Identifier::Numeric(_)));
        if !keeps_counter {
            self.prerelease = vec![head, Identifier::Numeric(0)];
        }
        Ok(())
    }
}

impl fmt::Display for ParsedVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{}.{}",
            self.prefix, self.major, self.minor, self.patch
        )?;
        if self.has_prerelease() {
            write!(f, "-{}", self.prerelease_string())?;
        }
        Ok(())
    }
}

/// Validate a dot-separated prerelease such as `rc.0`
pub fn checked_prerelease(text: &str) -> Result<Prerelease, IncrementError> {
    Prerelease::new(text).map_err(|source| IncrementError::InvalidPrerelease {
        prerelease: text.to_string(),
        source,
    })
}

fn checked_inc(value: u64, field: &'static str) -> Result<u64, IncrementError> {
    value
        .checked_add(1)
        .ok_or(IncrementError::Overflow { field })
}

/// Pull the first `major[.minor[.patch]]` run of digits out of free text.
fn coerce(text: &str) -> Option<(u64, u64, u64)> {
    let caps = COERCE_RE.captures(text)?;

    let field = |index: usize| -> Option<u64> {
        match caps.get(index) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    Some((field(1)?, field(2)?, field(3)?))
}

fn parse_prerelease(text: &str) -> Option<Vec<Identifier>> {
    // semver rejects empty components, stray characters and leading zeros
    Prerelease::new(text).ok()?;
    Some(text.split('.').map(Identifier::new).collect())
}
