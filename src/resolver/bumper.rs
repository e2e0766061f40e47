use crate::domain::{checked_prerelease, BumpType, ParsedTag, ParsedVersion, Scheme};
use crate::error::{ReleaseError, Result};

/// Prerelease name used when neither the previous tag nor the config gives one
pub const DEFAULT_PRERELEASE_SUFFIX: &str = "beta";

/// Everything the bumper needs to know about the requested release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpSettings {
    pub scheme: Scheme,
    /// Requested bump; `None` uses the scheme default
    pub bump: Option<BumpType>,
    /// Whether the release is a prerelease (shapes the initial tag)
    pub prerelease: bool,
    pub prerelease_suffix: String,
}

impl BumpSettings {
    pub fn new(scheme: Scheme) -> Self {
        BumpSettings {
            scheme,
            bump: None,
            prerelease: false,
            prerelease_suffix: DEFAULT_PRERELEASE_SUFFIX.to_string(),
        }
    }

    #[must_use]
    pub fn with_bump(mut self, bump: BumpType) -> Self {
        self.bump = Some(bump);
        self
    }

    #[must_use]
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    #[must_use]
    pub fn with_prerelease_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.prerelease_suffix = suffix.into();
        self
    }

    /// Check that the prerelease suffix can start a prerelease (`<suffix>.0`)
    ///
    /// # Errors
    /// * `IncrementFailure` - the suffix is not a valid prerelease identifier
    pub fn validate(&self) -> Result<()> {
        checked_prerelease(&format!("{}.0", self.suffix()))
            .map(|_| ())
            .map_err(|e| ReleaseError::increment(self.scheme, e))
    }

    fn suffix(&self) -> &str {
        if self.prerelease_suffix.is_empty() {
            DEFAULT_PRERELEASE_SUFFIX
        } else {
            &self.prerelease_suffix
        }
    }
}

/// Computes the tag that follows `previous`.
///
/// Without a previous tag the scheme's initial tag is returned (`v1` or
/// `v1.0.0`, plus `-<suffix>.0` for prereleases). Otherwise the previous tag
/// is parsed and bumped according to the scheme, keeping its `v` prefix.
///
/// # Errors
/// * `UnparseableTag` - `previous` has no version in it
/// * `IncrementFailure` - the bump overflowed or produced an invalid prerelease
///
/// # Example
/// ```
/// use tag_release::domain::{BumpType, Scheme};
/// use tag_release::resolver::{next_tag, BumpSettings};
///
/// let settings = BumpSettings::new(Scheme::Semantic).with_bump(BumpType::Minor);
/// assert_eq!(next_tag(Some("v1.275.0"), &settings).unwrap(), "v1.276.0");
/// assert_eq!(next_tag(None, &settings).unwrap(), "v1.0.0");
/// ```
pub fn next_tag(previous: Option<&str>, settings: &BumpSettings) -> Result<String> {
    let Some(previous) = previous else {
        return initial_tag(settings);
    };

    let version = match ParsedTag::parse(previous) {
        ParsedTag::Parsed { version, .. } => version,
        ParsedTag::Unparsed(raw) => return Err(ReleaseError::UnparseableTag(raw.to_string())),
    };

    match settings.scheme {
        Scheme::Continuous => next_continuous(&version, settings),
        Scheme::Semantic => next_semantic(&version, settings),
    }
}

/// Tag for a repository that has never been released
pub fn initial_tag(settings: &BumpSettings) -> Result<String> {
    let base = settings.scheme.initial_tag();
    if !settings.prerelease {
        return Ok(base.to_string());
    }
    settings.validate()?;
    Ok(format!("{}-{}.0", base, settings.suffix()))
}

/// Bump actually applied for the continuous scheme.
///
/// Only `premajor` and `prerelease` are meaningful for a single counter;
/// everything else bumps the counter and drops any prerelease.
pub fn continuous_bump(requested: Option<BumpType>, previous: &ParsedVersion) -> BumpType {
    match requested {
        Some(BumpType::Prerelease) if previous.has_prerelease() => BumpType::Prerelease,
        Some(BumpType::Prerelease) | Some(BumpType::Premajor) => BumpType::Premajor,
        Some(BumpType::Major) | Some(BumpType::Minor) | Some(BumpType::Patch) | None => {
            BumpType::Major
        }
    }
}

/// Name for the prerelease part: an existing one wins over the configured suffix
pub fn prerelease_name(previous: &ParsedVersion, settings: &BumpSettings) -> String {
    previous
        .prerelease_name()
        .unwrap_or_else(|| settings.suffix().to_string())
}

fn next_continuous(previous: &ParsedVersion, settings: &BumpSettings) -> Result<String> {
    let bump = continuous_bump(settings.bump, previous);
    let name = prerelease_name(previous, settings);
    let next = previous
        .increment(bump, &name)
        .map_err(|e| ReleaseError::increment(Scheme::Continuous, e))?;

    let mut tag = format!("{}{}", previous.prefix, next.major);
    if next.has_prerelease() {
        tag.push('-');
        tag.push_str(&next.prerelease_string());
    }
    Ok(tag)
}

fn next_semantic(previous: &ParsedVersion, settings: &BumpSettings) -> Result<String> {
    let bump = settings.bump.unwrap_or(Scheme::Semantic.default_bump());
    let name = prerelease_name(previous, settings);
    let next = previous
        .increment(bump, &name)
        .map_err(|e| ReleaseError::increment(Scheme::Semantic, e))?;

    Ok(next.to_string())
}
