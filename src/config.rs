use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::domain::{strip_tag_ref, BumpType, Scheme};
use crate::error::{ReleaseError, Result};
use crate::resolver::{BumpSettings, DEFAULT_PRERELEASE_SUFFIX};

/// Option names understood by tag-release, shared by every input layer.
pub mod keys {
    pub const TAG_NAME: &str = "tag_name";
    pub const TAG_SCHEMA: &str = "tag_schema";
    pub const AUTO_INCREMENT_TYPE: &str = "auto_increment_type";
    pub const VERSION_TYPE: &str = "version_type";
    pub const PRERELEASE: &str = "prerelease";
    pub const PRERELEASE_SUFFIX: &str = "prerelease_suffix";
    pub const RELEASE_NAME: &str = "release_name";
    pub const BODY: &str = "body";
    pub const DRAFT: &str = "draft";
}

const CONFIG_FILE_NAME: &str = "tag-release.toml";

/// Opaque key to string lookup supplied by the host.
pub trait InputSource {
    /// Raw value for `key`, `None` when the host has nothing for it
    fn input(&self, key: &str) -> Option<String>;
}

impl InputSource for HashMap<String, String> {
    fn input(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Action inputs passed through the environment as `INPUT_<KEY>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvInputs;

impl EnvInputs {
    pub fn variable_name(key: &str) -> String {
        format!("INPUT_{}", key.replace(' ', "_").to_uppercase())
    }
}

impl InputSource for EnvInputs {
    fn input(&self, key: &str) -> Option<String> {
        std::env::var(Self::variable_name(key))
            .ok()
            .map(|value| value.trim().to_string())
    }
}

/// Checks several sources in order, the first one with a value wins.
#[derive(Default)]
pub struct LayeredInputs<'a> {
    layers: Vec<&'a dyn InputSource>,
}

impl<'a> LayeredInputs<'a> {
    pub fn new() -> Self {
        LayeredInputs { layers: Vec::new() }
    }

    /// Add a layer below the ones already added
    #[must_use]
    pub fn with(mut self, layer: &'a dyn InputSource) -> Self {
        self.layers.push(layer);
        self
    }
}

impl InputSource for LayeredInputs<'_> {
    fn input(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| lookup(*layer, key))
    }
}

/// Options read from a `tag-release.toml` file.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub tag_name: Option<String>,
    pub tag_schema: Option<String>,
    pub auto_increment_type: Option<String>,
    pub version_type: Option<String>,
    pub prerelease: Option<bool>,
    pub prerelease_suffix: Option<String>,
    pub release_name: Option<String>,
    pub body: Option<String>,
    pub draft: Option<bool>,
}

impl InputSource for FileConfig {
    fn input(&self, key: &str) -> Option<String> {
        match key {
            keys::TAG_NAME => self.tag_name.clone(),
            keys::TAG_SCHEMA => self.tag_schema.clone(),
            keys::AUTO_INCREMENT_TYPE => self.auto_increment_type.clone(),
            keys::VERSION_TYPE => self.version_type.clone(),
            keys::PRERELEASE => self.prerelease.map(|flag| flag.to_string()),
            keys::PRERELEASE_SUFFIX => self.prerelease_suffix.clone(),
            keys::RELEASE_NAME => self.release_name.clone(),
            keys::BODY => self.body.clone(),
            keys::DRAFT => self.draft.map(|flag| flag.to_string()),
            _ => None,
        }
    }
}

/// Loads the configuration file or returns an empty one.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tag-release.toml` in current directory
/// 3. `.tag-release.toml` in the user config directory
/// 4. Empty configuration if no file found
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or empty configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<FileConfig> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        Path::new(CONFIG_FILE_NAME).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if !candidate.exists() {
            return Ok(FileConfig::default());
        }
        candidate
    } else {
        return Ok(FileConfig::default());
    };

    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| {
        ReleaseError::config(format!("Invalid config file {}: {}", path.display(), e))
    })
}

/// Release options resolved once and validated before any tag is fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Explicit tag, skips tag computation entirely
    pub tag_name: Option<String>,
    pub bump: BumpSettings,
    pub release_name: Option<String>,
    pub body: String,
    pub draft: bool,
    /// Non-fatal findings made while resolving
    pub warnings: Vec<BoundaryWarning>,
}

impl ReleaseConfig {
    /// Resolve every option from `inputs`.
    ///
    /// The scheme is checked first, then the increment type. The semantic
    /// scheme rejects unknown increment types, the continuous scheme falls
    /// back to a major bump and records a warning.
    ///
    /// # Errors
    /// * `InvalidScheme` - `tag_schema` is missing or unknown
    /// * `UnsupportedBumpType` - unknown increment type for the semantic scheme
    /// * `IncrementFailure` - the prerelease suffix is not a valid identifier
    ///   and the tag has to be computed
    pub fn resolve(inputs: &dyn InputSource) -> Result<Self> {
        let scheme: Scheme = lookup(inputs, keys::TAG_SCHEMA)
            .unwrap_or_default()
            .parse()?;

        let mut warnings = Vec::new();
        let requested = lookup(inputs, keys::AUTO_INCREMENT_TYPE)
            .or_else(|| lookup(inputs, keys::VERSION_TYPE));
        let bump = match requested {
            None => None,
            Some(value) => match (value.parse::<BumpType>(), scheme) {
                (Ok(bump), _) => Some(bump),
                (Err(e), Scheme::Semantic) => return Err(e),
                (Err(_), Scheme::Continuous) => {
                    warnings.push(BoundaryWarning::IgnoredIncrementType {
                        value,
                        scheme,
                        fallback: scheme.default_bump().to_string(),
                    });
                    None
                }
            },
        };

        let mut settings = BumpSettings::new(scheme)
            .with_prerelease(lookup_flag(inputs, keys::PRERELEASE))
            .with_prerelease_suffix(
                lookup(inputs, keys::PRERELEASE_SUFFIX)
                    .unwrap_or_else(|| DEFAULT_PRERELEASE_SUFFIX.to_string()),
            );
        settings.bump = bump;

        let tag_name = lookup(inputs, keys::TAG_NAME).map(|tag| strip_tag_ref(&tag).to_string());
        if tag_name.is_none() {
            settings.validate()?;
        }

        Ok(ReleaseConfig {
            tag_name,
            bump: settings,
            release_name: lookup(inputs, keys::RELEASE_NAME)
                .map(|name| strip_tag_ref(&name).to_string()),
            body: lookup(inputs, keys::BODY).unwrap_or_default(),
            draft: lookup_flag(inputs, keys::DRAFT),
            warnings,
        })
    }

    pub fn scheme(&self) -> Scheme {
        self.bump.scheme
    }

    /// Release title, defaulting to the tag itself
    pub fn release_name_for(&self, tag: &str) -> String {
        self.release_name
            .clone()
            .unwrap_or_else(|| tag.to_string())
    }
}

/// Value for `key`, treating empty, `null` and `undefined` as missing
fn lookup(inputs: &dyn InputSource, key: &str) -> Option<String> {
    inputs
        .input(key)
        .filter(|value| !matches!(value.trim(), "" | "null" | "undefined"))
}

fn lookup_flag(inputs: &dyn InputSource, key: &str) -> bool {
    lookup(inputs, key).is_some_and(|value| value.trim().eq_ignore_ascii_case("true"))
}
