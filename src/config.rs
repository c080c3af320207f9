use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::conjugator::Conjugator;
use crate::dirs::Dirs;
use crate::exceptions::Exceptions;

/// A configuration used for the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Readings to treat as na-adjectives on top of the built-in exceptions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_na_adjectives: Vec<String>,
    /// Produce romaji for derived forms.
    pub romaji: bool,
    /// Number of threads to use when enriching word lists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_na_adjectives: Vec::new(),
            romaji: true,
            threads: None,
        }
    }
}

impl Config {
    /// Load configuration from the given path, falling back to defaults if
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No configuration, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path).with_context(|| path.display().to_string())?;
        let config = toml::from_str(&data).with_context(|| path.display().to_string())?;
        Ok(config)
    }

    /// Load configuration from the default location.
    pub fn load_default(dirs: &Dirs) -> Result<Self> {
        Self::load(&dirs.config_path())
    }

    /// Load configuration from `path` if specified, or else from the default
    /// location. If the default location cannot be determined, defaults are
    /// used.
    pub fn resolve<F>(path: Option<&Path>, dirs: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Dirs>,
    {
        if let Some(path) = path {
            return Self::load(path);
        }

        match dirs() {
            Ok(dirs) => Self::load_default(&dirs),
            Err(error) => {
                tracing::debug!(%error, "No configuration directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Construct the conjugator described by this configuration.
    pub fn conjugator(&self) -> Conjugator {
        let exceptions = Exceptions::with_extra(self.extra_na_adjectives.iter().map(|s| s.trim()));
        Conjugator::with_exceptions(exceptions).romaji(self.romaji)
    }
}
