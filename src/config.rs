use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::{FaqError, Result},
    faq::{college_faq, FaqEntry},
    matcher::{MatchConfig, Matcher, DEFAULT_FALLBACK, DEFAULT_THRESHOLD},
};

/// Operator-supplied FAQ set and matching parameters
///
/// ```toml
/// threshold = 0.2
/// fallback = "Sorry, I didn't understand that."
///
/// [[faq]]
/// question = "Is hostel facility available?"
/// answer = "Yes, hostel facilities are available for both boys and girls."
/// ```
///
/// `threshold` and `fallback` are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_fallback")]
    pub fallback: String,
    #[serde(default, rename = "faq")]
    pub entries: Vec<FaqEntry>,
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_string()
}

impl Default for FaqConfig {
    /// built-in college FAQ set with default parameters
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            fallback: default_fallback(),
            entries: college_faq(),
        }
    }
}

impl FaqConfig {
    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| FaqError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        info!(path = %path.display(), entries = config.entries.len(), "loaded FAQ config");
        Ok(config)
    }

    /// Replace the threshold (command-line override)
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Matching parameters, validated
    pub fn match_config(&self) -> Result<MatchConfig> {
        let config = MatchConfig {
            threshold: self.threshold,
            fallback: self.fallback.clone(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate parameters, build the index and wrap it in a matcher
    ///
    /// # Errors
    /// `InvalidThreshold` or `EmptyCorpus`.
    pub fn into_matcher(self) -> Result<Matcher> {
        let config = self.match_config()?;
        Matcher::from_entries(self.entries, config)
    }
}
