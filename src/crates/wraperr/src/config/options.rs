use serde::{Deserialize, Serialize};

use super::env::{build_env_key, get_env_bool, get_env_parse};
use crate::{ConfigError, Result};

/// Prefix used by [`RenderOptions::from_default_env`]
pub const DEFAULT_ENV_PREFIX: &str = "WRAPERR_";

/// Options for verbose rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Print captured frames under each stack annotation
    pub frames: bool,
    /// Stop after this many chain elements, printing `...` instead of the rest
    pub max_depth: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            frames: true,
            max_depth: None,
        }
    }
}

impl RenderOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable frame output
    pub fn with_frames(mut self, frames: bool) -> Self {
        self.frames = frames;
        self
    }

    /// Limit the number of chain elements rendered
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Validate the options
    ///
    /// A `max_depth` of zero would render nothing but `...` and is rejected.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(ConfigError::Invalid(
                "max_depth must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate options from JSON
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from environment variables
    ///
    /// Unset variables keep their default values.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let mut options = Self::default();
        if let Some(frames) = get_env_bool(&build_env_key(prefix, "frames"))? {
            options.frames = frames;
        }
        if let Some(max_depth) = get_env_parse(&build_env_key(prefix, "max_depth"))? {
            options.max_depth = Some(max_depth);
        }
        options.validate()?;
        tracing::debug!(?options, prefix, "Loaded render options from environment");
        Ok(options)
    }

    /// Load options using [`DEFAULT_ENV_PREFIX`]
    pub fn from_default_env() -> Result<Self> {
        Self::from_env(DEFAULT_ENV_PREFIX)
    }
}
