//! # Replication Configuration
//!
//! Loaded once at startup from TOML, before any schema is registered.
//!
//! ```toml
//! max_mask_words = 42
//! unknown_field_log = "warn"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{ReplicationError, ReplicationResult};
use crate::MAX_MASK_WORDS;

/// How a dirty-flag lookup miss (unknown field name) is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFieldLog {
    /// Silently ignore.
    Off,
    /// Log at debug level.
    Debug,
    /// Log at warn level.
    #[default]
    Warn,
}

/// Codec configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplicationConfig {
    /// Maximum number of 32-bit mask words a values block may carry. Schemas
    /// and composites larger than `max_mask_words * 32` blocks are rejected
    /// at registration.
    pub max_mask_words: u8,
    /// Reporting level for unknown dirty-field names.
    pub unknown_field_log: UnknownFieldLog,
}

impl Default for ReplicationConfig {
    fn default() -> Self {
        Self {
            max_mask_words: u8::MAX,
            unknown_field_log: UnknownFieldLog::Warn,
        }
    }
}

impl ReplicationConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::InvalidConfig`] on malformed TOML or
    /// out-of-range values.
    pub fn from_toml_str(source: &str) -> ReplicationResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| ReplicationError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::Io`] if the file cannot be read, or
    /// [`ReplicationError::InvalidConfig`] if it does not parse.
    pub fn load(path: impl AsRef<Path>) -> ReplicationResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicationError::InvalidConfig`] if `max_mask_words` is zero.
    pub fn validate(&self) -> ReplicationResult<()> {
        if self.max_mask_words == 0 {
            return Err(ReplicationError::InvalidConfig(
                "max_mask_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of blocks addressable by the configured mask size.
    #[must_use]
    pub fn max_blocks(&self) -> usize {
        usize::from(self.max_mask_words).min(MAX_MASK_WORDS) * crate::BLOCK_BITS
    }
}
