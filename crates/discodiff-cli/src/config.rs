//! CLI configuration file
//!
//! ```toml
//! log_profile = "production"
//!
//! [options]
//! descriptions = false
//! ```
//!
//! Every key is optional. Options left out of the file keep the full-mask
//! default unless a command-line flag says otherwise.

use discodiff_core::errors::DiffError;
use discodiff_core::logging_facility::Profile;
use discodiff_core::DiffOptions;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub log_profile: Profile,
    pub options: DiffOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_profile: Profile::Development,
            options: DiffOptions::all(),
        }
    }
}

impl Config {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the file cannot be read or is not valid TOML for
    /// this layout.
    pub fn load(path: &Path) -> Result<Self, DiffError> {
        let text = std::fs::read_to_string(path).map_err(|e| DiffError::InvalidConfig {
            reason: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::parse(&text)
    }

    /// Parse config text.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` if the text is not valid TOML for this layout, or if
    /// it selects the `test` log profile, which only the test harness can
    /// install.
    pub fn parse(text: &str) -> Result<Self, DiffError> {
        let config: Self = toml::from_str(text).map_err(|e| DiffError::InvalidConfig {
            reason: e.to_string(),
        })?;
        if config.log_profile == Profile::Test {
            return Err(DiffError::InvalidConfig {
                reason: "log_profile must be \"development\" or \"production\"".to_string(),
            });
        }
        Ok(config)
    }
}
