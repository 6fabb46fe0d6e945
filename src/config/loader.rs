//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading ledger
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Loads [`Settings`] from YAML.
///
/// # Example
///
/// ```no_run
/// use arbeitszeit::config::ConfigLoader;
///
/// let settings = ConfigLoader::load("./arbeitszeit.yaml")?;
/// println!("Default weekdays: {}", settings.default_weekdays);
/// # Ok::<(), arbeitszeit::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads settings from the file at `path`.
    ///
    /// # Returns
    ///
    /// Returns the settings on success, or an error if:
    /// - The file does not exist or cannot be read ([`EngineError::ConfigNotFound`])
    /// - The file is not valid YAML, names an unknown field or holds an
    ///   invalid value ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Settings> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings = Self::parse(&content).map_err(|message| EngineError::ConfigParseError {
            path: path_str.clone(),
            message,
        })?;

        debug!(path = %path_str, "configuration loaded");
        Ok(settings)
    }

    /// Parses settings from YAML text. An empty document yields the defaults.
    fn parse(content: &str) -> Result<Settings, String> {
        if content.trim().is_empty() {
            return Ok(Settings::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }
}
