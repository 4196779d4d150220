//! Profile loading, saving, validation, and path resolution.

use super::model::{HISTORY_ENV, PROFILE_ENV, Profile, ProfileFormat};
use crate::compose::looks_like_hex;
use crate::error::{AirbrushError, Result};
use crate::fs::atomic_write_file;
use crate::selection::ColorSlotId;
use std::path::{Path, PathBuf};

impl Profile {
    /// Load a profile, choosing YAML or JSON from the file extension.
    ///
    /// # Returns
    ///
    /// * `Ok(Profile)` - Successfully loaded and validated profile
    /// * `Err(AirbrushError::ProfileError)` - Missing file, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AirbrushError::ProfileError(format!(
                "failed to read profile '{}': {}",
                path.display(),
                e
            ))
        })?;

        let profile = match ProfileFormat::from_path(path) {
            ProfileFormat::Json => Self::from_json(&content)?,
            ProfileFormat::Yaml => Self::from_yaml(&content)?,
        };
        log::debug!("loaded profile from '{}'", path.display());
        Ok(profile)
    }

    /// Parse a profile from YAML. An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let profile: Profile = serde_yaml::from_str(yaml).map_err(|e| {
            AirbrushError::ProfileError(format!("failed to parse profile YAML: {}", e))
        })?;

        profile.validate()?;
        Ok(profile)
    }

    /// Parse a profile from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(json).map_err(|e| {
            AirbrushError::ProfileError(format!("failed to parse profile JSON: {}", e))
        })?;

        profile.validate()?;
        Ok(profile)
    }

    /// Serialize the profile to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AirbrushError::ProfileError(format!("failed to serialize profile to YAML: {}", e))
        })
    }

    /// Serialize the profile to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AirbrushError::ProfileError(format!("failed to serialize profile to JSON: {}", e))
        })
    }

    /// Atomically write the profile, choosing the format from the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = match ProfileFormat::from_path(path) {
            ProfileFormat::Json => {
                let mut json = self.to_json()?;
                json.push('\n');
                json
            }
            ProfileFormat::Yaml => self.to_yaml()?,
        };
        atomic_write_file(path, &content)
    }

    /// Validate tool settings.
    ///
    /// Selection values are never rejected: style, fill, and direction were
    /// already defaulted while parsing, and hex codes pass through verbatim.
    /// Hex codes that do not look like `#RRGGBB` only produce a warning.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("history_file", &self.history_file),
            ("fallback_file", &self.fallback_file),
        ] {
            if let Some(path) = value
                && path.as_os_str().is_empty()
            {
                return Err(AirbrushError::ProfileError(format!(
                    "profile validation failed: {} must not be empty",
                    field
                )));
            }
        }

        for slot in [
            ColorSlotId::Name,
            ColorSlotId::GradientA,
            ColorSlotId::GradientB,
            ColorSlotId::Bottom,
        ] {
            let hex = self.selection.color(slot).hex.trim();
            if !hex.is_empty() && !looks_like_hex(hex) {
                log::warn!(
                    "{}-color hex '{}' is not a #RRGGBB code; it will be used as typed",
                    slot,
                    hex
                );
            }
        }

        Ok(())
    }

    /// History file to append to: `AIRBRUSH_HISTORY` wins over the profile.
    pub fn history_path(&self) -> Option<PathBuf> {
        non_empty_env(HISTORY_ENV).or_else(|| self.history_file.clone())
    }
}

/// Resolve which profile to load: the explicit flag, else `AIRBRUSH_PROFILE`.
pub fn resolve_profile_path(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| non_empty_env(PROFILE_ENV))
}

fn non_empty_env(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}
