//! Configuration constants and profile loading for the storefront client
//!
//! Settings come from an INI profile file, one section per profile, with
//! the `BACKEND_URL` environment variable taking precedence over the
//! profile's `backend_url`. The resulting [`StorefrontConfig`] is built once
//! at the composition root and handed to every component that needs it.

use crate::storefront::models::ResponseShape;
use crate::storefront::view_models::SubmissionPolicy;
use anyhow::{Context, Result};
use ini::{Ini, Properties};
use std::path::Path;

/// Default profile file path
pub const DEFAULT_PROFILE_PATH: &str = "~/.mercari/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "MERCARI_PROFILE_PATH";

/// Environment variable name for overriding the backend base URL
pub const BACKEND_URL_ENV_VAR: &str = "BACKEND_URL";

/// Environment variable name for the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "MERCARI_LOG_LEVEL";

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:9000";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/logo192.png";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub backend_url: String,
    pub placeholder_image: String,
    pub response_shape: ResponseShape,
    pub submission: SubmissionPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            response_shape: ResponseShape::default(),
            submission: SubmissionPolicy::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load `profile_name` from the INI file at `profile_path` (tilde-expanded),
    /// then apply the `BACKEND_URL` environment override.
    ///
    /// A missing file or section yields the defaults.
    pub fn load(profile_name: &str, profile_path: &str) -> Result<Self> {
        let backend_override = std::env::var(BACKEND_URL_ENV_VAR).ok();
        Self::load_with_override(profile_name, profile_path, backend_override)
    }

    pub fn load_with_override(
        profile_name: &str,
        profile_path: &str,
        backend_override: Option<String>,
    ) -> Result<Self> {
        let expanded = shellexpand::tilde(profile_path).into_owned();
        tracing::debug!("Loading profile '{}' from '{}'", profile_name, expanded);

        let config = if Path::new(&expanded).exists() {
            let ini = Ini::load_from_file(&expanded)
                .with_context(|| format!("failed to read profile file '{expanded}'"))?;
            Self::from_ini(&ini, profile_name)?
        } else {
            tracing::debug!("Profile file '{}' not found, using defaults", expanded);
            Self::default()
        };

        Ok(config.with_backend_override(backend_override))
    }

    /// Build from one section of a parsed INI document
    pub fn from_ini(ini: &Ini, profile_name: &str) -> Result<Self> {
        let Some(section) = ini.section(Some(profile_name)) else {
            tracing::debug!("Profile '{}' not found, using defaults", profile_name);
            return Ok(Self::default());
        };
        Self::from_section(section)
            .with_context(|| format!("invalid settings in profile '{profile_name}'"))
    }

    fn from_section(section: &Properties) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = section.get("backend_url") {
            config.backend_url = url.trim().to_string();
        }
        if let Some(placeholder) = section.get("placeholder_image") {
            config.placeholder_image = placeholder.trim().to_string();
        }
        if let Some(shape) = section.get("response_shape") {
            config.response_shape = shape.parse()?;
        }
        if let Some(value) = section.get("require_category") {
            config.submission.require_category = parse_bool("require_category", value)?;
        }
        if let Some(value) = section.get("reset_on_failure") {
            config.submission.reset_on_failure = parse_bool("reset_on_failure", value)?;
        }

        Ok(config)
    }

    /// Non-empty override wins over the profile's base URL
    pub fn with_backend_override(mut self, backend_override: Option<String>) -> Self {
        if let Some(url) = backend_override.filter(|url| !url.trim().is_empty()) {
            tracing::debug!("Backend URL overridden by {}: {}", BACKEND_URL_ENV_VAR, url);
            self.backend_url = url.trim().to_string();
        }
        self
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => anyhow::bail!("'{key}' must be a boolean, got '{other}'"),
    }
}
