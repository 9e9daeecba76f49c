//! Configuration constants and profile loading for charlist
//!
//! Settings live in an INI profile file, one section per profile:
//!
//! ```ini
//! [default]
//! endpoint = https://rickandmortyapi.com/api/character
//! name_width = 20
//! timeout = 10
//! ```
//!
//! A missing file or a missing section falls back to the defaults below.

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for charlist
pub const DEFAULT_PROFILE_PATH: &str = "~/.charlist/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "CHARLIST_PROFILE_PATH";

/// Default log file for the interactive UI
pub const DEFAULT_LOG_FILE: &str = "~/.charlist/charlist.log";

/// Environment variable name for overriding the log file
pub const LOG_FILE_ENV_VAR: &str = "CHARLIST_LOG_FILE";

/// Environment variable name for the log level filter
pub const LOG_LEVEL_ENV_VAR: &str = "CHARLIST_LOG_LEVEL";

/// First page of the public character catalog
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/api/character";

/// Characters of a name shown on a card before it is cut
pub const DEFAULT_NAME_WIDTH: usize = 20;

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Get the log file path, checking environment variable first, then falling back to default
pub fn get_log_file_path() -> String {
    let path = std::env::var_os(LOG_FILE_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
    expand_path(&path)
}

/// Expand `~` and environment variables in a configured path
pub fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .map(|p| p.into_owned())
        .unwrap_or_else(|_| shellexpand::tilde(path).into_owned())
}

/// Settings for the HTTP character source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub endpoint: String,
    /// No timeout when unset
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            user_agent: format!("charlist/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Fully resolved configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub profile_name: String,
    pub profile_path: String,
    pub source: SourceConfig,
    pub name_width: usize,
}

impl AppConfig {
    /// Defaults, labelled with the given profile name and path
    pub fn defaults(profile_name: &str, profile_path: &str) -> Self {
        Self {
            profile_name: profile_name.to_string(),
            profile_path: profile_path.to_string(),
            source: SourceConfig::default(),
            name_width: DEFAULT_NAME_WIDTH,
        }
    }

    /// Replace the endpoint, e.g. from the command line
    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint {
            self.source.endpoint = endpoint.to_string();
        }
        self
    }
}

/// Load a profile section from an INI file, falling back to defaults
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<AppConfig> {
    let expanded = expand_path(profile_path);
    let mut config = AppConfig::defaults(profile_name, profile_path);

    if !Path::new(&expanded).exists() {
        tracing::debug!("Profile file '{}' not found, using defaults", expanded);
        return Ok(config);
    }

    let ini = Ini::load_from_file(&expanded)
        .with_context(|| format!("Failed to read profile file '{expanded}'"))?;

    let Some(section) = ini.section(Some(profile_name)) else {
        tracing::debug!("Profile '{}' not found, using defaults", profile_name);
        return Ok(config);
    };

    if let Some(endpoint) = section.get("endpoint") {
        config.source.endpoint = endpoint.trim().to_string();
    }

    if let Some(width) = section.get("name_width") {
        config.name_width = width
            .trim()
            .parse()
            .with_context(|| format!("Invalid name_width '{width}' in profile '{profile_name}'"))?;
    }

    if let Some(timeout) = section.get("timeout") {
        let secs: u64 = timeout
            .trim()
            .parse()
            .with_context(|| format!("Invalid timeout '{timeout}' in profile '{profile_name}'"))?;
        config.source.timeout = Some(Duration::from_secs(secs));
    }

    if let Some(user_agent) = section.get("user_agent") {
        config.source.user_agent = user_agent.trim().to_string();
    }

    tracing::debug!("Profile '{}' loaded: {:?}", profile_name, config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_profile(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.charlist/profile");
    }

    #[test]
    fn test_get_profile_path_env_override() {
        // Save current env var state
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        let test_path = "/custom/profile/path";
        std::env::set_var(PROFILE_PATH_ENV_VAR, test_path);
        assert_eq!(get_profile_path(), test_path);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        // Restore original state
        if let Some(val) = original {
            std::env::set_var(PROFILE_PATH_ENV_VAR, val);
        }
    }

    #[test]
    fn expand_path_should_expand_tilde() {
        let expanded = expand_path("~/.charlist/profile");
        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with(".charlist/profile"));
    }

    #[test]
    fn missing_file_should_yield_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope");

        let config = load_profile("default", path.to_str().unwrap()).unwrap();

        assert_eq!(config.source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.source.timeout, None);
        assert_eq!(config.name_width, DEFAULT_NAME_WIDTH);
        assert_eq!(config.profile_name, "default");
    }

    #[test]
    fn profile_section_should_override_defaults() {
        let file = write_profile(
            "[default]\nendpoint = http://localhost:8080/api/character\n\n[slow]\nname_width = 12\ntimeout = 5\nuser_agent = test-agent\n",
        );
        let path = file.path().to_str().unwrap();

        let default = load_profile("default", path).unwrap();
        assert_eq!(default.source.endpoint, "http://localhost:8080/api/character");
        assert_eq!(default.name_width, DEFAULT_NAME_WIDTH);

        let slow = load_profile("slow", path).unwrap();
        assert_eq!(slow.source.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(slow.name_width, 12);
        assert_eq!(slow.source.timeout, Some(Duration::from_secs(5)));
        assert_eq!(slow.source.user_agent, "test-agent");
    }

    #[test]
    fn unknown_section_should_yield_defaults() {
        let file = write_profile("[default]\nname_width = 30\n");

        let config = load_profile("other", file.path().to_str().unwrap()).unwrap();

        assert_eq!(config.name_width, DEFAULT_NAME_WIDTH);
        assert_eq!(config.profile_name, "other");
    }

    #[test]
    fn invalid_number_should_be_reported() {
        let file = write_profile("[default]\ntimeout = soon\n");

        let error = load_profile("default", file.path().to_str().unwrap()).unwrap_err();

        assert!(error.to_string().contains("Invalid timeout 'soon'"));
    }

    #[test]
    fn endpoint_override_should_replace_profile_value() {
        let config = AppConfig::defaults("default", DEFAULT_PROFILE_PATH)
            .with_endpoint(Some("http://127.0.0.1:3000/character"));
        assert_eq!(config.source.endpoint, "http://127.0.0.1:3000/character");

        let unchanged = AppConfig::defaults("default", DEFAULT_PROFILE_PATH).with_endpoint(None);
        assert_eq!(unchanged.source.endpoint, DEFAULT_ENDPOINT);
    }
}
