//! Configuration loading from disk and the process environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Collaborator URL, including path.
pub const BACKEND_URL_ENV: &str = "PYTHON_BACKEND_URL";
/// Listen address for the relay.
pub const SERVER_ADDRESS_ENV: &str = "SERVER_ADDRESS";
/// Comma-separated list of allowed browser origins.
pub const CORS_ORIGIN_ENV: &str = "CORS_ALLOWED_ORIGIN";
/// Post-answer pause in milliseconds.
pub const ANSWER_DELAY_ENV: &str = "ANSWER_DELAY_MS";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("environment variable {key} has invalid value `{value}`")]
    Env { key: &'static str, value: String },

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve the relay configuration once at startup.
///
/// Starts from the TOML file at `path` when one is given (defaults otherwise),
/// layers the process environment on top, then validates the result.
pub fn load_config(path: Option<&Path>) -> Result<RelayConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_settings_file(path)?,
        None => RelayConfig::default(),
    };

    apply_env_overrides(&mut config, |key| env::var(key).ok())?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Parse a TOML settings file without validating it.
pub fn read_settings_file(path: &Path) -> Result<RelayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Apply environment overrides read through `lookup`. Empty values count as unset.
pub fn apply_env_overrides<F>(config: &mut RelayConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = lookup(BACKEND_URL_ENV) {
        config.upstream.url = url;
    }
    if let Some(address) = lookup(SERVER_ADDRESS_ENV) {
        config.listener.bind_address = address;
    }
    if let Some(origins) = lookup(CORS_ORIGIN_ENV) {
        config.cors.allowed_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(delay) = lookup(ANSWER_DELAY_ENV) {
        config.upstream.answer_delay_ms = delay.trim().parse().map_err(|_| ConfigError::Env {
            key: ANSWER_DELAY_ENV,
            value: delay.clone(),
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn no_environment_keeps_defaults() {
        let mut config = RelayConfig::default();
        apply_env_overrides(&mut config, env_of(&[])).unwrap();
        assert_eq!(config.upstream.url, "http://localhost:5000/query");
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
    }

    #[test]
    fn environment_overrides_defaults() {
        let mut config = RelayConfig::default();
        apply_env_overrides(
            &mut config,
            env_of(&[
                (BACKEND_URL_ENV, "http://model:5000/query"),
                (SERVER_ADDRESS_ENV, "0.0.0.0:9000"),
                (CORS_ORIGIN_ENV, "http://a.test, http://b.test,"),
                (ANSWER_DELAY_ENV, "0"),
            ]),
        )
        .unwrap();

        assert_eq!(config.upstream.url, "http://model:5000/query");
        assert_eq!(config.listener.bind_address, "0.0.0.0:9000");
        assert_eq!(config.cors.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.upstream.answer_delay_ms, 0);
    }

    #[test]
    fn empty_values_are_ignored() {
        let mut config = RelayConfig::default();
        apply_env_overrides(
            &mut config,
            env_of(&[(BACKEND_URL_ENV, ""), (SERVER_ADDRESS_ENV, "  ")]),
        )
        .unwrap();
        assert_eq!(config, RelayConfig::default());
    }

    #[test]
    fn bad_delay_is_rejected() {
        let mut config = RelayConfig::default();
        let err = apply_env_overrides(&mut config, env_of(&[(ANSWER_DELAY_ENV, "five")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { key: ANSWER_DELAY_ENV, .. }));
    }

    #[test]
    fn settings_file_is_read() {
        let path = std::env::temp_dir().join(format!("query-relay-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[listener]\nbind_address = \"127.0.0.1:9191\"").unwrap();
        drop(file);

        let config = read_settings_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:9191");
        assert_eq!(config.upstream, Default::default());
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let err = read_settings_file(Path::new("/nonexistent/relay.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
