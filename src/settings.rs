//! Layered run settings.
//!
//! Built-in defaults, then an optional config file, then `HEARTWATCH_*`
//! environment variables. Command-line flags are applied on top by the
//! binary.
//!
//! ```toml
//! events_file = "events.json"
//! expected_interval_seconds = 60
//! allowed_misses = 3
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::data::DetectionPolicy;
use crate::error::ConfigError;

/// Default events file.
pub const DEFAULT_EVENTS_FILE: &str = "events.json";
/// Default seconds between expected heartbeats.
pub const DEFAULT_EXPECTED_INTERVAL_SECONDS: f64 = 60.0;
/// Default consecutive misses before alerting.
pub const DEFAULT_ALLOWED_MISSES: u32 = 3;
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "HEARTWATCH";

/// Settings for one detection run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Where to read heartbeat records from (`-` for stdin).
    pub events_file: PathBuf,
    /// Seconds between expected heartbeats.
    pub expected_interval_seconds: f64,
    /// Consecutive missed heartbeats that raise an alert.
    pub allowed_misses: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            events_file: PathBuf::from(DEFAULT_EVENTS_FILE),
            expected_interval_seconds: DEFAULT_EXPECTED_INTERVAL_SECONDS,
            allowed_misses: DEFAULT_ALLOWED_MISSES,
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and the environment.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(config_path: Option<&Path>, env: Environment) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("events_file", DEFAULT_EVENTS_FILE)?
            .set_default("expected_interval_seconds", DEFAULT_EXPECTED_INTERVAL_SECONDS)?
            .set_default("allowed_misses", i64::from(DEFAULT_ALLOWED_MISSES))?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        let config = builder.add_source(env.try_parsing(true)).build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate the detection parameters.
    pub fn policy(&self) -> Result<DetectionPolicy, ConfigError> {
        DetectionPolicy::new(self.expected_interval_seconds, self.allowed_misses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn empty_env() -> Environment {
        Environment::with_prefix(ENV_PREFIX).source(Some(HashMap::new()))
    }

    fn toml_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::load_with_env(None, empty_env()).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.policy().is_ok());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = toml_file("expected_interval_seconds = 30\nallowed_misses = 5");

        let settings = Settings::load_with_env(Some(file.path()), empty_env()).unwrap();
        assert_eq!(settings.expected_interval_seconds, 30.0);
        assert_eq!(settings.allowed_misses, 5);
        assert_eq!(settings.events_file, PathBuf::from(DEFAULT_EVENTS_FILE));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = toml_file("allowed_misses = 5\nevents_file = \"from-file.json\"");
        let vars = HashMap::from([
            ("HEARTWATCH_ALLOWED_MISSES".to_string(), "7".to_string()),
            ("HEARTWATCH_EXPECTED_INTERVAL_SECONDS".to_string(), "2.5".to_string()),
        ]);
        let env = Environment::with_prefix(ENV_PREFIX).source(Some(vars));

        let settings = Settings::load_with_env(Some(file.path()), env).unwrap();
        assert_eq!(settings.allowed_misses, 7);
        assert_eq!(settings.expected_interval_seconds, 2.5);
        assert_eq!(settings.events_file, PathBuf::from("from-file.json"));
    }

    #[test]
    fn test_missing_config_file() {
        let missing = Path::new("/nonexistent/heartwatch.toml");
        let result = Settings::load_with_env(Some(missing), empty_env());
        assert!(matches!(result, Err(ConfigError::Layer(_))));
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let settings = Settings {
            allowed_misses: 0,
            ..Settings::default()
        };
        assert!(matches!(settings.policy(), Err(ConfigError::InvalidConfiguration(_))));
    }
}
