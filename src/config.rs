// src/config.rs
use serde::Deserialize;
use std::path::Path;

use crate::errors::ConfigError;
use crate::models::RawFormValues;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_PREDICT_PATH: &str = "/predict";

/// Where the prediction service lives.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Scheme, host and port of the service, e.g. `http://127.0.0.1:5000`.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Path of the prediction endpoint.
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_predict_path() -> String {
    DEFAULT_PREDICT_PATH.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            predict_path: default_predict_path(),
        }
    }
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Load configuration from `PREDICT_API_BASE` and `PREDICT_PATH`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("PREDICT_API_BASE")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(default_api_base);
        let predict_path = lookup("PREDICT_PATH")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(default_predict_path);

        let config = ClientConfig { api_base, predict_path };
        config.check()?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Full URL of the prediction endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            self.predict_path.trim_start_matches('/')
        )
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.api_base.is_empty() {
            return Err(ConfigError::Invalid("PREDICT_API_BASE must not be empty".to_string()));
        }
        if !(self.api_base.starts_with("http://") || self.api_base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api base '{}' must start with http:// or https://",
                self.api_base
            )));
        }
        Ok(())
    }
}

/// Reads form values from a `.json` file, or TOML for any other extension.
pub fn load_form(path: impl AsRef<Path>) -> Result<RawFormValues, ConfigError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(serde_json::from_str(&text)?)
    } else {
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_when_env_is_empty() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.endpoint(), "http://127.0.0.1:5000/predict");
    }

    #[test]
    fn env_overrides_are_trimmed() {
        let vars: HashMap<&str, &str> = [
            ("PREDICT_API_BASE", " https://eta.example.com/ "),
            ("PREDICT_PATH", "v2/predict"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.endpoint(), "https://eta.example.com/v2/predict");
    }

    #[test]
    fn rejects_base_without_scheme() {
        let result = ClientConfig::from_lookup(|k| (k == "PREDICT_API_BASE").then(|| "localhost:5000".to_string()));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn toml_config_fills_defaults() {
        let config = ClientConfig::from_toml_str(r#"api_base = "http://10.0.0.4:8000""#).unwrap();
        assert_eq!(config.predict_path, DEFAULT_PREDICT_PATH);
        assert_eq!(config.endpoint(), "http://10.0.0.4:8000/predict");
    }

    #[test]
    fn loads_toml_and_json_forms() {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            toml_file,
            "distance = 3.2\nprep_time = 10\nexperience = \"2\"\nweather = \"Clear\"\ntraffic = \"Low\"\nvehicle = \"Bike\""
        )
        .unwrap();
        let form = load_form(toml_file.path()).unwrap();
        assert_eq!(form.distance, "3.2");
        assert_eq!(form.prep_time, "10");
        assert_eq!(form.vehicle, "Bike");

        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json_file, r#"{{"distance": "8", "traffic": "High"}}"#).unwrap();
        let form = load_form(json_file.path()).unwrap();
        assert_eq!(form.distance, "8");
        assert_eq!(form.traffic, "High");
        assert_eq!(form.weather, "");
    }
}
