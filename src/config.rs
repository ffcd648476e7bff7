use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io/v1";

/// Process configuration, read once at startup and handed to the state.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub use_pre_recorded: bool,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub elevenlabs_api_key: String,
    pub elevenlabs_base_url: String,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            static_dir: PathBuf::from("./static"),
            catalog_path: None,
            use_pre_recorded: false,
            openai_api_key: String::new(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            elevenlabs_api_key: String::new(),
            elevenlabs_base_url: DEFAULT_ELEVENLABS_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Read configuration from the environment, honouring a `.env` file.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a number, got '{}'", raw)))?,
            None => defaults.port,
        };

        let use_pre_recorded = match lookup("USE_PRE_RECORDED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppError::Config(format!("USE_PRE_RECORDED must be a boolean, got '{}'", raw))
            })?,
            None => defaults.use_pre_recorded,
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(AppError::Config(format!(
                        "HTTP_TIMEOUT_SECS must be a positive number, got '{}'",
                        raw
                    )))
                }
            },
            None => defaults.http_timeout,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            static_dir: lookup("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            catalog_path: lookup("EXERCISE_CATALOG").map(PathBuf::from),
            use_pre_recorded,
            openai_api_key: lookup("OPENAI_API").unwrap_or_default(),
            openai_model: lookup("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            openai_base_url: lookup("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            elevenlabs_api_key: lookup("ELEVENLABS_API").unwrap_or_default(),
            elevenlabs_base_url: lookup("ELEVENLABS_BASE_URL")
                .unwrap_or(defaults.elevenlabs_base_url),
            http_timeout,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert!(!config.use_pre_recorded);
        assert_eq!(config.port, 5000);
        assert_eq!(config.openai_model, "gpt-3.5-turbo");
        assert!(config.openai_api_key.is_empty());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn reads_credentials_and_mode() {
        let config = config_from(&[
            ("OPENAI_API", "sk-test"),
            ("ELEVENLABS_API", "xi-test"),
            ("USE_PRE_RECORDED", "True"),
            ("PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.openai_api_key, "sk-test");
        assert_eq!(config.elevenlabs_api_key, "xi-test");
        assert!(config.use_pre_recorded);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn reads_positive_timeout() {
        let config = config_from(&[("HTTP_TIMEOUT_SECS", "5")]).unwrap();
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn parses_boolean_spellings() {
        assert_eq!(parse_bool("yes"), Some(true));
        assert_eq!(parse_bool(" 1 "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("USE_PRE_RECORDED", "sometimes")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("PORT", "eighty")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("HTTP_TIMEOUT_SECS", "-1")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("HTTP_TIMEOUT_SECS", "0")]),
            Err(AppError::Config(_))
        ));
    }
}
