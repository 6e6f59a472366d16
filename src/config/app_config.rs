use std::path::PathBuf;

use serde::Deserialize;

use crate::infrastructure::api_key::DEFAULT_CAPACITY;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Key store and landing page settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Maximum number of simultaneously stored keys
    pub capacity: usize,
    /// Directory of static assets served for unmatched routes
    pub public_dir: String,
    /// Page served when no static asset matches
    pub landing_page: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            public_dir: "public".to_string(),
            landing_page: "api-keys.html".to_string(),
        }
    }
}

impl KeysConfig {
    pub fn landing_page_path(&self) -> PathBuf {
        PathBuf::from(&self.public_dir).join(&self.landing_page)
    }
}

impl AppConfig {
    /// Load from `config/default`, `config/local`, `APP__*` variables and finally `PORT`
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        app_config.apply_port_override(std::env::var("PORT").ok().as_deref())?;

        Ok(app_config)
    }

    /// Apply the conventional `PORT` variable on top of the layered sources
    pub fn apply_port_override(&mut self, port: Option<&str>) -> Result<(), config::ConfigError> {
        if let Some(raw) = port {
            self.server.port = raw.trim().parse().map_err(|e| {
                config::ConfigError::Message(format!("Invalid PORT value '{}': {}", raw, e))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.keys.capacity, 5);
        assert_eq!(
            config.keys.landing_page_path(),
            PathBuf::from("public/api-keys.html")
        );
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();

        config.apply_port_override(Some("8081")).unwrap();
        assert_eq!(config.server.port, 8081);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 8081);
    }

    #[test]
    fn test_invalid_port_override() {
        let mut config = AppConfig::default();

        let err = config.apply_port_override(Some("not-a-port")).unwrap_err();
        assert!(err.to_string().contains("Invalid PORT value 'not-a-port'"));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_partial_sources_fill_defaults() {
        let config: AppConfig = config::Config::builder()
            .set_override("keys.capacity", 3)
            .unwrap()
            .set_override("keys.public_dir", "assets")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.keys.capacity, 3);
        assert_eq!(config.keys.landing_page_path(), PathBuf::from("assets/api-keys.html"));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_log_format_deserialization() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, LogFormat::Json);
    }
}
