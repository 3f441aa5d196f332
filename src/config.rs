use config::{Config, ConfigError};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Base URL of the host instance, e.g. "http://localhost:8000".
    pub base_url: String,
    /// Default headers applied to every outbound request. An instance that
    /// requires auth takes its `Authorization: token key:secret` pair here.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(config::File::with_name("config/default.yaml"))
            .add_source(config::Environment::with_prefix("APP").separator("__"));

        let config = builder.build()?;
        let settings: Settings = config.try_deserialize()?;

        debug!(
            base_url = %settings.server.base_url,
            headers = ?settings.server.headers,
            "Loaded settings"
        );

        Ok(settings)
    }
}
