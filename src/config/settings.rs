use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub queue: QueueConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationConfig {
    /// Minimum accepted phone number length
    #[serde(default = "default_min_phone_length")]
    pub min_phone_length: usize,
    /// Minimum accepted display name length
    #[serde(default = "default_min_name_length")]
    pub min_name_length: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueConfig {
    /// Probability that a poll moves the user one step forward
    #[serde(default = "default_advance_probability")]
    pub advance_probability: f64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_min_phone_length() -> usize {
    10
}

fn default_min_name_length() -> usize {
    2
}

fn default_advance_probability() -> f64 {
    0.7
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("validation.min_phone_length", 10)?
            .set_default("validation.min_name_length", 2)?
            .set_default("queue.advance_probability", 0.7)?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables
            // SERVER_HOST, SERVER_PORT, QUEUE_ADVANCE_PROBABILITY, etc.
            .add_source(
                Environment::default()
                    .separator("_")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_phone_length: default_min_phone_length(),
            min_name_length: default_min_name_length(),
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            advance_probability: default_advance_probability(),
        }
    }
}
