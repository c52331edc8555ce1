use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

const DEFAULT_HTTP_PORT: u16 = 8000;

const fn default_http_port() -> u16 {
    DEFAULT_HTTP_PORT
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// PostgreSQL connection string. Notes are kept in memory when unset.
    #[serde(default)]
    pub database_dsn: Option<String>,
}

impl Config {
    pub fn from_yaml(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        serde_yaml::from_str(contents).map_err(Into::into)
    }
}

fn load_from_file(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    Config::from_yaml(&contents)
}

fn load_from_env() -> Result<Config, Box<dyn std::error::Error>> {
    let http_port = match env::var("HTTP_PORT") {
        Ok(port) => port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse HTTP_PORT: {e}"))?,
        Err(_) => DEFAULT_HTTP_PORT,
    };

    Ok(Config {
        http_port,
        database_dsn: env::var("PG_DSN").ok(),
    })
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path = env::var("KEEPNOTE_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return load_from_file(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return load_from_file("config.yaml");
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'\
             \n This file should not be used and should be replaced with actual data",
            config_path
        );
        return load_from_file("config.example.yaml");
    }

    // Fallback to environment variables
    tracing::info!(
        "No config file found, attempting to load configuration from environment variables"
    );
    load_from_env().map_err(|e| {
        format!(
            "Config file not found and environment variables are invalid. \
             Tried: '{config_path}', 'config.yaml', 'config.example.yaml', and environment variables. \
             Error: {e}"
        )
        .into()
    })
}
