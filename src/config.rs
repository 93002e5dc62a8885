use serde::{Deserialize, Serialize};

use std::{env, fs, path::Path};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pre-populate the collection with the four seed notes
    #[serde(default = "default_seed")]
    pub seed: bool,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

const fn default_port() -> u16 {
    DEFAULT_PORT
}

const fn default_seed() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed: default_seed(),
        }
    }
}

impl Config {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_config(contents: &str) -> Result<Config, Box<dyn std::error::Error>> {
    serde_yaml::from_str(contents).map_err(Into::into)
}

fn read_config(path: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Builds the config from `NOTES_HOST`, `NOTES_PORT` and `NOTES_SEED` through
/// `lookup`, falling back to defaults for unset variables.
///
/// Only consulted when no config file is found: a `config.yaml` or
/// `config.example.yaml` in the working directory takes precedence and these
/// variables are then ignored.
fn load_from_vars<F>(lookup: F) -> Result<Config, Box<dyn std::error::Error>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(host) = lookup("NOTES_HOST") {
        config.host = host;
    }

    if let Some(port) = lookup("NOTES_PORT") {
        config.port = port
            .parse::<u16>()
            .map_err(|e| format!("Failed to parse NOTES_PORT: {e}"))?;
    }

    if let Some(seed) = lookup("NOTES_SEED") {
        config.seed = seed
            .parse::<bool>()
            .map_err(|e| format!("Failed to parse NOTES_SEED: {e}"))?;
    }

    Ok(config)
}

pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    // Retrieve env variable
    let config_path =
        env::var("NOTES_SERVER_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

    // Try env path
    if Path::new(&config_path).exists() {
        return read_config(&config_path);
    }

    // Fallback to config.yaml
    if Path::new("config.yaml").exists() {
        tracing::warn!(
            "Config file '{}' not found, falling back to 'config.yaml'",
            config_path
        );
        return read_config("config.yaml");
    }

    // Fallback to config.example.yaml
    if Path::new("config.example.yaml").exists() {
        tracing::warn!(
            "Config file '{}' and 'config.yaml' not found, falling back to 'config.example.yaml'",
            config_path
        );
        return read_config("config.example.yaml");
    }

    // Fallback to environment variables and defaults
    tracing::info!("No config file found, loading configuration from environment variables");
    load_from_vars(|key| env::var(key).ok()).map_err(|e| {
        format!(
            "Config file not found and environment variables are invalid. \
             Tried: '{config_path}', 'config.yaml', 'config.example.yaml'. Error: {e}"
        )
        .into()
    })
}
