//! Settings for the command line tool, read from the environment.
//!
//! A `.env` file in the working directory is loaded first (see [`Config::load`]).

use std::env;
use std::error::Error;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default for the `--strict` flag of the `version` command.
    pub strict: bool,
    pub output: OutputFormat,
    /// Path of the log4rs YAML file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict: false,
            output: OutputFormat::Text,
            log_config: "log4rs.yml".to_string(),
        }
    }
}

impl Config {
    /// Load `.env` (if any) and read the settings from the process environment.
    pub fn load() -> Result<Config, Box<dyn Error>> {
        dotenv::dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(strict) = lookup("IP_HELPER_STRICT") {
            config.strict = parse_bool(&strict)
                .ok_or_else(|| format!("Invalid IP_HELPER_STRICT value: {strict}"))?;
        }
        if let Some(output) = lookup("IP_HELPER_OUTPUT") {
            config.output = output.parse()?;
        }
        if let Some(path) = lookup("IP_HELPER_LOG_CONFIG") {
            config.log_config = path;
        }
        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
