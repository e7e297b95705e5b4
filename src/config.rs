use std::{env, fs};

use log::{debug, error};
use serde_derive::Deserialize;
use thiserror::Error;

use crate::hardware::raspberry_pi::CPUINFO_PATH;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub detection: DetectConf,
    #[serde(default)]
    pub log: LogConf,
}

#[derive(Deserialize, Debug, Default)]
pub struct LogConf {
    pub file: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct DetectConf {
    #[serde(default = "default_cpuinfo")]
    pub cpuinfo: String,
}

impl Default for DetectConf {
    fn default() -> Self {
        DetectConf {
            cpuinfo: default_cpuinfo(),
        }
    }
}

fn default_cpuinfo() -> String {
    CPUINFO_PATH.to_string()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config File could not be found")]
    ConfigNotFound(std::io::Error),

    #[error("Config File could not be parsed")]
    ParsingError(toml::de::Error),

    #[error("Env variable could not be found")]
    EnvVarNotFound(std::env::VarError),
}

impl Config {
    pub fn from_any() -> Result<Self, ConfigError> {
        // Try to read from path env var
        match Self::from_env_path() {
            Ok(config) => {
                debug!("Loaded config from env path");
                return Ok(config);
            }
            Err(error) => {
                debug!("Could not load config from env path: {}", error);
            }
        }

        // Try to read default path
        match Self::from_default_path() {
            Ok(config) => {
                debug!("Loaded config from default path");
                Ok(config)
            }
            Err(error) => {
                error!("Could not load config: {}", error);
                Err(error)
            }
        }
    }

    // Read Config from default path
    pub fn from_default_path() -> Result<Self, ConfigError> {
        Self::from_file_path("config.toml")
    }

    // Read Config from path in CONFIG_LOCATION env variable
    pub fn from_env_path() -> Result<Self, ConfigError> {
        let path = env::var("CONFIG_LOCATION").map_err(ConfigError::EnvVarNotFound)?;
        Self::from_file_path(&path)
    }

    // Read and parse Config from path
    pub fn from_file_path(path: &str) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(ConfigError::ConfigNotFound)?;

        toml::from_str(data.as_str()).map_err(ConfigError::ParsingError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let conf: Config =
            toml::from_str("[detection]\ncpuinfo = \"/tmp/cpuinfo\"\n\n[log]\nfile = \"probe.log\"\n")
                .unwrap();

        assert_eq!(conf.detection.cpuinfo, "/tmp/cpuinfo");
        assert_eq!(conf.log.file.as_deref(), Some("probe.log"));
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let conf: Config = toml::from_str("").unwrap();

        assert_eq!(conf.detection.cpuinfo, CPUINFO_PATH);
        assert_eq!(conf.log.file, None);
    }
}
