use crate::constants::SUPPORTED_CONFIG_EXTENSIONS;
use crate::error::ConstructionError;
use config::{Config, ConfigError, File, FileFormat};
use log::debug;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::PathBuf;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load<T: DeserializeOwned>(file_path: PathBuf) -> Result<T, ConstructionError> {
        let Some(ext) = file_path.extension() else {
            return Err(ConfigError::NotFound(format!(
                "Could not find file extension on path {file_path:?}"
            ))
            .into());
        };
        let file_format = match ext.to_str() {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            Some("toml") => Ok(FileFormat::Toml),
            Some("ron") => Ok(FileFormat::Ron),
            _ => Err(ConfigError::NotFound(format!(
                "File format not supported. File needs to end with one of {SUPPORTED_CONFIG_EXTENSIONS:?}. {file_path:?}"
            ))),
        }?;

        if !file_path.is_file() {
            return Err(ConstructionError::NoConfigFileFound(file_path));
        }
        debug!("Loading {file_format:?} config from {file_path:?}");

        let config_str = fs::read_to_string(&file_path)?;

        // anything after a $ is looked up as an environment variable, so literal $ has to
        // be written as \$
        let config_str_with_env_vars = shellexpand::env(&config_str)
            .map_err(|err| ConstructionError::EnvExpansion(err.to_string()))?;

        let config = Config::builder()
            .add_source(File::from_str(&config_str_with_env_vars, file_format))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
