use crate::format::DateFormatterError;
use config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ConstructionError {
    #[error("Could not find config file at '{0}'")]
    NoConfigFileFound(PathBuf),
    #[error("Shell expansion of config file failed. Environment variables not found? {0}")]
    EnvExpansion(String),
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error(transparent)]
    Formatter(#[from] DateFormatterError),
}
