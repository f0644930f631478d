mod config_loader;
pub use self::config_loader::ConfigLoader;
pub mod formatter_config;
pub use self::formatter_config::DateFormatterConfig;
mod try_from_config;
