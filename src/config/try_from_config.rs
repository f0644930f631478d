use crate::config::{ConfigLoader, DateFormatterConfig};
use crate::error::ConstructionError;
use crate::format::DateFormatter;
use crate::validation::DateValidator;
use log::info;
use std::path::PathBuf;
use validator::Validate;

impl TryFrom<PathBuf> for DateFormatterConfig {
    type Error = ConstructionError;

    fn try_from(path: PathBuf) -> Result<Self, Self::Error> {
        ConfigLoader::load(path)
    }
}

/// Unlike [`DateFormatter::with_pattern`], a configured formatter has its pattern field
/// and its formatter in agreement.
impl TryFrom<DateFormatterConfig> for DateFormatter {
    type Error = ConstructionError;

    fn try_from(config: DateFormatterConfig) -> Result<Self, Self::Error> {
        config.validate()?;
        let mut formatter = DateFormatter::with_pattern(config.pattern(), DateValidator::new())?;
        formatter.set_pattern(config.pattern())?;
        info!("Built date formatter with pattern '{}'", config.pattern());
        Ok(formatter)
    }
}
