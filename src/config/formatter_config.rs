use crate::constants::DEFAULT_PATTERN;
use crate::validation::validation_utils::validate_pattern;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Everything needed to build a [`crate::DateFormatter`].
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DateFormatterConfig {
    #[serde(default = "default_pattern")]
    #[validate(custom(function = "validate_pattern"))]
    pub pattern: String,
}

impl DateFormatterConfig {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl Default for DateFormatterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN)
    }
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}
