pub mod config;
mod constants;
pub mod error;
pub mod format;
#[cfg(test)]
mod test_suite;
pub mod validation;

pub use constants::{DATE_REGEX, DEFAULT_PATTERN};
pub use format::{DateFormatter, DateTimeFields, DateTimeFormat};
pub use validation::DateValidator;
