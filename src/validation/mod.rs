mod date_validator;
pub(crate) mod validation_utils;

pub use self::date_validator::DateValidator;
