use crate::format::DateTimeFormat;
use std::borrow::Cow;
use validator::ValidationError;

pub(crate) fn validate_pattern(pattern: &str) -> Result<(), ValidationError> {
    match DateTimeFormat::of_pattern(pattern) {
        Ok(_) => Ok(()),
        Err(err) => {
            let mut error = ValidationError::new("invalid_pattern");
            error.add_param(Cow::from("pattern"), &pattern);
            Err(error.with_message(Cow::Owned(err.to_string())))
        }
    }
}
