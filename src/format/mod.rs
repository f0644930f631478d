mod date_formatter;
mod date_time_format;
mod difference;
pub mod error;

pub use self::date_formatter::DateFormatter;
pub use self::date_time_format::DateTimeFormat;
pub use self::difference::DateTimeFields;
pub use self::error::DateFormatterError;
