pub const DEFAULT_PATTERN: &str = "d MMM uuuu";

/// MM-DD-YYYY with `-`, ` `, `/` or `.` as separators. Lexical only, the separators
/// are matched independently of each other.
pub const DATE_REGEX: &str =
    r"^(0[1-9]|1[012])[- /.](0[1-9]|[12][0-9]|3[01])[- /.](19|20)[0-9][0-9]$";

pub const SUPPORTED_CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml", "json", "toml", "ron"];
