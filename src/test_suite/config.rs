pub(crate) const YAML_DATA: &[u8] = br#"
pattern: "MM-dd-uuuu"
"#;

pub(crate) const TOML_DATA: &[u8] = br#"
pattern = "MM-dd-uuuu"
"#;

pub(crate) const JSON_DATA: &[u8] = br#"
{
  "pattern": "MM-dd-uuuu"
}
"#;

pub(crate) const RON_DATA: &[u8] = br#"
(
  pattern: "MM-dd-uuuu",
)
"#;
