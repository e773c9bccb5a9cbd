use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Sambat configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SambatConfig {
    /// Language and layout settings.
    #[serde(default)]
    pub locale: LocaleToml,

    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleToml {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_date_style")]
    pub date_style: String,
    #[serde(default = "default_name_format")]
    pub weekday_name: String,
    #[serde(default = "default_name_format")]
    pub month_name: String,
    #[serde(default)]
    pub use_24_hour: bool,
}

impl Default for LocaleToml {
    fn default() -> Self {
        Self {
            language: default_language(),
            date_style: default_date_style(),
            weekday_name: default_name_format(),
            month_name: default_name_format(),
            use_24_hour: false,
        }
    }
}

fn default_language() -> String {
    "english".to_string()
}
fn default_date_style() -> String {
    "long".to_string()
}
fn default_name_format() -> String {
    "full".to_string()
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Pattern used by `format` when none is given on the command line.
    #[serde(default)]
    pub pattern: Option<String>,
}

/// Reads the configuration file, or returns defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<SambatConfig> {
    let Some(path) = path else {
        return Ok(SambatConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse configuration TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let cfg = load(None).unwrap();
        assert_eq!(cfg.locale.language, "english");
        assert_eq!(cfg.locale.date_style, "long");
        assert_eq!(cfg.locale.weekday_name, "full");
        assert!(!cfg.locale.use_24_hour);
        assert!(cfg.output.pattern.is_none());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let file = write_config(
            r#"
[locale]
language = "nepali"
use_24_hour = true

[output]
pattern = "yyyy-MM-dd"
"#,
        );
        let cfg = load(Some(file.path())).unwrap();
        assert_eq!(cfg.locale.language, "nepali");
        assert_eq!(cfg.locale.month_name, "full");
        assert!(cfg.locale.use_24_hour);
        assert_eq!(cfg.output.pattern.as_deref(), Some("yyyy-MM-dd"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = write_config("[locale]\nlangauge = \"nepali\"\n");
        let err = load(Some(file.path())).unwrap_err();
        assert!(format!("{err:#}").contains("failed to parse configuration TOML"));
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
