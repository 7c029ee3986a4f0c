use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("invalid color for '{key}': {value} (expected #RRGGBB)")]
    InvalidColor { key: String, value: String },
    #[error("unknown color key '{0}'")]
    UnknownColorKey(String),
}

/// Where the config file lives when none is given on the command line
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dayplan").join("config.toml"))
}

/// Parse config text
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Read and parse a config file
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&text)
}

/// Resolve the effective config. An explicit path must exist; the default
/// location is optional and falls back to built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return Ok((read_config(path)?, Some(path.to_path_buf())));
    }
    match default_config_path() {
        Some(path) if path.is_file() => {
            let config = read_config(&path)?;
            Ok((config, Some(path)))
        }
        _ => Ok((Config::default(), None)),
    }
}

/// Render a config back to TOML
pub fn config_to_string(config: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bucket;
    use tempfile::TempDir;

    fn sample_config() -> &'static str {
        r##"[tasks]
default_title = "Something"
start_filter = "tomorrow"
demo = true

[ui]
mouse = false

[ui.colors]
background = "#000000"
"##
    }

    #[test]
    fn test_read_config_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, sample_config()).unwrap();

        let (config, used) = load_config(Some(&path)).unwrap();
        assert_eq!(used.as_deref(), Some(path.as_path()));
        assert_eq!(config.tasks.default_title, "Something");
        assert_eq!(config.tasks.start_filter, Bucket::Tomorrow);
        assert!(config.tasks.demo);
        assert!(!config.ui.mouse);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[tasks]\nstart_filter = \"someday\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_round_trip_config() {
        let config = parse_config(sample_config()).unwrap();
        let text = config_to_string(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }
}
