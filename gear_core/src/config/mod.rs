//! Configuration and reference data loading from TOML or JSON files

mod limits;
mod reference;

pub use limits::{InputLimits, Range};
pub use reference::{find_data_file, load_reference_tables};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Unsupported data file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("Missing data file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

/// Load a JSON file and deserialize it
pub fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_json(&content)
}

/// Load a JSON string and deserialize it
pub fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = serde_json::from_str(content)?;
    Ok(config)
}

/// Load a data file, picking the parser from its extension
pub fn load_data<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => load_toml(path),
        Some("json") => load_json(path),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FlameCatalog;

    #[test]
    fn test_unsupported_extension() {
        let err = load_data::<FlameCatalog>(Path::new("flames.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
        assert!(err.to_string().contains("flames.yaml"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_data::<FlameCatalog>(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }

    #[test]
    fn test_parse_json_error() {
        let err = parse_json::<FlameCatalog>("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::JsonError(_)));
    }

    #[test]
    fn test_parse_toml_and_json_agree() {
        let from_toml: FlameCatalog = parse_toml(
            r#"
[[flameTypes]]
id = "boss"
stat = "bossDmg"
percent = true
equipTypes = ["weapon"]
"#,
        )
        .unwrap();
        let from_json: FlameCatalog = parse_json(
            r#"{"flameTypes": [{"id": "boss", "stat": "bossDmg", "percent": true, "equipTypes": ["weapon"]}]}"#,
        )
        .unwrap();
        assert_eq!(from_toml, from_json);
    }
}
