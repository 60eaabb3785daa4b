mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/riskcast/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("riskcast")
}

/// Get the default config file path (~/.config/riskcast/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML or JSON file.
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path;
///   a missing default file is not an error since every option has a
///   fallback.
///
/// # Errors
///
/// Returns an error if an explicitly given path does not exist, the file
/// cannot be read, or its contents cannot be parsed.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let default = get_config_path();
            if !default.exists() {
                return Ok(Config::default());
            }
            default
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_document(&config_path, &config_content)
}

/// Parse a document as JSON for `.json` files, YAML otherwise.
pub(crate) fn parse_document<T: serde::de::DeserializeOwned>(
    path: &Path,
    content: &str,
) -> Result<T> {
    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(content)
            .with_context(|| format!("Failed to parse {}: invalid JSON", path.display()))
    } else {
        serde_saphyr::from_str(content)
            .with_context(|| format!("Failed to parse {}: invalid YAML", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
default_weights:
  factor1: 1.0
  factor2: 3.0
"#;
        let config: Config = parse_document(Path::new("config.yaml"), yaml).unwrap();
        let weights = config.default_weights.unwrap();
        assert_eq!(weights["factor1"], 1.0);
        assert_eq!(weights["factor2"], 3.0);
    }

    #[test]
    fn test_parse_json_config() {
        let json = r#"{"default_weights": {"factor1": 2.5}}"#;
        let config: Config = parse_document(Path::new("config.json"), json).unwrap();
        assert_eq!(config.default_weights.unwrap()["factor1"], 2.5);
    }

    #[test]
    fn test_empty_config_has_no_overrides() {
        let config: Config = parse_document(Path::new("config.yaml"), "{}").unwrap();
        assert!(config.default_weights.is_none());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "api_key: abc123\n";
        let result: Result<Config> = parse_document(Path::new("config.yaml"), yaml);
        assert!(result.is_err());
    }
}
