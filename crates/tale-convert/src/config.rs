//! Conversion settings
//!
//! Read from JSON. Every field is optional:
//!
//! ```json
//! {
//!   "scheme": "fable",
//!   "location": { "wall": 2, "shelf": 3, "volume": 4, "page": 5 },
//!   "chunk_size": 4,
//!   "base_url": "https://libraryofbabel.info/book.cgi",
//!   "wordlist": "/path/to/english.txt"
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tale_babel::{Location, DEFAULT_BASE_URL};
use tale_core::{Error, Result};
use tale_story::Scheme;

const CONFIG_DIR: &str = "seed-tale";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaleConfig {
    /// Story scheme for encoding and decoding
    pub scheme: Scheme,

    /// Where seed phrases are shelved in the library
    pub location: Location,

    /// Characters per hyphen group when displaying syllables (0 = no groups)
    pub chunk_size: usize,

    /// Library front end used for links
    pub base_url: String,

    /// Alternative BIP39 wordlist file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordlist: Option<PathBuf>,
}

impl Default for TaleConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::default(),
            location: Location::default(),
            chunk_size: 4,
            base_url: DEFAULT_BASE_URL.to_string(),
            wordlist: None,
        }
    }
}

impl TaleConfig {
    /// `$CONFIG_DIR/seed-tale/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load an explicit file, else the default file if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TaleConfig = serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;

        tracing::debug!(path = %path.display(), scheme = %config.scheme, "loaded config");
        Ok(config)
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, path)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.location.validate()?;
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url is empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = TaleConfig::default();
        assert_eq!(config.scheme, Scheme::Classic);
        assert_eq!(config.location, Location::default());
        assert_eq!(config.chunk_size, 4);
        assert_eq!(config.base_url, "https://libraryofbabel.info/book.cgi");
    }

    #[test]
    fn test_partial_file() {
        let file = write_config(r#"{"scheme": "fable", "location": {"page": 7}}"#);
        let config = TaleConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.scheme, Scheme::Fable);
        assert_eq!(config.location, Location::new(1, 1, 1, 7).unwrap());
        assert_eq!(config.chunk_size, 4);
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("{ scheme: ");
        let err = TaleConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let file = write_config(r#"{"scheme": "saga"}"#);
        assert!(matches!(TaleConfig::from_file(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_values() {
        let file = write_config(r#"{"location": {"wall": 7}}"#);
        let err = TaleConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::InvalidLocation(_)));

        let file = write_config(r#"{"base_url": "  "}"#);
        assert!(matches!(TaleConfig::from_file(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = TaleConfig::load(Some(Path::new("/nonexistent/seed-tale.json"))).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = TaleConfig {
            scheme: Scheme::Fable,
            chunk_size: 6,
            ..TaleConfig::default()
        };

        config.save(&path).unwrap();
        assert_eq!(TaleConfig::from_file(&path).unwrap(), config);
    }
}
