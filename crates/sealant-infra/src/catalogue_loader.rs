//! Cartridge catalogue loader from TOML configuration

use sealant_domain::CartridgeOption;
use sealant_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Container for parsing cartridges.toml
#[derive(Debug, Deserialize)]
struct CatalogueFile {
    #[serde(default)]
    cartridges: Vec<CartridgeOption>,
}

/// Extra cartridge options loaded from TOML
#[derive(Debug, Default)]
pub struct CatalogueLoader {
    cartridges: Vec<CartridgeOption>,
}

impl CatalogueLoader {
    /// Load a catalogue from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to read cartridge catalogue {}: {}",
                path.display(),
                e
            )))
        })?;

        let loader = Self::load_from_str(&content)?;
        tracing::debug!(path = %path.display(), count = loader.count(), "loaded cartridge catalogue");
        Ok(loader)
    }

    /// Load a catalogue from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: CatalogueFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse cartridge catalogue TOML: {}",
                e
            )))
        })?;

        for cartridge in &file.cartridges {
            if cartridge.key.trim().is_empty() {
                return Err(Error::Config(ConfigError::ParseError(
                    "Cartridge entry has an empty key".to_string(),
                )));
            }
            cartridge.validate()?;
        }

        Ok(Self {
            cartridges: file.cartridges,
        })
    }

    pub fn get(&self, key: &str) -> Option<&CartridgeOption> {
        self.cartridges.iter().find(|c| c.key == key)
    }

    pub fn into_cartridges(self) -> Vec<CartridgeOption> {
        self.cartridges
    }

    pub fn count(&self) -> usize {
        self.cartridges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TEST_TOML: &str = r#"
[[cartridges]]
key = "tube-150"
label = "Tube (150ml)"
volume_ml = 150.0

[[cartridges]]
key = "sausage-1000"
label = "Bulk sausage (1000ml)"
volume_ml = 1000
"#;

    #[test]
    fn test_load_from_str() {
        let loader = CatalogueLoader::load_from_str(TEST_TOML).unwrap();
        assert_eq!(loader.count(), 2);
        assert_eq!(loader.get("tube-150").unwrap().volume_ml, 150.0);
        assert_eq!(loader.get("sausage-1000").unwrap().volume_ml, 1000.0);
        assert!(loader.get("missing").is_none());
    }

    #[test]
    fn test_empty_catalogue() {
        let loader = CatalogueLoader::load_from_str("").unwrap();
        assert_eq!(loader.count(), 0);
    }

    #[test]
    fn test_rejects_non_positive_volume() {
        let toml = r#"
[[cartridges]]
key = "broken"
label = "Broken"
volume_ml = 0.0
"#;
        let err = CatalogueLoader::load_from_str(toml).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_rejects_empty_key() {
        let toml = r#"
[[cartridges]]
key = "  "
label = "No key"
volume_ml = 100.0
"#;
        assert!(matches!(
            CatalogueLoader::load_from_str(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            CatalogueLoader::load_from_str("[[cartridges]\nkey ="),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TEST_TOML.as_bytes()).unwrap();

        let loader = CatalogueLoader::load_from_file(file.path()).unwrap();
        assert_eq!(loader.count(), 2);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = CatalogueLoader::load_from_file(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(Error::Config(ConfigError::ParseError(_)))));
    }
}
