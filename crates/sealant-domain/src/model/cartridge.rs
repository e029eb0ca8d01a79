//! Cartridge / package type definitions

use serde::{Deserialize, Serialize};

use sealant_types::Result;

use crate::validation::ensure_positive;

/// A fixed-volume sealant package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartridgeOption {
    /// Lookup key (e.g. "cartridge-300")
    pub key: String,
    /// Display label (e.g. "Cartridge (300ml)")
    pub label: String,
    /// Contents in millilitres
    pub volume_ml: f64,
}

impl CartridgeOption {
    pub fn new(key: impl Into<String>, label: impl Into<String>, volume_ml: f64) -> Result<Self> {
        Ok(Self {
            key: key.into(),
            label: label.into(),
            volume_ml: ensure_positive("volume_ml", volume_ml)?,
        })
    }

    /// Re-check the volume of a deserialized option
    pub fn validate(&self) -> Result<()> {
        ensure_positive("volume_ml", self.volume_ml).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cartridge() {
        let c = CartridgeOption::new("cartridge-300", "Cartridge (300ml)", 300.0).unwrap();
        assert_eq!(c.key, "cartridge-300");
        assert_eq!(c.volume_ml, 300.0);
    }

    #[test]
    fn test_rejects_empty_cartridge() {
        assert!(CartridgeOption::new("empty", "Empty", 0.0).is_err());
        assert!(CartridgeOption::new("neg", "Negative", -300.0).is_err());
    }

    #[test]
    fn test_validate_deserialized() {
        let c: CartridgeOption =
            serde_json::from_str(r#"{"key":"bad","label":"Bad","volume_ml":-1.0}"#).unwrap();
        assert!(c.validate().is_err());
    }
}
