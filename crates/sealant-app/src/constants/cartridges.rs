//! Common commercial sealant package sizes

use sealant_domain::CartridgeOption;
use std::sync::LazyLock;

pub const DEFAULT_CARTRIDGE_KEY: &str = "cartridge-300";

/// Built-in package sizes
pub static CARTRIDGES: LazyLock<Vec<CartridgeOption>> = LazyLock::new(|| {
    [
        ("cartridge-290", "Cartridge (290ml)", 290.0),
        ("cartridge-300", "Cartridge (300ml)", 300.0),
        ("cartridge-310", "Cartridge (310ml)", 310.0),
        ("sausage-400", "Sausage (400ml)", 400.0),
        ("sausage-600", "Sausage (600ml)", 600.0),
    ]
    .into_iter()
    .map(|(key, label, volume_ml)| CartridgeOption {
        key: key.to_string(),
        label: label.to_string(),
        volume_ml,
    })
    .collect()
});

/// Built-in cartridges plus any loaded from a catalogue file
#[derive(Debug, Clone)]
pub struct CartridgeCatalogue {
    options: Vec<CartridgeOption>,
}

impl Default for CartridgeCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CartridgeCatalogue {
    pub fn builtin() -> Self {
        Self {
            options: CARTRIDGES.clone(),
        }
    }

    /// Add extra options; an extra with an existing key replaces the built-in one
    pub fn with_extra(mut self, extra: Vec<CartridgeOption>) -> Self {
        for option in extra {
            match self.options.iter_mut().find(|o| o.key == option.key) {
                Some(existing) => *existing = option,
                None => self.options.push(option),
            }
        }
        self
    }

    pub fn options(&self) -> &[CartridgeOption] {
        &self.options
    }

    /// Find a cartridge by key, label, or bare volume ("300", "600ml")
    pub fn find(&self, query: &str) -> Option<&CartridgeOption> {
        let query = query.trim();
        let lowered = query.to_lowercase();

        // Try direct lookup first
        if let Some(option) = self
            .options
            .iter()
            .find(|o| o.key.to_lowercase() == lowered || o.label.to_lowercase() == lowered)
        {
            return Some(option);
        }

        // Then a bare volume, preferring the first (cartridge before sausage)
        let volume: f64 = lowered.trim_end_matches("ml").trim().parse().ok()?;
        self.options
            .iter()
            .find(|o| (o.volume_ml - volume).abs() < f64::EPSILON)
    }
}

/// Look up a built-in cartridge
pub fn get_cartridge(query: &str) -> Option<CartridgeOption> {
    CartridgeCatalogue::builtin().find(query).cloned()
}
