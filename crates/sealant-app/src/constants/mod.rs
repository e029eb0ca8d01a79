//! Constants for sealant estimation

pub mod cartridges;
pub mod profiles;

pub use cartridges::{get_cartridge, CartridgeCatalogue, CARTRIDGES, DEFAULT_CARTRIDGE_KEY};
pub use profiles::{get_profile_preset, ProfilePreset, PROFILE_PRESETS};
