//! Domain model types

pub mod cartridge;
pub mod joint;
pub mod result;

pub use cartridge::CartridgeOption;
pub use joint::{CrossSection, JointProfile, JointSpec};
pub use result::{CalculationResult, Estimate, PackageUsage};
