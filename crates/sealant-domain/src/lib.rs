//! Sealant domain: joint geometry, cartridges, and the pure calculation services

pub mod model;
pub mod service;
pub mod share;
pub mod validation;

pub use model::{
    CalculationResult, CartridgeOption, CrossSection, Estimate, JointProfile, JointSpec,
    PackageUsage,
};
pub use share::LinkShortener;
