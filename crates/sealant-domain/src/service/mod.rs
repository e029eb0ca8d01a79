//! Domain services

pub mod cartridge_recommender;
pub mod estimator;
pub mod volume_calculator;

pub use cartridge_recommender::{
    cartridges_needed, compare_cartridges, package_usage, CartridgeComparison,
};
pub use estimator::{apply_wastage, estimate, EstimateOptions, DEFAULT_WASTAGE_PERCENT};
pub use volume_calculator::{
    calculate_volume_ml, cross_section_area_mm2, VolumeOptions, DEFAULT_U_PROFILE_FACTOR,
};
