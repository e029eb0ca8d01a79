//! Full estimate: volume, wastage allowance, and cartridge recommendation

use sealant_types::Result;

use crate::model::{CartridgeOption, Estimate, JointSpec};
use crate::service::cartridge_recommender::{cartridges_needed, package_usage};
use crate::service::volume_calculator::{calculate_volume_ml, VolumeOptions};
use crate::validation::ensure_range;

/// Recommended extra material for application losses
pub const DEFAULT_WASTAGE_PERCENT: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateOptions {
    pub volume: VolumeOptions,
    /// 0 disables the allowance
    pub wastage_percent: f64,
}

impl Default for EstimateOptions {
    fn default() -> Self {
        Self {
            volume: VolumeOptions::default(),
            wastage_percent: DEFAULT_WASTAGE_PERCENT,
        }
    }
}

impl EstimateOptions {
    /// Options without any wastage allowance
    pub fn exact() -> Self {
        Self {
            wastage_percent: 0.0,
            ..Self::default()
        }
    }
}

/// Add a percentage allowance to a volume
pub fn apply_wastage(volume_ml: f64, wastage_percent: f64) -> Result<f64> {
    let wastage_percent = ensure_range("wastage_percent", wastage_percent, 0.0, 100.0)?;
    Ok(volume_ml * (1.0 + wastage_percent / 100.0))
}

/// Estimate sealant and packages for one joint
pub fn estimate(
    joint: &JointSpec,
    cartridge: &CartridgeOption,
    options: &EstimateOptions,
) -> Result<Estimate> {
    cartridge.validate()?;

    let base_volume_ml = calculate_volume_ml(joint, &options.volume)?;
    let total_volume_ml = apply_wastage(base_volume_ml, options.wastage_percent)?;
    let count = cartridges_needed(total_volume_ml, cartridge)?;
    let usage = package_usage(total_volume_ml, cartridge)?;

    Ok(Estimate {
        joint: *joint,
        cartridge: cartridge.clone(),
        base_volume_ml,
        wastage_percent: options.wastage_percent,
        total_volume_ml,
        cartridges_needed: count,
        usage,
    })
}
