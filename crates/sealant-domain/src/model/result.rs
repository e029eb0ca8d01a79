//! Calculation outputs

use serde::Serialize;

use super::{CartridgeOption, JointSpec};

/// Volume plus cartridge count for one chosen cartridge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationResult {
    pub volume_ml: f64,
    pub cartridges_needed: u32,
}

/// How a volume splits across packages: whole ones plus the used share of the last
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PackageUsage {
    pub full_packages: u32,
    /// 0.0 <= partial_fraction < 1.0
    pub partial_fraction: f64,
}

impl PackageUsage {
    pub fn has_partial(&self) -> bool {
        self.partial_fraction > 0.0
    }

    pub fn partial_percent(&self) -> f64 {
        self.partial_fraction * 100.0
    }
}

/// Full estimate for a single joint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub joint: JointSpec,
    pub cartridge: CartridgeOption,
    /// Volume of the joint itself
    pub base_volume_ml: f64,
    /// Extra allowance applied on top of the base volume
    pub wastage_percent: f64,
    /// base_volume_ml including wastage
    pub total_volume_ml: f64,
    pub cartridges_needed: u32,
    pub usage: PackageUsage,
}

impl Estimate {
    pub fn result(&self) -> CalculationResult {
        CalculationResult {
            volume_ml: self.total_volume_ml,
            cartridges_needed: self.cartridges_needed,
        }
    }

    pub fn base_volume_l(&self) -> f64 {
        self.base_volume_ml / 1000.0
    }

    pub fn total_volume_l(&self) -> f64 {
        self.total_volume_ml / 1000.0
    }
}
