//! Cartridge count recommendation

use serde::Serialize;

use sealant_types::{Error, Result};

use crate::model::{CartridgeOption, PackageUsage};
use crate::validation::ensure_non_negative;

/// Packages per volume; the count must fit in a `u32`
fn package_ratio(volume_ml: f64, cartridge: &CartridgeOption) -> Result<f64> {
    let volume_ml = ensure_non_negative("volume_ml", volume_ml)?;
    let ratio = volume_ml / cartridge.volume_ml;
    if ratio.ceil() > f64::from(u32::MAX) {
        return Err(Error::invalid_input(
            "volume_ml",
            volume_ml,
            format!("too large for {} packages", cartridge.label),
        ));
    }
    Ok(ratio)
}

/// Number of packages to buy for a volume
///
/// # Formula
/// max(1, ceil(volume_ml / cartridge.volume_ml))
pub fn cartridges_needed(volume_ml: f64, cartridge: &CartridgeOption) -> Result<u32> {
    let count = package_ratio(volume_ml, cartridge)?.ceil();
    Ok((count as u32).max(1))
}

/// Split a volume into full packages and the used share of the last one
pub fn package_usage(volume_ml: f64, cartridge: &CartridgeOption) -> Result<PackageUsage> {
    let packages = package_ratio(volume_ml, cartridge)?;
    let full_packages = packages.trunc();
    Ok(PackageUsage {
        full_packages: full_packages as u32,
        partial_fraction: packages - full_packages,
    })
}

/// One row of a cartridge comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartridgeComparison {
    pub cartridge: CartridgeOption,
    pub cartridges_needed: u32,
    /// Sealant bought but not used
    pub leftover_ml: f64,
}

/// Compare every option for a volume, least leftover first
pub fn compare_cartridges(
    volume_ml: f64,
    options: &[CartridgeOption],
) -> Result<Vec<CartridgeComparison>> {
    let mut rows = options
        .iter()
        .map(|cartridge| {
            let count = cartridges_needed(volume_ml, cartridge)?;
            Ok(CartridgeComparison {
                cartridge: cartridge.clone(),
                cartridges_needed: count,
                leftover_ml: f64::from(count) * cartridge.volume_ml - volume_ml,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    rows.sort_by(|a, b| {
        a.leftover_ml
            .total_cmp(&b.leftover_ml)
            .then(a.cartridges_needed.cmp(&b.cartridges_needed))
    });
    Ok(rows)
}
