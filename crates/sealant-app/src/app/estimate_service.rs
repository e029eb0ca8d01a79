//! Estimate Service - core use case for a single joint
//!
//! Resolves a request against the config and presets:
//! 1. Parse profile and fill missing width/depth from the profile preset
//! 2. Build and validate the joint
//! 3. Resolve the cartridge (built-in catalogue plus optional TOML file)
//! 4. Apply U-factor and wastage settings (request overrides config)
//! 5. Run the domain estimator

use chrono::{DateTime, Local};
use serde::Serialize;

use sealant_domain::service::{self, CartridgeComparison, EstimateOptions, VolumeOptions};
use sealant_domain::{CartridgeOption, Estimate, JointProfile, JointSpec};
use sealant_infra::CatalogueLoader;
use sealant_types::{Error, Result};

use crate::config::Config;
use crate::constants::{get_profile_preset, CartridgeCatalogue};

/// User input for one joint; `None` fields fall back to presets or config
#[derive(Debug, Clone, Default)]
pub struct EstimateRequest {
    pub profile: Option<String>,
    pub width_mm: Option<f64>,
    pub depth_mm: Option<f64>,
    pub length_m: Option<f64>,
    pub cartridge: Option<String>,
    /// Overrides the configured allowance
    pub wastage_percent: Option<f64>,
    /// Disable the allowance regardless of config
    pub no_wastage: bool,
    pub u_profile_factor: Option<f64>,
}

/// Estimate together with when it was produced
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    pub profile_name: String,
    pub estimate: Estimate,
    pub generated_at: DateTime<Local>,
}

/// Every catalogue option compared for one joint
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub joint: JointSpec,
    pub total_volume_ml: f64,
    pub rows: Vec<CartridgeComparison>,
}

/// Parse a profile name, defaulting to a square joint
pub fn resolve_profile(profile: Option<&str>) -> Result<JointProfile> {
    match profile {
        Some(name) => name.parse(),
        None => Ok(JointProfile::Square),
    }
}

/// Build the joint, filling width/depth from the profile preset
pub fn resolve_joint(request: &EstimateRequest) -> Result<JointSpec> {
    let profile = resolve_profile(request.profile.as_deref())?;
    let preset = get_profile_preset(profile);

    let width_mm = request
        .width_mm
        .or(preset.map(|p| p.typical_width_mm))
        .ok_or_else(|| Error::invalid_input("width_mm", "", "is required"))?;
    let depth_mm = request
        .depth_mm
        .or(preset.map(|p| p.typical_depth_mm))
        .ok_or_else(|| Error::invalid_input("depth_mm", "", "is required"))?;
    let length_m = request
        .length_m
        .ok_or_else(|| Error::invalid_input("length_m", "", "is required"))?;

    JointSpec::new(width_mm, depth_mm, length_m, profile)
}

/// Built-in catalogue merged with the configured TOML catalogue, if any
pub fn load_catalogue(config: &Config) -> Result<CartridgeCatalogue> {
    let catalogue = CartridgeCatalogue::builtin();
    match config.catalogue_path {
        Some(ref path) => {
            let loader = CatalogueLoader::load_from_file(path)?;
            Ok(catalogue.with_extra(loader.into_cartridges()))
        }
        None => Ok(catalogue),
    }
}

/// Pick the requested cartridge, or the configured default
pub fn resolve_cartridge(
    catalogue: &CartridgeCatalogue,
    config: &Config,
    requested: Option<&str>,
) -> Result<CartridgeOption> {
    let query = requested.unwrap_or(&config.default_cartridge);
    catalogue
        .find(query)
        .cloned()
        .ok_or_else(|| Error::UnknownCartridge(query.to_string()))
}

/// Combine config and request overrides into estimator options
pub fn resolve_options(config: &Config, request: &EstimateRequest) -> Result<EstimateOptions> {
    let u_factor = request.u_profile_factor.unwrap_or(config.u_profile_factor);
    let wastage_percent = if request.no_wastage {
        0.0
    } else {
        request
            .wastage_percent
            .unwrap_or_else(|| config.effective_wastage_percent())
    };

    Ok(EstimateOptions {
        volume: VolumeOptions::with_u_profile_factor(u_factor)?,
        wastage_percent,
    })
}

/// Run a full estimate
pub fn run_estimate(config: &Config, request: &EstimateRequest) -> Result<EstimateReport> {
    let joint = resolve_joint(request)?;
    let catalogue = load_catalogue(config)?;
    let cartridge = resolve_cartridge(&catalogue, config, request.cartridge.as_deref())?;
    let options = resolve_options(config, request)?;

    let estimate = service::estimate(&joint, &cartridge, &options)?;
    tracing::info!(
        profile = joint.profile().key(),
        total_volume_ml = estimate.total_volume_ml,
        cartridge = %cartridge.key,
        cartridges_needed = estimate.cartridges_needed,
        "estimate complete"
    );

    Ok(EstimateReport {
        profile_name: joint.profile().label().to_string(),
        estimate,
        generated_at: Local::now(),
    })
}

/// Compare all catalogue options for the requested joint
pub fn run_comparison(config: &Config, request: &EstimateRequest) -> Result<ComparisonReport> {
    let joint = resolve_joint(request)?;
    let catalogue = load_catalogue(config)?;
    let options = resolve_options(config, request)?;

    let base = service::calculate_volume_ml(&joint, &options.volume)?;
    let total_volume_ml = service::apply_wastage(base, options.wastage_percent)?;
    let rows = service::compare_cartridges(total_volume_ml, catalogue.options())?;

    Ok(ComparisonReport {
        joint,
        total_volume_ml,
        rows,
    })
}
