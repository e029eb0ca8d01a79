//! Sealant volume calculation
//!
//! Converts joint geometry into a bead volume in millilitres.
//! Dimensions are validated by `JointSpec::new`; the functions here guard
//! the tunable U-profile factor and a product that overflows `f64`.

use sealant_types::{Error, Result};

use crate::model::{CrossSection, JointSpec};

/// U-profile correction applied when none is configured (no adjustment)
pub const DEFAULT_U_PROFILE_FACTOR: f64 = 1.0;

/// mm³ per millilitre
const MM3_PER_ML: f64 = 1000.0;

/// Tunables for the volume calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeOptions {
    /// Multiplier on the rectangular area for rounded (U) joints
    pub u_profile_factor: f64,
}

impl Default for VolumeOptions {
    fn default() -> Self {
        Self {
            u_profile_factor: DEFAULT_U_PROFILE_FACTOR,
        }
    }
}

impl VolumeOptions {
    pub fn with_u_profile_factor(u_profile_factor: f64) -> Result<Self> {
        if !u_profile_factor.is_finite() || u_profile_factor < 1.0 {
            return Err(Error::invalid_input(
                "u_profile_factor",
                u_profile_factor,
                "must be a finite number of at least 1.0",
            ));
        }
        Ok(Self { u_profile_factor })
    }
}

/// Cross-sectional area of the bead
///
/// # Formula
/// - rectangular: width × depth
/// - triangular:  width × depth / 2
/// - rounded:     width × depth × u_profile_factor
///
/// # Returns
/// Area in mm²
pub fn cross_section_area_mm2(joint: &JointSpec, options: &VolumeOptions) -> f64 {
    let rectangle = joint.width_mm() * joint.depth_mm();
    match joint.profile().cross_section() {
        CrossSection::Rectangular => rectangle,
        CrossSection::Triangular => rectangle / 2.0,
        CrossSection::Rounded => rectangle * options.u_profile_factor,
    }
}

/// Sealant volume for a joint
///
/// # Formula
/// volume_ml = area_mm2 × (length_m × 1000) / 1000
///
/// # Examples
/// ```
/// use sealant_domain::model::{JointProfile, JointSpec};
/// use sealant_domain::service::volume_calculator::{calculate_volume_ml, VolumeOptions};
///
/// let joint = JointSpec::new(12.0, 6.0, 1.0, JointProfile::Square).unwrap();
/// let volume = calculate_volume_ml(&joint, &VolumeOptions::default()).unwrap();
/// assert!((volume - 72.0).abs() < 1e-9);
/// ```
pub fn calculate_volume_ml(joint: &JointSpec, options: &VolumeOptions) -> Result<f64> {
    let area = cross_section_area_mm2(joint, options);
    let volume_mm3 = area * joint.length_mm();
    let volume_ml = volume_mm3 / MM3_PER_ML;

    if !volume_ml.is_finite() {
        return Err(Error::invalid_input(
            "joint",
            format!(
                "{} x {} mm x {} m",
                joint.width_mm(),
                joint.depth_mm(),
                joint.length_m()
            ),
            "dimensions are too large to compute a volume",
        ));
    }

    tracing::debug!(
        profile = joint.profile().key(),
        area_mm2 = area,
        volume_ml,
        "calculated joint volume"
    );

    Ok(volume_ml)
}
