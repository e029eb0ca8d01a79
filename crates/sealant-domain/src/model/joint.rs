//! Joint geometry types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use sealant_types::{Error, Result};

use crate::validation::ensure_positive;

/// Cross-section shape of the sealant bead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossSection {
    /// width × depth
    Rectangular,
    /// width × depth / 2
    Triangular,
    /// Rectangular with a curved-void correction factor
    Rounded,
}

/// Joint profile selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointProfile {
    Square,
    Deep,
    Wide,
    V,
    U,
}

impl JointProfile {
    pub const ALL: [JointProfile; 5] = [
        JointProfile::Square,
        JointProfile::Deep,
        JointProfile::Wide,
        JointProfile::V,
        JointProfile::U,
    ];

    pub fn cross_section(self) -> CrossSection {
        match self {
            JointProfile::Square | JointProfile::Deep | JointProfile::Wide => {
                CrossSection::Rectangular
            }
            JointProfile::V => CrossSection::Triangular,
            JointProfile::U => CrossSection::Rounded,
        }
    }

    /// Short machine key (used in share links and JSON)
    pub fn key(self) -> &'static str {
        match self {
            JointProfile::Square => "square",
            JointProfile::Deep => "deep",
            JointProfile::Wide => "wide",
            JointProfile::V => "v",
            JointProfile::U => "u",
        }
    }

    /// Display name
    pub fn label(self) -> &'static str {
        match self {
            JointProfile::Square => "Square Joint",
            JointProfile::Deep => "Deep Joint",
            JointProfile::Wide => "Wide Joint",
            JointProfile::V => "V-Joint",
            JointProfile::U => "U-Joint",
        }
    }
}

impl fmt::Display for JointProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for JointProfile {
    type Err = Error;

    /// Accepts keys ("v"), labels ("V-Joint") and loose variants ("square joint")
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['-', '_', ' '], "");
        let normalized = normalized.strip_suffix("joint").unwrap_or(&normalized);

        match normalized {
            "square" => Ok(JointProfile::Square),
            "deep" => Ok(JointProfile::Deep),
            "wide" => Ok(JointProfile::Wide),
            "v" => Ok(JointProfile::V),
            "u" => Ok(JointProfile::U),
            _ => Err(Error::UnknownProfile(s.to_string())),
        }
    }
}

/// Dimensions of a single joint
///
/// Fields are private so that every instance has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct JointSpec {
    width_mm: f64,
    depth_mm: f64,
    length_m: f64,
    profile: JointProfile,
}

impl JointSpec {
    /// Create a joint, rejecting any non-positive or non-finite dimension
    pub fn new(width_mm: f64, depth_mm: f64, length_m: f64, profile: JointProfile) -> Result<Self> {
        Ok(Self {
            width_mm: ensure_positive("width_mm", width_mm)?,
            depth_mm: ensure_positive("depth_mm", depth_mm)?,
            length_m: ensure_positive("length_m", length_m)?,
            profile,
        })
    }

    pub fn width_mm(&self) -> f64 {
        self.width_mm
    }

    pub fn depth_mm(&self) -> f64 {
        self.depth_mm
    }

    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    pub fn profile(&self) -> JointProfile {
        self.profile
    }

    /// Length converted to millimetres
    pub fn length_mm(&self) -> f64 {
        self.length_m * 1000.0
    }
}
