//! Joint profile presets with typical dimensions

use sealant_domain::JointProfile;
use serde::Serialize;
use std::sync::LazyLock;

/// Typical dimensions for a joint profile
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePreset {
    pub profile: JointProfile,
    /// Display name
    pub name: &'static str,
    pub typical_width_mm: f64,
    pub typical_depth_mm: f64,
    pub description: &'static str,
}

/// Standard joint profiles
pub static PROFILE_PRESETS: LazyLock<Vec<ProfilePreset>> = LazyLock::new(|| {
    vec![
        ProfilePreset {
            profile: JointProfile::Square,
            name: "Square Joint",
            typical_width_mm: 10.0,
            typical_depth_mm: 10.0,
            description: "Standard square profile, equal width and depth",
        },
        ProfilePreset {
            profile: JointProfile::Deep,
            name: "Deep Joint",
            typical_width_mm: 10.0,
            typical_depth_mm: 20.0,
            description: "Deep profile, depth greater than width",
        },
        ProfilePreset {
            profile: JointProfile::Wide,
            name: "Wide Joint",
            typical_width_mm: 20.0,
            typical_depth_mm: 10.0,
            description: "Wide profile, width greater than depth",
        },
        ProfilePreset {
            profile: JointProfile::V,
            name: "V-Joint",
            typical_width_mm: 10.0,
            typical_depth_mm: 15.0,
            description: "V-shaped profile, commonly used in corners",
        },
        ProfilePreset {
            profile: JointProfile::U,
            name: "U-Joint",
            typical_width_mm: 15.0,
            typical_depth_mm: 15.0,
            description: "U-shaped profile, rounded bottom",
        },
    ]
});

/// Get the preset for a profile
pub fn get_profile_preset(profile: JointProfile) -> Option<&'static ProfilePreset> {
    PROFILE_PRESETS.iter().find(|p| p.profile == profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_has_preset() {
        for profile in JointProfile::ALL {
            let preset = get_profile_preset(profile).unwrap();
            assert_eq!(preset.name, profile.label());
            assert!(preset.typical_width_mm > 0.0);
            assert!(preset.typical_depth_mm > 0.0);
        }
    }

    #[test]
    fn test_deep_is_deeper_than_wide() {
        let deep = get_profile_preset(JointProfile::Deep).unwrap();
        assert!(deep.typical_depth_mm > deep.typical_width_mm);
        let wide = get_profile_preset(JointProfile::Wide).unwrap();
        assert!(wide.typical_width_mm > wide.typical_depth_mm);
    }
}
