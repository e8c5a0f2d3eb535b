// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of GridPlan.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

//! Usage-profile presets for the time-of-use cost model.
//!
//! Each preset splits daily usage between the peak and off-peak windows.
//! Actual TOU schedules vary by distributor; these are modelling
//! heuristics, not billing data.

/// A named peak/off-peak split. Fractions always sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UsageProfile {
    pub name: &'static str,
    pub peak_fraction: f64,
    pub off_peak_fraction: f64,
    pub description: &'static str,
}

pub const USAGE_PROFILES: [UsageProfile; 5] = [
    UsageProfile {
        name: "Flat Usage",
        peak_fraction: 0.50,
        off_peak_fraction: 0.50,
        description: "Even usage across peak and off-peak (50/50)",
    },
    UsageProfile {
        name: "Slight Peak",
        peak_fraction: 0.60,
        off_peak_fraction: 0.40,
        description: "Slightly more usage during peak hours (60/40)",
    },
    UsageProfile {
        name: "Heavy Peak",
        peak_fraction: 0.75,
        off_peak_fraction: 0.25,
        description: "Most usage during peak hours (75/25)",
    },
    UsageProfile {
        name: "Off-Peak Heavy",
        peak_fraction: 0.30,
        off_peak_fraction: 0.70,
        description: "Most usage shifted to off-peak (30/70)",
    },
    UsageProfile {
        name: "Battery Optimised",
        peak_fraction: 0.10,
        off_peak_fraction: 0.90,
        description: "Battery covers peak; almost all off-peak (10/90)",
    },
];

/// Look up a profile by name. Unknown names fall back to an even split
/// so the cost model always stays evaluable.
#[must_use]
pub fn profile_split(name: &str) -> (f64, f64) {
    USAGE_PROFILES
        .iter()
        .find(|p| p.name == name)
        .map_or((0.5, 0.5), |p| (p.peak_fraction, p.off_peak_fraction))
}

/// True when `name` matches one of the presets
#[must_use]
pub fn is_known_profile(name: &str) -> bool {
    USAGE_PROFILES.iter().any(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_sum_to_one() {
        for profile in &USAGE_PROFILES {
            assert!(
                (profile.peak_fraction + profile.off_peak_fraction - 1.0).abs() < f64::EPSILON,
                "profile {} does not sum to 1.0",
                profile.name
            );
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(profile_split("Heavy Peak"), (0.75, 0.25));
        assert_eq!(profile_split("Battery Optimised"), (0.10, 0.90));
    }

    #[test]
    fn unknown_profile_falls_back_to_even_split() {
        assert_eq!(profile_split("Nonsense"), (0.5, 0.5));
        assert!(!is_known_profile("Nonsense"));
        assert!(is_known_profile("Flat Usage"));
    }
}
