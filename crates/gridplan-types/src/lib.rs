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

pub mod labels;
pub mod market;
pub mod normalized;
pub mod plan;
pub mod profile;

pub use labels::{FeeType, MeterType, PaymentOption, TermType};
pub use market::{CustomerType, Distributor, FuelType, Location};
pub use normalized::{EstimatedCosts, FilterDecision, FilterStats, FitTier, NormalizedPlan};
pub use plan::{Contract, PricingModel, RawPlan, TariffPeriod};
pub use profile::{USAGE_PROFILES, UsageProfile, is_known_profile, profile_split};

/// The API reports tariff charges tax-exclusive; public-facing prices
/// include the flat 10% GST. Solar feed-in credits are GST-exempt and
/// must never be multiplied.
pub const GST_MULTIPLIER: f64 = 1.1;

/// Round to 2 decimal places at the point of extraction, so every
/// downstream consumer sees the same stable value.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_stabilises_gst_artifacts() {
        assert_eq!(round2(90.0 * GST_MULTIPLIER), 99.0);
        assert_eq!(round2(25.0 * GST_MULTIPLIER), 27.5);
        assert_eq!(round2(35.0 * GST_MULTIPLIER), 38.5);
        assert_eq!(round2(20.0 * GST_MULTIPLIER), 22.0);
    }
}
