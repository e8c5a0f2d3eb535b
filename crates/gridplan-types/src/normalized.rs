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

use crate::plan::PricingModel;
use serde::{Deserialize, Serialize};

/// One solar feed-in tier: a rate and a daily volume cap.
///
/// `cap_kwh_per_day == 0` means "uncapped / applies to the remainder".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitTier {
    /// c/kWh, GST-exempt
    pub rate_cents: f64,
    /// kWh/day; 0 = uncapped
    pub cap_kwh_per_day: f64,
}

impl FitTier {
    #[must_use]
    pub fn new(rate_cents: f64, cap_kwh_per_day: f64) -> Self {
        Self {
            rate_cents,
            cap_kwh_per_day,
        }
    }

    #[must_use]
    pub fn is_capped(&self) -> bool {
        self.cap_kwh_per_day > 0.0
    }
}

/// Estimated yearly costs relayed verbatim from the API's cost engine
/// for the three benchmark usage tiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedCosts {
    pub low_with_discounts: Option<f64>,
    pub medium_with_discounts: Option<f64>,
    pub high_with_discounts: Option<f64>,
    pub low_without_discounts: Option<f64>,
    pub medium_without_discounts: Option<f64>,
    pub high_without_discounts: Option<f64>,
}

/// The canonical flat record one raw plan normalizes into.
///
/// All charges and usage rates are GST-inclusive c/kWh or c/day, rounded
/// to 2 decimal places at extraction. Solar feed-in rates are GST-exempt
/// and carried as reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPlan {
    pub plan_id: String,
    pub plan_name: String,
    pub retailer: String,
    /// "N/A" when the plan was fetched without a distributor scope
    pub distributor_name: String,
    pub url: String,
    pub tariff_type: String,
    pub pricing_model: PricingModel,
    pub contract_term: String,
    pub benefit_period: String,

    /// c/day inc. GST; `None` when the contract has no tariff period
    pub supply_charge_cents: Option<f64>,
    /// Bounds over all applicable usage-rate blocks, inc. GST.
    /// Invariant: min <= max whenever both are present.
    pub usage_rate_min_cents: Option<f64>,
    pub usage_rate_max_cents: Option<f64>,
    /// Populated only for time-of-use plans: peak = max, off-peak = min
    /// of the same rate set
    pub peak_rate_cents: Option<f64>,
    pub off_peak_rate_cents: Option<f64>,

    /// 0.0 when no qualifying retailer feed-in entry exists (never None)
    pub solar_fit_min_cents: f64,
    pub solar_fit_max_cents: f64,
    /// Structured tiers, ordered capped-first, uncapped/remainder last
    pub solar_fit_tiers: Vec<FitTier>,
    /// Human-readable summary of the same tiers
    pub solar_fit_details: String,

    /// Display summary of every controlled-load entry, "N/A" when none
    pub controlled_load: String,
    /// Rate/supply from the first controlled-load entry only, inc. GST;
    /// 0.0 when absent
    pub controlled_load_rate_cents: f64,
    pub controlled_load_supply_cents: f64,

    pub discounts: String,
    pub fees: String,
    pub payment_options: String,
    pub meter_types: String,

    pub est_cost_year: EstimatedCosts,
}

/// Per-plan filter outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Kept,
    /// Requires a demand-capable meter
    ExcludedDemand,
    /// Requires a separately metered controlled-load circuit
    ExcludedControlledLoad,
}

/// Aggregate filter counts. `kept + demand_filtered +
/// controlled_load_filtered == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterStats {
    pub total: usize,
    pub demand_filtered: usize,
    pub controlled_load_filtered: usize,
    pub kept: usize,
}
