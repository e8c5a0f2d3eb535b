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

//! Per-plan cost formulas.
//!
//! A [`PlanFormula`] captures the plan-fixed constants once; evaluation
//! against a [`CostInputs`] vector is pure and repeatable, so the same
//! formula set serves an interactive recalculation loop without
//! re-fetching or re-normalizing anything.

use gridplan_types::{FitTier, NormalizedPlan, PricingModel, profile_split, round2};
use tracing::debug;

/// Average days per month used for the monthly projection
pub const AVG_DAYS_PER_MONTH: f64 = 30.44;

/// User-controlled input vector. Every field may change between
/// evaluations of the same formula.
#[derive(Debug, Clone, PartialEq)]
pub struct CostInputs {
    pub daily_usage_kwh: f64,
    pub daily_solar_export_kwh: f64,
    pub usage_profile: String,
    pub controlled_load_enabled: bool,
    pub controlled_load_kwh_per_day: f64,
}

impl Default for CostInputs {
    fn default() -> Self {
        Self {
            daily_usage_kwh: 16.0,
            daily_solar_export_kwh: 0.0,
            usage_profile: "Flat Usage".to_owned(),
            controlled_load_enabled: false,
            controlled_load_kwh_per_day: 0.0,
        }
    }
}

/// One evaluation's component costs, all in GST-inclusive cents per day
/// except the monthly figure, which is in dollars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub supply_cents_day: f64,
    pub usage_cents_day: f64,
    pub solar_credit_cents_day: f64,
    pub controlled_load_cents_day: f64,
    pub net_cents_day: f64,
    pub net_dollars_month: f64,
}

/// Plan-fixed constants of the cost formula.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanFormula {
    pub plan_name: String,
    pub retailer: String,
    pub distributor_name: String,
    pricing_model: PricingModel,
    supply_cents: f64,
    single_rate_cents: f64,
    peak_cents: f64,
    off_peak_cents: f64,
    fit_tiers: Vec<FitTier>,
    controlled_load_rate_cents: f64,
    controlled_load_supply_cents: f64,
}

impl PlanFormula {
    /// Capture a plan's constants. `None` when the plan lacks the rate
    /// data the formula needs: a supply charge, plus a usage rate for
    /// single-rate plans or a peak rate for time-of-use plans.
    #[must_use]
    pub fn build(plan: &NormalizedPlan) -> Option<Self> {
        let supply_cents = plan.supply_charge_cents?;
        let (single_rate_cents, peak_cents, off_peak_cents) = match plan.pricing_model {
            PricingModel::SingleRate => {
                let rate = plan.usage_rate_max_cents?;
                (rate, 0.0, 0.0)
            }
            PricingModel::TimeOfUse => {
                let peak = plan.peak_rate_cents?;
                (0.0, peak, plan.off_peak_rate_cents.unwrap_or(peak))
            }
        };

        Some(Self {
            plan_name: plan.plan_name.clone(),
            retailer: plan.retailer.clone(),
            distributor_name: plan.distributor_name.clone(),
            pricing_model: plan.pricing_model,
            supply_cents,
            single_rate_cents,
            peak_cents,
            off_peak_cents,
            fit_tiers: plan.solar_fit_tiers.clone(),
            controlled_load_rate_cents: plan.controlled_load_rate_cents,
            controlled_load_supply_cents: plan.controlled_load_supply_cents,
        })
    }

    /// Evaluate the formula for one input vector. Pure; the formula can
    /// be re-evaluated any number of times with different inputs.
    #[must_use]
    pub fn evaluate(&self, inputs: &CostInputs) -> CostBreakdown {
        let usage_cents_day = self.usage_cost(inputs);
        let solar_credit_cents_day = self.solar_credit(inputs.daily_solar_export_kwh);
        let controlled_load_cents_day = self.controlled_load_cost(inputs);

        let net_cents_day =
            self.supply_cents + usage_cents_day - solar_credit_cents_day + controlled_load_cents_day;

        CostBreakdown {
            supply_cents_day: self.supply_cents,
            usage_cents_day: round2(usage_cents_day),
            solar_credit_cents_day: round2(solar_credit_cents_day),
            controlled_load_cents_day: round2(controlled_load_cents_day),
            net_cents_day: round2(net_cents_day),
            net_dollars_month: round2(net_cents_day * AVG_DAYS_PER_MONTH / 100.0),
        }
    }

    fn usage_cost(&self, inputs: &CostInputs) -> f64 {
        match self.pricing_model {
            PricingModel::SingleRate => inputs.daily_usage_kwh * self.single_rate_cents,
            PricingModel::TimeOfUse => {
                let (peak_fraction, off_peak_fraction) = profile_split(&inputs.usage_profile);
                inputs.daily_usage_kwh
                    * (peak_fraction * self.peak_cents + off_peak_fraction * self.off_peak_cents)
            }
        }
    }

    /// Tiers are stored capped-first, uncapped/remainder last; the
    /// second tier absorbs whatever export exceeds the first tier's cap.
    fn solar_credit(&self, export_kwh: f64) -> f64 {
        let Some(first) = self.fit_tiers.first() else {
            return 0.0;
        };
        if first.is_capped() {
            let remainder_rate = self.fit_tiers.get(1).map_or(0.0, |t| t.rate_cents);
            let capped = export_kwh.min(first.cap_kwh_per_day);
            let remainder = (export_kwh - first.cap_kwh_per_day).max(0.0);
            capped * first.rate_cents + remainder * remainder_rate
        } else {
            export_kwh * first.rate_cents
        }
    }

    fn controlled_load_cost(&self, inputs: &CostInputs) -> f64 {
        if !inputs.controlled_load_enabled {
            return 0.0;
        }
        inputs.controlled_load_kwh_per_day * self.controlled_load_rate_cents
            + self.controlled_load_supply_cents
    }
}

/// Build formulas for a whole batch, skipping plans without enough rate
/// data. Order is preserved.
#[must_use]
pub fn build_formulas(plans: &[NormalizedPlan]) -> Vec<PlanFormula> {
    let mut formulas = Vec::with_capacity(plans.len());
    for plan in plans {
        match PlanFormula::build(plan) {
            Some(formula) => formulas.push(formula),
            None => debug!("'{}' lacks rate data, skipping cost formula", plan.plan_name),
        }
    }
    formulas
}
