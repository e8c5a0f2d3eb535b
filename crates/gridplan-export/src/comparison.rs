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

//! Full comparison table, one row per normalized plan.

use std::path::Path;

use gridplan_types::NormalizedPlan;
use tracing::info;

use crate::error::ExportResult;

pub const COMPARISON_COLUMNS: [&str; 30] = [
    "Plan ID",
    "Plan Name",
    "Retailer",
    "Distributor",
    "Plan URL",
    "Tariff Type",
    "Pricing Model",
    "Contract Term",
    "Benefit Period",
    "Supply Charge (c/day)",
    "Usage Rate Min (c/kWh)",
    "Usage Rate Max (c/kWh)",
    "Peak Rate (c/kWh)",
    "Off-Peak Rate (c/kWh)",
    "Solar FIT Min (c/kWh)",
    "Solar FIT Max (c/kWh)",
    "Solar FIT Details",
    "Controlled Load",
    "CL Rate (c/kWh)",
    "CL Supply (c/day)",
    "Discounts",
    "Fees",
    "Payment Options",
    "Meter Types",
    "Est. Cost/Year (Low Usage)",
    "Est. Cost/Year (Medium Usage)",
    "Est. Cost/Year (High Usage)",
    "Est. Cost/Year (Low, No Disc.)",
    "Est. Cost/Year (Medium, No Disc.)",
    "Est. Cost/Year (High, No Disc.)",
];

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the comparison table to `path`.
pub fn write_comparison_csv(path: &Path, plans: &[NormalizedPlan]) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(COMPARISON_COLUMNS)?;

    for plan in plans {
        writer.write_record([
            plan.plan_id.clone(),
            plan.plan_name.clone(),
            plan.retailer.clone(),
            plan.distributor_name.clone(),
            plan.url.clone(),
            plan.tariff_type.clone(),
            plan.pricing_model.as_code().to_owned(),
            plan.contract_term.clone(),
            plan.benefit_period.clone(),
            opt(plan.supply_charge_cents),
            opt(plan.usage_rate_min_cents),
            opt(plan.usage_rate_max_cents),
            opt(plan.peak_rate_cents),
            opt(plan.off_peak_rate_cents),
            plan.solar_fit_min_cents.to_string(),
            plan.solar_fit_max_cents.to_string(),
            plan.solar_fit_details.clone(),
            plan.controlled_load.clone(),
            plan.controlled_load_rate_cents.to_string(),
            plan.controlled_load_supply_cents.to_string(),
            plan.discounts.clone(),
            plan.fees.clone(),
            plan.payment_options.clone(),
            plan.meter_types.clone(),
            opt(plan.est_cost_year.low_with_discounts),
            opt(plan.est_cost_year.medium_with_discounts),
            opt(plan.est_cost_year.high_with_discounts),
            opt(plan.est_cost_year.low_without_discounts),
            opt(plan.est_cost_year.medium_without_discounts),
            opt(plan.est_cost_year.high_without_discounts),
        ])?;
    }
    writer.flush()?;
    info!("Wrote {} plans to {}", plans.len(), path.display());
    Ok(())
}
