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

//! Evaluated cost table for one input vector, cheapest plan first.

use std::path::Path;

use gridplan_core::cost::{CostInputs, PlanFormula};
use tracing::info;

use crate::error::ExportResult;

pub const CALCULATOR_COLUMNS: [&str; 9] = [
    "Plan Name",
    "Retailer",
    "Distributor",
    "Supply (c/day)",
    "Usage Cost/day (c)",
    "Solar Credit/day (c)",
    "CL Cost/day (c)",
    "Net Cost/day (c)",
    "Net Cost/month ($)",
];

/// Evaluate every formula against `inputs` and write the results to
/// `path`, sorted by monthly net cost ascending.
pub fn write_calculator_csv(
    path: &Path,
    formulas: &[PlanFormula],
    inputs: &CostInputs,
) -> ExportResult<()> {
    let mut rows: Vec<_> = formulas
        .iter()
        .map(|formula| (formula, formula.evaluate(inputs)))
        .collect();
    rows.sort_by(|a, b| {
        a.1.net_dollars_month
            .partial_cmp(&b.1.net_dollars_month)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(CALCULATOR_COLUMNS)?;
    for (formula, breakdown) in rows {
        writer.write_record([
            formula.plan_name.clone(),
            formula.retailer.clone(),
            formula.distributor_name.clone(),
            breakdown.supply_cents_day.to_string(),
            breakdown.usage_cents_day.to_string(),
            breakdown.solar_credit_cents_day.to_string(),
            breakdown.controlled_load_cents_day.to_string(),
            breakdown.net_cents_day.to_string(),
            breakdown.net_dollars_month.to_string(),
        ])?;
    }
    writer.flush()?;
    info!("Wrote {} cost rows to {}", formulas.len(), path.display());
    Ok(())
}
