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

use chrono::{DateTime, Local};
use gridplan_types::FuelType;

/// Distributor labels that describe a fan-out rather than a single
/// distributor; they never appear in filenames.
const COLLECTIVE_LABELS: [&str; 2] = ["All / Auto", "Auto"];

/// `energy_plans_<postcode>_<fuel>[_<distributor>]_<timestamp>.csv`
#[must_use]
pub fn export_filename(
    postcode: &str,
    fuel: FuelType,
    distributor_label: Option<&str>,
    timestamp: DateTime<Local>,
) -> String {
    let dist_suffix = distributor_label
        .filter(|label| !label.is_empty() && !COLLECTIVE_LABELS.contains(label))
        .map(|label| format!("_{}", sanitize(label)))
        .unwrap_or_default();

    format!(
        "energy_plans_{postcode}_{}{dist_suffix}_{}.csv",
        fuel.as_code(),
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Keep alphanumerics, spaces and hyphens; everything else becomes an
/// underscore. Spaces collapse to underscores and the result is capped
/// at 30 characters.
fn sanitize(label: &str) -> String {
    let safe: String = label
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == ' ' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    safe.trim().replace(' ', "_").chars().take(30).collect()
}
