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

//! CSV export of comparison tables and evaluated cost breakdowns.

pub mod calculator;
pub mod comparison;
pub mod error;
pub mod filename;

pub use calculator::write_calculator_csv;
pub use comparison::write_comparison_csv;
pub use error::{ExportError, ExportResult};
pub use filename::export_filename;

#[cfg(test)]
mod tests {
    use super::*;
    use gridplan_core::cost::{CostInputs, build_formulas};
    use gridplan_types::{NormalizedPlan, PricingModel};

    fn plan(name: &str, rate: f64) -> NormalizedPlan {
        NormalizedPlan {
            plan_id: format!("ID-{name}"),
            plan_name: name.to_owned(),
            retailer: "Acme Energy".to_owned(),
            distributor_name: "Ausgrid".to_owned(),
            pricing_model: PricingModel::SingleRate,
            supply_charge_cents: Some(99.0),
            usage_rate_min_cents: Some(rate),
            usage_rate_max_cents: Some(rate),
            solar_fit_details: "No solar feed-in tariff".to_owned(),
            ..NormalizedPlan::default()
        }
    }

    #[test]
    fn comparison_csv_has_one_row_per_plan() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("comparison.csv");
        write_comparison_csv(&path, &[plan("Alpha", 27.5), plan("Beta", 30.0)]).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Plan ID,Plan Name,Retailer,Distributor"));
        assert!(lines[1].contains("Alpha"));
        assert!(lines[1].contains("27.5"));
        assert!(lines[2].contains("Beta"));
    }

    #[test]
    fn calculator_csv_is_sorted_cheapest_first() {
        let plans = vec![plan("Expensive", 40.0), plan("Cheap", 20.0)];
        let formulas = build_formulas(&plans);
        assert_eq!(formulas.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculator.csv");
        write_calculator_csv(&path, &formulas, &CostInputs::default()).unwrap();

        let body = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Cheap,"));
        assert!(lines[2].starts_with("Expensive,"));
    }

    #[test]
    fn empty_batches_still_produce_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        write_calculator_csv(&path, &[], &CostInputs::default()).unwrap();
        let body = std::fs::read_to_string(&path).unwrap();
        assert_eq!(body.lines().count(), 1);
    }
}
