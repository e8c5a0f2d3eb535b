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

//! Plan filtering.
//!
//! Demand-metered and controlled-load plans require hardware most
//! residential sites lack; excluding them mirrors the comparison site's
//! default view, so exported results match what an unauthenticated
//! visitor sees.

use crate::catalog::SourcedPlan;
use gridplan_types::{FilterDecision, FilterStats, RawPlan};
use tracing::debug;

/// True when any tariff period of the primary contract carries demand
/// charges
#[must_use]
pub fn has_demand_charge(plan: &RawPlan) -> bool {
    plan.primary_contract().is_some_and(|contract| {
        contract
            .tariff_period
            .iter()
            .any(|tp| !tp.demand_charge.is_empty())
    })
}

/// True when the primary contract includes controlled-load pricing
#[must_use]
pub fn has_controlled_load(plan: &RawPlan) -> bool {
    plan.primary_contract()
        .is_some_and(|contract| !contract.controlled_load.is_empty())
}

/// Decide one plan's fate. Demand is checked before controlled load, so
/// a plan failing both gates counts once, under the demand gate.
#[must_use]
pub fn decide(
    plan: &RawPlan,
    include_controlled_load: bool,
    include_demand: bool,
) -> FilterDecision {
    if !include_demand && has_demand_charge(plan) {
        return FilterDecision::ExcludedDemand;
    }
    if !include_controlled_load && has_controlled_load(plan) {
        return FilterDecision::ExcludedControlledLoad;
    }
    FilterDecision::Kept
}

/// Partition a batch into usable plans and exclusion counts.
///
/// `stats.kept + stats.demand_filtered + stats.controlled_load_filtered
/// == stats.total` always holds.
#[must_use]
pub fn filter_plans(
    plans: Vec<SourcedPlan>,
    include_controlled_load: bool,
    include_demand: bool,
) -> (Vec<SourcedPlan>, FilterStats) {
    let mut stats = FilterStats {
        total: plans.len(),
        ..FilterStats::default()
    };

    let mut kept = Vec::with_capacity(plans.len());
    for plan in plans {
        match decide(&plan.raw, include_controlled_load, include_demand) {
            FilterDecision::Kept => kept.push(plan),
            FilterDecision::ExcludedDemand => {
                debug!("Excluding '{}' (demand charge)", plan.raw.display_name());
                stats.demand_filtered += 1;
            }
            FilterDecision::ExcludedControlledLoad => {
                debug!("Excluding '{}' (controlled load)", plan.raw.display_name());
                stats.controlled_load_filtered += 1;
            }
        }
    }

    stats.kept = kept.len();
    (kept, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plan(json: serde_json::Value) -> SourcedPlan {
        SourcedPlan {
            raw: serde_json::from_value(json).unwrap(),
            distributor_name: "Test".to_owned(),
        }
    }

    fn plain_plan() -> SourcedPlan {
        plan(json!({ "planData": { "planName": "Plain", "contract": [{}] } }))
    }

    fn demand_plan() -> SourcedPlan {
        plan(json!({
            "planData": { "planName": "Demand", "contract": [{
                "tariffPeriod": [
                    { "demandCharge": [] },
                    { "demandCharge": [{ "rate": 12.0 }] }
                ]
            }] }
        }))
    }

    fn controlled_load_plan() -> SourcedPlan {
        plan(json!({
            "planData": { "planName": "CL", "contract": [{
                "controlledLoad": [{ "singleRate": { "rates": [{ "unitPrice": 15.0 }] } }]
            }] }
        }))
    }

    fn demand_and_cl_plan() -> SourcedPlan {
        plan(json!({
            "planData": { "planName": "Both", "contract": [{
                "tariffPeriod": [{ "demandCharge": [{ "rate": 12.0 }] }],
                "controlledLoad": [{ "singleRate": {} }]
            }] }
        }))
    }

    #[test]
    fn demand_plan_excluded_before_reaching_normalizer() {
        let (kept, stats) = filter_plans(vec![plain_plan(), demand_plan()], false, false);
        assert_eq!(kept.len(), 1);
        assert_eq!(stats.demand_filtered, 1);
        assert_eq!(stats.controlled_load_filtered, 0);
    }

    #[test]
    fn counts_always_add_up() {
        let batches: Vec<Vec<SourcedPlan>> = vec![
            vec![],
            vec![plain_plan()],
            vec![plain_plan(), demand_plan(), controlled_load_plan(), demand_and_cl_plan()],
        ];
        for batch in batches {
            for include_cl in [false, true] {
                for include_demand in [false, true] {
                    let (_, stats) = filter_plans(
                        batch.clone(),
                        include_cl,
                        include_demand,
                    );
                    assert_eq!(
                        stats.kept + stats.demand_filtered + stats.controlled_load_filtered,
                        stats.total
                    );
                }
            }
        }
    }

    #[test]
    fn plan_failing_both_gates_counts_under_demand() {
        let (kept, stats) = filter_plans(vec![demand_and_cl_plan()], false, false);
        assert!(kept.is_empty());
        assert_eq!(stats.demand_filtered, 1);
        assert_eq!(stats.controlled_load_filtered, 0);
    }

    #[test]
    fn switches_are_independent() {
        let batch = vec![demand_plan(), controlled_load_plan()];

        let (kept, stats) = filter_plans(batch.clone(), true, false);
        assert_eq!(kept.len(), 1);
        assert_eq!(stats.demand_filtered, 1);

        let (kept, stats) = filter_plans(batch.clone(), false, true);
        assert_eq!(kept.len(), 1);
        assert_eq!(stats.controlled_load_filtered, 1);

        let (kept, stats) = filter_plans(batch, true, true);
        assert_eq!(kept.len(), 2);
        assert_eq!(stats.kept, 2);
    }

    #[test]
    fn plan_without_contract_passes_the_filter() {
        // Shape problems are the normalizer's concern, not the filter's
        let (kept, stats) = filter_plans(vec![plan(json!({}))], false, false);
        assert_eq!(kept.len(), 1);
        assert_eq!(stats.kept, 1);
    }
}
