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

//! Tariff normalization.
//!
//! Turns one API-shaped plan into the canonical flat record. Every
//! charge and usage rate is converted to GST-inclusive cents and rounded
//! to 2 decimal places here, at extraction, so downstream consumers see
//! stable values. Solar feed-in rates are GST-exempt and left untouched.

use crate::error::{CoreError, CoreResult};
use crate::fit;
use gridplan_types::plan::{Contract, FitScheme};
use gridplan_types::{
    EstimatedCosts, FeeType, FitTier, GST_MULTIPLIER, MeterType, NormalizedPlan, PaymentOption,
    PricingModel, RawPlan, TermType, round2,
};

/// Normalize one raw plan.
///
/// Total over well-formed input; a plan missing its plan data or primary
/// contract yields [`CoreError::MalformedPlan`] carrying the plan's
/// display name.
pub fn normalize(
    plan: &RawPlan,
    postcode: &str,
    distributor_name: Option<&str>,
) -> CoreResult<NormalizedPlan> {
    let plan_data = plan.plan_data.as_ref().ok_or_else(|| malformed(plan, "missing plan data"))?;
    let contract = plan_data
        .contract
        .first()
        .ok_or_else(|| malformed(plan, "missing primary contract"))?;

    let rates = usage_rates(contract);
    let usage_rate_min = rates.iter().copied().reduce(f64::min);
    let usage_rate_max = rates.iter().copied().reduce(f64::max);
    let is_tou = contract.pricing_model == PricingModel::TimeOfUse;

    let tiers = fit_tiers(contract);
    let fit_rates: Vec<f64> = tiers.iter().map(|t| t.rate_cents).collect();

    Ok(NormalizedPlan {
        plan_id: plan_data.plan_id.clone(),
        plan_name: plan_data.plan_name.clone(),
        retailer: plan_data.retailer_name.clone(),
        distributor_name: distributor_name
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
            .to_owned(),
        url: build_plan_url(&plan_data.plan_id, postcode),
        tariff_type: plan_data.tariff_type.clone(),
        pricing_model: contract.pricing_model,
        contract_term: term_summary(contract),
        benefit_period: benefit_summary(contract),
        supply_charge_cents: supply_charge(contract),
        usage_rate_min_cents: usage_rate_min,
        usage_rate_max_cents: usage_rate_max,
        peak_rate_cents: usage_rate_max.filter(|_| is_tou),
        off_peak_rate_cents: usage_rate_min.filter(|_| is_tou),
        solar_fit_min_cents: fit_rates.iter().copied().reduce(f64::min).unwrap_or(0.0),
        solar_fit_max_cents: fit_rates.iter().copied().reduce(f64::max).unwrap_or(0.0),
        solar_fit_details: fit::format_tiers(&tiers),
        solar_fit_tiers: tiers,
        controlled_load: controlled_load_summary(contract),
        controlled_load_rate_cents: controlled_load_rate(contract),
        controlled_load_supply_cents: controlled_load_supply(contract),
        discounts: discount_summary(contract),
        fees: fee_summary(contract),
        payment_options: payment_summary(contract),
        meter_types: meter_summary(contract),
        est_cost_year: estimated_costs(plan),
    })
}

fn malformed(plan: &RawPlan, reason: &str) -> CoreError {
    CoreError::MalformedPlan {
        plan_name: plan.display_name().to_owned(),
        reason: reason.to_owned(),
    }
}

/// Plan detail URL on the public comparison site
#[must_use]
pub fn build_plan_url(plan_id: &str, postcode: &str) -> String {
    format!(
        "https://www.energymadeeasy.gov.au/plan?id={plan_id}&postcode={postcode}\
         &pricingPeriod=yearly&withDiscounts=true&benchmarkUsage=medium"
    )
}

fn gst_inclusive(ex_gst: f64) -> f64 {
    round2(ex_gst * GST_MULTIPLIER)
}

/// Daily supply charge in c/day inc. GST; `None` when the contract has
/// no tariff period or the period carries no charge
fn supply_charge(contract: &Contract) -> Option<f64> {
    contract
        .tariff_period
        .first()?
        .daily_supply_charge
        .map(gst_inclusive)
}

/// All usage rates from the FIRST tariff period, inc. GST. Subsequent
/// periods are future-dated tariff changes and are not consulted.
fn usage_rates(contract: &Contract) -> Vec<f64> {
    let Some(period) = contract.tariff_period.first() else {
        return Vec::new();
    };

    match contract.pricing_model {
        PricingModel::TimeOfUse => period
            .tou_block
            .iter()
            .flat_map(|block| &block.block_rate)
            .map(|br| gst_inclusive(br.unit_price))
            .collect(),
        PricingModel::SingleRate => period
            .block_rate
            .iter()
            .map(|br| gst_inclusive(br.unit_price))
            .collect(),
    }
}

/// Structured feed-in tiers from retailer entries only, ordered
/// capped-first.
///
/// Government/legacy scheme entries are excluded by design: they are not
/// part of the retailer's offer and would overstate the real return.
/// Zero-valued entries are dropped entirely.
fn fit_tiers(contract: &Contract) -> Vec<FitTier> {
    let mut tiers = Vec::new();
    for entry in &contract.solar_fit {
        if entry.scheme == FitScheme::Government {
            continue;
        }
        if let Some(rate) = entry.rate {
            if rate > 0.0 {
                tiers.push(FitTier::new(round2(rate), 0.0));
            }
            continue;
        }
        for tier in &entry.single_tariff_rates {
            if tier.unit_price > 0.0 {
                tiers.push(FitTier::new(round2(tier.unit_price), round2(tier.volume)));
            }
        }
    }
    fit::order_tiers(&mut tiers);
    tiers
}

/// Display summary of every controlled-load entry
fn controlled_load_summary(contract: &Contract) -> String {
    if contract.controlled_load.is_empty() {
        return "N/A".to_owned();
    }
    let mut parts = Vec::new();
    for entry in &contract.controlled_load {
        let Some(single_rate) = &entry.single_rate else {
            continue;
        };
        let name = single_rate.display_name.as_deref().unwrap_or("Controlled Load");
        let rates: Vec<String> = single_rate
            .rates
            .iter()
            .map(|r| format!("{:.2}c/kWh", r.unit_price * GST_MULTIPLIER))
            .collect();
        let mut part = format!("{name}: {}", rates.join(", "));
        if let Some(charge) = single_rate.daily_supply_charge.filter(|c| *c != 0.0) {
            part.push_str(&format!(" + {:.2}c/day supply", charge * GST_MULTIPLIER));
        }
        parts.push(part);
    }
    if parts.is_empty() {
        "N/A".to_owned()
    } else {
        parts.join("; ")
    }
}

/// Usage rate of the first controlled-load entry in c/kWh inc. GST,
/// 0.0 when absent
fn controlled_load_rate(contract: &Contract) -> f64 {
    contract
        .controlled_load
        .first()
        .and_then(|cl| cl.single_rate.as_ref())
        .and_then(|sr| sr.rates.first())
        .map_or(0.0, |rate| gst_inclusive(rate.unit_price))
}

/// Daily supply charge of the first controlled-load entry in c/day inc.
/// GST, 0.0 when absent
fn controlled_load_supply(contract: &Contract) -> f64 {
    contract
        .controlled_load
        .first()
        .and_then(|cl| cl.single_rate.as_ref())
        .and_then(|sr| sr.daily_supply_charge)
        .filter(|charge| *charge != 0.0)
        .map_or(0.0, gst_inclusive)
}

fn discount_summary(contract: &Contract) -> String {
    if contract.discount.is_empty() {
        return "None".to_owned();
    }
    let parts: Vec<String> = contract
        .discount
        .iter()
        .map(|d| {
            let name = d.name.as_deref().unwrap_or("Discount");
            if let Some(pct) = d.discount_percent.filter(|p| *p != 0.0) {
                format!("{name} ({pct}%)")
            } else if let Some(amount) = d.discount_amount.filter(|a| *a != 0.0) {
                format!("{name} (${amount})")
            } else {
                name.to_owned()
            }
        })
        .collect();
    parts.join("; ")
}

fn fee_summary(contract: &Contract) -> String {
    if contract.fee.is_empty() {
        return "None".to_owned();
    }
    let parts: Vec<String> = contract
        .fee
        .iter()
        .map(|fee| {
            let label = FeeType::from_code(fee.fee_type.as_deref().unwrap_or("Unknown"));
            format!("{label}: ${:.2}", fee.amount.unwrap_or(0.0))
        })
        .collect();
    parts.join("; ")
}

fn payment_summary(contract: &Contract) -> String {
    if contract.payment_option.is_empty() {
        return "N/A".to_owned();
    }
    let labels: Vec<String> = contract
        .payment_option
        .iter()
        .map(|code| PaymentOption::from_code(code).label().to_owned())
        .collect();
    labels.join(", ")
}

/// Meter-type labels, deduplicated preserving first occurrence
fn meter_summary(contract: &Contract) -> String {
    if contract.meter_type.is_empty() {
        return "N/A".to_owned();
    }
    let mut unique: Vec<String> = Vec::new();
    for code in &contract.meter_type {
        let label = MeterType::from_code(code).label().to_owned();
        if !unique.contains(&label) {
            unique.push(label);
        }
    }
    unique.join(", ")
}

fn benefit_summary(contract: &Contract) -> String {
    contract
        .benefit_period
        .as_deref()
        .filter(|bp| !bp.is_empty())
        .unwrap_or("N/A")
        .to_owned()
}

fn term_summary(contract: &Contract) -> String {
    contract
        .term_type
        .as_deref()
        .filter(|term| !term.is_empty())
        .map_or_else(|| "N/A".to_owned(), |term| TermType::from_code(term).label().to_owned())
}

/// Relay the API's own yearly cost projections for the fuel the plan is
/// priced under; the core never recomputes these
fn estimated_costs(plan: &RawPlan) -> EstimatedCosts {
    let fuel_costs = plan.pcr.as_ref().and_then(|pcr| {
        let is_electricity = plan
            .plan_data
            .as_ref()
            .is_some_and(|pd| pd.fuel_type == "E");
        if is_electricity {
            pcr.costs.electricity.as_ref()
        } else {
            pcr.costs.gas.as_ref()
        }
    });

    let Some(costs) = fuel_costs else {
        return EstimatedCosts::default();
    };
    fn yearly(
        tier: Option<&gridplan_types::plan::UsageTierCost>,
    ) -> Option<&gridplan_types::plan::YearlyCost> {
        tier.and_then(|t| t.yearly.as_ref())
    }

    EstimatedCosts {
        low_with_discounts: yearly(costs.small.as_ref()).and_then(|y| y.all_discounts),
        medium_with_discounts: yearly(costs.medium.as_ref()).and_then(|y| y.all_discounts),
        high_with_discounts: yearly(costs.large.as_ref()).and_then(|y| y.all_discounts),
        low_without_discounts: yearly(costs.small.as_ref()).and_then(|y| y.no_discounts),
        medium_without_discounts: yearly(costs.medium.as_ref()).and_then(|y| y.no_discounts),
        high_without_discounts: yearly(costs.large.as_ref()).and_then(|y| y.no_discounts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plan(json: serde_json::Value) -> RawPlan {
        serde_json::from_value(json).unwrap()
    }

    fn single_rate_plan() -> RawPlan {
        plan(json!({
            "planData": {
                "planId": "SR1",
                "planName": "Simple Saver",
                "retailerName": "Acme Energy",
                "fuelType": "E",
                "tariffType": "S",
                "contract": [{
                    "pricingModel": "SR",
                    "tariffPeriod": [{
                        "dailySupplyCharge": 90.0,
                        "blockRate": [{ "unitPrice": 25.0 }]
                    }]
                }]
            }
        }))
    }

    #[test]
    fn single_rate_scenario() {
        let normalized = normalize(&single_rate_plan(), "2000", Some("Ausgrid")).unwrap();
        assert_eq!(normalized.supply_charge_cents, Some(99.0));
        assert_eq!(normalized.usage_rate_min_cents, Some(27.5));
        assert_eq!(normalized.usage_rate_max_cents, Some(27.5));
        assert_eq!(normalized.peak_rate_cents, None);
        assert_eq!(normalized.off_peak_rate_cents, None);
        assert_eq!(normalized.pricing_model, PricingModel::SingleRate);
        assert_eq!(normalized.solar_fit_max_cents, 0.0);
        assert!(normalized.solar_fit_tiers.is_empty());
        assert_eq!(normalized.controlled_load_rate_cents, 0.0);
    }

    #[test]
    fn time_of_use_scenario() {
        let raw = plan(json!({
            "planData": {
                "planId": "TOU1",
                "planName": "Day & Night",
                "retailerName": "Acme Energy",
                "fuelType": "E",
                "contract": [{
                    "pricingModel": "TOU",
                    "tariffPeriod": [{
                        "dailySupplyCharge": 100.0,
                        "touBlock": [
                            { "blockRate": [{ "unitPrice": 20.0 }] },
                            { "blockRate": [{ "unitPrice": 35.0 }] }
                        ]
                    }]
                }]
            }
        }));
        let normalized = normalize(&raw, "2000", None).unwrap();
        assert_eq!(normalized.peak_rate_cents, Some(38.5));
        assert_eq!(normalized.off_peak_rate_cents, Some(22.0));
        assert_eq!(normalized.usage_rate_min_cents, Some(22.0));
        assert_eq!(normalized.usage_rate_max_cents, Some(38.5));
        assert_eq!(normalized.distributor_name, "N/A");
    }

    #[test]
    fn only_first_tariff_period_is_consulted() {
        let raw = plan(json!({
            "planData": {
                "planName": "Changing",
                "fuelType": "E",
                "contract": [{
                    "pricingModel": "SR",
                    "tariffPeriod": [
                        { "dailySupplyCharge": 90.0, "blockRate": [{ "unitPrice": 25.0 }] },
                        { "dailySupplyCharge": 200.0, "blockRate": [{ "unitPrice": 99.0 }] }
                    ]
                }]
            }
        }));
        let normalized = normalize(&raw, "2000", None).unwrap();
        assert_eq!(normalized.supply_charge_cents, Some(99.0));
        assert_eq!(normalized.usage_rate_max_cents, Some(27.5));
    }

    #[test]
    fn rate_bounds_are_monotonic() {
        let raw = plan(json!({
            "planData": {
                "planName": "Blocks",
                "fuelType": "E",
                "contract": [{
                    "pricingModel": "SR",
                    "tariffPeriod": [{
                        "dailySupplyCharge": 80.0,
                        "blockRate": [
                            { "unitPrice": 31.0 },
                            { "unitPrice": 24.0 },
                            { "unitPrice": 28.5 }
                        ]
                    }]
                }]
            }
        }));
        let normalized = normalize(&raw, "2000", None).unwrap();
        let min = normalized.usage_rate_min_cents.unwrap();
        let max = normalized.usage_rate_max_cents.unwrap();
        assert!(min <= max);
        assert_eq!(min, 26.4);
        assert_eq!(max, 34.1);
    }

    #[test]
    fn government_fit_entries_are_excluded() {
        let raw = plan(json!({
            "planData": {
                "planName": "Legacy Solar",
                "fuelType": "E",
                "contract": [{
                    "tariffPeriod": [{ "dailySupplyCharge": 90.0 }],
                    "solarFit": [{ "type": "G", "rate": 44.0 }]
                }]
            }
        }));
        let normalized = normalize(&raw, "4000", None).unwrap();
        assert_eq!(normalized.solar_fit_min_cents, 0.0);
        assert_eq!(normalized.solar_fit_max_cents, 0.0);
        assert!(normalized.solar_fit_tiers.is_empty());
        assert_eq!(normalized.solar_fit_details, "No solar feed-in tariff");
    }

    #[test]
    fn retailer_tiers_survive_next_to_government_entries() {
        let raw = plan(json!({
            "planData": {
                "planName": "Mixed Solar",
                "fuelType": "E",
                "contract": [{
                    "tariffPeriod": [{ "dailySupplyCharge": 90.0 }],
                    "solarFit": [
                        { "type": "G", "rate": 44.0 },
                        { "type": "R", "singleTariffRates": [
                            { "unitPrice": 3.0, "volume": 0.0 },
                            { "unitPrice": 10.0, "volume": 8.0 },
                            { "unitPrice": 0.0, "volume": 2.0 }
                        ]}
                    ]
                }]
            }
        }));
        let normalized = normalize(&raw, "4000", None).unwrap();
        // Zero-rate tier dropped, capped tier ordered first
        assert_eq!(
            normalized.solar_fit_tiers,
            vec![FitTier::new(10.0, 8.0), FitTier::new(3.0, 0.0)]
        );
        assert_eq!(normalized.solar_fit_min_cents, 3.0);
        assert_eq!(normalized.solar_fit_max_cents, 10.0);
        assert_eq!(
            normalized.solar_fit_details,
            "10c/kWh (first 8kWh/day); 3c/kWh"
        );
    }

    #[test]
    fn solar_rates_are_not_gst_adjusted() {
        let raw = plan(json!({
            "planData": {
                "planName": "Solar",
                "fuelType": "E",
                "contract": [{
                    "tariffPeriod": [{ "dailySupplyCharge": 90.0 }],
                    "solarFit": [{ "rate": 10.0 }]
                }]
            }
        }));
        let normalized = normalize(&raw, "4000", None).unwrap();
        assert_eq!(normalized.solar_fit_max_cents, 10.0);
    }

    #[test]
    fn controlled_load_from_first_entry_only() {
        let raw = plan(json!({
            "planData": {
                "planName": "CL Plan",
                "fuelType": "E",
                "contract": [{
                    "tariffPeriod": [{ "dailySupplyCharge": 90.0 }],
                    "controlledLoad": [
                        { "singleRate": {
                            "displayName": "Hot Water",
                            "rates": [{ "unitPrice": 15.0 }],
                            "dailySupplyCharge": 10.0
                        }},
                        { "singleRate": { "rates": [{ "unitPrice": 99.0 }] } }
                    ]
                }]
            }
        }));
        let normalized = normalize(&raw, "4000", None).unwrap();
        assert_eq!(normalized.controlled_load_rate_cents, 16.5);
        assert_eq!(normalized.controlled_load_supply_cents, 11.0);
        assert_eq!(
            normalized.controlled_load,
            "Hot Water: 16.50c/kWh + 11.00c/day supply; Controlled Load: 108.90c/kWh"
        );
    }

    #[test]
    fn display_summaries_use_label_tables() {
        let raw = plan(json!({
            "planData": {
                "planName": "Full House",
                "fuelType": "E",
                "contract": [{
                    "tariffPeriod": [{ "dailySupplyCharge": 90.0 }],
                    "discount": [
                        { "name": "Pay on time", "discountPercent": 5.0 },
                        { "name": "Sign-up credit", "discountAmount": 50.0 }
                    ],
                    "fee": [{ "feeType": "LPF", "amount": 12.0 }, { "feeType": "XXF", "amount": 3.5 }],
                    "paymentOption": ["DD", "BP", "ZZ"],
                    "meterType": ["Type 4", "Type 4a", "Type 4"],
                    "benefitPeriod": "12 months",
                    "termType": "E"
                }]
            }
        }));
        let normalized = normalize(&raw, "4000", None).unwrap();
        assert_eq!(
            normalized.discounts,
            "Pay on time (5%); Sign-up credit ($50)"
        );
        assert_eq!(normalized.fees, "Late Payment Fee: $12.00; XXF: $3.50");
        assert_eq!(normalized.payment_options, "Direct Debit, BPay, ZZ");
        assert_eq!(normalized.meter_types, "Smart Meter, Smart Meter (4a)");
        assert_eq!(normalized.benefit_period, "12 months");
        assert_eq!(normalized.contract_term, "No lock-in");
    }

    #[test]
    fn estimated_costs_are_relayed_verbatim() {
        let raw = plan(json!({
            "planData": { "planName": "Costed", "fuelType": "E", "contract": [{
                "tariffPeriod": [{ "dailySupplyCharge": 90.0 }]
            }] },
            "pcr": { "costs": { "electricity": {
                "small": { "yearly": { "allDiscounts": 1100.0, "noDiscounts": 1200.0 } },
                "medium": { "yearly": { "allDiscounts": 1450.0 } },
                "large": { "yearly": { "noDiscounts": 2100.0 } }
            } } }
        }));
        let normalized = normalize(&raw, "4000", None).unwrap();
        assert_eq!(normalized.est_cost_year.low_with_discounts, Some(1100.0));
        assert_eq!(normalized.est_cost_year.medium_with_discounts, Some(1450.0));
        assert_eq!(normalized.est_cost_year.high_with_discounts, None);
        assert_eq!(normalized.est_cost_year.high_without_discounts, Some(2100.0));
    }

    #[test]
    fn malformed_plans_carry_their_display_name() {
        let raw = plan(json!({ "planData": { "planName": "Broken", "contract": [] } }));
        let err = normalize(&raw, "2000", None).unwrap_err();
        match err {
            CoreError::MalformedPlan { plan_name, .. } => assert_eq!(plan_name, "Broken"),
            other => panic!("unexpected error: {other}"),
        }

        let raw = plan(json!({}));
        assert!(matches!(
            normalize(&raw, "2000", None),
            Err(CoreError::MalformedPlan { .. })
        ));
    }

    #[test]
    fn normalize_is_idempotent() {
        let raw = single_rate_plan();
        let first = normalize(&raw, "2000", Some("Ausgrid")).unwrap();
        let second = normalize(&raw, "2000", Some("Ausgrid")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn plan_url_carries_id_and_postcode() {
        let normalized = normalize(&single_rate_plan(), "2000", None).unwrap();
        assert!(normalized.url.contains("id=SR1"));
        assert!(normalized.url.contains("postcode=2000"));
    }

    #[test]
    fn no_tariff_period_means_no_supply_charge() {
        let raw = plan(json!({
            "planData": { "planName": "Empty", "fuelType": "E", "contract": [{}] }
        }));
        let normalized = normalize(&raw, "2000", None).unwrap();
        assert_eq!(normalized.supply_charge_cents, None);
        assert_eq!(normalized.usage_rate_min_cents, None);
        assert_eq!(normalized.usage_rate_max_cents, None);
    }
}
