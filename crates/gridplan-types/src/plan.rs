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

//! API-shaped plan records.
//!
//! These mirror the comparison API's nested JSON. Every collection
//! defaults to empty so a sparse payload still deserializes; the
//! normalizer decides what counts as malformed.

use serde::{Deserialize, Serialize};

/// One raw plan record as returned by the plans endpoint.
///
/// Only the first ("primary") contract is ever consumed; plans with
/// secondary contracts are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPlan {
    #[serde(default)]
    pub plan_data: Option<PlanData>,
    /// Plan cost reference: the API's own precomputed usage-tier cost
    /// projections. Relayed verbatim, never recomputed.
    #[serde(default)]
    pub pcr: Option<Pcr>,
}

impl RawPlan {
    /// The primary contract, if the plan has one at all
    #[must_use]
    pub fn primary_contract(&self) -> Option<&Contract> {
        self.plan_data.as_ref()?.contract.first()
    }

    /// Best-effort display name for log/error messages
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.plan_data
            .as_ref()
            .map_or("Unknown", |pd| pd.plan_name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanData {
    #[serde(default)]
    pub plan_id: String,
    #[serde(default)]
    pub plan_name: String,
    #[serde(default)]
    pub retailer_name: String,
    /// "E" or "G"
    #[serde(default)]
    pub fuel_type: String,
    #[serde(default)]
    pub tariff_type: String,
    #[serde(default)]
    pub contract: Vec<Contract>,
}

/// Pricing model discriminator; decides which rate fields get populated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PricingModel {
    /// One flat usage rate regardless of time ("SR")
    #[default]
    SingleRate,
    /// Usage rate varies by time-of-day window ("TOU")
    TimeOfUse,
}

impl PricingModel {
    /// Short code matching the API's wire value
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::SingleRate => "SR",
            Self::TimeOfUse => "TOU",
        }
    }
}

impl Serialize for PricingModel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_code())
    }
}

// Variant codes the API has shipped include combined forms like
// "SR_CL"; anything that is not "TOU" behaves as single-rate.
impl<'de> Deserialize<'de> for PricingModel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(if code == "TOU" {
            Self::TimeOfUse
        } else {
            Self::SingleRate
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    #[serde(default)]
    pub pricing_model: PricingModel,
    #[serde(default)]
    pub tariff_period: Vec<TariffPeriod>,
    #[serde(default)]
    pub solar_fit: Vec<SolarFit>,
    #[serde(default)]
    pub controlled_load: Vec<ControlledLoad>,
    #[serde(default)]
    pub discount: Vec<Discount>,
    #[serde(default)]
    pub fee: Vec<Fee>,
    #[serde(default)]
    pub payment_option: Vec<String>,
    #[serde(default)]
    pub meter_type: Vec<String>,
    #[serde(default)]
    pub benefit_period: Option<String>,
    #[serde(default)]
    pub term_type: Option<String>,
}

/// One tariff period. Only the first period is consulted for rates;
/// future-dated tariff changes are out of scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TariffPeriod {
    /// Daily supply charge in c/day, ex-GST
    #[serde(default)]
    pub daily_supply_charge: Option<f64>,
    /// Usage rate blocks for single-rate pricing
    #[serde(default)]
    pub block_rate: Vec<BlockRate>,
    /// Time-of-use windows, each with its own rate blocks
    #[serde(default)]
    pub tou_block: Vec<TouBlock>,
    /// Demand charge entries. Only emptiness matters to the filter, so
    /// the shape stays opaque.
    #[serde(default)]
    pub demand_charge: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockRate {
    /// Rate in c/kWh, ex-GST
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub volume: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TouBlock {
    #[serde(default)]
    pub block_rate: Vec<BlockRate>,
}

/// The scheme behind a feed-in entry.
///
/// Government entries are legacy bonus schemes paid to grandfathered
/// customers; they are not part of the retailer's offer and are skipped
/// during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FitScheme {
    #[default]
    Retailer,
    Government,
}

impl Serialize for FitScheme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match self {
            Self::Retailer => "R",
            Self::Government => "G",
        })
    }
}

impl<'de> Deserialize<'de> for FitScheme {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(if code == "G" {
            Self::Government
        } else {
            Self::Retailer
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarFit {
    #[serde(rename = "type", default)]
    pub scheme: FitScheme,
    /// Flat rate in c/kWh (GST-exempt), when the entry is untiered
    #[serde(default)]
    pub rate: Option<f64>,
    /// Tiered rates, each with a daily volume cap
    #[serde(default)]
    pub single_tariff_rates: Vec<SingleTariffRate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleTariffRate {
    /// Rate in c/kWh, GST-exempt
    #[serde(default)]
    pub unit_price: f64,
    /// Daily cap in kWh; 0 means "uncapped / remainder"
    #[serde(default)]
    pub volume: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlledLoad {
    #[serde(default)]
    pub single_rate: Option<ControlledLoadRate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlledLoadRate {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub rates: Vec<BlockRate>,
    /// c/day, ex-GST
    #[serde(default)]
    pub daily_supply_charge: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub discount_percent: Option<f64>,
    #[serde(default)]
    pub discount_amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(default)]
    pub fee_type: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Plan cost reference subtree: `pcr.costs.{electricity|gas}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pcr {
    #[serde(default)]
    pub costs: PcrCosts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcrCosts {
    #[serde(default)]
    pub electricity: Option<FuelCosts>,
    #[serde(default)]
    pub gas: Option<FuelCosts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelCosts {
    #[serde(default)]
    pub small: Option<UsageTierCost>,
    #[serde(default)]
    pub medium: Option<UsageTierCost>,
    #[serde(default)]
    pub large: Option<UsageTierCost>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageTierCost {
    #[serde(default)]
    pub yearly: Option<YearlyCost>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyCost {
    #[serde(default)]
    pub all_discounts: Option<f64>,
    #[serde(default)]
    pub no_discounts: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_sparse_plan() {
        let plan: RawPlan = serde_json::from_value(json!({})).unwrap();
        assert!(plan.plan_data.is_none());
        assert!(plan.primary_contract().is_none());
        assert_eq!(plan.display_name(), "Unknown");
    }

    #[test]
    fn unknown_pricing_model_falls_back_to_single_rate() {
        let contract: Contract =
            serde_json::from_value(json!({ "pricingModel": "SR_CL" })).unwrap();
        assert_eq!(contract.pricing_model, PricingModel::SingleRate);

        let contract: Contract =
            serde_json::from_value(json!({ "pricingModel": "TOU" })).unwrap();
        assert_eq!(contract.pricing_model, PricingModel::TimeOfUse);
    }

    #[test]
    fn deserializes_nested_tariff_structure() {
        let plan: RawPlan = serde_json::from_value(json!({
            "planData": {
                "planId": "ABC123",
                "planName": "Saver",
                "retailerName": "Acme Energy",
                "fuelType": "E",
                "contract": [{
                    "pricingModel": "TOU",
                    "tariffPeriod": [{
                        "dailySupplyCharge": 90.0,
                        "touBlock": [
                            { "blockRate": [{ "unitPrice": 20.0 }] },
                            { "blockRate": [{ "unitPrice": 35.0 }] }
                        ],
                        "demandCharge": []
                    }],
                    "solarFit": [{
                        "type": "R",
                        "singleTariffRates": [
                            { "unitPrice": 10.0, "volume": 8.0 },
                            { "unitPrice": 3.0, "volume": 0.0 }
                        ]
                    }]
                }]
            },
            "pcr": {
                "costs": {
                    "electricity": {
                        "medium": { "yearly": { "allDiscounts": 1450.0, "noDiscounts": 1600.0 } }
                    }
                }
            }
        }))
        .unwrap();

        let contract = plan.primary_contract().unwrap();
        assert_eq!(contract.pricing_model, PricingModel::TimeOfUse);
        assert_eq!(contract.tariff_period[0].tou_block.len(), 2);
        assert_eq!(contract.solar_fit[0].scheme, FitScheme::Retailer);
        assert_eq!(contract.solar_fit[0].single_tariff_rates[0].volume, 8.0);
    }
}
