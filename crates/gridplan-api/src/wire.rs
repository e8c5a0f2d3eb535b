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

//! Response envelopes for the market-comparison API.

use gridplan_types::{Location, RawPlan};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LocationEnvelope {
    #[serde(default)]
    pub data: Vec<Location>,
}

#[derive(Debug, Deserialize)]
pub struct MetaEnvelope {
    #[serde(default)]
    pub data: Vec<MetaItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaItem {
    #[serde(default)]
    pub plan_data: MetaPlanData,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaPlanData {
    #[serde(default)]
    pub supply_area: Vec<SupplyArea>,
}

#[derive(Debug, Deserialize)]
pub struct SupplyArea {
    pub id: SupplyAreaId,
    #[serde(default)]
    pub name: String,
}

/// The meta feed reports supply-area ids as strings in some regions and
/// bare numbers in others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SupplyAreaId {
    Text(String),
    Number(u64),
}

impl SupplyAreaId {
    pub fn into_string(self) -> String {
        match self {
            Self::Text(id) => id,
            Self::Number(id) => id.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlansEnvelope {
    #[serde(default)]
    pub data: PlansData,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlansData {
    #[serde(default)]
    pub plans: Vec<RawPlan>,
}
