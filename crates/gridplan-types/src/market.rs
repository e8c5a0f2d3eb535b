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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel type as encoded in the comparison API query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Electricity,
    Gas,
}

impl FuelType {
    /// Single-letter code used by the API ("E" / "G")
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Electricity => "E",
            Self::Gas => "G",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Gas => "Gas",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Customer type as encoded in the comparison API query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    Residential,
    Business,
}

impl CustomerType {
    /// Single-letter code used by the API ("R" / "B")
    #[must_use]
    pub fn as_code(self) -> &'static str {
        match self {
            Self::Residential => "R",
            Self::Business => "B",
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Business => "Small Business",
        }
    }
}

impl fmt::Display for CustomerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A grid distributor serving a postcode.
///
/// Identity is the `id`; `name` is display/sort only. `plan_count` is
/// filled in by the resolver when the distributor has been probed and
/// found to have live plans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub plan_count: Option<usize>,
}

impl Distributor {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            plan_count: None,
        }
    }
}

/// A locality returned by the postcode validation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub state: String,
}
