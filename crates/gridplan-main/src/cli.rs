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

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gridplan_types::{CustomerType, FuelType};

/// Compare retail energy plans for an Australian postcode.
#[derive(Debug, Parser)]
#[command(name = "gridplan", version, about)]
pub struct Cli {
    /// Postcode to search; prompted for when omitted
    pub postcode: Option<String>,

    /// Fuel type to compare
    #[arg(long, value_enum, default_value_t = FuelArg::Electricity)]
    pub fuel: FuelArg,

    /// Customer type
    #[arg(long = "type", value_enum, default_value_t = CustomerArg::Residential)]
    pub customer: CustomerArg,

    /// Distributor id to scope the search to, or "all" to fetch every
    /// available distributor
    #[arg(long)]
    pub dist: Option<String>,

    /// Keep plans that include controlled-load pricing
    #[arg(long)]
    pub controlled_load: bool,

    /// Skip the demand-charge and controlled-load filters entirely
    #[arg(long)]
    pub no_filter: bool,

    /// Daily household usage in kWh for the cost calculator
    #[arg(long)]
    pub usage: Option<f64>,

    /// Daily solar export in kWh for the cost calculator
    #[arg(long)]
    pub solar: Option<f64>,

    /// Usage profile name (e.g. "Flat Usage", "Heavy Peak")
    #[arg(long)]
    pub profile: Option<String>,

    /// Daily controlled-load usage in kWh
    #[arg(long)]
    pub cl_usage: Option<f64>,

    /// Configuration file (TOML); defaults are used when absent
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the CSV exports are written into
    #[arg(long, default_value = ".")]
    pub output: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FuelArg {
    Electricity,
    Gas,
}

impl From<FuelArg> for FuelType {
    fn from(arg: FuelArg) -> Self {
        match arg {
            FuelArg::Electricity => Self::Electricity,
            FuelArg::Gas => Self::Gas,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CustomerArg {
    Residential,
    Business,
}

impl From<CustomerArg> for CustomerType {
    fn from(arg: CustomerArg) -> Self {
        match arg {
            CustomerArg::Residential => Self::Residential,
            CustomerArg::Business => Self::Business,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_residential_electricity() {
        let cli = Cli::parse_from(["gridplan", "2000"]);
        assert_eq!(cli.postcode.as_deref(), Some("2000"));
        assert_eq!(FuelType::from(cli.fuel), FuelType::Electricity);
        assert_eq!(CustomerType::from(cli.customer), CustomerType::Residential);
        assert!(!cli.controlled_load);
        assert!(!cli.no_filter);
    }

    #[test]
    fn full_flag_set_parses() {
        let cli = Cli::parse_from([
            "gridplan",
            "3000",
            "--fuel",
            "gas",
            "--type",
            "business",
            "--dist",
            "all",
            "--controlled-load",
            "--usage",
            "18.5",
            "--solar",
            "6",
            "--profile",
            "Heavy Peak",
            "--cl-usage",
            "4",
        ]);
        assert_eq!(FuelType::from(cli.fuel), FuelType::Gas);
        assert_eq!(CustomerType::from(cli.customer), CustomerType::Business);
        assert_eq!(cli.dist.as_deref(), Some("all"));
        assert!(cli.controlled_load);
        assert_eq!(cli.usage, Some(18.5));
        assert_eq!(cli.profile.as_deref(), Some("Heavy Peak"));
    }
}
