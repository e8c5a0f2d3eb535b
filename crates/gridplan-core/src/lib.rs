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

//! Core plan-comparison logic: distributor resolution, plan filtering,
//! tariff normalization, solar feed-in tier handling and the
//! re-evaluable cost model.
//!
//! Transport is injected behind [`catalog::PlanCatalog`] so every
//! component here is a pure function over its inputs.

pub mod catalog;
pub mod cost;
pub mod error;
pub mod filter;
pub mod fit;
pub mod normalize;
pub mod resolver;
pub mod validate;

pub use catalog::{PlanCatalog, ProbeOutcome, SourcedPlan};
pub use cost::{CostBreakdown, CostInputs, PlanFormula, build_formulas};
pub use error::{CoreError, CoreResult};
pub use filter::{decide, filter_plans};
pub use fit::{format_tiers, order_tiers, parse_tiers};
pub use normalize::normalize;
pub use resolver::{
    DistributorSelector, Selection, fetch_plans_for, resolve_all, resolve_distributors,
    resolve_explicit,
};
