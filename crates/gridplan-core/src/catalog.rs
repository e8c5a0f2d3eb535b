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

//! The seam between the core and the market-comparison API.

use crate::error::CoreResult;
use gridplan_types::{CustomerType, Distributor, FuelType, RawPlan};

/// Outcome of a lightweight plan-count probe.
///
/// Probing is best-effort by contract: transport failures and
/// non-success statuses collapse into [`ProbeOutcome::Unknown`] instead
/// of aborting distributor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The distributor answered with this many live plans
    Plans(usize),
    /// The probe failed; the distributor's availability is undecided
    Unknown,
}

/// A raw plan annotated with the distributor it was fetched under
#[derive(Debug, Clone)]
pub struct SourcedPlan {
    pub raw: RawPlan,
    pub distributor_name: String,
}

/// Access to the market-comparison API, implemented by the transport
/// crate and by in-memory fakes in tests.
pub trait PlanCatalog {
    /// Discover candidate distributors for a postcode, deduplicated by
    /// id and sorted by name ascending. Empty is a valid answer.
    fn discover(&self, postcode: &str, fuel: FuelType) -> CoreResult<Vec<Distributor>>;

    /// Count live plans for one distributor. Must not fail; errors
    /// resolve to [`ProbeOutcome::Unknown`].
    fn probe(
        &self,
        postcode: &str,
        distributor_id: &str,
        fuel: FuelType,
        customer: CustomerType,
    ) -> ProbeOutcome;

    /// Fetch the full plan list scoped to one distributor. An empty
    /// `distributor_id` fetches without a distributor filter.
    fn fetch(
        &self,
        postcode: &str,
        fuel: FuelType,
        customer: CustomerType,
        distributor_id: &str,
    ) -> CoreResult<Vec<RawPlan>>;
}
