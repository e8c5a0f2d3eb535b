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

//! Distributor resolution.
//!
//! The metadata feed can list a distributor that the pricing feed has no
//! plans for; offering it for selection would dead-end the user. Multi-
//! distributor postcodes are therefore probed first, and only
//! distributors with a confirmed non-zero plan count are selectable.

use crate::catalog::{PlanCatalog, ProbeOutcome, SourcedPlan};
use crate::error::{CoreError, CoreResult};
use gridplan_types::{CustomerType, Distributor, FuelType};
use tracing::{debug, info, warn};

/// What the caller chose from a multi-distributor candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the candidate slice
    One(usize),
    /// Fan out across every available distributor
    All,
}

/// Chooses among available distributors. The binary injects an
/// interactive prompt; tests inject deterministic picks.
pub trait DistributorSelector {
    fn select(&self, candidates: &[Distributor]) -> Selection;
}

/// Run the full selection state machine for a postcode.
///
/// - 0 discovered → [`CoreError::NoCoverage`]
/// - 1 discovered → auto-selected without probing
/// - more → probe all; candidates with probed count 0 or an unknown
///   probe are demoted (logged, never selectable); 0 available →
///   [`CoreError::NoAvailablePlans`]; 1 available → auto-selected;
///   otherwise the injected selector decides.
pub fn resolve_distributors(
    catalog: &dyn PlanCatalog,
    postcode: &str,
    fuel: FuelType,
    customer: CustomerType,
    selector: &dyn DistributorSelector,
) -> CoreResult<Vec<Distributor>> {
    let discovered = catalog.discover(postcode, fuel)?;

    if discovered.is_empty() {
        return Err(CoreError::NoCoverage {
            postcode: postcode.to_owned(),
        });
    }

    if let [only] = discovered.as_slice() {
        info!("Single distributor: {} (ID: {})", only.name, only.id);
        return Ok(vec![only.clone()]);
    }

    info!(
        "Found {} distributors for {}, probing plan availability",
        discovered.len(),
        postcode
    );
    let available = probe_candidates(catalog, postcode, fuel, customer, discovered);

    if available.is_empty() {
        return Err(CoreError::NoAvailablePlans {
            postcode: postcode.to_owned(),
        });
    }

    if let [only] = available.as_slice() {
        info!("Only one distributor has plans: {}", only.name);
        return Ok(vec![only.clone()]);
    }

    match selector.select(&available) {
        Selection::All => Ok(available),
        Selection::One(index) => {
            let chosen = available.get(index).cloned().ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "distributor choice {index} out of range (0..{})",
                    available.len()
                ))
            })?;
            Ok(vec![chosen])
        }
    }
}

/// Resolve a caller-specified distributor id without probing.
///
/// The display name is looked up from discovery; an id the metadata feed
/// does not know keeps a synthetic `ID <id>` label.
pub fn resolve_explicit(
    catalog: &dyn PlanCatalog,
    postcode: &str,
    fuel: FuelType,
    distributor_id: &str,
) -> CoreResult<Vec<Distributor>> {
    let discovered = catalog.discover(postcode, fuel)?;
    let name = discovered
        .into_iter()
        .find(|d| d.id == distributor_id)
        .map_or_else(|| format!("ID {distributor_id}"), |d| d.name);
    info!("Using specified distributor: {name} (ID: {distributor_id})");
    Ok(vec![Distributor::new(distributor_id, name)])
}

/// Resolve every available distributor ("fetch all").
///
/// When no distributor answers the probe, falls back to a single
/// unscoped fetch so the run can still produce plans.
pub fn resolve_all(
    catalog: &dyn PlanCatalog,
    postcode: &str,
    fuel: FuelType,
    customer: CustomerType,
) -> CoreResult<Vec<Distributor>> {
    let discovered = catalog.discover(postcode, fuel)?;
    let available = probe_candidates(catalog, postcode, fuel, customer, discovered);

    if available.is_empty() {
        warn!("No distributors returned plans; falling back to an unscoped fetch");
        return Ok(vec![Distributor::new("", "Auto")]);
    }
    Ok(available)
}

fn probe_candidates(
    catalog: &dyn PlanCatalog,
    postcode: &str,
    fuel: FuelType,
    customer: CustomerType,
    candidates: Vec<Distributor>,
) -> Vec<Distributor> {
    let mut available = Vec::new();
    for mut candidate in candidates {
        match catalog.probe(postcode, &candidate.id, fuel, customer) {
            ProbeOutcome::Plans(count) if count > 0 => {
                info!(
                    "  {} (ID: {}) - {} plans",
                    candidate.name, candidate.id, count
                );
                candidate.plan_count = Some(count);
                available.push(candidate);
            }
            ProbeOutcome::Plans(_) => {
                info!(
                    "  {} (ID: {}) - no plans (skipped)",
                    candidate.name, candidate.id
                );
            }
            ProbeOutcome::Unknown => {
                warn!(
                    "  {} (ID: {}) - probe failed (skipped)",
                    candidate.name, candidate.id
                );
            }
        }
    }
    available
}

/// Fetch plans for each resolved distributor sequentially and merge.
///
/// Ordering follows the distributor list so presentation grouping stays
/// stable. A failed fetch for one distributor is skipped with a warning
/// and does not abort the others.
pub fn fetch_plans_for(
    catalog: &dyn PlanCatalog,
    postcode: &str,
    fuel: FuelType,
    customer: CustomerType,
    distributors: &[Distributor],
) -> Vec<SourcedPlan> {
    let mut merged = Vec::new();
    for distributor in distributors {
        debug!("Fetching plans for {}", distributor.name);
        match catalog.fetch(postcode, fuel, customer, &distributor.id) {
            Ok(plans) => {
                info!("  {} - {} plans from API", distributor.name, plans.len());
                merged.extend(plans.into_iter().map(|raw| SourcedPlan {
                    raw,
                    distributor_name: distributor.name.clone(),
                }));
            }
            Err(e) => {
                warn!("  Failed to fetch plans for {}: {e}", distributor.name);
            }
        }
    }
    merged
}
