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

//! Solar feed-in tier text formatting and parsing.
//!
//! The normalizer carries structured tiers end-to-end, so the in-process
//! pipeline never round-trips through text; the parser exists for
//! descriptions supplied from outside (re-imported exports, manual
//! entry) and is kept bit-compatible with the formatter.

use gridplan_types::FitTier;

/// Sentinel used when a plan has no qualifying feed-in entry
pub const NO_FIT_TEXT: &str = "No solar feed-in tariff";

/// Render tiers as a semicolon-joined summary:
/// `"10c/kWh (first 8kWh/day); 3c/kWh"`
#[must_use]
pub fn format_tiers(tiers: &[FitTier]) -> String {
    if tiers.is_empty() {
        return NO_FIT_TEXT.to_owned();
    }
    let clauses: Vec<String> = tiers
        .iter()
        .map(|tier| {
            if tier.is_capped() {
                format!(
                    "{}c/kWh (first {}kWh/day)",
                    tier.rate_cents, tier.cap_kwh_per_day
                )
            } else {
                format!("{}c/kWh", tier.rate_cents)
            }
        })
        .collect();
    clauses.join("; ")
}

/// Recover structured tiers from a feed-in summary.
///
/// Tolerates both clause forms and the no-tariff sentinel. Clauses that
/// do not parse are dropped rather than failing the whole description.
/// The result is ordered capped-first so the last tier is always the
/// "remainder" tier the cost formula expects.
#[must_use]
pub fn parse_tiers(description: &str) -> Vec<FitTier> {
    let description = description.trim();
    if description.is_empty() || description == NO_FIT_TEXT {
        return Vec::new();
    }

    let mut tiers = Vec::new();
    for clause in description.split(';') {
        if let Some(tier) = parse_clause(clause.trim()) {
            tiers.push(tier);
        }
    }
    order_tiers(&mut tiers);
    tiers
}

fn parse_clause(clause: &str) -> Option<FitTier> {
    let marker = clause.find("c/kWh")?;
    let rate: f64 = clause[..marker].trim().parse().ok()?;

    let rest = &clause[marker + "c/kWh".len()..];
    let cap = match rest.find("(first") {
        Some(open) => {
            let after = &rest[open + "(first".len()..];
            let end = after.find("kWh/day")?;
            after[..end].trim().parse().ok()?
        }
        None => 0.0,
    };
    Some(FitTier::new(rate, cap))
}

/// Order capped tiers first (descending cap), uncapped/remainder last.
/// The cost formula applies the last tier to whatever export remains
/// after prior caps.
pub fn order_tiers(tiers: &mut [FitTier]) {
    tiers.sort_by(|a, b| {
        (!a.is_capped())
            .cmp(&!b.is_capped())
            .then_with(|| {
                b.cap_kwh_per_day
                    .partial_cmp(&a.cap_kwh_per_day)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
}
