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

//! End-to-end run: resolve distributors, fetch, filter, normalize,
//! report and export.

use std::collections::HashSet;
use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result, bail};
use chrono::Local;
use gridplan_api::MarketApiClient;
use gridplan_core::cost::{CostInputs, build_formulas};
use gridplan_core::{
    fetch_plans_for, filter_plans, normalize, resolve_all, resolve_distributors, resolve_explicit,
    validate,
};
use gridplan_types::{CustomerType, FilterStats, FuelType, NormalizedPlan, PricingModel};
use tracing::{info, warn};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::prompt::{StdinSelector, confirm_controlled_load};

pub fn run(cli: &Cli, config: &AppConfig) -> Result<()> {
    let fuel = FuelType::from(cli.fuel);
    let customer = CustomerType::from(cli.customer);

    let postcode = match &cli.postcode {
        Some(postcode) => postcode.clone(),
        None => prompt_postcode()?,
    };
    validate::check_postcode(&postcode)?;

    let inputs = cost_inputs(cli, config)?;

    let client = MarketApiClient::new().context("Failed to build API client")?;

    // Step 1: confirm the postcode exists
    info!("Validating postcode {}", postcode);
    let locations = client
        .validate_postcode(&postcode)
        .context("Postcode validation request failed")?;
    if locations.is_empty() {
        bail!(
            "No locations found for postcode {postcode}. \
             Energy Made Easy covers NSW, QLD, SA, TAS, and ACT only."
        );
    }
    let names: Vec<String> = locations
        .iter()
        .take(5)
        .map(|loc| format!("{}, {}", loc.location, loc.state))
        .collect();
    info!("Found locations: {}", names.join(", "));

    // Step 2: resolve distributor(s)
    let distributors = match cli.dist.as_deref() {
        Some(id) if id.eq_ignore_ascii_case("all") => {
            resolve_all(&client, &postcode, fuel, customer)?
        }
        Some(id) => resolve_explicit(&client, &postcode, fuel, id)?,
        None => resolve_distributors(&client, &postcode, fuel, customer, &StdinSelector)?,
    };
    let distributor_label = if let [only] = distributors.as_slice() {
        only.name.clone()
    } else {
        "All / Auto".to_owned()
    };

    // Step 3: fetch
    info!("Fetching {} plans for {}", fuel, postcode);
    let raw_plans = fetch_plans_for(&client, &postcode, fuel, customer, &distributors);
    if raw_plans.is_empty() {
        bail!("No plans found for postcode {postcode}");
    }

    // Step 3b: filter
    let (filtered, stats) = if cli.no_filter {
        info!("Filtering disabled: keeping all {} plans", raw_plans.len());
        let stats = FilterStats {
            total: raw_plans.len(),
            kept: raw_plans.len(),
            ..FilterStats::default()
        };
        (raw_plans, stats)
    } else {
        let include_cl = cli.controlled_load || confirm_controlled_load();
        let (kept, stats) = filter_plans(raw_plans, include_cl, false);
        info!(
            "Filtering: {} from API, {} removed (demand charge), {} removed (controlled load), {} kept",
            stats.total, stats.demand_filtered, stats.controlled_load_filtered, stats.kept
        );
        (kept, stats)
    };
    if filtered.is_empty() {
        bail!(
            "All {} plans were filtered out; retry with --controlled-load or --no-filter",
            stats.total
        );
    }

    // Step 4: normalize
    let mut plans = Vec::with_capacity(filtered.len());
    let mut skipped = 0usize;
    for sourced in &filtered {
        match normalize(&sourced.raw, &postcode, Some(&sourced.distributor_name)) {
            Ok(plan) => plans.push(plan),
            Err(err) => {
                skipped += 1;
                warn!("Failed to process plan: {err}");
            }
        }
    }
    if skipped > 0 {
        warn!("{skipped} plans had processing errors");
    }
    if plans.is_empty() {
        bail!("No plans survived processing for postcode {postcode}");
    }
    info!("Processed {} plans", plans.len());

    // Step 5: export
    let formulas = build_formulas(&plans);
    let timestamp = Local::now();
    let comparison_name = gridplan_export::export_filename(
        &postcode,
        fuel,
        Some(&distributor_label),
        timestamp,
    );
    let comparison_path = cli.output.join(&comparison_name);
    gridplan_export::write_comparison_csv(&comparison_path, &plans)
        .with_context(|| format!("Failed to write {}", comparison_path.display()))?;

    let calculator_name = comparison_name.replace(".csv", "_calculator.csv");
    let calculator_path = cli.output.join(&calculator_name);
    gridplan_export::write_calculator_csv(&calculator_path, &formulas, &inputs)
        .with_context(|| format!("Failed to write {}", calculator_path.display()))?;

    print_summary(&plans, &distributor_label, distributors.len() > 1);
    println!("  Comparison table:  {}", comparison_path.display());
    println!("  Cost calculator:   {}", calculator_path.display());

    Ok(())
}

fn prompt_postcode() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        bail!("No postcode given; pass one as an argument");
    }
    print!("Enter postcode: ");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn cost_inputs(cli: &Cli, config: &AppConfig) -> Result<CostInputs> {
    let profile = cli
        .profile
        .clone()
        .unwrap_or_else(|| config.calculator.usage_profile.clone());
    validate::check_profile(&profile)?;

    Ok(CostInputs {
        daily_usage_kwh: cli.usage.unwrap_or(config.calculator.daily_usage_kwh),
        daily_solar_export_kwh: cli.solar.unwrap_or(config.calculator.daily_solar_export_kwh),
        usage_profile: profile,
        controlled_load_enabled: cli.controlled_load,
        controlled_load_kwh_per_day: cli
            .cl_usage
            .unwrap_or(config.calculator.controlled_load_kwh_per_day),
    })
}

fn print_summary(plans: &[NormalizedPlan], distributor_label: &str, multi_distributor: bool) {
    let line = "=".repeat(60);
    println!("\n{line}");
    println!("  COMPLETE - Summary");
    println!("{line}");
    println!("  Total plans:        {}", plans.len());
    println!("  Distributor(s):     {distributor_label}");

    let retailers: HashSet<&str> = plans.iter().map(|p| p.retailer.as_str()).collect();
    println!("  Unique retailers:   {}", retailers.len());

    let sr = plans
        .iter()
        .filter(|p| p.pricing_model == PricingModel::SingleRate)
        .count();
    let tou = plans
        .iter()
        .filter(|p| p.pricing_model == PricingModel::TimeOfUse)
        .count();
    println!("  Single rate plans:  {sr}");
    println!("  Time of use plans:  {tou}");

    let solar = plans.iter().filter(|p| p.solar_fit_max_cents > 0.0).count();
    println!("  Plans with solar:   {solar}");

    let dist_label = |plan: &NormalizedPlan| {
        if multi_distributor {
            format!(" [{}]", plan.distributor_name)
        } else {
            String::new()
        }
    };

    let mut cheapest: Vec<&NormalizedPlan> = plans
        .iter()
        .filter(|p| p.est_cost_year.medium_with_discounts.is_some())
        .collect();
    if !cheapest.is_empty() {
        cheapest.sort_by(|a, b| {
            a.est_cost_year
                .medium_with_discounts
                .partial_cmp(&b.est_cost_year.medium_with_discounts)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        println!("\n  Top 5 Cheapest (Medium Usage, with discounts):");
        for (rank, plan) in cheapest.iter().take(5).enumerate() {
            let cost = plan.est_cost_year.medium_with_discounts.unwrap_or(0.0);
            println!(
                "    {}. {} ({}{}) - ${cost:.0}/yr",
                rank + 1,
                plan.plan_name,
                plan.retailer,
                dist_label(plan)
            );
        }
    }

    let mut best_fit: Vec<&NormalizedPlan> = plans
        .iter()
        .filter(|p| p.solar_fit_max_cents > 0.0)
        .collect();
    if !best_fit.is_empty() {
        best_fit.sort_by(|a, b| {
            b.solar_fit_max_cents
                .partial_cmp(&a.solar_fit_max_cents)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        println!("\n  Top 5 Best Solar Feed-in Tariffs:");
        for (rank, plan) in best_fit.iter().take(5).enumerate() {
            let fit = if plan.solar_fit_min_cents == plan.solar_fit_max_cents {
                format!("{}c/kWh", plan.solar_fit_max_cents)
            } else {
                format!("{} - {}c/kWh", plan.solar_fit_min_cents, plan.solar_fit_max_cents)
            };
            println!(
                "    {}. {} ({}{}) - {fit}",
                rank + 1,
                plan.plan_name,
                plan.retailer,
                dist_label(plan)
            );
        }
    }
    println!("{line}");
}
