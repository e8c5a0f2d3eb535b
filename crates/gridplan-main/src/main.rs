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

mod cli;
mod config;
mod pipeline;
mod prompt;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Respects RUST_LOG
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = cli::Cli::parse();
    let config = config::load_config(args.config.as_deref())?;

    info!("Starting GridPlan - Energy Plan Comparison");
    pipeline::run(&args, &config)
}
