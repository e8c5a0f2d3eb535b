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

//! Error taxonomy for the core pipeline

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Zero distributors discovered for the postcode — terminal
    #[error("no distributors cover postcode {postcode}")]
    NoCoverage { postcode: String },

    /// Every probe came back 0 or unknown — terminal
    #[error("no distributor has live plans for postcode {postcode}")]
    NoAvailablePlans { postcode: String },

    /// One plan's shape violates extraction assumptions — the caller
    /// skips the plan and keeps going
    #[error("malformed plan '{plan_name}': {reason}")]
    MalformedPlan { plan_name: String, reason: String },

    /// Rejected before any network call
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Network/HTTP failure — aborts the current fetch only
    #[error("transport error: {0}")]
    Transport(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
