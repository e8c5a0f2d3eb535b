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

//! Input validation, applied before any network call.

use crate::error::{CoreError, CoreResult};
use gridplan_types::is_known_profile;

/// Australian postcodes are exactly four digits.
pub fn check_postcode(postcode: &str) -> CoreResult<()> {
    if postcode.len() == 4 && postcode.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "'{postcode}' is not a valid postcode (expected 4 digits)"
        )))
    }
}

/// Reject profile names the preset table does not know. Evaluation
/// itself falls back to an even split, but a typo on the command line
/// should fail loudly instead.
pub fn check_profile(name: &str) -> CoreResult<()> {
    if is_known_profile(name) {
        Ok(())
    } else {
        Err(CoreError::InvalidInput(format!(
            "unknown usage profile '{name}'"
        )))
    }
}
