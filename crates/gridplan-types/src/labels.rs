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

//! Code→label enumerations for the short codes the API uses.
//!
//! Unknown codes pass through as-is so a new code introduced upstream
//! degrades to its raw form instead of failing the whole plan.

use std::fmt;

/// Payment option codes ("P", "DD", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOption {
    PostMail,
    DirectDebit,
    CreditCard,
    BPay,
    Centrepay,
    Other(String),
}

impl PaymentOption {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "P" => Self::PostMail,
            "DD" => Self::DirectDebit,
            "CC" => Self::CreditCard,
            "BP" => Self::BPay,
            "CP" => Self::Centrepay,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::PostMail => "Post/Mail",
            Self::DirectDebit => "Direct Debit",
            Self::CreditCard => "Credit Card",
            Self::BPay => "BPay",
            Self::Centrepay => "Centrepay",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fee type codes ("ConnF", "LPF", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeType {
    Connection,
    Disconnection,
    DisconnectionMoveOut,
    DisconnectionNonPayment,
    ChargeDispute,
    DishonouredDirectDebit,
    LatePayment,
    PaperBill,
    CreditCard,
    PaymentProcessing,
    Reconnection,
    Membership,
    OtherFee,
    Other(String),
}

impl FeeType {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "ConnF" => Self::Connection,
            "DiscoF" => Self::Disconnection,
            "DiscoFMO" => Self::DisconnectionMoveOut,
            "DiscoFNP" => Self::DisconnectionNonPayment,
            "ChDF" => Self::ChargeDispute,
            "DDF" => Self::DishonouredDirectDebit,
            "LPF" => Self::LatePayment,
            "PBF" => Self::PaperBill,
            "CCF" => Self::CreditCard,
            "PPF" => Self::PaymentProcessing,
            "RecoF" => Self::Reconnection,
            "MBSF" => Self::Membership,
            "OF" => Self::OtherFee,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Connection => "Connection Fee",
            Self::Disconnection => "Disconnection Fee",
            Self::DisconnectionMoveOut => "Disconnection Fee (Move Out)",
            Self::DisconnectionNonPayment => "Disconnection Fee (Non-Payment)",
            Self::ChargeDispute => "Charge Dispute Fee",
            Self::DishonouredDirectDebit => "Dishonoured Direct Debit Fee",
            Self::LatePayment => "Late Payment Fee",
            Self::PaperBill => "Paper Bill Fee",
            Self::CreditCard => "Credit Card Fee",
            Self::PaymentProcessing => "Payment Processing Fee",
            Self::Reconnection => "Reconnection Fee",
            Self::Membership => "Membership Fee",
            Self::OtherFee => "Other Fee",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Meter type identifiers ("Type 6", "Type 4", ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeterType {
    Basic,
    Smart,
    Smart4a,
    Interval,
    Other(String),
}

impl MeterType {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "Type 6" => Self::Basic,
            "Type 4" => Self::Smart,
            "Type 4a" => Self::Smart4a,
            "Type 1" => Self::Interval,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Basic => "Basic Meter",
            Self::Smart => "Smart Meter",
            Self::Smart4a => "Smart Meter (4a)",
            Self::Interval => "Interval Meter",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for MeterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contract term codes ("E" = evergreen, "1"/"2"/"3" = fixed years)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermType {
    NoLockIn,
    OneYear,
    TwoYears,
    ThreeYears,
    Other(String),
}

impl TermType {
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "E" => Self::NoLockIn,
            "1" => Self::OneYear,
            "2" => Self::TwoYears,
            "3" => Self::ThreeYears,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::NoLockIn => "No lock-in",
            Self::OneYear => "1 year",
            Self::TwoYears => "2 years",
            Self::ThreeYears => "3 years",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(PaymentOption::from_code("DD").label(), "Direct Debit");
        assert_eq!(FeeType::from_code("LPF").label(), "Late Payment Fee");
        assert_eq!(MeterType::from_code("Type 6").label(), "Basic Meter");
        assert_eq!(TermType::from_code("E").label(), "No lock-in");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(PaymentOption::from_code("XZ").label(), "XZ");
        assert_eq!(FeeType::from_code("NewFee").label(), "NewFee");
        assert_eq!(MeterType::from_code("Type 9").label(), "Type 9");
        assert_eq!(TermType::from_code("5").label(), "5");
    }
}
