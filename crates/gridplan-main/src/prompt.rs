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

//! Interactive prompts. All terminal I/O lives here; the core only sees
//! the injected selector.

use std::io::{BufRead, IsTerminal, Write};

use gridplan_core::resolver::{DistributorSelector, Selection};
use gridplan_types::Distributor;
use tracing::info;

/// Prompts on stdin/stdout. Falls back to "all distributors" when stdin
/// is not a terminal, so piped runs never hang on a prompt.
#[derive(Debug)]
pub struct StdinSelector;

impl DistributorSelector for StdinSelector {
    fn select(&self, candidates: &[Distributor]) -> Selection {
        if !std::io::stdin().is_terminal() {
            info!("Non-interactive run, fetching all distributors");
            return Selection::All;
        }

        println!("\nMultiple distributors serve this postcode:");
        for (index, candidate) in candidates.iter().enumerate() {
            match candidate.plan_count {
                Some(count) => {
                    println!("  {}) {} ({} plans)", index + 1, candidate.name, count);
                }
                None => println!("  {}) {}", index + 1, candidate.name),
            }
        }
        println!("  a) All distributors");

        let stdin = std::io::stdin();
        loop {
            print!("Select a distributor [1-{} or a]: ", candidates.len());
            let _ = std::io::stdout().flush();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).is_err() {
                return Selection::All;
            }
            match parse_selection(&line, candidates.len()) {
                Some(selection) => return selection,
                None => println!("Invalid choice, try again."),
            }
        }
    }
}

fn parse_selection(line: &str, count: usize) -> Option<Selection> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("a") || trimmed.eq_ignore_ascii_case("all") {
        return Some(Selection::All);
    }
    let choice: usize = trimmed.parse().ok()?;
    if (1..=count).contains(&choice) {
        Some(Selection::One(choice - 1))
    } else {
        None
    }
}

/// Yes/no prompt for including controlled-load plans. Used only when the
/// flag was not given on the command line; non-interactive runs answer
/// no.
pub fn confirm_controlled_load() -> bool {
    if !std::io::stdin().is_terminal() {
        return false;
    }

    print!("Include controlled load plans (hot water, pool pump circuits)? [y/N]: ");
    let _ = std::io::stdout().flush();

    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_choices_are_one_based() {
        assert_eq!(parse_selection("1", 3), Some(Selection::One(0)));
        assert_eq!(parse_selection(" 3 \n", 3), Some(Selection::One(2)));
    }

    #[test]
    fn all_keyword_in_any_case() {
        assert_eq!(parse_selection("a", 3), Some(Selection::All));
        assert_eq!(parse_selection("ALL\n", 3), Some(Selection::All));
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        assert_eq!(parse_selection("0", 3), None);
        assert_eq!(parse_selection("4", 3), None);
        assert_eq!(parse_selection("first", 3), None);
        assert_eq!(parse_selection("", 3), None);
    }
}
