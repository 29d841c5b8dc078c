//! Turning user input into the set of repositories to update.
//!
//! Interactive input is a comma-separated list of 1-based positions and
//! inclusive `N-M` ranges, or one of the keywords `all` / `quit`. Positions
//! outside the listing are dropped without complaint; anything that does not
//! parse rejects the whole input.

use crate::error::{PrivacyError, Result};
use crate::prompt::Prompter;
use crate::report;
use crate::types::RepoSummary;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The user asked to stop.
    Quit,
    /// Repository names in listing order, without duplicates.
    Names(Vec<String>),
}

/// Outcome of `--batch`: names that matched the listing, and names that did
/// not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSelection {
    pub selected: Vec<String>,
    pub missing: Vec<String>,
}

pub fn select_all(repos: &[RepoSummary]) -> Vec<String> {
    repos.iter().map(|repo| repo.name.clone()).collect()
}

pub fn parse_selection(input: &str, repos: &[RepoSummary]) -> Result<Selection> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "quit" => return Ok(Selection::Quit),
        "all" => return Ok(Selection::Names(select_all(repos))),
        _ => {}
    }

    let mut positions = BTreeSet::new();
    for token in input.split(',') {
        let (start, end) = parse_token(token.trim())?;
        // Clamp before iterating so a huge range costs nothing.
        let first = start.max(1);
        let last = end.min(repos.len());
        positions.extend(first..=last);
    }

    Ok(Selection::Names(
        positions
            .into_iter()
            .map(|position| repos[position - 1].name.clone())
            .collect(),
    ))
}

/// `N` → `(N, N)`, `N-M` → `(N, M)`.
fn parse_token(token: &str) -> Result<(usize, usize)> {
    match token.split_once('-') {
        Some((start, end)) => Ok((parse_position(start)?, parse_position(end)?)),
        None => {
            let position = parse_position(token)?;
            Ok((position, position))
        }
    }
}

/// Digits that overflow `usize` are a position past any listing, not an
/// error.
fn parse_position(text: &str) -> Result<usize> {
    let text = text.trim();
    let digits = text.strip_prefix('+').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PrivacyError::InvalidSelection(format!(
            "'{}' is not a number",
            text
        )));
    }

    Ok(digits.parse().unwrap_or(usize::MAX))
}

pub fn select_batch(batch: &str, repos: &[RepoSummary]) -> BatchSelection {
    let available: HashSet<&str> = repos.iter().map(|repo| repo.name.as_str()).collect();
    let mut seen = HashSet::new();
    let mut selection = BatchSelection::default();

    for name in batch.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        if !seen.insert(name) {
            continue;
        }
        if available.contains(name) {
            selection.selected.push(name.to_string());
        } else {
            selection.missing.push(name.to_string());
        }
    }

    selection
}

/// Prompt until the input parses. An empty listing selects nothing without
/// prompting; `quit` also yields an empty selection.
pub fn interactive_selection<P: Prompter + ?Sized>(
    prompter: &mut P,
    repos: &[RepoSummary],
) -> Result<Vec<String>> {
    if repos.is_empty() {
        return Ok(Vec::new());
    }

    report::print_selection_help();

    loop {
        let input = prompter.read_line("Your selection")?;
        match parse_selection(&input, repos) {
            Ok(Selection::Quit) => return Ok(Vec::new()),
            Ok(Selection::Names(names)) => return Ok(names),
            Err(e) => report::print_invalid_selection(&e),
        }
    }
}
