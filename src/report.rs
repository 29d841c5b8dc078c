//! Console output. The `format_*` functions build plain text; the `print_*`
//! functions add colour and write to stdout.

use crate::error::PrivacyError;
use crate::types::RepoSummary;
use crate::updater::UpdateSummary;
use chrono::{DateTime, Utc};
use colored::*;
use std::io::Write;
use std::path::Path;

const RULE_WIDTH: usize = 80;

pub fn format_update_date(updated_at: Option<&DateTime<Utc>>) -> String {
    updated_at
        .map(|at| at.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// One numbered listing row; `index` is 1-based.
pub fn format_repo_row(index: usize, repo: &RepoSummary) -> String {
    format!(
        "{:2}. {:<30} ⭐{:3} 🍴{:3} 📅{}",
        index,
        repo.name,
        repo.stargazers_count,
        repo.forks_count,
        format_update_date(repo.updated_at.as_ref())
    )
}

pub fn format_repo_count(count: usize) -> String {
    format!("📋 Found {} public repositories:", count)
}

pub fn format_summary(summary: &UpdateSummary) -> String {
    format!(
        "🎉 Successfully made {}/{} repositories private!",
        summary.success_count(),
        summary.total()
    )
}

pub fn format_missing(missing: &[String]) -> String {
    format!(
        "⚠️  Repositories not found or not public: {}",
        missing.join(", ")
    )
}

pub fn print_banner() {
    println!("{}", "🚀 GitHub Repository Privacy Manager".bold().green());
    println!("{}", "=".repeat(40).dimmed());
}

pub fn print_token_help() {
    println!("{}", "🔑 GitHub Personal Access Token required".bold());
    println!("Create one at: https://github.com/settings/tokens");
    println!("Required scopes: repo (Full control of private repositories)");
}

pub fn print_config_saved(path: &Path) {
    println!("💾 Configuration saved to {}", path.display());
}

pub fn print_config_not_saved() {
    println!("{}", "⚠️  Could not save configuration file".yellow());
}

pub fn print_authenticated(login: &str) {
    println!("✅ Successfully authenticated as: {}", login.bold());
}

pub fn print_fetching() {
    println!("🔍 Fetching your public repositories...");
}

pub fn print_repo_list(repos: &[RepoSummary]) {
    if repos.is_empty() {
        println!("{}", "🎉 No public repositories found!".green());
        return;
    }

    println!("\n{}", format_repo_count(repos.len()).bold());
    println!("{}", "-".repeat(RULE_WIDTH).dimmed());
    for (i, repo) in repos.iter().enumerate() {
        println!("{}", format_repo_row(i + 1, repo));
    }
    println!("{}", "-".repeat(RULE_WIDTH).dimmed());
}

pub fn print_list_complete() {
    println!("📋 Listing complete. Use without --list to make changes.");
}

pub fn print_selection_help() {
    println!("\n{}", "Selection options:".bold());
    println!("• Enter repo numbers (e.g., 1,3,5 or 1-5)");
    println!("• Type 'all' to select all repositories");
    println!("• Type 'quit' to exit");
}

pub fn print_invalid_selection(error: &PrivacyError) {
    println!("{} ({})", "❌ Invalid selection. Please try again.".red(), error);
}

pub fn print_missing(missing: &[String]) {
    println!("{}", format_missing(missing).yellow());
}

pub fn print_confirmation_targets(names: &[String]) {
    println!(
        "\n{}",
        format!("⚠️  You're about to make {} repositories private:", names.len()).yellow()
    );
    for name in names {
        println!("   • {}", name);
    }
}

pub fn print_cancelled() {
    println!("Operation cancelled.");
}

pub fn print_update_start(count: usize) {
    println!("\n🔄 Making {} repositories private...", count);
}

pub fn print_progress_start(name: &str) {
    print!("Processing {}... ", name);
    // The outcome lands on the same line once the request returns.
    let _ = std::io::stdout().flush();
}

pub fn print_progress_done() {
    println!("{}", "✅ Done".green());
}

pub fn print_progress_failed(error: &PrivacyError) {
    println!("{} ({})", "❌ Failed".red(), error);
}

pub fn print_summary(summary: &UpdateSummary) {
    println!("\n{}", format_summary(summary).bold());
}
