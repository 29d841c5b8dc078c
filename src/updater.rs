use crate::error::Result;
use crate::github::GitHubClient;
use crate::prompt::{confirm, Prompter};
use crate::report;
use crate::transport::HttpTransport;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub succeeded: Vec<String>,
    /// Repository name and the reason it failed.
    pub failed: Vec<(String, String)>,
}

impl UpdateSummary {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }
}

/// Show the exact targets and ask for `yes`/`y`. Nothing selected is never
/// confirmed.
pub fn confirm_targets<P: Prompter + ?Sized>(prompter: &mut P, names: &[String]) -> Result<bool> {
    if names.is_empty() {
        return Ok(false);
    }

    report::print_confirmation_targets(names);
    confirm(
        prompter,
        "Are you sure? This action cannot be undone easily. (yes/no)",
    )
}

/// One PATCH per name, in order. A failure is recorded and the loop moves on.
pub async fn make_repos_private<T: HttpTransport>(
    client: &GitHubClient<T>,
    names: &[String],
) -> UpdateSummary {
    let mut summary = UpdateSummary::default();

    report::print_update_start(names.len());

    for name in names {
        report::print_progress_start(name);
        match client.make_private(name).await {
            Ok(()) => {
                report::print_progress_done();
                summary.succeeded.push(name.clone());
            }
            Err(e) => {
                debug!("Failed to make {} private: {}", name, e);
                report::print_progress_failed(&e);
                summary.failed.push((name.clone(), e.to_string()));
            }
        }
    }

    report::print_summary(&summary);
    summary
}
