use crate::error::Result;
use crate::github::GitHubClient;
use crate::prompt::Prompter;
use crate::report;
use crate::selection::{interactive_selection, select_all, select_batch};
use crate::transport::HttpTransport;
use crate::updater::{confirm_targets, make_repos_private, UpdateSummary};
use tracing::info;

/// How the run picks its targets, derived from `--list`, `--all` and
/// `--batch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    ListOnly,
    All,
    Batch(String),
    Interactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Listed,
    /// Nothing selected, or the confirmation was declined.
    Cancelled,
    Updated(UpdateSummary),
}

/// Authenticate, list, select, confirm, update. Only authentication failure
/// (and prompt I/O failure) surfaces as an error; everything past that is
/// reported and ends in an outcome.
pub async fn run<T, P>(client: &GitHubClient<T>, prompter: &mut P, mode: Mode) -> Result<RunOutcome>
where
    T: HttpTransport,
    P: Prompter + ?Sized,
{
    let user = client.authenticate().await?;
    report::print_authenticated(&user.login);

    report::print_fetching();
    let repos = client.list_public_repos().await;
    report::print_repo_list(&repos);

    let selected = match mode {
        Mode::ListOnly => {
            report::print_list_complete();
            return Ok(RunOutcome::Listed);
        }
        Mode::All => select_all(&repos),
        Mode::Batch(batch) => {
            let batch = select_batch(&batch, &repos);
            if !batch.missing.is_empty() {
                report::print_missing(&batch.missing);
            }
            batch.selected
        }
        Mode::Interactive => interactive_selection(prompter, &repos)?,
    };

    info!("{} repositories selected", selected.len());

    if !confirm_targets(prompter, &selected)? {
        report::print_cancelled();
        return Ok(RunOutcome::Cancelled);
    }

    let summary = make_repos_private(client, &selected).await;
    Ok(RunOutcome::Updated(summary))
}
