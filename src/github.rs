use crate::error::{PrivacyError, Result};
use crate::transport::HttpTransport;
use crate::types::{GitHubUser, RepoSummary};
use serde_json::json;
use tracing::{debug, error, info};

pub const PER_PAGE: u32 = 100;

pub struct GitHubClient<T> {
    transport: T,
    username: String,
}

impl<T: HttpTransport> GitHubClient<T> {
    pub fn new(transport: T, username: impl Into<String>) -> Self {
        GitHubClient {
            transport,
            username: username.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check the token against `GET /user`. Only an HTTP 200 carrying a
    /// `login` counts as authenticated.
    pub async fn authenticate(&self) -> Result<GitHubUser> {
        let response = self.transport.get("/user", &[]).await?;

        if response.status != 200 {
            return Err(PrivacyError::AuthError(format!(
                "authentication failed with HTTP {}",
                response.status
            )));
        }

        response
            .json::<GitHubUser>()
            .map_err(|_| PrivacyError::AuthError("response did not include a login".to_string()))
    }

    /// Fetch one page of the caller's public, owned repositories, most
    /// recently updated first. No owner filtering happens here.
    pub async fn fetch_repos_page(&self, page: u32) -> Result<Vec<RepoSummary>> {
        let query = [
            ("visibility", "public".to_string()),
            ("affiliation", "owner".to_string()),
            ("page", page.to_string()),
            ("per_page", PER_PAGE.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ];

        let response = self
            .transport
            .get("/user/repos", &query)
            .await?
            .error_for_status()?;

        response.json()
    }

    /// Walk every page until an empty one comes back. A failing page ends the
    /// walk and whatever was collected so far is returned.
    pub async fn list_public_repos(&self) -> Vec<RepoSummary> {
        let mut repos = Vec::new();
        let mut page = 1;

        loop {
            let page_repos = match self.fetch_repos_page(page).await {
                Ok(page_repos) => page_repos,
                Err(e) => {
                    error!("Error fetching repositories (page {}): {}", page, e);
                    break;
                }
            };

            if page_repos.is_empty() {
                break;
            }

            let fetched = page_repos.len();
            repos.extend(
                page_repos
                    .into_iter()
                    .filter(|repo| repo.is_owned_by(&self.username)),
            );
            debug!(
                "Page {}: {} repositories, {} kept so far",
                page,
                fetched,
                repos.len()
            );

            page += 1;
        }

        info!("Fetched {} public repositories", repos.len());
        repos
    }

    /// `PATCH /repos/{account}/{name}` with `{"private": true}`. Any 2xx is
    /// a success.
    pub async fn make_private(&self, repo_name: &str) -> Result<()> {
        let path = format!("/repos/{}/{}", self.username, repo_name);
        self.transport
            .patch(&path, &json!({ "private": true }))
            .await?
            .error_for_status()?;

        Ok(())
    }
}
