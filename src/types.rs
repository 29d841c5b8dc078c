use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubUser {
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoOwner {
    pub login: String,
}

/// A repository as returned by `GET /user/repos`, reduced to what the
/// listing and the selection need.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub owner: Option<RepoOwner>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

impl RepoSummary {
    pub fn owner_login(&self) -> Option<&str> {
        self.owner.as_ref().map(|o| o.login.as_str())
    }

    pub fn is_owned_by(&self, account: &str) -> bool {
        self.owner_login() == Some(account)
    }
}
