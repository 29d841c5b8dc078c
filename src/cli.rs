use crate::app::Mode;
use crate::config::default_config_path;
use crate::credentials::CredentialSources;
use crate::transport::DEFAULT_API_URL;
use clap::Parser;
use std::path::PathBuf;
use url::Url;

#[derive(Parser)]
#[command(name = "repo-privatizer")]
#[command(about = "GitHub Repository Privacy Manager - Make your public repositories private")]
#[command(version)]
#[command(after_help = "Examples:
  repo-privatizer                       # Interactive mode
  repo-privatizer --batch repo1,repo2   # Batch mode
  repo-privatizer --list                # List public repos only")]
pub struct Cli {
    /// List public repositories without making changes
    #[arg(long, conflicts_with_all = ["batch", "all"])]
    pub list: bool,

    /// Comma-separated list of repository names to make private
    #[arg(long, value_name = "NAMES", conflicts_with = "all")]
    pub batch: Option<String>,

    /// Make all public repositories private (use with caution)
    #[arg(long)]
    pub all: bool,

    /// GitHub personal access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub username owning the repositories
    #[arg(long, env = "GITHUB_USERNAME")]
    pub username: Option<String>,

    /// Credentials file (defaults to ~/.github_privacy_config.json)
    #[arg(long, env = "GITHUB_PRIVACY_CONFIG")]
    pub config: Option<PathBuf>,

    /// GitHub REST API root
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: Url,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.list {
            Mode::ListOnly
        } else if self.all {
            Mode::All
        } else if let Some(batch) = &self.batch {
            Mode::Batch(batch.clone())
        } else {
            Mode::Interactive
        }
    }

    pub fn credential_sources(&self) -> CredentialSources {
        CredentialSources {
            token: self.token.clone(),
            username: self.username.clone(),
            config_path: self.config.clone().or_else(default_config_path),
        }
    }
}
