use crate::config::{load_config, save_config, ConfigFile};
use crate::error::{PrivacyError, Result};
use crate::prompt::{confirm, Prompter};
use crate::report;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Token and account name the run operates with.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub token: String,
    pub username: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}

/// Where credentials may come from, in precedence order: the environment
/// (or matching CLI flags), then the config file, then the user.
#[derive(Debug, Clone, Default)]
pub struct CredentialSources {
    pub token: Option<String>,
    pub username: Option<String>,
    /// `None` disables reading and saving the config file.
    pub config_path: Option<PathBuf>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl CredentialSources {
    pub fn resolve<P: Prompter + ?Sized>(&self, prompter: &mut P) -> Result<Credentials> {
        let stored = match &self.config_path {
            Some(path) => load_config(path),
            None => ConfigFile::default(),
        };

        let token = match non_empty(self.token.clone()).or_else(|| non_empty(stored.token.clone()))
        {
            Some(token) => token,
            None => {
                report::print_token_help();
                prompter.read_secret("Enter your GitHub token")?.trim().to_string()
            }
        };

        let username =
            match non_empty(self.username.clone()).or_else(|| non_empty(stored.username.clone())) {
                Some(username) => username,
                None => prompter
                    .read_line("Enter your GitHub username")?
                    .trim()
                    .to_string(),
            };

        if token.is_empty() || username.is_empty() {
            return Err(PrivacyError::MissingCredentials);
        }

        let credentials = Credentials { token, username };

        if !stored.is_complete() {
            self.offer_to_save(prompter, &credentials)?;
        }

        Ok(credentials)
    }

    fn offer_to_save<P: Prompter + ?Sized>(
        &self,
        prompter: &mut P,
        credentials: &Credentials,
    ) -> Result<()> {
        let Some(path) = &self.config_path else {
            debug!("No config path available, not offering to save credentials");
            return Ok(());
        };

        if !confirm(prompter, "Save credentials for future use? (y/n)")? {
            return Ok(());
        }

        let config = ConfigFile {
            token: Some(credentials.token.clone()),
            username: Some(credentials.username.clone()),
        };

        match save_config(path, &config) {
            Ok(()) => report::print_config_saved(path),
            Err(e) => {
                warn!("{}", e);
                report::print_config_not_saved();
            }
        }

        Ok(())
    }
}
