mod common;

use common::ScriptedPrompter;
use repo_privatizer::config::{load_config, save_config, ConfigFile};
use repo_privatizer::credentials::{CredentialSources, Credentials};
use repo_privatizer::error::PrivacyError;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_environment_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"token": "file-token", "username": "file-user"}"#);
    let sources = CredentialSources {
        token: Some("env-token".to_string()),
        username: None,
        config_path: Some(path),
    };
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

    let credentials = sources.resolve(&mut prompter).unwrap();

    assert_eq!(
        credentials,
        Credentials {
            token: "env-token".to_string(),
            username: "file-user".to_string(),
        }
    );
    // Complete config file: nothing asked
    assert!(prompter.prompts.is_empty());
}

#[test]
fn test_prompts_for_missing_values_and_saves_on_consent() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let sources = CredentialSources {
        token: None,
        username: None,
        config_path: Some(path.clone()),
    };
    let mut prompter = ScriptedPrompter::new(["  secret  ", "octo", "y"]);

    let credentials = sources.resolve(&mut prompter).unwrap();

    assert_eq!(credentials.token, "secret");
    assert_eq!(credentials.username, "octo");
    assert_eq!(prompter.secret_prompts.len(), 1);
    assert_eq!(
        load_config(&path),
        ConfigFile {
            token: Some("secret".to_string()),
            username: Some("octo".to_string()),
        }
    );
}

#[test]
fn test_declined_save_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let sources = CredentialSources {
        token: Some("t".to_string()),
        username: Some("u".to_string()),
        config_path: Some(path.clone()),
    };
    let mut prompter = ScriptedPrompter::new(["n"]);

    sources.resolve(&mut prompter).unwrap();

    assert!(!path.exists());
    assert_eq!(prompter.prompts.len(), 1);
}

#[test]
fn test_empty_token_is_missing_credentials() {
    let sources = CredentialSources {
        token: Some("   ".to_string()),
        username: Some("u".to_string()),
        config_path: None,
    };
    let mut prompter = ScriptedPrompter::new([""]);

    let result = sources.resolve(&mut prompter);

    assert!(matches!(result, Err(PrivacyError::MissingCredentials)));
}

#[test]
fn test_no_config_path_skips_save_offer() {
    let sources = CredentialSources {
        token: Some("t".to_string()),
        username: Some("u".to_string()),
        config_path: None,
    };
    let mut prompter = ScriptedPrompter::new(Vec::<String>::new());

    let credentials = sources.resolve(&mut prompter).unwrap();

    assert_eq!(credentials.username, "u");
    assert!(prompter.prompts.is_empty());
}

#[test]
fn test_credentials_debug_hides_token() {
    let credentials = Credentials {
        token: "ghp_supersecret".to_string(),
        username: "octo".to_string(),
    };

    let debug = format!("{:?}", credentials);
    assert!(!debug.contains("ghp_supersecret"));
    assert!(debug.contains("octo"));
}

#[test]
fn test_load_missing_config_is_empty() {
    let dir = TempDir::new().unwrap();
    assert_eq!(load_config(&dir.path().join("absent.json")), ConfigFile::default());
}

#[test]
fn test_load_invalid_config_is_empty() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");
    assert_eq!(load_config(&path), ConfigFile::default());
}

#[test]
fn test_partial_config_is_incomplete() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, r#"{"username": "octo"}"#);

    let config = load_config(&path);

    assert_eq!(config.username.as_deref(), Some("octo"));
    assert!(config.token.is_none());
    assert!(!config.is_complete());
}

#[test]
fn test_save_writes_token_and_username_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let config = ConfigFile {
        token: Some("t".to_string()),
        username: Some("u".to_string()),
    };

    save_config(&path, &config).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, serde_json::json!({ "token": "t", "username": "u" }));
}

#[cfg(unix)]
#[test]
fn test_saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    save_config(&path, &ConfigFile::default()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope").join("config.json");

    let result = save_config(&path, &ConfigFile::default());
    assert!(matches!(result, Err(PrivacyError::ConfigError(_))));
}
