#![allow(dead_code)]

use async_trait::async_trait;
use repo_privatizer::error::{PrivacyError, Result};
use repo_privatizer::prompt::Prompter;
use repo_privatizer::transport::{ApiResponse, HttpTransport};
use serde_json::{json, Value};
use std::collections::{HashMap, VecDeque};
use std::io;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Get {
        path: String,
        query: Vec<(String, String)>,
    },
    Patch {
        path: String,
        body: Value,
    },
}

/// Transport that answers from a script and records every call. GET routes
/// are keyed by path plus the `page` query parameter when present, e.g.
/// `/user/repos?page=2`. Unscripted routes fail with `NotFound`.
#[derive(Default)]
pub struct FakeTransport {
    gets: HashMap<String, ApiResponse>,
    patches: HashMap<String, ApiResponse>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_get(mut self, key: &str, status: u16, body: Value) -> Self {
        self.gets
            .insert(key.to_string(), ApiResponse::new(status, body.to_string()));
        self
    }

    pub fn with_user(self, login: &str) -> Self {
        self.with_get("/user", 200, json!({ "login": login }))
    }

    pub fn with_repos_page(self, page: u32, repos: Value) -> Self {
        self.with_get(&format!("/user/repos?page={}", page), 200, repos)
    }

    pub fn with_patch(mut self, path: &str, status: u16, body: Value) -> Self {
        self.patches
            .insert(path.to_string(), ApiResponse::new(status, body.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn patch_paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Patch { path, .. } => Some(path),
                RecordedCall::Get { .. } => None,
            })
            .collect()
    }

    pub fn requested_pages(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                RecordedCall::Get { path, query } if path == "/user/repos" => query
                    .into_iter()
                    .find(|(key, _)| key == "page")
                    .map(|(_, value)| value),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall::Get {
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });

        let key = match query.iter().find(|(k, _)| *k == "page") {
            Some((_, page)) => format!("{}?page={}", path, page),
            None => path.to_string(),
        };

        self.gets
            .get(&key)
            .cloned()
            .ok_or(PrivacyError::NotFound(key))
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<ApiResponse> {
        self.calls.lock().unwrap().push(RecordedCall::Patch {
            path: path.to_string(),
            body: body.clone(),
        });

        Ok(self
            .patches
            .get(path)
            .cloned()
            .unwrap_or_else(|| ApiResponse::new(200, json!({ "private": true }).to_string())))
    }
}

/// Answers prompts from a queue and remembers what was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub prompts: Vec<String>,
    pub secret_prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompter {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            secret_prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self) -> Result<String> {
        self.answers.pop_front().ok_or_else(|| {
            PrivacyError::IoError(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no scripted answer left",
            ))
        })
    }
}

impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.next_answer()
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.secret_prompts.push(prompt.to_string());
        self.next_answer()
    }
}

pub fn repo_json(name: &str, owner: &str) -> Value {
    json!({
        "name": name,
        "owner": { "login": owner },
        "stargazers_count": 3,
        "forks_count": 1,
        "updated_at": "2024-05-01T12:30:00Z",
        "private": false
    })
}
