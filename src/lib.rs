pub mod app;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod github;
pub mod prompt;
pub mod report;
pub mod selection;
pub mod transport;
pub mod types;
pub mod updater;
