use std::path::PathBuf;

use thiserror::Error;

use crate::profile::Scope;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Local scope requested outside of a Git working tree
    #[error("not in git repository: local identities need a repository")]
    NotInRepository,
    /// Alias is already registered in one of the two scopes
    #[error("alias '{0}' already exists")]
    DuplicateAlias(String),
    /// Alias is not registered in the requested scope
    #[error("alias '{alias}' not found in {scope} scope{hint}")]
    NotFound {
        alias: String,
        scope: Scope,
        /// Extra hint appended to the message, empty when there is none
        hint: String,
    },
    /// SSH key file does not exist
    #[error("ssh key not found: {}", .0.display())]
    KeyNotFound(PathBuf),
    /// SSH key file exists but is not a usable key
    #[error("invalid ssh key {}: {output}", path.display())]
    InvalidKey { path: PathBuf, output: String },
    /// Key-pair generation failed
    #[error("failed to generate ssh key {}: {output}", path.display())]
    KeyGen { path: PathBuf, output: String },
    /// SSH agent refused or could not be reached
    #[error("ssh agent error while {action}: {output}")]
    Agent { action: String, output: String },
    /// A Git config write failed
    #[error("failed to set git config {key}{}: {output}", applied_suffix(.applied))]
    ConfigWrite {
        key: String,
        /// Keys that were written before the failure
        applied: Vec<String>,
        output: String,
    },
    /// Identity was persisted but applying it to Git config failed
    #[error("identity '{alias}' was saved but not applied, run `gum switch` to retry: {source}")]
    Unapplied {
        alias: String,
        source: Box<AppError>,
    },
    /// Error during file I/O operations
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// Store file exists but cannot be decoded
    #[error("corrupt identity store {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Store could not be serialized
    #[error("failed to encode identity store: {0}")]
    Encode(#[source] serde_json::Error),
    /// Error during input validation
    #[error("validation error: {0}")]
    Validation(String),
    /// Home directory could not be resolved
    #[error("failed to find the home directory")]
    HomeDirectory,
    /// Error when user input fails
    #[error("inquire error: {0}")]
    Inquire(#[from] inquire::InquireError),
}

fn applied_suffix(applied: &[String]) -> String {
    if applied.is_empty() {
        String::from(" (nothing was applied)")
    } else {
        format!(" (already applied: {})", applied.join(", "))
    }
}
