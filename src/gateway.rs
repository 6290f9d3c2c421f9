//! Side effects on the environment: Git config, the SSH agent and key files.
//!
//! Workflows only talk to the [`ConfigGateway`] trait. [`crate::git::SystemGateway`]
//! implements it by running `git`, `ssh-add` and `ssh-keygen`.

use std::path::Path;

use crate::{error::AppError, profile::Scope};

pub trait ConfigGateway {
    /// True if the working directory is inside a Git working tree
    fn is_inside_repository(&self) -> bool;

    /// Removes every key from the SSH agent
    fn reset_agent(&self) -> Result<(), AppError>;

    /// Adds one private key to the SSH agent
    fn load_key(&self, path: &Path) -> Result<(), AppError>;

    /// Writes one Git config key at the given scope
    fn set_config(&self, scope: Scope, key: &str, value: &str) -> Result<(), AppError>;

    /// Reads the effective value of a Git config key, `None` when unset
    fn get_config(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Succeeds if `path` is a readable, well-formed key
    fn validate_key(&self, path: &Path) -> Result<(), AppError>;

    /// Creates a passphrase-less key pair at `path` with `email` as comment
    fn generate_key(&self, email: &str, path: &Path) -> Result<(), AppError>;

    /// True if `url.*.insteadOf` rewrites are configured at the given scope.
    /// Informational only; failures count as "none".
    fn has_url_rewrites(&self, scope: Scope) -> bool;
}
