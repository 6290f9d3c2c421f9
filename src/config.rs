use std::{env, path::PathBuf};

use crate::error::AppError;

/// Directory under the home directory holding the identity store
const GUM_DIR: &str = ".gum";
/// Identity store file name
const STORE_FILE: &str = "identities.json";
/// Directory generated keys are written to, relative to home
const SSH_DIR: &str = ".ssh";

/// Names of the external programs the system gateway runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Programs {
    pub git: String,
    pub ssh_add: String,
    pub ssh_keygen: String,
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
            ssh_add: "ssh-add".to_string(),
            ssh_keygen: "ssh-keygen".to_string(),
        }
    }
}

/// Runtime configuration
///
/// Every value has a home-relative default and can be overridden from the
/// environment:
/// - `GUM_STORE` - identity store file
/// - `GUM_KEY_DIR` - directory for generated keys
/// - `GUM_GIT`, `GUM_SSH_ADD`, `GUM_SSH_KEYGEN` - program names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GumConfig {
    pub store_path: PathBuf,
    pub key_dir: PathBuf,
    pub programs: Programs,
}

impl GumConfig {
    /// Builds the configuration from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::resolve(|key| env::var(key).ok(), dirs::home_dir())
    }

    /// Builds the configuration rooted at an explicit home directory
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            store_path: home.join(GUM_DIR).join(STORE_FILE),
            key_dir: home.join(SSH_DIR),
            programs: Programs::default(),
        }
    }

    fn resolve<F>(lookup: F, home: Option<PathBuf>) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_override = lookup("GUM_STORE").map(PathBuf::from);
        let key_dir_override = lookup("GUM_KEY_DIR").map(PathBuf::from);

        // Home is only required for the values that are not overridden.
        let mut config = match (&store_override, &key_dir_override, home) {
            (_, _, Some(home)) => Self::with_home(home),
            (Some(store), Some(keys), None) => Self {
                store_path: store.clone(),
                key_dir: keys.clone(),
                programs: Programs::default(),
            },
            _ => return Err(AppError::HomeDirectory),
        };

        if let Some(store) = store_override {
            config.store_path = store;
        }
        if let Some(keys) = key_dir_override {
            config.key_dir = keys;
        }
        if let Some(git) = lookup("GUM_GIT") {
            config.programs.git = git;
        }
        if let Some(ssh_add) = lookup("GUM_SSH_ADD") {
            config.programs.ssh_add = ssh_add;
        }
        if let Some(ssh_keygen) = lookup("GUM_SSH_KEYGEN") {
            config.programs.ssh_keygen = ssh_keygen;
        }
        Ok(config)
    }

    /// Path a generated key for `alias` is written to
    pub fn derived_key_path(&self, alias: &str) -> PathBuf {
        self.key_dir.join(format!("id_rsa_{alias}"))
    }
}
