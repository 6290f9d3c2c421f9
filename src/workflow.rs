//! Create, switch, delete, list and current workflows.
//!
//! Each workflow loads the store once, edits it in memory, saves at most once
//! and stops at the first failing step. Git config is written as an ordered
//! list of three settings; a failed write stops the rest and the error names
//! the keys that were already applied.

use std::path::PathBuf;

use crate::{
    config::GumConfig,
    error::AppError,
    gateway::ConfigGateway,
    profile::{IdentityRecord, IdentityStore, Scope},
    storage::ProfileStorage,
    validation::{validate_input_alias, validate_input_email, validate_input_name},
};

pub const KEY_USER_NAME: &str = "user.name";
pub const KEY_USER_EMAIL: &str = "user.email";
pub const KEY_SSH_COMMAND: &str = "core.sshCommand";

/// Input of the create workflow
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub alias: String,
    pub email: String,
    pub name: String,
    /// Existing private key; a new pair is generated when absent
    pub key: Option<PathBuf>,
    pub scope: Scope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateReport {
    pub alias: String,
    pub record: IdentityRecord,
    /// True if the key pair was generated by this run
    pub generated_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchReport {
    pub alias: String,
    pub record: IdentityRecord,
    /// `url.*.insteadOf` rewrites exist at the target scope and were left alone
    pub url_rewrites: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub alias: String,
    pub record: IdentityRecord,
}

/// Effective Git identity as reported by `git config --get`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentIdentity {
    pub name: Option<String>,
    pub email: Option<String>,
    pub ssh_command: Option<String>,
}

/// Ordered Git config writes that make `record` the active identity
pub fn identity_settings(record: &IdentityRecord) -> [(&'static str, String); 3] {
    [
        (KEY_USER_NAME, record.name.clone()),
        (KEY_USER_EMAIL, record.email.clone()),
        (KEY_SSH_COMMAND, record.ssh_command()),
    ]
}

/// Applies the settings in order, stopping at the first failure
pub fn apply_settings<G>(gateway: &G, scope: Scope, settings: &[(&'static str, String)]) -> Result<(), AppError>
where
    G: ConfigGateway + ?Sized,
{
    let mut applied: Vec<String> = Vec::with_capacity(settings.len());
    for (key, value) in settings {
        match gateway.set_config(scope, key, value) {
            Ok(()) => applied.push(key.to_string()),
            Err(AppError::ConfigWrite { key, output, .. }) => {
                return Err(AppError::ConfigWrite { key, applied, output });
            }
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

/// Orchestrates one command invocation
pub struct Workflow<G> {
    config: GumConfig,
    storage: ProfileStorage,
    gateway: G,
}

impl<G: ConfigGateway> Workflow<G> {
    pub fn new(config: GumConfig, gateway: G) -> Self {
        let storage = ProfileStorage::new(config.store_path.clone());
        Self {
            config,
            storage,
            gateway,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn require_repository(&self, scope: Scope) -> Result<(), AppError> {
        if scope == Scope::Local && !self.gateway.is_inside_repository() {
            return Err(AppError::NotInRepository);
        }
        Ok(())
    }

    /// Registers a new identity and applies it at its scope
    pub fn create(&self, request: &CreateRequest) -> Result<CreateReport, AppError> {
        self.require_repository(request.scope)?;

        validate_input_alias(&request.alias)?;
        validate_input_name(&request.name)?;
        validate_input_email(&request.email)?;

        let mut store = self.storage.load()?;
        if store.exists(&request.alias) {
            return Err(AppError::DuplicateAlias(request.alias.clone()));
        }

        let (key_path, generated_key) = match &request.key {
            Some(path) => {
                self.gateway.validate_key(path)?;
                // Stored paths must not depend on the directory create ran in.
                (std::path::absolute(path)?, false)
            }
            None => {
                let path = self.config.derived_key_path(&request.alias);
                self.gateway.generate_key(&request.email, &path)?;
                log::info!("generated key pair at {}", path.display());
                (path, true)
            }
        };

        let record = IdentityRecord::new(&request.name, &request.email, key_path, request.scope);
        store.insert(&request.alias, request.scope, record.clone())?;
        self.storage.save(&store)?;

        apply_settings(&self.gateway, request.scope, &identity_settings(&record)).map_err(|err| {
            AppError::Unapplied {
                alias: request.alias.clone(),
                source: Box::new(err),
            }
        })?;

        Ok(CreateReport {
            alias: request.alias.clone(),
            record,
            generated_key,
        })
    }

    /// Makes a stored identity the active one at `scope`
    ///
    /// Every key is removed from the SSH agent first, not only the previous
    /// identity's. Git config is left untouched if the agent steps fail.
    pub fn switch(&self, alias: &str, scope: Scope) -> Result<SwitchReport, AppError> {
        self.require_repository(scope)?;

        let store = self.storage.load()?;
        let record = store
            .lookup(alias, scope)
            .cloned()
            .ok_or_else(|| store.not_found(alias, scope))?;

        self.gateway.reset_agent()?;
        self.gateway.load_key(&record.key_path)?;

        let url_rewrites = self.gateway.has_url_rewrites(scope);
        if url_rewrites {
            log::warn!("existing url.*.insteadOf configuration detected at {scope} scope, it will not be modified");
        }

        apply_settings(&self.gateway, scope, &identity_settings(&record))?;
        log::debug!("switched {scope} identity to '{alias}'");

        Ok(SwitchReport {
            alias: alias.to_string(),
            record,
            url_rewrites,
        })
    }

    /// Forgets a stored identity; its key files stay on disk
    pub fn delete(&self, alias: &str, scope: Scope) -> Result<DeleteReport, AppError> {
        let mut store = self.storage.load()?;
        let record = store.remove(alias, scope)?;
        self.storage.save(&store)?;

        Ok(DeleteReport {
            alias: alias.to_string(),
            record,
        })
    }

    /// All stored identities, each scope sorted by alias
    pub fn list(&self) -> Result<IdentityStore, AppError> {
        self.storage.load()
    }

    /// Identity Git currently resolves for this directory
    pub fn current(&self) -> Result<CurrentIdentity, AppError> {
        Ok(CurrentIdentity {
            name: self.gateway.get_config(KEY_USER_NAME)?,
            email: self.gateway.get_config(KEY_USER_EMAIL)?,
            ssh_command: self.gateway.get_config(KEY_SSH_COMMAND)?,
        })
    }
}
