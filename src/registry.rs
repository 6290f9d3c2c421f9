//! In-memory operations over an [`IdentityStore`].
//!
//! Creation checks both namespaces for a clashing alias, while lookup and
//! removal only search the scope they are given. An alias stored as `global`
//! is therefore invisible to `switch work` and `delete work` without
//! `--global`, but it still blocks creating a local `work`.

use crate::{
    error::AppError,
    profile::{IdentityRecord, IdentityStore, Scope},
};

impl IdentityStore {
    /// True if the alias is present in either namespace
    pub fn exists(&self, alias: &str) -> bool {
        self.global.contains_key(alias) || self.local.contains_key(alias)
    }

    /// Scope-specific lookup
    pub fn lookup(&self, alias: &str, scope: Scope) -> Option<&IdentityRecord> {
        self.namespace(scope).get(alias)
    }

    /// Inserts a record, rejecting aliases already used in any scope
    pub fn insert(&mut self, alias: &str, scope: Scope, record: IdentityRecord) -> Result<(), AppError> {
        if self.exists(alias) {
            return Err(AppError::DuplicateAlias(alias.to_string()));
        }
        self.namespace_mut(scope).insert(alias.to_string(), record);
        Ok(())
    }

    /// Removes a record from the given scope only
    pub fn remove(&mut self, alias: &str, scope: Scope) -> Result<IdentityRecord, AppError> {
        match self.namespace_mut(scope).remove(alias) {
            Some(record) => Ok(record),
            None => Err(self.not_found(alias, scope)),
        }
    }

    /// Builds a `NotFound` error, hinting at the other scope when the alias lives there
    pub fn not_found(&self, alias: &str, scope: Scope) -> AppError {
        let other = scope.other();
        let hint = if self.namespace(other).contains_key(alias) {
            match other {
                Scope::Global => format!(" (it exists in {other} scope, use --global)"),
                Scope::Local => format!(" (it exists in {other} scope, drop --global)"),
            }
        } else {
            String::new()
        };
        AppError::NotFound {
            alias: alias.to_string(),
            scope,
            hint,
        }
    }
}
