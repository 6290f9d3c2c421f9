use std::{collections::BTreeMap, fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration bucket an identity is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Machine-wide (`git config --global`)
    Global,
    /// Current repository only (`git config --local`)
    Local,
}

impl Scope {
    /// Picks the scope from the `--global` flag
    pub fn from_global_flag(global: bool) -> Self {
        if global { Scope::Global } else { Scope::Local }
    }

    /// The other scope
    pub fn other(self) -> Self {
        match self {
            Scope::Global => Scope::Local,
            Scope::Local => Scope::Global,
        }
    }

    /// Flag understood by `git config`
    pub fn git_flag(self) -> &'static str {
        match self {
            Scope::Global => "--global",
            Scope::Local => "--local",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => f.write_str("global"),
            Scope::Local => f.write_str("local"),
        }
    }
}

/// A named Git identity stored in the identity store
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityRecord {
    /// Git username (user.name)
    pub name: String,
    /// Git email address (user.email)
    pub email: String,
    /// Private key loaded into the agent and used by core.sshCommand
    pub key_path: PathBuf,
    /// Whether the record lives in the global namespace
    pub is_global: bool,
}

impl IdentityRecord {
    pub fn new(name: &str, email: &str, key_path: PathBuf, scope: Scope) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            key_path,
            is_global: scope == Scope::Global,
        }
    }

    pub fn scope(&self) -> Scope {
        Scope::from_global_flag(self.is_global)
    }

    /// Value written to `core.sshCommand`
    ///
    /// Git hands the command to a shell, so the key path is single-quoted.
    pub fn ssh_command(&self) -> String {
        let path = self.key_path.display().to_string();
        format!("ssh -i '{}'", path.replace('\'', r"'\''"))
    }
}

/// All known identities, keyed by scope then alias.
///
/// The two namespaces are independent maps but an alias may only appear in
/// one of them. `BTreeMap` keeps listings in alphabetical order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct IdentityStore {
    #[serde(default)]
    pub global: BTreeMap<String, IdentityRecord>,
    #[serde(default)]
    pub local: BTreeMap<String, IdentityRecord>,
}

impl IdentityStore {
    pub fn namespace(&self, scope: Scope) -> &BTreeMap<String, IdentityRecord> {
        match scope {
            Scope::Global => &self.global,
            Scope::Local => &self.local,
        }
    }

    pub fn namespace_mut(&mut self, scope: Scope) -> &mut BTreeMap<String, IdentityRecord> {
        match scope {
            Scope::Global => &mut self.global,
            Scope::Local => &mut self.local,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.local.is_empty()
    }
}
