//! Git User Manager.
//!
//! Keeps named Git identities (name, email, SSH key) in a small JSON store and
//! switches the active one either machine-wide or for the current repository.

pub mod config;
pub mod error;
pub mod gateway;
pub mod git;
pub mod logger;
pub mod profile;
pub mod registry;
pub mod storage;
pub mod validation;
pub mod workflow;

pub use config::GumConfig;
pub use error::AppError;
pub use gateway::ConfigGateway;
pub use git::SystemGateway;
pub use profile::{IdentityRecord, IdentityStore, Scope};
pub use storage::ProfileStorage;
pub use workflow::{CreateRequest, Workflow};
