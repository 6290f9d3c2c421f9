use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CLI arguments parser using `clap`
#[derive(Parser, Debug)]
#[command(name = "gum", version)]
#[command(about = "Git User Manager - switch Git identities and SSH keys globally or per repository")]
pub struct Cli {
    /// Subcommand chosen to execute, interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Registers a new identity and applies it
    Create {
        /// Unique alias for the identity
        #[arg(short, long)]
        alias: String,
        /// Git email
        #[arg(short, long)]
        email: String,
        /// Git username
        #[arg(short, long)]
        name: String,
        /// Existing private key to use instead of generating one
        #[arg(short, long)]
        key: Option<PathBuf>,
        /// Store and apply the identity machine-wide
        #[arg(short, long)]
        global: bool,
    },
    /// Switches the active identity
    Switch {
        /// Switch the machine-wide identity instead of the repository's
        #[arg(short, long)]
        global: bool,
        /// Alias of identity to switch to
        alias: String,
    },
    /// Deletes a stored identity, leaving its key files in place
    Delete {
        /// Delete from the global identities
        #[arg(short, long)]
        global: bool,
        /// Alias of identity to delete
        alias: String,
    },
    /// Displays all stored identities
    List,
    /// Displays the identity Git currently uses
    Current,
}
