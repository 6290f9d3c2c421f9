mod cli;
mod menu;

use clap::Parser;
use colored::Colorize;
use gum::{
    gateway::ConfigGateway,
    logger::init_logger,
    profile::{IdentityStore, Scope},
    AppError, CreateRequest, GumConfig, SystemGateway, Workflow,
};

use crate::cli::{Cli, Commands};

// Main
fn main() {
    init_logger();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "error:".red(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = GumConfig::from_env()?;
    let gateway = SystemGateway::new(config.programs.clone());
    let workflow = Workflow::new(config, gateway);

    match cli.command {
        Some(Commands::Create { alias, email, name, key, global }) => create_identity(
            &workflow,
            &CreateRequest {
                alias,
                email,
                name,
                key,
                scope: Scope::from_global_flag(global),
            },
        ),
        Some(Commands::Switch { global, alias }) => switch_identity(&workflow, &alias, Scope::from_global_flag(global)),
        Some(Commands::Delete { global, alias }) => delete_identity(&workflow, &alias, Scope::from_global_flag(global)),
        Some(Commands::List) => list_identities(&workflow),
        Some(Commands::Current) => show_current_identity(&workflow),
        None => menu::run_menu(&workflow),
    }
}

/// Creates an identity and prints what was stored
pub fn create_identity<G: ConfigGateway>(workflow: &Workflow<G>, request: &CreateRequest) -> Result<(), AppError> {
    let report = workflow.create(request)?;
    let record = &report.record;

    println!("{} {}", "created identity:".green(), report.alias);
    println!("  scope: {}", record.scope());
    println!("  name:  {}", record.name);
    println!("  email: {}", record.email);
    println!("  key:   {}", record.key_path.display());
    if report.generated_key {
        println!(
            "{} {}.pub",
            "remember to add the public key to your Git hosting service:".yellow(),
            record.key_path.display()
        );
    }
    Ok(())
}

/// Switches to an identity and prints the result
pub fn switch_identity<G: ConfigGateway>(workflow: &Workflow<G>, alias: &str, scope: Scope) -> Result<(), AppError> {
    let report = workflow.switch(alias, scope)?;

    if report.url_rewrites {
        println!(
            "{}",
            "warning: existing platform-specific url.*.insteadOf configuration detected, it was not modified".yellow()
        );
    }
    println!(
        "{} {} <{}> ({})",
        "switched to:".green(),
        report.record.name,
        report.record.email,
        scope
    );
    Ok(())
}

/// Deletes an identity, reminding the user the key stays on disk
pub fn delete_identity<G: ConfigGateway>(workflow: &Workflow<G>, alias: &str, scope: Scope) -> Result<(), AppError> {
    let report = workflow.delete(alias, scope)?;

    println!("{} {} <{}>", "deleted identity:".green(), report.alias, report.record.email);
    println!(
        "{} {}",
        "the SSH key was not removed:".yellow(),
        report.record.key_path.display()
    );
    Ok(())
}

/// Lists stored identities, global first
pub fn list_identities<G: ConfigGateway>(workflow: &Workflow<G>) -> Result<(), AppError> {
    let store: IdentityStore = workflow.list()?;
    if store.is_empty() {
        println!("{}", "no identities stored".yellow());
        return Ok(());
    }

    for scope in [Scope::Global, Scope::Local] {
        println!("{}", format!("{scope} identities:").blue());
        let identities = store.namespace(scope);
        if identities.is_empty() {
            println!("  (none)");
        }
        for (alias, record) in identities {
            println!(
                "  {} - {} <{}> [{}]",
                alias.bold(),
                record.name,
                record.email,
                record.key_path.display()
            );
        }
    }
    Ok(())
}

/// Shows current git identity
pub fn show_current_identity<G: ConfigGateway>(workflow: &Workflow<G>) -> Result<(), AppError> {
    let current = workflow.current()?;
    let unset = || "(unset)".to_string();

    println!(
        "{} {} <{}>",
        "current user:".blue(),
        current.name.unwrap_or_else(unset),
        current.email.unwrap_or_else(unset)
    );
    if let Some(ssh_command) = current.ssh_command {
        println!("{} {}", "ssh command:".blue(), ssh_command);
    }
    Ok(())
}
