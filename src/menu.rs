use colored::Colorize;
use inquire::{Confirm, Select, Text};
use gum::{
    gateway::ConfigGateway,
    profile::{IdentityStore, Scope},
    validation::{prompt_until_valid, validate_input_alias, validate_input_email, validate_input_name, BACK_OPTION},
    AppError, CreateRequest, Workflow,
};

use crate::{create_identity, delete_identity, list_identities, show_current_identity, switch_identity};

/// Runs interactive menu interface
pub fn run_menu<G: ConfigGateway>(workflow: &Workflow<G>) -> Result<(), AppError> {
    loop {
        let actions: Vec<&'static str> = vec![
            "switch identity",
            "create identity",
            "delete identity",
            "show current identity",
            "list identities",
            "quit",
        ];

        let action_selected: &'static str = Select::new(&format!("{}", "select action".blue()), actions)
            .prompt()?;

        // Failures are reported and the menu keeps running.
        let result = match action_selected {
            "switch identity" => menu_switch_identity(workflow),
            "create identity" => menu_create_identity(workflow),
            "delete identity" => menu_delete_identity(workflow),
            "show current identity" => show_current_identity(workflow),
            "list identities" => list_identities(workflow),
            "quit" => {
                println!("{}", "quitting".yellow());
                break Ok(());
            }
            _ => unreachable!("unexpected input"),
        };

        match result {
            Err(AppError::Inquire(err)) => return Err(AppError::Inquire(err)),
            Err(err) => println!("{} {}", "error:".red(), err),
            Ok(()) => {}
        }
    }
}

/// Menu for switching identities
fn menu_switch_identity<G: ConfigGateway>(workflow: &Workflow<G>) -> Result<(), AppError> {
    let store = workflow.list()?;
    if let Some((alias, scope)) = select_identity(&store, "select identity to switch to:")? {
        switch_identity(workflow, &alias, scope)?;
    }
    Ok(())
}

/// Menu for creating a new identity
fn menu_create_identity<G: ConfigGateway>(workflow: &Workflow<G>) -> Result<(), AppError> {
    let alias: String = prompt_until_valid(&format!("{}", "enter alias:".blue()), validate_input_alias)?;
    let name: String = prompt_until_valid(&format!("{}", "enter git username:".blue()), validate_input_name)?;
    let email: String = prompt_until_valid(&format!("{}", "enter git email:".blue()), validate_input_email)?;

    let key: String = Text::new(&format!("{}", "existing private key (empty to generate one):".blue()))
        .prompt()?;
    let global: bool = Confirm::new(&format!("{}", "apply machine-wide (global)?".blue()))
        .with_default(false)
        .prompt()?;

    let request = CreateRequest {
        alias,
        email,
        name,
        key: if key.trim().is_empty() { None } else { Some(key.trim().into()) },
        scope: Scope::from_global_flag(global),
    };
    create_identity(workflow, &request)
}

/// Menu for deleting an identity
fn menu_delete_identity<G: ConfigGateway>(workflow: &Workflow<G>) -> Result<(), AppError> {
    let store = workflow.list()?;
    if let Some((alias, scope)) = select_identity(&store, "select identity to delete:")? {
        delete_identity(workflow, &alias, scope)?;
    }
    Ok(())
}

/// Asks the user to pick a stored identity, `None` when they go back
fn select_identity(store: &IdentityStore, prompt: &str) -> Result<Option<(String, Scope)>, AppError> {
    if store.is_empty() {
        return Err(AppError::Validation("no identities stored".to_string()));
    }

    let entries = build_alias_list(store);
    let labels: Vec<String> = entries
        .iter()
        .map(|(alias, scope)| match scope {
            Some(scope) => format!("{alias} ({scope})"),
            None => alias.clone(),
        })
        .collect();

    let selected = Select::new(&format!("{}", prompt.blue()), labels).raw_prompt()?;
    Ok(match &entries[selected.index] {
        (alias, Some(scope)) => Some((alias.clone(), *scope)),
        (_, None) => None,
    })
}

/// Builds list of identity aliases for menu to display, global first, ending with the back entry
pub fn build_alias_list(store: &IdentityStore) -> Vec<(String, Option<Scope>)> {
    let mut entries: Vec<(String, Option<Scope>)> = [Scope::Global, Scope::Local]
        .into_iter()
        .flat_map(|scope| store.namespace(scope).keys().map(move |alias| (alias.clone(), Some(scope))))
        .collect();
    entries.push((BACK_OPTION.to_string(), None));
    entries
}
