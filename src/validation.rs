use colored::Colorize;
use inquire::Text;
use validator::ValidateEmail;

use crate::error::AppError;

/// Menu entry used to leave a selection, never a valid alias
pub const BACK_OPTION: &str = "back";

/// Maximum length for Git username
const MAX_NAME_LENGTH: usize = 100;
/// Maximum length for Git email address
const MAX_EMAIL_LENGTH: usize = 100;
/// Maximum length for identity alias
const MAX_ALIAS_LENGTH: usize = 30;

/// Prompts user for input until valid input is provided
pub fn prompt_until_valid<F>(prompt_message: &str, input_validation: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let input: String = Text::new(prompt_message).prompt()?;
        match input_validation(&input) {
            Ok(_) => break Ok(input),
            Err(AppError::Validation(msg)) => println!("{}", msg.red()),
            Err(e) => return Err(e),
        }
    }
}

/// Validates username input
pub fn validate_input_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        Err(AppError::Validation("name cannot be empty".to_string()))
    } else if name.chars().count() > MAX_NAME_LENGTH {
        Err(AppError::Validation(format!("name too long (max {MAX_NAME_LENGTH} characters)")))
    } else {
        Ok(())
    }
}

/// Validates email input
pub fn validate_input_email(email: &str) -> Result<(), AppError> {
    if email.is_empty() {
        Err(AppError::Validation("email cannot be empty".to_string()))
    } else if email.len() > MAX_EMAIL_LENGTH {
        Err(AppError::Validation(format!("email too long (max {MAX_EMAIL_LENGTH} characters)")))
    } else if !email.validate_email() {
        Err(AppError::Validation(format!("invalid email format: '{email}'")))
    } else {
        Ok(())
    }
}

/// Validates an alias input
///
/// The alias becomes part of a key file name, so it is limited to characters
/// that are safe in paths.
pub fn validate_input_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() {
        Err(AppError::Validation("alias cannot be empty".to_string()))
    } else if alias.len() > MAX_ALIAS_LENGTH {
        Err(AppError::Validation(format!("alias too long (max {MAX_ALIAS_LENGTH} characters)")))
    } else if alias == BACK_OPTION {
        Err(AppError::Validation(format!("alias cannot be '{BACK_OPTION}'")))
    } else if alias.starts_with('.') {
        Err(AppError::Validation("alias cannot start with '.'".to_string()))
    } else if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        Err(AppError::Validation(
            "alias may only contain letters, digits, '-', '_' and '.'".to_string(),
        ))
    } else {
        Ok(())
    }
}
