//! User input and interaction handling.
//! Interactive mode collects the same raw `key -> value` input a config file would
//! provide, so both modes share the resolver's validation.

use crate::error::{Error, Result};
use crate::identity::IdentityProvider;
use crate::params::RawParams;
use crate::schema::{FieldSpec, COMMON_FIELDS};
use dialoguer::{Confirm, Input};

/// Blocking question/answer interface to the user.
pub trait Prompter {
    /// Asks for a line of text. An empty answer yields `default`, or `""` without one.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default.filter(|d| !d.is_empty()) {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .show_default(true)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

fn prompt_field(prompter: &dyn Prompter, field: &FieldSpec, default: &str) -> Result<String> {
    let default = (!field.required && !default.is_empty()).then_some(default);
    let answer = prompter.input(field.prompt, default)?;
    match (answer.trim().is_empty(), default) {
        (true, Some(default)) => Ok(default.to_string()),
        _ => Ok(answer),
    }
}

/// Prompts for every field of `schema`, in order, then for the common fields.
///
/// Author and organization prompts default to the configured identity. The year is
/// not asked for; the enricher fills it in.
///
/// # Errors
/// * `Error::PromptError` if the terminal cannot be read
pub fn prompt_fields(
    schema: &[FieldSpec],
    prompter: &dyn Prompter,
    identity: &dyn IdentityProvider,
) -> Result<RawParams> {
    let mut answers = RawParams::new();

    for field in schema {
        let answer = prompt_field(prompter, field, field.default)?;
        answers.insert(field.name.to_string(), answer);
    }

    let name = identity.name();
    let email = identity.email();
    for field in COMMON_FIELDS {
        let default = match field.name {
            "author_name" | "organization" => name.as_str(),
            "author_email" => email.as_str(),
            _ => field.default,
        };
        let answer = prompt_field(prompter, field, default)?;
        answers.insert(field.name.to_string(), answer);
    }

    Ok(answers)
}
