use anyhow::Result;
use dialoguer::{Input, MultiSelect, Select};

use crate::api::models::{Department, Skill};
use crate::forms::options::{FormEnum, SelectOption, enum_to_options};
use crate::questionnaire::model::OTHER_ID;

/// Simple text input prompt. An empty entry is allowed and means
/// "no answer".
pub fn text_input(prompt: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact()?;
    Ok(value)
}

/// Interactive confirmation prompt using arrow-key navigable selection
pub fn prompt_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let items = vec!["Yes", "No"];
    let default_index = if default_yes { 0 } else { 1 };

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(default_index)
        .interact()?;

    Ok(selection == 0)
}

/// Select one member of a form enumeration, returning its wire token.
pub fn select_enum<E: FormEnum>(prompt: &str, sort_order: Option<&[E]>) -> Result<String> {
    let options = enum_to_options(sort_order);
    let labels: Vec<&str> = options.iter().map(|o| o.label).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection].value.as_token().to_string())
}

/// Check off any number of members of a form enumeration, returning their
/// wire tokens.
pub fn checklist_enum<E: FormEnum>(prompt: &str, sort_order: Option<&[E]>) -> Result<Vec<String>> {
    let options: Vec<SelectOption<E>> = enum_to_options(sort_order);
    let labels: Vec<&str> = options.iter().map(|o| o.label).collect();

    let picked = MultiSelect::new()
        .with_prompt(prompt)
        .items(&labels)
        .interact()?;

    Ok(picked
        .into_iter()
        .map(|i| options[i].value.as_token().to_string())
        .collect())
}

/// Department selector: the fetched list plus a trailing "not in the list"
/// entry that maps to the sentinel id.
pub fn select_department(prompt: &str, departments: &[Department]) -> Result<String> {
    let mut labels: Vec<String> = departments.iter().map(|d| d.name.clone()).collect();
    labels.push("My department is not in this list".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    if selection == departments.len() {
        Ok(OTHER_ID.to_string())
    } else {
        Ok(departments[selection].id.clone())
    }
}

/// Skill selector over the fetched skill list, returning the skill id.
pub fn select_skill(prompt: &str, skills: &[Skill]) -> Result<String> {
    let labels: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(skills[selection].id.clone())
}
