//! Generate a seeded demo questionnaire, optionally submitting it.

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::api::{GraphqlClient, QuestionnaireGateway};
use crate::config::Config;
use crate::questionnaire::fixtures::{demo_answers, demo_departments, demo_skills};
use crate::questionnaire::mapping::map_form_to_payload;

pub async fn demo_command(seed: u64, submit: bool) -> Result<()> {
    info!("Generating demo questionnaire with seed {}", seed);

    if submit {
        // Submitting requires real department and skill ids.
        let config = Config::load()?;
        let client = GraphqlClient::new(&config)?;
        let departments = client.departments().await?;
        let skills = client.skills().await?;
        let answers = demo_answers(seed, &departments, &skills);
        let payload = map_form_to_payload(&answers)?;
        let id = client.submit(&payload).await?;
        println!(
            "{} demo questionnaire {}",
            "Submitted".green().bold(),
            id.cyan()
        );
    } else {
        let departments = demo_departments();
        let skills = demo_skills();
        let answers = demo_answers(seed, &departments, &skills);
        let payload = map_form_to_payload(&answers)?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
    }

    Ok(())
}
