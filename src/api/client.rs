//! GraphQL client for the questionnaire API with connection pooling.

use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::api::models::{Department, QuestionnaireInput, Skill};
use crate::config::Config;

const CREATE_QUESTIONNAIRE_MUTATION: &str = r#"
mutation CreateDigitalContractingQuestionnaire($input: DigitalContractingQuestionnaireInput!) {
  createDigitalContractingQuestionnaire(digitalContractingQuestionnaire: $input) {
    id
  }
}
"#;

const PAGE_DATA_QUERY: &str = r#"
query DigitalContractingQuestionnairePageData {
  departments {
    id
    name
  }
  skills {
    id
    name
  }
}
"#;

/// Everything the questionnaire commands need from the backend. Commands
/// depend on this trait rather than the HTTP client so tests can run the
/// full flow against a canned gateway.
#[async_trait]
pub trait QuestionnaireGateway {
    /// The departments offered by the department selector.
    async fn departments(&self) -> Result<Vec<Department>>;

    /// The skills offered by the personnel skill picker.
    async fn skills(&self) -> Result<Vec<Skill>>;

    /// Submit a completed questionnaire, returning the created record id.
    async fn submit(&self, input: &QuestionnaireInput) -> Result<String>;
}

/// GraphQL-over-HTTP client for the questionnaire API.
pub struct GraphqlClient {
    endpoint: String,
    bearer_token: Option<String>,
    http_client: reqwest::Client,
}

impl GraphqlClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("directive-cli/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            endpoint: config.endpoint.clone(),
            bearer_token: config.bearer_token.clone(),
            http_client,
        })
    }

    async fn execute(&self, query: &str, variables: Value) -> Result<Value> {
        debug!("POST {}", self.endpoint);
        let mut request = self
            .http_client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .context("GraphQL request failed to send")?;
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .context("GraphQL response was not valid JSON")?;

        if !status.is_success() {
            bail!("GraphQL endpoint returned HTTP {}: {}", status, body);
        }
        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages: Vec<&str> = errors
                    .iter()
                    .filter_map(|e| e.get("message").and_then(Value::as_str))
                    .collect();
                bail!("GraphQL errors: {}", messages.join("; "));
            }
        }

        body.get("data")
            .cloned()
            .ok_or_else(|| anyhow!("GraphQL response missing data field"))
    }
}

#[derive(Deserialize)]
struct PageData {
    departments: Vec<Department>,
    skills: Vec<Skill>,
}

#[async_trait]
impl QuestionnaireGateway for GraphqlClient {
    async fn departments(&self) -> Result<Vec<Department>> {
        let data = self.execute(PAGE_DATA_QUERY, json!({})).await?;
        let page: PageData =
            serde_json::from_value(data).context("unexpected page data shape")?;
        Ok(page.departments)
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        let data = self.execute(PAGE_DATA_QUERY, json!({})).await?;
        let page: PageData =
            serde_json::from_value(data).context("unexpected page data shape")?;
        Ok(page.skills)
    }

    async fn submit(&self, input: &QuestionnaireInput) -> Result<String> {
        let variables = json!({ "input": input });
        let data = self
            .execute(CREATE_QUESTIONNAIRE_MUTATION, variables)
            .await?;
        let id = data
            .pointer("/createDigitalContractingQuestionnaire/id")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow!("mutation response missing questionnaire id"))?;
        info!("created questionnaire {}", id);
        Ok(id.to_string())
    }
}
