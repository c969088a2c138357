use reqwest::header::{ACCEPT_ENCODING, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{ActionError, Result};
use crate::types::{Issue, IssueList, Rollout};

/// Read-only client for the Bytebase v1 API.
pub struct BytebaseClient {
    http: Client,
    endpoint: String,
    token: String,
}

impl BytebaseClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            http: Client::new(),
            endpoint: config.endpoint()?,
            token: config.token.clone(),
        })
    }

    /// All issues of a project.
    pub async fn list_issues(&self, project_id: &str) -> Result<Vec<Issue>> {
        let body = self.get(&format!("projects/{project_id}/issues")).await?;
        let list: IssueList = serde_json::from_value(body)?;
        Ok(list.into_issues())
    }

    pub async fn get_rollout(&self, project_id: &str, rollout_uid: &str) -> Result<Rollout> {
        let body = self
            .get(&format!("projects/{project_id}/rollouts/{rollout_uid}"))
            .await?;
        Ok(Rollout(body))
    }

    /// The API reports failures in the body, so the status code is not consulted.
    async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}/v1/{path}", self.endpoint);
        debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT_ENCODING, "deflate, gzip")
            .send()
            .await?;

        debug!(status = %response.status(), %url, "response");
        let body: Value = response.json().await?;

        if let Some(message) = error_message(&body) {
            return Err(ActionError::Api { message });
        }

        Ok(body)
    }
}

/// A `message` field that is set to anything truthy marks an error response.
fn error_message(body: &Value) -> Option<String> {
    match body.get("message")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
