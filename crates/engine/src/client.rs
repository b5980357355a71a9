use std::sync::Arc;

use {
    secrecy::ExposeSecret,
    serde::Deserialize,
    serde_json::{Value, json},
    tracing::debug,
};

use crate::{
    error::{EngineError, Result},
    response::ResponseMessage,
    token::TokenSource,
};

/// Configuration for one Dialogflow CX agent.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub project_id: String,
    pub location: String,
    pub agent_id: String,
    /// Language code sent with every query input.
    pub language_code: String,
    /// REST endpoint override, mainly for tests. `None` derives the
    /// regional endpoint from `location`.
    pub endpoint: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            location: "us-central1".into(),
            agent_id: String::new(),
            language_code: "en".into(),
            endpoint: None,
        }
    }
}

/// REST session client for detect-intent turns.
///
/// One turn is one request; the client holds no per-conversation state, so
/// turns for independent sessions may run concurrently on a shared instance.
pub struct SessionClient {
    http: reqwest::Client,
    config: EngineConfig,
    tokens: Arc<dyn TokenSource>,
}

impl SessionClient {
    pub fn new(config: EngineConfig, tokens: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    fn endpoint(&self) -> String {
        match &self.config.endpoint {
            Some(endpoint) => endpoint.trim_end_matches('/').to_string(),
            None => format!("https://{}-dialogflow.googleapis.com", self.config.location),
        }
    }

    /// CX resource path for one conversation session.
    pub fn session_path(&self, session_id: &str) -> String {
        format!(
            "projects/{}/locations/{}/agents/{}/sessions/{}",
            self.config.project_id, self.config.location, self.config.agent_id, session_id
        )
    }

    /// Run one text turn and return the ordered response-message batch.
    pub async fn detect_intent(
        &self,
        text: &str,
        session_id: &str,
        payload: Option<Value>,
    ) -> Result<Vec<ResponseMessage>> {
        debug!(session_id, "detect intent");
        let query_input = json!({
            "text": { "text": text },
            "languageCode": self.config.language_code,
        });
        let query_params = payload.map(|payload| json!({ "payload": payload }));
        self.detect(session_id, query_input, query_params).await
    }

    /// Run one event turn (e.g. a welcome event) and return the batch.
    pub async fn detect_intent_with_event(
        &self,
        event: &str,
        session_id: &str,
    ) -> Result<Vec<ResponseMessage>> {
        debug!(session_id, event, "detect intent with event");
        let query_input = json!({
            "event": { "event": event },
            "languageCode": self.config.language_code,
        });
        self.detect(session_id, query_input, None).await
    }

    async fn detect(
        &self,
        session_id: &str,
        query_input: Value,
        query_params: Option<Value>,
    ) -> Result<Vec<ResponseMessage>> {
        let session = self.session_path(session_id);
        let url = format!("{}/v3/{}:detectIntent", self.endpoint(), session);

        let mut body = json!({ "queryInput": query_input });
        if let (Some(params), Some(obj)) = (query_params, body.as_object_mut()) {
            obj.insert("queryParams".into(), params);
        }

        let token = self.tokens.token().await?;
        let resp = self
            .http
            .post(&url)
            .bearer_auth(token.expose_secret())
            .json(&body)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(EngineError::Status { status, body });
        }

        let result: DetectIntentResponse = resp.json().await?;
        Ok(result.query_result.response_messages)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DetectIntentResponse {
    query_result: QueryResult,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct QueryResult {
    response_messages: Vec<ResponseMessage>,
}
