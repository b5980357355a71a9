use {
    anyhow::Result,
    secrecy::ExposeSecret,
    tracing::debug,
};

use crate::{auth::ConnectorAuth, config::TeamsConfig, message::ChannelMessage};

/// Delivers converted messages to a Teams conversation over the connector
/// API. Holds no per-conversation state; the service URL arrives with each
/// inbound activity.
pub struct TeamsSender {
    http: reqwest::Client,
    config: TeamsConfig,
    auth: ConnectorAuth,
}

impl TeamsSender {
    pub fn new(config: TeamsConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            auth: ConnectorAuth::new(),
        }
    }

    /// Send every message, in order, to one conversation.
    pub async fn send_all(
        &self,
        service_url: &str,
        conversation_id: &str,
        messages: &[ChannelMessage],
    ) -> Result<()> {
        for message in messages {
            self.send_one(service_url, conversation_id, message).await?;
        }
        Ok(())
    }

    async fn send_one(
        &self,
        service_url: &str,
        conversation_id: &str,
        message: &ChannelMessage,
    ) -> Result<()> {
        let token = self.auth.access_token(&self.http, &self.config).await?;
        let url = format!(
            "{}/v3/conversations/{}/activities",
            service_url.trim_end_matches('/'),
            urlencoding::encode(conversation_id)
        );
        debug!(conversation_id, "sending activity");
        let resp = self
            .http
            .post(url)
            .bearer_auth(token.expose_secret())
            .json(message)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("Teams send failed ({status}): {body}");
        }
        Ok(())
    }
}
