use std::time::{Duration, Instant};

use {
    anyhow::Result,
    secrecy::{ExposeSecret, Secret},
    serde::Deserialize,
    tokio::sync::Mutex,
};

use crate::config::TeamsConfig;

#[derive(Clone)]
struct CachedToken {
    token: Secret<String>,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        let refresh_skew = Duration::from_secs(60);
        self.expires_at > Instant::now() + refresh_skew
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<u64>,
}

/// Client-credentials token issuance for the Bot Framework connector API,
/// with an in-process cache refreshed ahead of expiry.
pub struct ConnectorAuth {
    cache: Mutex<Option<CachedToken>>,
}

impl ConnectorAuth {
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(None),
        }
    }

    pub async fn access_token(
        &self,
        http: &reqwest::Client,
        config: &TeamsConfig,
    ) -> Result<Secret<String>> {
        {
            let guard = self.cache.lock().await;
            if let Some(token) = guard.as_ref()
                && token.is_valid()
            {
                return Ok(token.token.clone());
            }
        }

        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", config.app_id.as_str()),
            ("client_secret", config.app_password.expose_secret()),
            ("scope", config.oauth_scope.as_str()),
        ];

        let resp = http.post(config.token_url()).form(&form).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("connector token request failed ({status}): {body}");
        }

        let body: TokenResponse = resp.json().await?;
        let ttl = body.expires_in.unwrap_or(3600).max(120);
        let cached = CachedToken {
            token: Secret::new(body.access_token),
            expires_at: Instant::now() + Duration::from_secs(ttl),
        };
        let token = cached.token.clone();

        let mut guard = self.cache.lock().await;
        *guard = Some(cached);
        Ok(token)
    }
}

impl Default for ConnectorAuth {
    fn default() -> Self {
        Self::new()
    }
}
