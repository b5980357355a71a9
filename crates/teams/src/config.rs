use secrecy::{ExposeSecret, Secret};

/// Connector credentials and endpoints for one Teams bot registration.
#[derive(Clone)]
pub struct TeamsConfig {
    /// Microsoft App ID (bot registration client ID).
    pub app_id: String,

    /// Microsoft App Password (client secret).
    pub app_password: Secret<String>,

    /// OAuth tenant segment for connector token issuance.
    pub tenant: String,

    /// OAuth scope for the connector API.
    pub oauth_scope: String,

    /// Token endpoint override, mainly for tests. `None` derives the
    /// Microsoft login endpoint from `tenant`.
    pub token_endpoint: Option<String>,
}

impl TeamsConfig {
    pub fn token_url(&self) -> String {
        match &self.token_endpoint {
            Some(url) => url.clone(),
            None => format!(
                "https://login.microsoftonline.com/{}/oauth2/v2.0/token",
                self.tenant
            ),
        }
    }
}

impl Default for TeamsConfig {
    fn default() -> Self {
        Self {
            app_id: String::new(),
            app_password: Secret::new(String::new()),
            tenant: "botframework.com".into(),
            oauth_scope: "https://api.botframework.com/.default".into(),
            token_endpoint: None,
        }
    }
}

impl std::fmt::Debug for TeamsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamsConfig")
            .field("app_id", &self.app_id)
            .field("app_password", &"[REDACTED]")
            .field("tenant", &self.tenant)
            .field("oauth_scope", &self.oauth_scope)
            .field("token_endpoint", &self.token_endpoint)
            .finish()
    }
}
