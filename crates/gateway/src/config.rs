use {
    anyhow::{Context, Result},
    secrecy::Secret,
};

use {flowbridge_engine::client::EngineConfig, flowbridge_teams::config::TeamsConfig};

/// Platform tag Dialogflow responses must carry (or omit) to reach this
/// channel.
pub const DEFAULT_PLATFORM: &str = "TEAMS";

/// Event intent triggered when members join the conversation.
pub const DEFAULT_WELCOME_EVENT: &str = "TEAMS_WELCOME";

/// Everything the bridge needs for one deployment: engine agent, connector
/// credentials, and the conversion platform tag.
#[derive(Debug)]
pub struct BridgeConfig {
    pub engine: EngineConfig,
    pub teams: TeamsConfig,
    /// Bearer token for Dialogflow calls. Credential rotation is the
    /// deployment's concern, not the bridge's.
    pub access_token: Secret<String>,
    pub platform: String,
    pub welcome_event: String,
}

impl BridgeConfig {
    /// Read configuration from the process environment. Missing required
    /// variables are reported by name.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |name: &str| {
            get(name)
                .filter(|value| !value.is_empty())
                .with_context(|| format!("missing required environment variable {name}"))
        };
        let optional = |name: &str| get(name).filter(|value| !value.is_empty());

        let engine = EngineConfig {
            project_id: required("GOOGLE_PROJECT_ID")?,
            location: optional("DIALOGFLOW_LOCATION").unwrap_or_else(|| "us-central1".into()),
            agent_id: required("DIALOGFLOW_AGENT_ID")?,
            language_code: optional("DIALOGFLOW_LANGUAGE_CODE").unwrap_or_else(|| "en".into()),
            endpoint: optional("DIALOGFLOW_ENDPOINT"),
        };
        let teams = TeamsConfig {
            app_id: required("MICROSOFT_APP_ID")?,
            app_password: Secret::new(required("MICROSOFT_APP_PASSWORD")?),
            tenant: optional("MICROSOFT_TENANT_ID")
                .unwrap_or_else(|| TeamsConfig::default().tenant),
            ..TeamsConfig::default()
        };

        Ok(Self {
            engine,
            teams,
            access_token: Secret::new(required("GOOGLE_ACCESS_TOKEN")?),
            platform: optional("BRIDGE_PLATFORM").unwrap_or_else(|| DEFAULT_PLATFORM.into()),
            welcome_event: optional("BRIDGE_WELCOME_EVENT")
                .unwrap_or_else(|| DEFAULT_WELCOME_EVENT.into()),
        })
    }
}
