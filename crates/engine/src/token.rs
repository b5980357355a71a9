use {
    async_trait::async_trait,
    secrecy::{ExposeSecret, Secret},
};

use crate::error::{EngineError, Result};

/// Source of OAuth bearer tokens for detect-intent calls.
///
/// Credential management lives outside this crate; the gateway injects
/// whichever implementation its deployment uses.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<Secret<String>>;
}

/// Token source backed by a fixed string, typically read from the
/// environment at startup.
pub struct StaticTokenSource {
    token: Secret<String>,
}

impl StaticTokenSource {
    pub fn new(token: Secret<String>) -> Self {
        Self { token }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<Secret<String>> {
        if self.token.expose_secret().is_empty() {
            return Err(EngineError::token("empty access token"));
        }
        Ok(self.token.clone())
    }
}
