// Token manager - Owns the bearer token and refreshes it when it lapses
use crate::application::vendor_gateway::VendorGateway;
use crate::domain::credentials::Credentials;
use crate::domain::token::Token;
use crate::error::Result;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct TokenManager {
    gateway: Arc<dyn VendorGateway>,
    credentials: Credentials,
    current: Mutex<Option<Token>>,
}

impl TokenManager {
    pub fn new(gateway: Arc<dyn VendorGateway>, credentials: Credentials) -> Self {
        Self {
            gateway,
            credentials,
            current: Mutex::new(None),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Return a usable bearer token, asking the vendor for a new one only when
    /// the cached token is absent or past its expiry.
    ///
    /// The lock is held across the refresh so concurrent callers wait for the
    /// in-flight request instead of issuing their own.
    pub async fn ensure_valid(&self) -> Result<String> {
        let mut current = self.current.lock().await;

        if let Some(token) = current.as_ref() {
            if token.is_valid_at(Utc::now()) {
                return Ok(token.value.clone());
            }
        }

        let response = self.gateway.issue_token(&self.credentials).await?;
        let (token, skew) = response.into_token();
        if let Some(e) = skew {
            tracing::warn!("Token expiry unknown, will refresh on next use: {}", e);
        }
        tracing::info!(
            expires_at = ?token.expires_at,
            duration_secs = token.duration_secs,
            "Received new token"
        );

        let value = token.value.clone();
        *current = Some(token);
        Ok(value)
    }
}
