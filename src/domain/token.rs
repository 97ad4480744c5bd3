// Bearer token issued by the vendor
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::energy::null_as_default;
use crate::error::SolarError;

/// Raw token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub expires: Option<String>,
    pub token: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: i64,
}

#[derive(Clone)]
pub struct Token {
    pub value: String,
    pub duration_secs: i64,
    /// `None` when the vendor's expiry could not be parsed; such a token is never reused
    pub expires_at: Option<DateTime<Utc>>,
}

impl Token {
    pub fn new(value: String, duration_secs: i64, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            value,
            duration_secs,
            expires_at,
        }
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now < expires_at)
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("duration_secs", &self.duration_secs)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

impl TokenResponse {
    /// Build a token, degrading to unknown expiry when `expires` is not RFC 3339
    pub fn into_token(self) -> (Token, Option<SolarError>) {
        let parsed = match self.expires.as_deref() {
            Some(raw) => parse_expiry(raw),
            None => Err(SolarError::ClockSkew(String::new())),
        };
        let (expires_at, skew) = match parsed {
            Ok(at) => (Some(at), None),
            Err(e) => (None, Some(e)),
        };
        (Token::new(self.token, self.duration, expires_at), skew)
    }
}

pub fn parse_expiry(raw: &str) -> Result<DateTime<Utc>, SolarError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| SolarError::ClockSkew(raw.to_string()))
}
