// Error types shared by the core components
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolarError>;

#[derive(Debug, Error)]
pub enum SolarError {
    #[error("token endpoint rejected credentials with status {0}")]
    Credential(u16),
    #[error("{endpoint} returned status {status}")]
    Status { endpoint: &'static str, status: u16 },
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unparsable token expiry {0:?}")]
    ClockSkew(String),
    #[error("failed to get token: {0}")]
    Token(Box<SolarError>),
}
