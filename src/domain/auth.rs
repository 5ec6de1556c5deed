//! Token verification capability used by authenticated prediction routes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Empty Token")]
    Empty,

    #[error("Token Expired")]
    Expired,

    #[error("Invalid Token")]
    Invalid,
}

/// Decoded token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Issued-at, seconds since the epoch
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiry, seconds since the epoch
    pub exp: i64,
    /// Identity fields merged into the payload by the issuer
    #[serde(flatten)]
    pub identity: Map<String, Value>,
}

pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, TokenError>;
}
