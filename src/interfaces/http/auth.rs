//! Bearer-token guard for authenticated prediction routes.
//!
//! Expects `<header name>: <header type> <token>`, verifies the token with
//! the configured [`TokenVerifier`] and stores the resulting [`Claims`] in
//! the request extensions for downstream handlers.

use super::error::ApiError;
use crate::config::AuthEnvConfig;
use crate::domain::auth::{Claims, TokenVerifier};
use crate::infrastructure::auth::HmacTokenVerifier;
use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

pub struct AuthGuard {
    verifier: Arc<dyn TokenVerifier>,
    header_name: HeaderName,
    header_type: String,
}

impl AuthGuard {
    pub fn new(
        verifier: Arc<dyn TokenVerifier>,
        header_name: &str,
        header_type: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            verifier,
            header_name: HeaderName::from_bytes(header_name.as_bytes())
                .with_context(|| format!("Invalid auth header name: {}", header_name))?,
            header_type: header_type.into(),
        })
    }

    /// Builds the guard when authentication is enabled.
    pub fn from_config(config: &AuthEnvConfig) -> Result<Option<Self>> {
        if !config.enabled {
            return Ok(None);
        }
        config.validate()?;
        let secret = config
            .secret_key
            .as_deref()
            .context("JWT_SECRET_KEY is required when AUTH_ENABLED=true")?;

        let guard = Self::new(
            Arc::new(HmacTokenVerifier::new(secret)),
            &config.header_name,
            config.header_type.clone(),
        )?;
        Ok(Some(guard))
    }

    fn extract_token<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, ApiError> {
        let header = headers
            .get(&self.header_name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .unwrap_or_default();
        if header.is_empty() {
            return Err(ApiError::unauthorized("Invalid Authorization header"));
        }

        let parts: Vec<&str> = header.split_whitespace().collect();
        match parts.as_slice() {
            [kind, token] if kind.eq_ignore_ascii_case(&self.header_type) => Ok(*token),
            _ => Err(ApiError::unauthorized("Invalid Authorisation header format")),
        }
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<Claims, ApiError> {
        let token = self.extract_token(headers)?;
        self.verifier.verify(token).map_err(|e| {
            warn!("Rejected token: {}", e);
            ApiError::unauthorized(e.to_string())
        })
    }
}

pub async fn require_token(
    State(guard): State<Arc<AuthGuard>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = guard.authenticate(request.headers())?;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
