//! Configuration validation.
//!
//! Serde handles syntax; this module checks that the values make sense
//! before the relay binds anything. All problems are reported together.

use std::net::SocketAddr;

use axum::http::{HeaderName, HeaderValue, Method};
use thiserror::Error;
use url::Url;

use crate::config::schema::RelayConfig;

/// A single failed semantic check.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("upstream.url `{0}` is not a valid URL")]
    UpstreamUrl(String),

    #[error("upstream.url `{0}` must use http or https")]
    UpstreamScheme(String),

    #[error("cors.allowed_origins must not be empty")]
    NoOrigins,

    #[error("cors origin `{0}` is not a valid header value")]
    Origin(String),

    #[error("cors method `{0}` is not a valid HTTP method")]
    Method(String),

    #[error("cors header `{0}` is not a valid header name")]
    Header(String),
}

/// Check a configuration, collecting every error rather than stopping at the first.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(_) => errors.push(ValidationError::UpstreamScheme(config.upstream.url.clone())),
        Err(_) => errors.push(ValidationError::UpstreamUrl(config.upstream.url.clone())),
    }

    let cors = &config.cors;
    if cors.allowed_origins.is_empty() {
        errors.push(ValidationError::NoOrigins);
    }
    for origin in &cors.allowed_origins {
        // `*` is incompatible with credentialed requests.
        if origin == "*" || HeaderValue::from_str(origin).is_err() {
            errors.push(ValidationError::Origin(origin.clone()));
        }
    }
    for method in &cors.allowed_methods {
        if method.parse::<Method>().is_err() {
            errors.push(ValidationError::Method(method.clone()));
        }
    }
    for header in &cors.allowed_headers {
        if header.parse::<HeaderName>().is_err() {
            errors.push(ValidationError::Header(header.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
