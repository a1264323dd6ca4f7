//! Cross-origin policy.

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;
use crate::http::server::ServerError;

/// Build the CORS layer from configuration.
///
/// Only the listed origins are echoed back; anything else gets a response
/// without `access-control-allow-origin` and the browser blocks it.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ServerError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::Cors {
                kind: "origin",
                value: origin.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let methods = config
        .allowed_methods
        .iter()
        .map(|method| {
            method.parse::<Method>().map_err(|_| ServerError::Cors {
                kind: "method",
                value: method.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let headers = config
        .allowed_headers
        .iter()
        .map(|header| {
            header.parse::<HeaderName>().map_err(|_| ServerError::Cors {
                kind: "header",
                value: header.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::list(methods))
        .allow_headers(AllowHeaders::list(headers))
        .allow_credentials(config.allow_credentials))
}
