//! HTTP helpers for form posts and action links.
//!
//! Requests are marked as XHR so the server answers with JSON instead of
//! a full page, and carry the CSRF token on unsafe methods.

use crate::shared::form::body::FormBody;
use crate::shared::form::SubmitError;
use crate::system::config::AppConfig;
use crate::system::csrf;
use gloo_net::http::{Request, RequestBuilder};

/// Answer of the server, status and body untouched.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

fn prepare(builder: RequestBuilder, method: &str) -> RequestBuilder {
    let builder = builder.header("X-Requested-With", "XMLHttpRequest");
    if csrf::is_safe_method(method) {
        return builder;
    }
    let config = AppConfig::current();
    match csrf::token(&config.csrf_cookie) {
        Some(token) => builder.header(&config.csrf_header, &token),
        None => {
            log::warn!("no `{}` cookie, sending {} without CSRF token", config.csrf_cookie, method);
            builder
        }
    }
}

/// POST a form body to `url`.
pub async fn post(url: &str, body: FormBody) -> Result<RawResponse, SubmitError> {
    let mut builder = prepare(Request::post(url), "POST");
    if let Some(content_type) = body.content_type() {
        builder = builder.header("Content-Type", content_type);
    }
    let request = builder
        .body(body.into_js())
        .map_err(|e| SubmitError::Network(format!("Failed to build request: {}", e)))?;
    send(request).await
}

/// GET an action link (delete, toggle).
pub async fn get(url: &str) -> Result<RawResponse, SubmitError> {
    let request = prepare(Request::get(url), "GET")
        .build()
        .map_err(|e| SubmitError::Network(format!("Failed to build request: {}", e)))?;
    send(request).await
}

async fn send(request: Request) -> Result<RawResponse, SubmitError> {
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response
        .text()
        .await
        .map_err(|e| SubmitError::Network(format!("Failed to read response: {}", e)))?;

    log::debug!("{} -> {}", response.url(), status);

    Ok(RawResponse {
        status,
        content_type,
        body,
    })
}
