//! REST transport for the credential exchange.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub that always fails, since login only ever runs in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Any status code is handed back to the caller; only a request that could not
//! complete, or a body that could not be read, becomes a `TransportError`.

#![allow(clippy::unused_async)]

use auth::{LoginResponse, LoginTransport, TransportError};

/// `fetch`-backed [`LoginTransport`].
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[async_trait::async_trait(?Send)]
impl LoginTransport for GlooTransport {
    async fn post_login(&self, url: &str, authorization: &str) -> Result<LoginResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Authorization", authorization)
                .header("Content-Type", auth::CONTENT_TYPE_JSON)
                .send()
                .await
                .map_err(|e| request_failed(&e))?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| body_unreadable(&e))?;
            Ok(LoginResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, authorization);
            Err(TransportError::Request("not available on server".to_owned()))
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed(error: &impl std::fmt::Display) -> TransportError {
    TransportError::Request(error.to_string())
}

#[cfg(any(test, feature = "hydrate"))]
fn body_unreadable(error: &impl std::fmt::Display) -> TransportError {
    TransportError::Body(error.to_string())
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
