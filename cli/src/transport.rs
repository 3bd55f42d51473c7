//! `reqwest` implementation of the login transport.

use std::time::Duration;

use auth::{CONTENT_TYPE_JSON, LoginResponse, LoginTransport, TransportError};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport, optionally bounding each request by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self { client: builder.build()? })
    }
}

#[async_trait::async_trait(?Send)]
impl LoginTransport for ReqwestTransport {
    async fn post_login(&self, url: &str, authorization: &str) -> Result<LoginResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(AUTHORIZATION, authorization)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(LoginResponse { status, body })
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;
