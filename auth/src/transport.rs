//! Network seam for the credential exchange.

use crate::error::TransportError;

/// Content type sent with the (body-less) login request.
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Status and fully-read text body of a login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginResponse {
    pub status: u16,
    pub body: String,
}

impl LoginResponse {
    /// Whether the status is in the 2xx range.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues `POST {url}` with the given `Authorization` header.
///
/// Implementations must also send `Content-Type: application/json`, send no
/// body, and read the whole response body as text. Any status code is a
/// successful transport result; only a failure to complete the exchange is an
/// error.
///
/// Futures are not required to be `Send` so browser fetch implementations fit.
#[async_trait::async_trait(?Send)]
pub trait LoginTransport {
    /// Perform the login request.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the request could not complete or the
    /// response body could not be read.
    async fn post_login(&self, url: &str, authorization: &str) -> Result<LoginResponse, TransportError>;
}
