//! Endpoint and route configuration for the login flow.

/// Path appended to the API base URL for the credential exchange.
pub const LOGIN_PATH: &str = "/do-login";

/// Client-side route of the sign-up page.
pub const SIGNUP_ROUTE: &str = "/signup";

/// Route used after login when no redirect target was stored.
pub const DEFAULT_REDIRECT: &str = "/";

/// Where the login request goes and where sign-up navigation lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
    api_base_url: String,
    signup_route: String,
}

impl LoginConfig {
    /// Build a config for `api_base_url`.
    ///
    /// Surrounding whitespace and trailing slashes are dropped. An empty base
    /// URL means the API shares the page origin.
    #[must_use]
    pub fn new(api_base_url: &str) -> Self {
        Self {
            api_base_url: api_base_url.trim().trim_end_matches('/').to_owned(),
            signup_route: SIGNUP_ROUTE.to_owned(),
        }
    }

    /// Override the sign-up route.
    #[must_use]
    pub fn with_signup_route(mut self, route: &str) -> Self {
        self.signup_route = route.to_owned();
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn signup_route(&self) -> &str {
        &self.signup_route
    }

    /// Full URL of the credential exchange endpoint.
    #[must_use]
    pub fn login_endpoint(&self) -> String {
        format!("{}{LOGIN_PATH}", self.api_base_url)
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
