//! Build-time client configuration.
//!
//! The API base URL is baked into the WASM bundle from `LOGIN_API_URL` at
//! compile time. Leaving it unset targets the page origin.

use auth::LoginConfig;

const API_BASE_URL: Option<&str> = option_env!("LOGIN_API_URL");

/// Login configuration for this build.
pub fn login_config() -> LoginConfig {
    config_from(API_BASE_URL)
}

fn config_from(base_url: Option<&str>) -> LoginConfig {
    LoginConfig::new(base_url.unwrap_or_default())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
