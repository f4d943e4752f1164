//! Client configuration resolved at build time.
//!
//! A WASM bundle has no process environment at runtime, so the API base URL
//! is baked in from `CLINIC_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "https://clinic-backend-p4fx.onrender.com";
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin of the clinic REST API, without a trailing slash.
    pub api_base_url: String,
    /// `localStorage` key holding the credential token.
    pub token_key: String,
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Self {
        Self { api_base_url: normalize_base_url(api_base_url), token_key: DEFAULT_TOKEN_KEY.to_owned() }
    }

    /// Build config from `CLINIC_API_BASE_URL` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CLINIC_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL.to_owned() } else { trimmed.to_owned() }
}
