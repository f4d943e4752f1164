use super::*;

#[test]
fn default_points_at_hosted_backend() {
    let cfg = ClientConfig::default();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.token_key, "token");
}

#[test]
fn new_trims_trailing_slashes_and_whitespace() {
    let cfg = ClientConfig::new("  http://localhost:5000/// ");
    assert_eq!(cfg.api_base_url, "http://localhost:5000");
}

#[test]
fn blank_base_url_falls_back_to_default() {
    assert_eq!(ClientConfig::new("   ").api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_build_env_yields_normalized_url() {
    let cfg = ClientConfig::from_build_env();
    assert!(!cfg.api_base_url.is_empty());
    assert!(!cfg.api_base_url.ends_with('/'));
}
