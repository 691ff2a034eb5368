use super::*;

#[test]
fn default_points_at_local_api() {
    assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000");
    assert_eq!(ApiConfig::default().endpoint("/signup"), "http://localhost:8000/signup");
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = ApiConfig::new("https://auth.example.com///");
    assert_eq!(cfg.base_url(), "https://auth.example.com");
}

#[test]
fn new_blank_falls_back_to_default() {
    assert_eq!(ApiConfig::new("   ").base_url(), DEFAULT_API_BASE_URL);
    assert_eq!(ApiConfig::new("/").base_url(), DEFAULT_API_BASE_URL);
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = ApiConfig::new("http://api.test/v1/");
    assert_eq!(cfg.endpoint("/login"), "http://api.test/v1/login");
    assert_eq!(cfg.endpoint("login"), "http://api.test/v1/login");
}

#[test]
fn from_build_env_is_normalized() {
    let cfg = ApiConfig::from_build_env();
    assert!(!cfg.base_url().ends_with('/'));
    assert!(!cfg.base_url().is_empty());
}
