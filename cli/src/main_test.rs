use super::*;

#[test]
fn endpoint_url_joins_with_single_slash() {
    assert_eq!(endpoint_url("http://localhost:8000", "/signup"), "http://localhost:8000/signup");
    assert_eq!(endpoint_url("http://localhost:8000/", "/signup"), "http://localhost:8000/signup");
    assert_eq!(endpoint_url("http://localhost:8000", "users/me"), "http://localhost:8000/users/me");
}

#[test]
fn error_detail_prefers_json_detail() {
    assert_eq!(error_detail(409, r#"{"detail":"Username already registered"}"#), "Username already registered");
}

#[test]
fn error_detail_falls_back_to_text_then_status() {
    assert_eq!(error_detail(502, "  bad gateway \n"), "bad gateway");
    assert_eq!(error_detail(500, ""), "HTTP 500");
}

#[test]
fn bearer_header_is_sensitive() {
    let value = bearer_header("abc").unwrap();
    assert_eq!(value.to_str().unwrap(), "Bearer abc");
    assert!(value.is_sensitive());
}

#[test]
fn signup_parses_positional_username_and_password_flag() {
    let cli = Cli::try_parse_from(["portal-cli", "signup", "alice", "--password", "pw"]).unwrap();
    let Command::Signup(args) = cli.command else {
        panic!("expected signup");
    };
    assert_eq!(args.into_credentials(), Credentials::new("alice", "pw"));
}

#[test]
fn base_url_flag_overrides_default() {
    let cli = Cli::try_parse_from(["portal-cli", "--base-url", "http://api.test", "ping"]).unwrap();
    assert_eq!(cli.base_url, "http://api.test");
    assert!(matches!(cli.command, Command::Ping));
}
