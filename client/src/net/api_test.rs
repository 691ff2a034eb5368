use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

/// Records every request and answers with a canned reply.
struct StubTransport {
    reply: Result<HttpReply, TransportError>,
    calls: RefCell<Vec<(String, serde_json::Value)>>,
}

impl StubTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self { reply: Ok(HttpReply { status, body: body.to_owned() }), calls: RefCell::new(Vec::new()) }
    }

    fn failing(message: &str) -> Self {
        Self { reply: Err(TransportError(message.to_owned())), calls: RefCell::new(Vec::new()) }
    }
}

impl AuthTransport for StubTransport {
    async fn post_json(&self, url: &str, body: &Credentials) -> Result<HttpReply, TransportError> {
        self.calls
            .borrow_mut()
            .push((url.to_owned(), serde_json::to_value(body).unwrap()));
        self.reply.clone()
    }
}

fn config() -> ApiConfig {
    ApiConfig::new("http://api.test")
}

#[test]
fn auth_action_paths() {
    assert_eq!(AuthAction::Signup.path(), "/signup");
    assert_eq!(AuthAction::Login.path(), "/login");
    assert_eq!(AuthAction::Login.to_string(), "login");
}

#[test]
fn submit_posts_exactly_once_with_credentials_body() {
    let transport = StubTransport::replying(200, r#"{"message":"User signed up successfully"}"#);
    let creds = Credentials::new("alice", "pw");

    let result = block_on(submit(&transport, &config(), AuthAction::Signup, &creds));

    assert_eq!(result, Ok("User signed up successfully".to_owned()));
    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "http://api.test/signup");
    assert_eq!(calls[0].1, serde_json::json!({ "username": "alice", "password": "pw" }));
}

#[test]
fn submit_sends_empty_strings_without_validation() {
    let transport = StubTransport::replying(200, r#"{"message":"ok"}"#);

    let result = block_on(submit(&transport, &config(), AuthAction::Login, &Credentials::default()));

    assert_eq!(result, Ok("ok".to_owned()));
    let calls = transport.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "http://api.test/login");
    assert_eq!(calls[0].1, serde_json::json!({ "username": "", "password": "" }));
}

#[test]
fn submit_reads_message_from_login_body_with_token() {
    let transport = StubTransport::replying(
        200,
        r#"{"message":"Login successful","access_token":"jwt","token_type":"bearer"}"#,
    );
    let result = block_on(submit(&transport, &config(), AuthAction::Login, &Credentials::new("a", "b")));
    assert_eq!(result, Ok("Login successful".to_owned()));
}

#[test]
fn submit_maps_transport_failure_to_network_error() {
    let transport = StubTransport::failing("connection refused");
    let result = block_on(submit(&transport, &config(), AuthAction::Signup, &Credentials::default()));
    assert_eq!(result, Err(SubmitError::Network(TransportError("connection refused".to_owned()))));
    assert_eq!(transport.calls.borrow().len(), 1);
}

#[test]
fn submit_maps_non_2xx_to_rejected_with_detail() {
    let transport = StubTransport::replying(401, r#"{"detail":"Invalid username or password"}"#);
    let result = block_on(submit(&transport, &config(), AuthAction::Login, &Credentials::default()));
    assert_eq!(
        result,
        Err(SubmitError::Rejected { status: 401, detail: "Invalid username or password".to_owned() })
    );
}

#[test]
fn submit_rejected_falls_back_to_raw_body_or_status() {
    let transport = StubTransport::replying(502, "  Bad Gateway ");
    let result = block_on(submit(&transport, &config(), AuthAction::Signup, &Credentials::default()));
    assert_eq!(result, Err(SubmitError::Rejected { status: 502, detail: "Bad Gateway".to_owned() }));

    let transport = StubTransport::replying(500, "");
    let result = block_on(submit(&transport, &config(), AuthAction::Signup, &Credentials::default()));
    assert_eq!(result, Err(SubmitError::Rejected { status: 500, detail: "HTTP 500".to_owned() }));
}

#[test]
fn submit_rejects_success_body_without_message() {
    let transport = StubTransport::replying(200, r#"{"status":"ok"}"#);
    let result = block_on(submit(&transport, &config(), AuthAction::Signup, &Credentials::default()));
    assert!(matches!(result, Err(SubmitError::Decode(_))));
}

#[test]
fn unavailable_transport_always_fails() {
    let result = block_on(submit(&UnavailableTransport, &config(), AuthAction::Signup, &Credentials::default()));
    assert_eq!(result, Err(SubmitError::Network(TransportError("not available on server".to_owned()))));
}
