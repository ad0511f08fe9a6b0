//! Integration tests for the HTTP login client.
//!
//! Each test points an [`HttpLoginService`] at a wiremock server and checks how
//! the response is classified.

use api::{HttpLoginService, LoginError, LoginRequest, LoginService, Role, UNEXPECTED_ERROR};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

fn doctor_request() -> LoginRequest {
    LoginRequest::new("house@example.com", "Vicodin#2004", Role::Doctor)
}

#[tokio::test]
async fn test_posts_credentials_and_decodes_success() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "house@example.com",
            "password": "Vicodin#2004",
            "role": "doctor",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "t1",
            "role": "doctor",
            "user": {"id": 1},
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpLoginService::new(format!("{}/api/login", server.uri()));
    let response = service.login(&doctor_request()).await.unwrap();

    assert_eq!(response.token, "t1");
    assert_eq!(response.role(), Some(Role::Doctor));
    assert_eq!(response.user, json!({"id": 1}));
}

#[tokio::test]
async fn test_rejection_with_error_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let service = HttpLoginService::new(format!("{}/api/login", server.uri()));
    let error = service.login(&doctor_request()).await.unwrap_err();

    match &error {
        LoginError::Rejected { status, message } => {
            assert_eq!(*status, 401);
            assert_eq!(message.as_deref(), Some("Invalid credentials"));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(error.field_message(), "Invalid credentials");
}

#[tokio::test]
async fn test_rejection_without_error_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let service = HttpLoginService::new(format!("{}/api/login", server.uri()));
    let error = service.login(&doctor_request()).await.unwrap_err();

    assert!(matches!(
        error,
        LoginError::Rejected {
            status: 500,
            message: None
        }
    ));
    assert_eq!(error.field_message(), UNEXPECTED_ERROR);
}

#[tokio::test]
async fn test_malformed_success_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let service = HttpLoginService::new(format!("{}/api/login", server.uri()));
    let error = service.login(&doctor_request()).await.unwrap_err();

    assert!(matches!(error, LoginError::Decode(_)));
    assert_eq!(error.field_message(), UNEXPECTED_ERROR);
}

#[tokio::test]
async fn test_unreachable_endpoint() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    // Bind and drop a listener so its port is known to be closed.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let service = HttpLoginService::new(format!("http://127.0.0.1:{port}/api/login"));
    let error = service.login(&doctor_request()).await.unwrap_err();

    assert!(matches!(error, LoginError::Transport(_)));
    assert_eq!(error.field_message(), UNEXPECTED_ERROR);
}

#[test]
fn test_from_config_uses_login_url() {
    let config = api::PortalConfig::default().with_login_url("http://localhost:4000/api/login");
    let service = HttpLoginService::from_config(&config);
    assert_eq!(service.endpoint(), "http://localhost:4000/api/login");
}
