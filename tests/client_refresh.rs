//! Integration tests for token handling against a mock HTTP server

use avis_cli::api::{ApiClient, AuthClient, Complaint, Feedback, session_from_tokens};
use avis_cli::session::{Role, Session};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEEDBACK: &str = "/api/avis/full/";
const COMPLAINTS: &str = "/api/reclamations/full/";
const REFRESH: &str = "/accounts/api/refresh/";
const LOGIN: &str = "/accounts/api/login/";

fn fake_jwt(claims: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{}.{}.signature", header, payload)
}

fn staff_session() -> Session {
    Session {
        access_token: Some("old-access".to_string()),
        refresh_token: Some("refresh-token".to_string()),
        role: Role::Staff,
        username: Some("agent".to_string()),
        client: None,
    }
}

fn empty_page() -> serde_json::Value {
    json!({"count": 0, "next": null, "previous": null, "results": []})
}

fn unauthorized() -> ResponseTemplate {
    ResponseTemplate::new(401).set_body_json(json!({"detail": "token expired"}))
}

fn client_for(server: &MockServer, session: Session) -> ApiClient {
    ApiClient::with_custom_client(server.uri(), session, reqwest::Client::new())
}

/// `METHOD PATH AUTHORIZATION` for every request the server saw, in order
async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            let auth = request
                .headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            format!("{} {} {}", request.method, request.url.path(), auth)
        })
        .collect()
}

/// Rejects `old-access`, accepts `new-access` on `endpoint`
async fn mount_expiring_endpoint(server: &MockServer, endpoint: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("authorization", "Bearer old-access"))
        .respond_with(unauthorized())
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("authorization", "Bearer new-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(server)
        .await;
}

/// A 401 triggers one refresh, then the original request is retried with
/// the new token
#[tokio::test]
async fn test_refresh_then_retry_once() {
    let server = MockServer::start().await;
    mount_expiring_endpoint(&server, FEEDBACK).await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .and(body_json(json!({"refresh": "refresh-token"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new-access"})))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    let client = client_for(&server, staff_session()).with_session_path(session_path.clone());

    let page = client.get_page::<Feedback>(FEEDBACK).await.unwrap();

    assert!(page.results.is_empty());
    assert_eq!(
        request_log(&server).await,
        vec![
            "GET /api/avis/full/ Bearer old-access".to_string(),
            "POST /accounts/api/refresh/ -".to_string(),
            "GET /api/avis/full/ Bearer new-access".to_string(),
        ]
    );

    let session = client.session().await;
    assert_eq!(session.access_token.as_deref(), Some("new-access"));
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-token"));

    let saved = Session::load_from(&session_path).unwrap();
    assert_eq!(saved.access_token.as_deref(), Some("new-access"));
}

/// A request still rejected after refreshing is not retried again
#[tokio::test]
async fn test_retry_happens_only_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new-access"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FEEDBACK))
        .respond_with(unauthorized())
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server, staff_session());

    let err = client.get_page::<Feedback>(FEEDBACK).await.unwrap_err();

    assert!(err.to_string().contains("401"));
}

/// A failed refresh clears the session in memory and on disk
#[tokio::test]
async fn test_refresh_failure_clears_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(FEEDBACK))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    staff_session().save_to(&session_path).unwrap();

    let client = client_for(&server, staff_session()).with_session_path(session_path.clone());

    let err = client.get_page::<Feedback>(FEEDBACK).await.unwrap_err();

    assert!(err.to_string().contains("auth login"));
    assert!(!client.session().await.is_authenticated());
    assert_eq!(client.session().await.role, Role::Anonymous);
    assert!(!session_path.exists());
}

/// Two requests rejected at the same time share one refresh
#[tokio::test]
async fn test_concurrent_401s_refresh_once() {
    let server = MockServer::start().await;
    mount_expiring_endpoint(&server, FEEDBACK).await;
    mount_expiring_endpoint(&server, COMPLAINTS).await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"access": "new-access"}))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    let client = client_for(&server, staff_session()).with_session_path(session_path.clone());

    let (feedback, complaints) = tokio::join!(
        client.get_page::<Feedback>(FEEDBACK),
        client.get_page::<Complaint>(COMPLAINTS)
    );

    assert!(feedback.is_ok());
    assert!(complaints.is_ok());
    assert_eq!(client.session().await.access_token.as_deref(), Some("new-access"));
    assert_eq!(client.session().await.role, Role::Staff);
    assert_eq!(
        Session::load_from(&session_path).unwrap().access_token.as_deref(),
        Some("new-access")
    );
}

/// When the shared refresh fails, the waiting request gives up without
/// refreshing again or restoring a token
#[tokio::test]
async fn test_concurrent_401s_after_failed_refresh() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(unauthorized())
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(unauthorized().set_delay(Duration::from_millis(200)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    staff_session().save_to(&session_path).unwrap();
    let client = client_for(&server, staff_session()).with_session_path(session_path.clone());

    let (feedback, complaints) = tokio::join!(
        client.get_page::<Feedback>(FEEDBACK),
        client.get_page::<Complaint>(COMPLAINTS)
    );

    assert!(feedback.is_err());
    assert!(complaints.is_err());
    assert_eq!(client.session().await, Session::anonymous());
    assert!(!session_path.exists());
}

/// Without a refresh token the 401 is returned as is
#[tokio::test]
async fn test_anonymous_401_is_not_refreshed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(FEEDBACK))
        .respond_with(unauthorized())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(REFRESH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "new-access"})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server, Session::anonymous());

    let err = client.get_page::<Feedback>(FEEDBACK).await.unwrap_err();

    assert!(err.to_string().contains("401"));
    assert_eq!(request_log(&server).await, vec!["GET /api/avis/full/ -".to_string()]);
}

#[tokio::test]
async fn test_login_resolves_role_from_token_claims() {
    let access = fake_jwt(json!({"username": "chef", "is_admin": true, "is_superuser": true, "exp": 1735689600}));

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN))
        .and(body_json(json!({"username": "chef", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": access, "refresh": "r"})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthClient::new(reqwest::Client::new(), server.uri());
    let tokens = auth.login("chef", "secret").await.unwrap();
    let session = session_from_tokens(tokens, "chef").unwrap();

    assert_eq!(session.role, Role::Superuser);
    assert_eq!(session.username.as_deref(), Some("chef"));
    assert_eq!(session.refresh_token.as_deref(), Some("r"));
}

#[tokio::test]
async fn test_login_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(LOGIN))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "bad credentials"})))
        .mount(&server)
        .await;

    let auth = AuthClient::new(reqwest::Client::new(), server.uri());
    assert!(auth.login("chef", "wrong").await.is_err());
}
