//! Integration tests for the users router.
//!
//! These tests exercise the router with the moderator guard in place and a
//! mocked directory backend. Authentication is simulated by inserting an
//! `AuthorizedPrincipal` into request extensions, the way the bearer
//! middleware does after token validation.

use std::collections::BTreeMap;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use roster_api_users::{users_router, UsersState};
use roster_auth::{AuthorizedPrincipal, TokenClaims};
use roster_directory::auth::{DirectoryAuth, DirectoryCredentials};
use roster_directory::DirectoryClient;
use serde_json::json;
use tower::util::ServiceExt;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REALM: &str = "roster";

fn directory_client(base_url: &str) -> DirectoryClient {
    let auth = DirectoryAuth::new(
        DirectoryCredentials::Token {
            token: "test-admin-token".to_string(),
        },
        reqwest::Client::new(),
    );
    DirectoryClient::new(
        base_url.to_string(),
        REALM.to_string(),
        auth,
        Duration::from_secs(5),
    )
    .unwrap()
}

fn test_app(base_url: &str) -> Router {
    users_router(UsersState::new(directory_client(base_url)))
}

fn principal_with_roles(subject: &str, roles: Vec<&str>) -> AuthorizedPrincipal {
    let claims = TokenClaims::builder()
        .subject(subject)
        .issuer("roster")
        .realm_roles(roles)
        .expires_in_secs(3600)
        .build();
    AuthorizedPrincipal::from_claims(&claims)
}

fn authed_request(
    method: &str,
    uri: &str,
    principal: AuthorizedPrincipal,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let mut request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    request.extensions_mut().insert(principal);
    request
}

fn valid_create_body() -> serde_json::Value {
    json!({
        "username": "someUserName",
        "email": "someusername@test.com",
        "password": "somePassword",
        "firstName": "Ivan",
        "lastName": "Ivanov"
    })
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// POST /users
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_create_user_returns_200_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/admin/realms/{REALM}/users")))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let request = authed_request(
        "POST",
        "/",
        principal_with_roles("mihail", vec!["MODERATOR"]),
        Some(valid_create_body()),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "");
}

#[tokio::test]
async fn test_create_user_invalid_body_returns_field_map() {
    let mock_server = MockServer::start().await;

    // The directory must not be called when validation fails.
    Mock::given(method("POST"))
        .and(path(format!("/admin/realms/{REALM}/users")))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let request = authed_request(
        "POST",
        "/",
        principal_with_roles("mihail", vec!["MODERATOR"]),
        Some(json!({
            "username": "m",
            "email": "",
            "password": "1",
            "firstName": "Ivan",
            "lastName": "Ivanov"
        })),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_string(response).await;
    let violations: BTreeMap<String, String> = serde_json::from_str(&body).unwrap();
    assert_eq!(violations.len(), 3);
    assert_eq!(
        violations["username"],
        "Username should be between 2 and 30 characters long"
    );
    assert_eq!(violations["email"], "Email should be valid");
    assert_eq!(
        violations["password"],
        "Password should be greater than 2 characters long"
    );
}

#[tokio::test]
async fn test_create_user_duplicate_returns_409() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/admin/realms/{REALM}/users")))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"errorMessage": "User exists with same username"})),
        )
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let request = authed_request(
        "POST",
        "/",
        principal_with_roles("mihail", vec!["MODERATOR"]),
        Some(valid_create_body()),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_string(response).await, "Username already exists");
}

#[tokio::test]
async fn test_create_user_directory_failure_carries_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("/admin/realms/{REALM}/users")))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let request = authed_request(
        "POST",
        "/",
        principal_with_roles("mihail", vec!["MODERATOR"]),
        Some(valid_create_body()),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_string(response).await, "Internal Server Error");
}

#[tokio::test]
async fn test_create_user_without_principal_returns_401() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server.uri());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("Content-Type", "application/json")
        .body(Body::from(
            serde_json::to_vec(&valid_create_body()).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_user_wrong_role_returns_403() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server.uri());

    let request = authed_request(
        "POST",
        "/",
        principal_with_roles("mihail", vec!["USER"]),
        Some(valid_create_body()),
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_string(response).await, "Moderator role required");
}

// ═══════════════════════════════════════════════════════════════════════
// GET /users/:id
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_get_user_returns_combined_profile() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/admin/realms/{REALM}/users/{user_id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": user_id,
            "username": "ivan",
            "firstName": "Ivan",
            "lastName": "Ivanov",
            "email": "ivan@test.com",
            "groups": ["moderators"]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!(
            "/admin/realms/{REALM}/users/{user_id}/role-mappings"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "realmMappings": [
                {"id": "r1", "name": "offline_access"},
                {"id": "r2", "name": "MODERATOR"}
            ]
        })))
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let request = authed_request(
        "GET",
        &format!("/{user_id}"),
        principal_with_roles("mihail", vec!["MODERATOR"]),
        None,
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let profile: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(profile["firstName"], "Ivan");
    assert_eq!(profile["lastName"], "Ivanov");
    assert_eq!(profile["email"], "ivan@test.com");
    assert_eq!(profile["roles"], json!(["MODERATOR", "offline_access"]));
    assert_eq!(profile["groups"], json!(["moderators"]));
}

#[tokio::test]
async fn test_get_user_malformed_id_returns_400_without_directory_call() {
    let mock_server = MockServer::start().await;

    // No directory request may be issued for a malformed id.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let request = authed_request(
        "GET",
        "/not-a-uuid",
        principal_with_roles("mihail", vec!["MODERATOR"]),
        None,
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_string(response).await, "Invalid user id: not-a-uuid");
}

#[tokio::test]
async fn test_get_user_missing_returns_404() {
    let mock_server = MockServer::start().await;
    let user_id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/admin/realms/{REALM}/users/{user_id}")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "User not found"})),
        )
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let request = authed_request(
        "GET",
        &format!("/{user_id}"),
        principal_with_roles("mihail", vec!["MODERATOR"]),
        None,
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "User not found");
}

#[tokio::test]
async fn test_get_user_wrong_role_returns_403() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server.uri());

    let request = authed_request(
        "GET",
        &format!("/{}", Uuid::new_v4()),
        principal_with_roles("mihail", vec![]),
        None,
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ═══════════════════════════════════════════════════════════════════════
// GET /users/hello
// ═══════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_hello_returns_subject_as_plain_text() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server.uri());

    let request = authed_request(
        "GET",
        "/hello",
        principal_with_roles("mihail", vec!["MODERATOR"]),
        None,
    );

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "mihail");
}

#[tokio::test]
async fn test_hello_without_principal_returns_401() {
    let mock_server = MockServer::start().await;
    let app = test_app(&mock_server.uri());

    let request = Request::builder()
        .method("GET")
        .uri("/hello")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "Authentication required");
}
