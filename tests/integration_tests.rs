//! Integration tests for the oto-link client against an in-process mock
//! gateway (see `common`). Exercises the full dispatch path: bearer
//! attachment, envelope unwrapping, acknowledgement endpoints, the 401
//! invalidation side effect and the session lifecycle on top of it.

mod common;

use common::{spawn, VALID_PASSWORD, VALID_TOKEN, VALID_USERNAME};
use oto_link::{
    LoginRequest, MemoryCredentialStore, OtoLinkClient, OtoLinkError, Role, SessionState,
    SessionStore,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn client_for(server: &common::TestServer) -> OtoLinkClient {
    OtoLinkClient::builder()
        .base_url(server.base_url.clone())
        .health_url(server.health_url.clone())
        .credential_store(Arc::new(MemoryCredentialStore::new()))
        .build()
        .expect("client builds")
}

fn client_with_token(server: &common::TestServer, token: &str) -> OtoLinkClient {
    OtoLinkClient::builder()
        .base_url(server.base_url.clone())
        .health_url(server.health_url.clone())
        .credential_store(Arc::new(MemoryCredentialStore::with_token(token)))
        .build()
        .expect("client builds")
}

#[tokio::test]
async fn test_login_persists_token_and_attaches_bearer() {
    let server = spawn().await;
    let client = client_for(&server);
    assert!(!client.is_authenticated());

    let login = client
        .login(&LoginRequest::new(VALID_USERNAME, VALID_PASSWORD))
        .await
        .expect("login succeeds");
    assert_eq!(login.token, VALID_TOKEN);
    assert_eq!(login.user.role, Role::Admin);
    assert!(client.is_authenticated());

    // The very next call carries the token.
    let profile = client.get_profile().await.expect("profile succeeds");
    assert_eq!(profile.username, VALID_USERNAME);
    assert_eq!(
        server.state.last_auth_header().as_deref(),
        Some(format!("Bearer {}", VALID_TOKEN).as_str())
    );
}

#[tokio::test]
async fn test_login_failure_is_auth_error_with_backend_message() {
    let server = spawn().await;
    let client = client_for(&server);

    let err = client
        .login(&LoginRequest::new(VALID_USERNAME, "wrong"))
        .await
        .expect_err("login fails");
    match err {
        OtoLinkError::AuthError(message) => assert_eq!(message, "invalid credentials"),
        other => panic!("expected AuthError, got {:?}", other),
    }
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_paginated_envelope_unwrap() {
    let server = spawn().await;
    let client = client_with_token(&server, VALID_TOKEN);

    let page = client
        .list_customers(2, 10, None)
        .await
        .expect("customers succeed");
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.pagination.page, 2);
    assert_eq!(page.pagination.total_pages, 5);
    assert!(page.pagination.has_prev());
    assert!(page.pagination.has_next());
    // Page 2 with limit 10 starts at id 11.
    assert_eq!(page.data[0].id, 11);
}

#[tokio::test]
async fn test_message_only_acknowledgement_is_success() {
    let server = spawn().await;
    let client = client_with_token(&server, VALID_TOKEN);

    // 200 with `{"message": ...}` and no `data` is still a success for
    // acknowledgement endpoints.
    client.delete_customer(7).await.expect("delete succeeds");
}

#[tokio::test]
async fn test_error_envelope_maps_to_api_error() {
    let server = spawn().await;
    let client = client_with_token(&server, VALID_TOKEN);

    let err = client
        .list_vehicles(1, 10, None)
        .await
        .expect_err("vehicles fail");
    match err {
        OtoLinkError::ApiError {
            status_code,
            message,
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unauthorized_clears_credential_and_fires_hook_once() {
    let server = spawn().await;
    let client = client_with_token(&server, "expired-token");

    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    client.on_session_invalidated(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let err = client.get_profile().await.expect_err("401 expected");
    assert!(err.is_auth_error());
    assert!(!client.is_authenticated());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_multipart_upload_returns_url() {
    let server = spawn().await;
    let client = client_with_token(&server, VALID_TOKEN);

    let response = client
        .upload_vehicle_photo(42, "front.jpg", b"not really a jpeg".to_vec())
        .await
        .expect("upload succeeds");
    assert_eq!(response.url, "/uploads/vehicles/42.jpg");
}

#[tokio::test]
async fn test_health_check_bypasses_api_prefix() {
    let server = spawn().await;
    let client = client_for(&server);

    let health = client.health_check().await.expect("health succeeds");
    assert!(health.is_healthy());
}

#[tokio::test]
async fn test_session_initialize_restores_stored_session() {
    let server = spawn().await;
    let client = Arc::new(client_with_token(&server, VALID_TOKEN));

    let session = SessionStore::new(Arc::clone(&client));
    let state = session.initialize().await;

    match state {
        SessionState::Authenticated(user) => assert_eq!(user.username, VALID_USERNAME),
        other => panic!("expected Authenticated, got {:?}", other),
    }
    assert_eq!(session.current().role(), Some(Role::Admin));
}

#[tokio::test]
async fn test_session_initialize_absorbs_rejected_token() {
    let server = spawn().await;
    let client = Arc::new(client_with_token(&server, "expired-token"));

    let session = SessionStore::new(Arc::clone(&client));
    let state = session.initialize().await;

    assert_eq!(state, SessionState::Unauthenticated);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_mid_flight_401_flips_session_store() {
    let server = spawn().await;
    let client = Arc::new(client_with_token(&server, VALID_TOKEN));

    let session = SessionStore::new(Arc::clone(&client));
    session
        .login(&LoginRequest::new(VALID_USERNAME, VALID_PASSWORD))
        .await
        .expect("login succeeds");
    assert!(session.is_authenticated());

    // Simulate server-side revocation: swap in a token the backend
    // rejects, then make any domain call.
    client.set_credential("expired-token").expect("set token");
    let err = client.list_customers(1, 10, None).await.expect_err("401");
    assert!(err.is_auth_error());

    // The session observed the invalidation without its own call.
    assert_eq!(session.current(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn test_cleared_credential_sends_no_auth_header() {
    let server = spawn().await;
    let client = client_with_token(&server, VALID_TOKEN);

    client.get_profile().await.expect("profile succeeds");
    assert_eq!(
        server.state.last_auth_header().as_deref(),
        Some(format!("Bearer {}", VALID_TOKEN).as_str())
    );

    client.clear_credential().expect("clear succeeds");

    // The next request goes out with no Authorization header at all; the
    // mock records "" for absent headers.
    let err = client.get_profile().await.expect_err("401 expected");
    assert!(err.is_auth_error());
    assert_eq!(server.state.last_auth_header().as_deref(), Some(""));
}

#[tokio::test]
async fn test_login_then_full_flow() {
    let server = spawn().await;
    let client = Arc::new(client_for(&server));
    let session = SessionStore::new(Arc::clone(&client));

    assert_eq!(session.initialize().await, SessionState::Unauthenticated);

    let user = session
        .login(&LoginRequest::new(VALID_USERNAME, VALID_PASSWORD))
        .await
        .expect("login succeeds");
    assert_eq!(user.role, Role::Admin);

    let page = client
        .list_customers(1, 5, None)
        .await
        .expect("list succeeds");
    assert_eq!(page.data.len(), 5);

    session.logout();
    assert!(!session.is_authenticated());
    assert!(!client.is_authenticated());
}
