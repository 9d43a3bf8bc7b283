use super::*;
use std::cell::RefCell;

use crate::api::{Credentials, TokenResponse};
use crate::error::ApiError;

// =========================================================
// Shared Mock Components
// =========================================================

/// In-memory token store recording operations
#[derive(Default)]
struct TestStore {
    value: RefCell<Option<String>>,
    log: RefCell<Vec<String>>,
    /// Simulate persistence failure on store()
    fail_store: bool,
}

impl TokenStore for TestStore {
    fn load(&self) -> Option<String> {
        self.log.borrow_mut().push("load".to_string());
        self.value.borrow().clone()
    }

    fn store(&self, token: &str) -> bool {
        if self.fail_store {
            self.log.borrow_mut().push(format!("store_failed:{}", token));
            return false;
        }
        self.log.borrow_mut().push(format!("store:{}", token));
        *self.value.borrow_mut() = Some(token.to_string());
        true
    }

    fn clear(&self) -> bool {
        self.log.borrow_mut().push("clear".to_string());
        self.value.borrow_mut().take().is_some()
    }
}

/// Mock endpoint returning a preconfigured result
struct TestEndpoint {
    result: Result<TokenResponse, ApiError>,
    logout_calls: RefCell<Vec<String>>,
}

impl TestEndpoint {
    fn ok(token: &str) -> Self {
        Self {
            result: Ok(TokenResponse {
                token: token.to_string(),
            }),
            logout_calls: RefCell::new(Vec::new()),
        }
    }

    fn err(error: ApiError) -> Self {
        Self {
            result: Err(error),
            logout_calls: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl TokenEndpoint for TestEndpoint {
    async fn obtain_token(&self, _credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        self.result.clone()
    }

    async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.logout_calls.borrow_mut().push(token.to_string());
        Ok(())
    }
}

fn credentials() -> Credentials {
    Credentials {
        email: "a@b.com".to_string(),
        password: "x".to_string(),
    }
}

// =========================================================
// AuthState (pure)
// =========================================================

#[test]
fn test_logged_in_false_without_token() {
    assert!(!AuthState::default().logged_in());
}

#[test]
fn test_logged_in_true_for_any_token_value() {
    // No shape validation: malformed tokens still count as a session
    for token in ["T1", "", "???not-a-token???"] {
        let state = AuthState {
            token: Some(token.to_string()),
        };
        assert!(state.logged_in());
    }
}

#[test]
fn test_durable_storage_uses_fixed_key() {
    assert_eq!(crate::web::TOKEN_KEY, "token");
}

// =========================================================
// init_auth
// =========================================================

#[test]
fn test_init_auth_loads_persisted_token() {
    let ctx = AuthContext::new();
    let store = TestStore::default();
    *store.value.borrow_mut() = Some("persisted".to_string());

    init_auth(&ctx, &store);

    assert_eq!(
        ctx.state.get_untracked().token.as_deref(),
        Some("persisted")
    );
    assert!(ctx.logged_in_signal().get_untracked());
}

#[test]
fn test_init_auth_empty_store_stays_anonymous() {
    let ctx = AuthContext::new();
    let store = TestStore::default();

    init_auth(&ctx, &store);

    assert!(ctx.state.get_untracked().token.is_none());
    assert!(!ctx.logged_in_signal().get_untracked());
}

// =========================================================
// retrieve_token
// =========================================================

#[tokio::test]
async fn test_retrieve_token_success() {
    let ctx = AuthContext::new();
    let store = TestStore::default();
    let endpoint = TestEndpoint::ok("T1");

    // 1. Act
    let response = retrieve_token(&ctx, &store, &endpoint, &credentials())
        .await
        .unwrap();

    // 2. Resolves with the full response body
    assert_eq!(response.token, "T1");

    // 3. Durable copy written under the fixed key semantics
    assert_eq!(store.value.borrow().as_deref(), Some("T1"));

    // 4. In-memory state flips to authenticated
    assert_eq!(ctx.state.get_untracked().token.as_deref(), Some("T1"));
    assert!(ctx.logged_in_signal().get_untracked());
}

#[tokio::test]
async fn test_retrieve_token_persists_before_memory_update() {
    let ctx = AuthContext::new();
    let store = TestStore::default();
    let endpoint = TestEndpoint::ok("T1");

    retrieve_token(&ctx, &store, &endpoint, &credentials())
        .await
        .unwrap();

    assert_eq!(store.log.borrow().as_slice(), ["store:T1"]);
}

#[tokio::test]
async fn test_retrieve_token_rejection_leaves_state_untouched() {
    let ctx = AuthContext::new();
    let store = TestStore::default();
    let endpoint = TestEndpoint::err(ApiError::Status(401));

    let result = retrieve_token(&ctx, &store, &endpoint, &credentials()).await;

    // Error propagated unchanged, no partial persistence
    assert_eq!(result.unwrap_err(), ApiError::Status(401));
    assert!(store.value.borrow().is_none());
    assert!(store.log.borrow().is_empty());
    assert!(!ctx.logged_in_signal().get_untracked());
}

#[tokio::test]
async fn test_retrieve_token_network_error_propagated() {
    let ctx = AuthContext::new();
    let store = TestStore::default();
    let endpoint = TestEndpoint::err(ApiError::Network("connection refused".to_string()));

    let result = retrieve_token(&ctx, &store, &endpoint, &credentials()).await;

    assert!(matches!(result, Err(ApiError::Network(_))));
    assert!(!ctx.state.get_untracked().logged_in());
}

#[tokio::test]
async fn test_retrieve_token_failed_persist_degrades_to_memory_only() {
    let ctx = AuthContext::new();
    let store = TestStore {
        fail_store: true,
        ..Default::default()
    };
    let endpoint = TestEndpoint::ok("T1");

    // A failed persist is reported, not fatal: the call still resolves
    // and the in-memory session is established.
    let response = retrieve_token(&ctx, &store, &endpoint, &credentials())
        .await
        .unwrap();

    assert_eq!(response.token, "T1");
    assert!(store.value.borrow().is_none());
    assert_eq!(store.log.borrow().as_slice(), ["store_failed:T1"]);
    assert!(ctx.logged_in_signal().get_untracked());
}

#[tokio::test]
async fn test_retrieve_token_last_write_wins() {
    let ctx = AuthContext::new();
    let store = TestStore::default();

    // Overlapping calls are not deduplicated; the later response
    // overwrites both copies.
    retrieve_token(&ctx, &store, &TestEndpoint::ok("T1"), &credentials())
        .await
        .unwrap();
    retrieve_token(&ctx, &store, &TestEndpoint::ok("T2"), &credentials())
        .await
        .unwrap();

    assert_eq!(store.value.borrow().as_deref(), Some("T2"));
    assert_eq!(ctx.state.get_untracked().token.as_deref(), Some("T2"));
}

// =========================================================
// clear_token
// =========================================================

#[tokio::test]
async fn test_clear_token_invalidates_both_copies() {
    let ctx = AuthContext::new();
    let store = TestStore::default();
    let endpoint = TestEndpoint::ok("unused");

    ctx.set_token(Some("T1".to_string()));
    store.store("T1");

    clear_token(&ctx, &store, &endpoint).await;

    assert!(store.value.borrow().is_none());
    assert!(ctx.state.get_untracked().token.is_none());
    assert!(!ctx.logged_in_signal().get_untracked());

    // Server-side logout attempted with the old token
    assert_eq!(endpoint.logout_calls.borrow().as_slice(), ["T1"]);
}

#[tokio::test]
async fn test_clear_token_when_anonymous_skips_server_call() {
    let ctx = AuthContext::new();
    let store = TestStore::default();
    let endpoint = TestEndpoint::ok("unused");

    clear_token(&ctx, &store, &endpoint).await;

    assert!(endpoint.logout_calls.borrow().is_empty());
    assert!(ctx.state.get_untracked().token.is_none());
}
