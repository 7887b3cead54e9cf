//! Shared harness for HTTP integration tests.
//!
//! Builds the full application router with the same middleware stack as
//! production, backed by an in-memory [`UserStore`] so tests run without a
//! live PostgreSQL instance.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use signet_api::auth::password::hash_password;
use signet_api::auth::session::{self, Claims, SessionConfig};
use signet_api::config::ServerConfig;
use signet_api::server::build_app;
use signet_api::state::AppState;
use signet_core::types::DbId;
use signet_db::models::{User, UserSummary};
use signet_db::{StoreError, UserStore};

/// Build a test `ServerConfig` with safe defaults and a known signing secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "integration-test-secret-0123456789".to_string(),
            cookie_secure: false,
        },
    }
}

/// Build the full application router over the given store.
///
/// Mirrors `Server::bind` so integration tests exercise the same middleware
/// stack (CORS, request ID, timeout, tracing, panic recovery) that
/// production uses.
pub fn build_test_app(store: Arc<MemoryStore>) -> Router {
    let config = test_config();
    let state = AppState {
        store,
        config: Arc::new(test_config()),
    };
    build_app(&config, state)
}

/// Issue a session token for the given identity, as a `Cookie` header value.
pub fn session_cookie_for(id: DbId, email: &str) -> String {
    let claims = Claims {
        id,
        email: email.to_string(),
    };
    let token =
        session::issue(&claims, &test_config().session).expect("issuing should succeed");
    format!("{}={token}", session::SESSION_COOKIE)
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// In-memory [`UserStore`] standing in for PostgreSQL.
///
/// Tracks call counts so tests can assert the store was never touched, and
/// can be switched into a failing mode to simulate an unreachable backend.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
    unavailable: AtomicBool,
    pub find_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        })
    }

    /// Insert a user directly, returning its row. The password is hashed
    /// the same way the signup handler hashes it.
    pub fn seed(&self, email: &str, password: &str) -> User {
        let hash = hash_password(password).expect("hashing should succeed");
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: email.to_string(),
            password_hash: hash,
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    /// Make every subsequent operation fail with `StoreError::Unavailable`.
    pub fn set_unavailable(&self, value: bool) {
        self.unavailable.store(value, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// The stored password hash for an email, if the user exists.
    pub fn password_hash_of(&self, email: &str) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .map(|u| u.password_hash.clone())
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();
        // The unique index equivalent.
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(
        &self,
        id: DbId,
        email: &str,
        password_hash: &str,
    ) -> Result<UserSummary, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::NotFound)?;
        user.email = email.to_string();
        user.password_hash = password_hash.to_string();
        Ok(user.summary())
    }

    async fn delete_by_email(&self, email: &str) -> Result<(), StoreError> {
        self.check_available()?;
        // Idempotent: removing a missing email is not an error.
        self.users.lock().unwrap().retain(|u| u.email != email);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.check_available()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a `Cookie` header.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a JSON request with an arbitrary method and optional cookie.
pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    body: Value,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, None, body).await
}

/// Send a DELETE request with a JSON body.
pub async fn delete_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::DELETE, uri, None, body).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collection should succeed")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Extract the `Set-Cookie` header values from a response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// The session cookie's `name=value` pair from a response, if one was set.
pub fn session_cookie_value(response: &Response<Body>) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with(&format!("{}=", session::SESSION_COOKIE)))
        .map(|c| c.split(';').next().unwrap().to_string())
}
