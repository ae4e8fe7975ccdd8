// tests/support/helpers.rs
use super::mocks::{CapturingNotifier, FixedClock, InMemoryStore};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use quill_core::application::ports::{
    notification::ContactNotifier, security::CredentialVerifier, time::Clock,
};
use quill_core::application::services::ApplicationServices;
use quill_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    category::CategoryRepository,
};
use once_cell::sync::Lazy;
use quill_core::infrastructure::security::{Argon2AdminCredentials, hash_password_blocking};
use quill_core::presentation::http::state::HttpState;
use serde_json::Value;
use std::sync::Arc;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "correct horse battery staple";

/// テストバイナリごとに一度だけ計算する Argon2 ハッシュ
pub static ADMIN_PASSWORD_HASH: Lazy<String> =
    Lazy::new(|| hash_password_blocking(ADMIN_PASSWORD).unwrap());

/// ストア・通知モック・サービスをまとめたテスト用アプリケーション
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub notifier: Arc<CapturingNotifier>,
    pub services: Arc<ApplicationServices>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(Arc::new(InMemoryStore::new()))
    }

    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        let notifier = Arc::new(CapturingNotifier::default());
        let services = build_services(
            Arc::clone(&store),
            Arc::clone(&notifier) as Arc<dyn ContactNotifier>,
        );
        Self {
            store,
            notifier,
            services,
        }
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState::new(
            Arc::clone(&self.services),
            vec!["http://localhost:4200".into()],
        );
        quill_core::presentation::http::routes::build_router_with_rate_limiter(state, false)
    }
}

pub fn build_services(
    store: Arc<InMemoryStore>,
    notifier: Arc<dyn ContactNotifier>,
) -> Arc<ApplicationServices> {
    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let categories: Arc<dyn CategoryRepository> = store;
    let verifier: Arc<dyn CredentialVerifier> = Arc::new(
        Argon2AdminCredentials::from_password_hash(ADMIN_EMAIL, &ADMIN_PASSWORD_HASH).unwrap(),
    );
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        categories,
        verifier,
        notifier,
        clock,
    ))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, json: &Value) -> Request<Body> {
    json_request("POST", uri, json)
}

pub fn put_json(uri: &str, json: &Value) -> Request<Body> {
    json_request("PUT", uri, json)
}

pub fn json_request(method: &str, uri: &str, json: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

/// レスポンスを読み取り、ステータスと JSON 本文を返す
pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected a JSON body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert!(
        !msg_field.is_empty(),
        "expected non-empty message field in ErrorResponse"
    );
}
