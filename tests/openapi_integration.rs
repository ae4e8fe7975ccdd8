// tests/openapi_integration.rs
use axum::http::StatusCode;
use tower::util::ServiceExt as _;
use utoipa::OpenApi;

mod support;

use support::{TestApp, get, read_json};

/// 公開ルートが OpenAPI ドキュメントに載っていることを確認する
#[test]
fn openapi_lists_every_public_route() {
    let doc = quill_core::presentation::http::openapi::ApiDoc::openapi();
    let paths: Vec<&String> = doc.paths.paths.keys().collect();
    for expected in [
        "/api/articles",
        "/api/articles/most-viewed",
        "/api/articles/archive",
        "/api/articles/{id}",
        "/api/articles/{id}/views",
        "/api/categories",
        "/api/categories/{id}",
        "/api/auth/is-authenticated",
        "/api/helper/contact",
        "/health",
    ] {
        assert!(
            paths.iter().any(|p| p.as_str() == expected),
            "missing path {expected} in {paths:?}"
        );
    }
}

#[test]
fn openapi_registers_response_schemas() {
    let doc = quill_core::presentation::http::openapi::ApiDoc::openapi();
    let components = doc.components.expect("components");
    for schema in [
        "ArticleSummaryDto",
        "ArticlePageDto",
        "ArchiveBucketDto",
        "CategorySummaryDto",
        "ErrorResponse",
    ] {
        assert!(
            components.schemas.contains_key(schema),
            "missing schema {schema}"
        );
    }
}

#[tokio::test]
async fn openapi_json_is_served() {
    let app = TestApp::new();
    let resp = app.router().oneshot(get("/openapi.json")).await.unwrap();
    let (status, body) = read_json(resp).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Quill API");
    assert!(body["paths"]["/api/articles/most-viewed"].is_object());
}
