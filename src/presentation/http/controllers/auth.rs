// src/presentation/http/controllers/auth.rs
use crate::application::{dto::AuthStatusDto, queries::auth::AdminCredentialsQuery};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    state::HttpState,
};
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AdminLoginRequest {
    pub email: String,
    pub password: String,
}

/// Checks the submitted pair against the configured administrator. A
/// mismatch is still 200; the outcome is in `status`.
#[utoipa::path(
    post,
    path = "/api/auth/is-authenticated",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Whether the credentials match the administrator.", body = AuthStatusDto),
        (status = 500, description = "Credential check failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn is_authenticated(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<AdminLoginRequest>,
) -> HttpResult<Json<AuthStatusDto>> {
    let query = AdminCredentialsQuery {
        email: payload.email,
        password: payload.password,
    };
    state
        .services
        .auth_queries
        .check_admin(&query)
        .await
        .into_http()
        .map(Json)
}
