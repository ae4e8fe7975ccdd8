// src/presentation/http/controllers/contact.rs
use crate::application::commands::contact::SubmitContactCommand;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContactRequest {
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/helper/contact",
    request_body = ContactRequest,
    responses(
        (status = 202, description = "Message accepted for delivery.", body = StatusResponse),
        (status = 400, description = "Invalid message.", body = crate::presentation::http::error::ErrorResponse),
        (status = 429, description = "Too many submissions."),
        (status = 500, description = "Message could not be queued.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<ContactRequest>,
) -> HttpResult<(StatusCode, Json<StatusResponse>)> {
    let command = SubmitContactCommand {
        subject: payload.subject,
        message: payload.message,
        name: payload.name,
        email: payload.email,
    };

    state
        .services
        .contact_commands
        .submit(command)
        .await
        .into_http()?;

    Ok((
        StatusCode::ACCEPTED,
        Json(StatusResponse {
            status: "queued".into(),
        }),
    ))
}
