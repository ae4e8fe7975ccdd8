// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, RecordArticleViewCommand,
        UpdateArticleCommand,
    },
    dto::{ArchiveBucketDto, ArticlePageDto, ArticleSummaryDto},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::StatusResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const fn default_page() -> i64 {
    DEFAULT_PAGE
}

const fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

/// Listing parameters. At most one of `categoryId`, `q` or `year`+`month`.
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct ArticleListParams {
    /// 1-based page number.
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Case-insensitive title substring.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
}

impl From<ArticleListParams> for ListArticlesQuery {
    fn from(params: ArticleListParams) -> Self {
        Self {
            page: params.page,
            page_size: params.page_size,
            category_id: params.category_id,
            search: params.q,
            year: params.year,
            month: params.month,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    pub title: String,
    pub content_main: String,
    pub content_summary: String,
    #[serde(default)]
    pub picture: Option<String>,
    pub category_id: i64,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateArticleRequest {
    /// When present, must equal the id in the path.
    #[serde(default)]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content_main: Option<String>,
    pub content_summary: Option<String>,
    /// Absent leaves the picture unchanged; `null` removes it.
    #[serde(default, deserialize_with = "present_or_null")]
    #[schema(value_type = Option<String>, nullable)]
    pub picture: Option<Option<String>>,
    pub category_id: Option<i64>,
}

/// Distinguishes a field sent as `null` (`Some(None)`) from one left out
/// (`None`, via `#[serde(default)]`).
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles with the filtered total.", body = ArticlePageDto),
        (status = 400, description = "Invalid page, page size or filter.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Stored data is inconsistent.", body = crate::presentation::http::error::ErrorResponse),
        (status = 503, description = "Store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ArticlePageDto>> {
    state
        .services
        .article_queries
        .list_articles(params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/most-viewed",
    responses(
        (status = 200, description = "The five most viewed articles.", body = [ArticleSummaryDto]),
        (status = 503, description = "Store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn most_viewed(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleSummaryDto>>> {
    state
        .services
        .article_queries
        .most_viewed_articles()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/archive",
    responses(
        (status = 200, description = "Article counts per publication month, newest first.", body = [ArchiveBucketDto]),
        (status = 503, description = "Store unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn archive(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArchiveBucketDto>>> {
    state
        .services
        .article_queries
        .archive()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with its main content.", body = ArticleSummaryDto),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Article references a missing category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleSummaryDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles/{id}/views",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "View recorded."),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn record_view(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .record_view(RecordArticleViewCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleSummaryDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleSummaryDto>)> {
    let mut builder = CreateArticleCommand::builder()
        .title(payload.title)
        .content_main(payload.content_main)
        .content_summary(payload.content_summary)
        .category_id(payload.category_id);
    if let Some(picture) = payload.picture {
        builder = builder.picture(picture);
    }
    let command = builder
        .build()
        .map_err(|msg| HttpError::new(StatusCode::BAD_REQUEST, msg.to_string()))?;

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleSummaryDto),
        (status = 400, description = "Invalid payload or mismatched id.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Article changed concurrently.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Unknown category.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleSummaryDto>> {
    let command = UpdateArticleCommand {
        id,
        body_id: payload.id,
        title: payload.title,
        content_main: payload.content_main,
        content_summary: payload.content_summary,
        picture: payload.picture,
        category_id: payload.category_id,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}
