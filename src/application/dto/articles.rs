use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::categories::CategorySummaryDto;

/// Granularity of an [`ArticleSummaryDto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryView {
    /// Listing cards: everything except `contentMain`.
    List,
    /// Article page: list fields plus `contentMain`.
    Detail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_main: Option<String>,
    pub content_summary: String,
    #[serde(default)]
    pub picture: Option<String>,
    pub publish_date: DateTime<Utc>,
    pub view_count: u64,
    pub comment_count: u64,
    pub category: CategorySummaryDto,
}

impl ArticleSummaryDto {
    /// Shape a stored article for the client. The record must carry its
    /// category; a missing one is an integrity breach upstream.
    pub fn project(record: ArticleRecord, view: SummaryView) -> ApplicationResult<Self> {
        let comment_count = record.comment_count() as u64;
        let ArticleRecord {
            article, category, ..
        } = record;

        let category = category.ok_or_else(|| {
            tracing::error!(
                article_id = %article.id,
                category_id = %article.category_id,
                "article references a missing category"
            );
            ApplicationError::integrity(format!(
                "article {} references missing category {}",
                article.id, article.category_id
            ))
        })?;

        let content_main = match view {
            SummaryView::List => None,
            SummaryView::Detail => Some(article.content_main.into_inner()),
        };

        Ok(Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content_main,
            content_summary: article.content_summary.into_inner(),
            picture: article.picture.map(|p| p.into_inner()),
            publish_date: article.publish_date,
            view_count: article.view_count,
            comment_count,
            category: category.into(),
        })
    }

    pub fn project_all(
        records: Vec<ArticleRecord>,
        view: SummaryView,
    ) -> ApplicationResult<Vec<Self>> {
        records
            .into_iter()
            .map(|record| Self::project(record, view))
            .collect()
    }
}
