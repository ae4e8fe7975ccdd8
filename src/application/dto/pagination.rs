use super::articles::ArticleSummaryDto;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One page of a filtered listing. `total_count` counts the whole filtered
/// set, not just this page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageDto {
    pub total_count: u64,
    pub items: Vec<ArticleSummaryDto>,
}

impl ArticlePageDto {
    pub fn new(total_count: u64, items: Vec<ArticleSummaryDto>) -> Self {
        Self { total_count, items }
    }

    pub fn empty(total_count: u64) -> Self {
        Self::new(total_count, Vec::new())
    }
}
