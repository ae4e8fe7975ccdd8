use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, SummaryView},
        error::ApplicationResult,
    },
    domain::article::ArticleFilter,
};

impl ArticleQueryService {
    /// The most-viewed articles, highest view count first. Capped rather than
    /// paginated.
    pub async fn most_viewed_articles(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let filter = ArticleFilter::top_viewed();
        tracing::debug!(filter = filter.kind(), "listing most viewed articles");
        let records = self.read_repo.query(&filter, None).await?;
        ArticleSummaryDto::project_all(records, SummaryView::List)
    }
}
