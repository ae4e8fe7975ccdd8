use super::ArticleQueryService;
use crate::application::{dto::ArchiveBucketDto, error::ApplicationResult};

impl ArticleQueryService {
    /// Per-month publication counts over the whole collection, newest month
    /// first.
    pub async fn archive(&self) -> ApplicationResult<Vec<ArchiveBucketDto>> {
        let buckets = self.read_repo.archive_buckets().await?;
        tracing::debug!(buckets = buckets.len(), "computed article archive");
        Ok(buckets.into_iter().map(Into::into).collect())
    }
}
