use crate::domain::archive::ArchiveBucket;
use crate::domain::article::entity::{Article, ArticleRecord, ArticleUpdate, NewArticle};
use crate::domain::article::filter::ArticleFilter;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageWindow;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `Conflict` when the stored row no longer carries
    /// `original_updated_at`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    /// Atomic `view_count += delta`; `NotFound` when the id does not resolve.
    async fn increment_view_count(&self, id: ArticleId, delta: u32) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_record(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>>;
    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64>;
    /// Matching records in the filter's ordering. Paginated filters are
    /// restricted to `window` when given; the others only to their own cap,
    /// and ignore any window.
    async fn query(
        &self,
        filter: &ArticleFilter,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<ArticleRecord>>;
    /// Per-month publication counts (UTC), newest month first.
    async fn archive_buckets(&self) -> DomainResult<Vec<ArchiveBucket>>;
}
