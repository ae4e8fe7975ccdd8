pub mod archive;
pub mod articles;
pub mod auth;
pub mod categories;
pub mod pagination;

pub use archive::ArchiveBucketDto;
pub use articles::{ArticleSummaryDto, SummaryView};
pub use auth::AuthStatusDto;
pub use categories::CategorySummaryDto;
pub use pagination::ArticlePageDto;
