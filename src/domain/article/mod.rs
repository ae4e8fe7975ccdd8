pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleRecord, ArticleUpdate, NewArticle};
pub use filter::{ArticleFilter, ArticleOrdering, TOP_VIEWED_LIMIT, TitleSearch, YearMonth};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleContent, ArticleId, ArticleSummaryText, ArticleTitle, PictureRef};
