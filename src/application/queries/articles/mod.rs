mod archive;
mod get_by_id;
mod list;
mod most_viewed;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
