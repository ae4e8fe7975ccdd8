// src/application/commands/articles/mod.rs
mod category;
mod create;
mod delete;
mod service;
mod update;
mod view_count;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
pub use view_count::RecordArticleViewCommand;
