// src/application/commands/articles/category.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::category::{Category, CategoryId},
};

impl ArticleCommandService {
    /// Resolve the category an article is about to reference. A dangling
    /// reference is rejected before anything is written.
    pub(super) async fn require_category(&self, id: CategoryId) -> ApplicationResult<Category> {
        self.category_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::integrity(format!("category {id} does not exist")))
    }
}
