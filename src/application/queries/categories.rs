// src/application/queries/categories.rs
use crate::{
    application::{
        dto::CategorySummaryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryId, CategoryRepository},
};
use std::sync::Arc;

pub struct CategoryQueryService {
    category_repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(category_repo: Arc<dyn CategoryRepository>) -> Self {
        Self { category_repo }
    }

    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategorySummaryDto>> {
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category(&self, id: i64) -> ApplicationResult<CategorySummaryDto> {
        let id = CategoryId::new(id)?;
        self.category_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("category not found"))
    }
}
