use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, SummaryView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let id = ArticleId::new(query.id)?;
        let record = self
            .read_repo
            .find_record(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        ArticleSummaryDto::project(record, SummaryView::Detail)
    }
}
