// src/application/commands/articles/view_count.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct RecordArticleViewCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Count one view of the article's detail page. The store performs the
    /// increment atomically; repeated calls are not deduplicated here.
    pub async fn record_view(&self, command: RecordArticleViewCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.write_repo.increment_view_count(id, 1).await?;
        tracing::debug!(article_id = %id, "article view recorded");
        Ok(())
    }
}
