use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, SummaryView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            ArticleContent, ArticleId, ArticleSummaryText, ArticleTitle, ArticleUpdate,
            PictureRef,
        },
        category::CategoryId,
    },
};

/// Partial update: only supplied fields change. `body_id`, when the client
/// echoes the id in the payload, must match `id`. `picture: Some(None)`
/// removes the picture.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub body_id: Option<i64>,
    pub title: Option<String>,
    pub content_main: Option<String>,
    pub content_summary: Option<String>,
    pub picture: Option<Option<String>>,
    pub category_id: Option<i64>,
}

struct ParsedChanges {
    title: Option<ArticleTitle>,
    content_main: Option<ArticleContent>,
    content_summary: Option<ArticleSummaryText>,
    picture: Option<Option<PictureRef>>,
    category_id: Option<CategoryId>,
}

impl UpdateArticleCommand {
    fn parse(self) -> ApplicationResult<(ArticleId, ParsedChanges)> {
        if let Some(body_id) = self.body_id {
            if body_id != self.id {
                return Err(ApplicationError::validation(
                    "article id in body does not match the requested article",
                ));
            }
        }

        let id = ArticleId::new(self.id)?;
        let changes = ParsedChanges {
            title: self.title.map(ArticleTitle::new).transpose()?,
            content_main: self.content_main.map(ArticleContent::new).transpose()?,
            content_summary: self
                .content_summary
                .map(ArticleSummaryText::new)
                .transpose()?,
            picture: self
                .picture
                .map(|picture| picture.map(PictureRef::new).transpose())
                .transpose()?,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
        };
        Ok((id, changes))
    }
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let (id, changes) = command.parse()?;

        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let mut update = ArticleUpdate::new(id, article.updated_at);
        if let Some(title) = changes.title {
            update = update.with_title(title);
        }
        if let Some(content) = changes.content_main {
            update = update.with_content_main(content);
        }
        if let Some(summary) = changes.content_summary {
            update = update.with_content_summary(summary);
        }
        if let Some(picture) = changes.picture {
            update = update.with_picture(picture);
        }
        if let Some(category_id) = changes.category_id {
            if category_id != article.category_id {
                self.require_category(category_id).await?;
            }
            update = update.with_category(category_id);
        }

        if !update.is_empty() {
            update.set_updated_at(self.clock.now());
            let updated = self.write_repo.update(update).await?;
            tracing::info!(article_id = %updated.id, "article updated");
        }

        let record = self
            .read_repo
            .find_record(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        ArticleSummaryDto::project(record, SummaryView::Detail)
    }
}
