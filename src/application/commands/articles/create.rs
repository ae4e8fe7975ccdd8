// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleSummaryDto, SummaryView},
        error::ApplicationResult,
    },
    domain::{
        article::{
            ArticleContent, ArticleRecord, ArticleSummaryText, ArticleTitle, NewArticle,
            PictureRef,
        },
        category::CategoryId,
    },
};

/// Authoring submission. Identity, view count and publish date are assigned
/// by the server and cannot be supplied.
pub struct CreateArticleCommand {
    pub title: String,
    pub content_main: String,
    pub content_summary: String,
    pub picture: Option<String>,
    pub category_id: i64,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content_main: Option<String>,
    content_summary: Option<String>,
    picture: Option<String>,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content_main(mut self, content: impl Into<String>) -> Self {
        self.content_main = Some(content.into());
        self
    }

    pub fn content_summary(mut self, summary: impl Into<String>) -> Self {
        self.content_summary = Some(summary.into());
        self
    }

    pub fn picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content_main: self.content_main.ok_or("content_main is required")?,
            content_summary: self.content_summary.ok_or("content_summary is required")?,
            picture: self.picture,
            category_id: self.category_id.ok_or("category_id is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleSummaryDto> {
        let title = ArticleTitle::new(command.title)?;
        let content_main = ArticleContent::new(command.content_main)?;
        let content_summary = ArticleSummaryText::new(command.content_summary)?;
        let picture = command.picture.map(PictureRef::new).transpose()?;
        let category_id = CategoryId::new(command.category_id)?;

        let category = self.require_category(category_id).await?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            content_main,
            content_summary,
            picture,
            category_id,
            publish_date: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, category_id = %category_id, "article created");

        let record = ArticleRecord {
            article: created,
            category: Some(category),
            comments: Vec::new(),
        };
        ArticleSummaryDto::project(record, SummaryView::Detail)
    }
}
