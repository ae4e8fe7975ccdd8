// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleSummaryText, ArticleTitle, PictureRef,
};
use crate::domain::category::{Category, CategoryId};
use crate::domain::comment::Comment;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content_main: ArticleContent,
    pub content_summary: ArticleSummaryText,
    pub picture: Option<PictureRef>,
    pub publish_date: DateTime<Utc>,
    pub view_count: u64,
    pub category_id: CategoryId,
    /// Version marker for optimistic concurrency; view-count increments do
    /// not touch it.
    pub updated_at: DateTime<Utc>,
}

/// An article together with the associations a projection needs, loaded
/// eagerly by the store.
#[derive(Debug, Clone)]
pub struct ArticleRecord {
    pub article: Article,
    pub category: Option<Category>,
    pub comments: Vec<Comment>,
}

impl ArticleRecord {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content_main: ArticleContent,
    pub content_summary: ArticleSummaryText,
    pub picture: Option<PictureRef>,
    pub category_id: CategoryId,
    pub publish_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content_main: Option<ArticleContent>,
    pub content_summary: Option<ArticleSummaryText>,
    /// `Some(None)` clears the picture.
    pub picture: Option<Option<PictureRef>>,
    pub category_id: Option<CategoryId>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content_main: None,
            content_summary: None,
            picture: None,
            category_id: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content_main(mut self, content: ArticleContent) -> Self {
        self.content_main = Some(content);
        self
    }

    pub fn with_content_summary(mut self, summary: ArticleSummaryText) -> Self {
        self.content_summary = Some(summary);
        self
    }

    pub fn with_picture(mut self, picture: Option<PictureRef>) -> Self {
        self.picture = Some(picture);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content_main.is_none()
            && self.content_summary.is_none()
            && self.picture.is_none()
            && self.category_id.is_none()
    }

    /// Apply the changed fields to an in-memory copy of the article.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(title) = &self.title {
            article.title = title.clone();
        }
        if let Some(content) = &self.content_main {
            article.content_main = content.clone();
        }
        if let Some(summary) = &self.content_summary {
            article.content_summary = summary.clone();
        }
        if let Some(picture) = &self.picture {
            article.picture.clone_from(picture);
        }
        if let Some(category_id) = self.category_id {
            article.category_id = category_id;
        }
        article.updated_at = self.updated_at;
    }
}
