// src/domain/comment.rs
use crate::domain::article::ArticleId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

/// A reader comment attached to an article. Only its presence is consumed by
/// the listing engine (comment counts); moderation lives elsewhere.
#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
