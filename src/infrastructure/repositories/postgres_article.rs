// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::archive::ArchiveBucket;
use crate::domain::article::{
    Article, ArticleContent, ArticleFilter, ArticleId, ArticleOrdering, ArticleReadRepository,
    ArticleRecord, ArticleSummaryText, ArticleTitle, ArticleUpdate, ArticleWriteRepository,
    NewArticle, PictureRef, YearMonth,
};
use crate::domain::category::{Category, CategoryId, CategoryName};
use crate::domain::comment::{Comment, CommentId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageWindow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const ARTICLE_COLUMNS: &str =
    "id, title, content_main, content_summary, picture, publish_date, view_count, category_id, updated_at";

const ARCHIVE_SELECT: &str = "SELECT \
     EXTRACT(YEAR FROM publish_date AT TIME ZONE 'UTC')::INT4 AS year, \
     EXTRACT(MONTH FROM publish_date AT TIME ZONE 'UTC')::INT4 AS month, \
     COUNT(*) AS count \
     FROM articles GROUP BY 1, 2 ORDER BY 1 DESC, 2 DESC";

const RECORD_SELECT: &str = "SELECT a.id, a.title, a.content_main, a.content_summary, a.picture, \
     a.publish_date, a.view_count, a.category_id, a.updated_at, c.name AS category_name \
     FROM articles a LEFT JOIN categories c ON c.id = a.category_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content_main: String,
    content_summary: String,
    picture: Option<String>,
    publish_date: DateTime<Utc>,
    view_count: i64,
    category_id: i64,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, FromRow)]
struct RecordRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    category_name: Option<String>,
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let view_count = u64::try_from(row.view_count).map_err(|_| {
            DomainError::Integrity(format!("article {} has a negative view count", row.id))
        })?;
        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content_main: ArticleContent::new(row.content_main)?,
            content_summary: ArticleSummaryText::new(row.content_summary)?,
            picture: row.picture.map(PictureRef::new).transpose()?,
            publish_date: row.publish_date,
            view_count,
            category_id: CategoryId::new(row.category_id)?,
            updated_at: row.updated_at,
        })
    }
}

impl RecordRow {
    fn into_record(self, comments: Vec<Comment>) -> DomainResult<ArticleRecord> {
        let article = Article::try_from(self.article)?;
        let category = self
            .category_name
            .map(|name| -> DomainResult<Category> {
                Ok(Category {
                    id: article.category_id,
                    name: CategoryName::new(name)?,
                })
            })
            .transpose()?;
        Ok(ArticleRecord {
            article,
            category,
            comments,
        })
    }
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: CommentId(row.id),
            article_id: ArticleId::new(row.article_id)?,
            author: row.author,
            body: row.body,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArchiveRow {
    year: i32,
    month: i32,
    count: i64,
}

impl TryFrom<ArchiveRow> for ArchiveBucket {
    type Error = DomainError;

    fn try_from(row: ArchiveRow) -> Result<Self, Self::Error> {
        let month = u32::try_from(row.month)
            .map_err(|_| DomainError::Persistence(format!("invalid archive month {}", row.month)))?;
        let count = u64::try_from(row.count)
            .map_err(|_| DomainError::Persistence("negative archive count".into()))?;
        Ok(Self {
            period: YearMonth::new(row.year, month)?,
            count,
        })
    }
}

fn to_i64(value: u64, what: &str) -> DomainResult<i64> {
    i64::try_from(value).map_err(|_| DomainError::Validation(format!("{what} is out of range")))
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content_main,
            content_summary,
            picture,
            category_id,
            publish_date,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content_main, content_summary, picture, publish_date, view_count, category_id, updated_at)
             VALUES ($1, $2, $3, $4, $5, 0, $6, $7)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(content_main.as_str())
        .bind(content_summary.as_str())
        .bind(picture.as_ref().map(PictureRef::as_str))
        .bind(publish_date)
        .bind(i64::from(category_id))
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content_main,
            content_summary,
            picture,
            category_id,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(content) = content_main {
            builder.push(", content_main = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(summary) = content_summary {
            builder.push(", content_summary = ");
            builder.push_bind(summary.into_inner());
        }

        if let Some(picture) = picture {
            builder.push(", picture = ");
            builder.push_bind(picture.map(PictureRef::into_inner));
        }

        if let Some(category_id) = category_id {
            builder.push(", category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match maybe_row {
            Some(row) => Article::try_from(row),
            None => {
                let exists: bool =
                    sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM articles WHERE id = $1)")
                        .bind(i64::from(id))
                        .fetch_one(&self.pool)
                        .await
                        .map_err(map_sqlx)?;
                if exists {
                    Err(DomainError::Conflict(
                        "article was modified concurrently, please retry".into(),
                    ))
                } else {
                    Err(DomainError::NotFound("article not found".into()))
                }
            }
        }
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: ArticleId, delta: u32) -> DomainResult<()> {
        // Single-statement read-modify-write; concurrent increments serialize
        // on the row lock.
        let result = sqlx::query("UPDATE articles SET view_count = view_count + $2 WHERE id = $1")
            .bind(i64::from(id))
            .bind(i64::from(delta))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) -> DomainResult<()> {
        match filter {
            ArticleFilter::All | ArticleFilter::TopViewed { .. } => {}
            ArticleFilter::ByCategory(category_id) => {
                builder.push(" WHERE a.category_id = ");
                builder.push_bind(i64::from(*category_id));
            }
            ArticleFilter::ByTitle(search) => {
                builder.push(" WHERE a.title ILIKE ");
                builder.push_bind(search.like_pattern());
            }
            ArticleFilter::ByYearMonth(period) => {
                let (start, end) = period.bounds()?;
                builder.push(" WHERE a.publish_date >= ");
                builder.push_bind(start);
                builder.push(" AND a.publish_date < ");
                builder.push_bind(end);
            }
        }
        Ok(())
    }

    fn apply_ordering(builder: &mut QueryBuilder<'_, Postgres>, ordering: ArticleOrdering) {
        match ordering {
            ArticleOrdering::NewestFirst => {
                builder.push(" ORDER BY a.publish_date DESC, a.id DESC");
            }
            ArticleOrdering::MostViewed => {
                builder.push(" ORDER BY a.view_count DESC, a.publish_date DESC, a.id DESC");
            }
        }
    }

    fn apply_limits(
        builder: &mut QueryBuilder<'_, Postgres>,
        filter: &ArticleFilter,
        window: Option<PageWindow>,
    ) -> DomainResult<()> {
        match (filter.is_paginated(), window, filter.result_cap()) {
            (true, Some(window), _) => {
                builder.push(" LIMIT ");
                builder.push_bind(to_i64(window.limit, "page size")?);
                builder.push(" OFFSET ");
                builder.push_bind(to_i64(window.offset, "page offset")?);
            }
            (_, _, Some(cap)) => {
                builder.push(" LIMIT ");
                builder.push_bind(i64::from(cap));
            }
            _ => {}
        }
        Ok(())
    }

    async fn load_comments(&self, article_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Comment>>> {
        let mut grouped: HashMap<i64, Vec<Comment>> = HashMap::new();
        if article_ids.is_empty() {
            return Ok(grouped);
        }

        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author, body, created_at
             FROM comments WHERE article_id = ANY($1)
             ORDER BY created_at, id",
        )
        .bind(article_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        for row in rows {
            let article_id = row.article_id;
            grouped
                .entry(article_id)
                .or_default()
                .push(Comment::try_from(row)?);
        }
        Ok(grouped)
    }

    async fn attach_comments(&self, rows: Vec<RecordRow>) -> DomainResult<Vec<ArticleRecord>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.article.id).collect();
        let mut comments = self.load_comments(&ids).await?;
        rows.into_iter()
            .map(|row| {
                let article_comments = comments.remove(&row.article.id).unwrap_or_default();
                row.into_record(article_comments)
            })
            .collect()
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_record(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        let row = sqlx::query_as::<_, RecordRow>(&format!("{RECORD_SELECT} WHERE a.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.attach_comments(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        Self::apply_filter(&mut builder, filter)?;

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let total = u64::try_from(total)
            .map_err(|_| DomainError::Persistence("negative row count".into()))?;
        // The top-viewed listing never yields more than its cap.
        Ok(filter
            .result_cap()
            .map_or(total, |cap| total.min(u64::from(cap))))
    }

    async fn query(
        &self,
        filter: &ArticleFilter,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<ArticleRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        Self::apply_filter(&mut builder, filter)?;
        Self::apply_ordering(&mut builder, filter.ordering());
        Self::apply_limits(&mut builder, filter, window)?;

        let rows = builder
            .build_query_as::<RecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.attach_comments(rows).await
    }

    async fn archive_buckets(&self) -> DomainResult<Vec<ArchiveBucket>> {
        let rows = sqlx::query_as::<_, ArchiveRow>(ARCHIVE_SELECT)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.into_iter().map(ArchiveBucket::try_from).collect()
    }
}
