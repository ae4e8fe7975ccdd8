// tests/support/mocks/store.rs
use async_trait::async_trait;
use quill_core::domain::{
    archive::{self, ArchiveBucket},
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleRecord, ArticleUpdate,
        ArticleWriteRepository, NewArticle,
    },
    category::{Category, CategoryId, CategoryName, CategoryRepository},
    comment::{Comment, CommentId},
    errors::{DomainError, DomainResult},
    pagination::PageWindow,
};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Default)]
struct StoreState {
    articles: BTreeMap<i64, Article>,
    categories: BTreeMap<i64, Category>,
    comments: Vec<Comment>,
    next_article_id: i64,
    next_comment_id: i64,
}

impl StoreState {
    fn record(&self, article: &Article) -> ArticleRecord {
        ArticleRecord {
            article: article.clone(),
            category: self.categories.get(&article.category_id.0).cloned(),
            comments: self
                .comments
                .iter()
                .filter(|c| c.article_id == article.id)
                .cloned()
                .collect(),
        }
    }

    fn filtered(&self, filter: &ArticleFilter) -> Vec<&Article> {
        let ordering = filter.ordering();
        let mut matching: Vec<&Article> = self
            .articles
            .values()
            .filter(|a| filter.matches(a))
            .collect();
        matching.sort_by(|a, b| ordering.compare(a, b));
        matching
    }
}

/// 記事・カテゴリ・コメントを保持するインメモリストア。
///
/// PostgreSQL 実装と同じ契約（外部キー、楽観的排他、原子的な閲覧数加算）を
/// ミューテックス一つで再現する。
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以降の全操作を `Persistence` エラーにする
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> DomainResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(())
    }

    pub fn add_category(&self, id: i64, name: &str) -> Category {
        let category = Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        };
        self.state
            .lock()
            .unwrap()
            .categories
            .insert(id, category.clone());
        category
    }

    /// 外部キー検査を通さずに記事を投入する（孤立記事の再現にも使う）
    pub fn put_article(&self, article: Article) {
        let mut state = self.state.lock().unwrap();
        state.next_article_id = state.next_article_id.max(article.id.0);
        state.articles.insert(article.id.0, article);
    }

    pub fn add_comment(&self, article_id: i64, author: &str, body: &str) {
        let mut state = self.state.lock().unwrap();
        state.next_comment_id += 1;
        let id = state.next_comment_id;
        state.comments.push(Comment {
            id: CommentId(id),
            article_id: ArticleId::new(article_id).unwrap(),
            author: author.into(),
            body: body.into(),
            created_at: super::fixed_now(),
        });
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn view_count(&self, id: i64) -> u64 {
        self.article(id).map_or(0, |a| a.view_count)
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Category>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        categories.sort_by(|a, b| {
            a.name
                .as_str()
                .cmp(b.name.as_str())
                .then(a.id.0.cmp(&b.id.0))
        });
        Ok(categories)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        self.check_available()?;
        Ok(self.state.lock().unwrap().categories.get(&id.0).cloned())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, new: NewArticle) -> DomainResult<Article> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        if !state.categories.contains_key(&new.category_id.0) {
            return Err(DomainError::Integrity("category does not exist".into()));
        }
        state.next_article_id += 1;
        let article = Article {
            id: ArticleId::new(state.next_article_id)?,
            title: new.title,
            content_main: new.content_main,
            content_summary: new.content_summary,
            picture: new.picture,
            publish_date: new.publish_date,
            view_count: 0,
            category_id: new.category_id,
            updated_at: new.updated_at,
        };
        state.articles.insert(article.id.0, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        if let Some(category_id) = update.category_id {
            if !state.categories.contains_key(&category_id.0) {
                return Err(DomainError::Integrity("category does not exist".into()));
            }
        }
        let article = state
            .articles
            .get_mut(&update.id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article was modified concurrently, please retry".into(),
            ));
        }
        update.apply_to(article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        if state.articles.remove(&id.0).is_none() {
            return Err(DomainError::NotFound("article not found".into()));
        }
        state.comments.retain(|c| c.article_id != id);
        Ok(())
    }

    async fn increment_view_count(&self, id: ArticleId, delta: u32) -> DomainResult<()> {
        self.check_available()?;
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .get_mut(&id.0)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.view_count += u64::from(delta);
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.check_available()?;
        Ok(self.article(id.0))
    }

    async fn find_record(&self, id: ArticleId) -> DomainResult<Option<ArticleRecord>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(state.articles.get(&id.0).map(|a| state.record(a)))
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        let total = state.filtered(filter).len() as u64;
        Ok(filter
            .result_cap()
            .map_or(total, |cap| total.min(u64::from(cap))))
    }

    async fn query(
        &self,
        filter: &ArticleFilter,
        window: Option<PageWindow>,
    ) -> DomainResult<Vec<ArticleRecord>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        let matching = state.filtered(filter);
        let (skip, take) = match (filter.is_paginated(), window, filter.result_cap()) {
            (true, Some(w), _) => (
                usize::try_from(w.offset).unwrap_or(usize::MAX),
                usize::try_from(w.limit).unwrap_or(usize::MAX),
            ),
            (_, _, Some(cap)) => (0, cap as usize),
            _ => (0, usize::MAX),
        };
        Ok(matching
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|a| state.record(a))
            .collect())
    }

    async fn archive_buckets(&self) -> DomainResult<Vec<ArchiveBucket>> {
        self.check_available()?;
        let state = self.state.lock().unwrap();
        Ok(archive::aggregate(
            state.articles.values().map(|a| a.publish_date),
        ))
    }
}
