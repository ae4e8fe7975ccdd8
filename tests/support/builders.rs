// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use quill_core::domain::article::*;
use quill_core::domain::category::CategoryId;

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content_main: String,
    content_summary: String,
    picture: Option<String>,
    publish_date: DateTime<Utc>,
    view_count: u64,
    category_id: i64,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            content_main: format!("Full body of article {id}"),
            content_summary: format!("Summary of article {id}"),
            picture: None,
            publish_date: fixed_now() - Duration::days(id),
            view_count: 0,
            category_id: 1,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn published(mut self, date: DateTime<Utc>) -> Self {
        self.publish_date = date;
        self
    }

    pub fn published_on(self, year: i32, month: u32, day: u32) -> Self {
        let date = Utc
            .with_ymd_and_hms(year, month, day, 9, 0, 0)
            .single()
            .expect("valid test date");
        self.published(date)
    }

    pub fn views(mut self, views: u64) -> Self {
        self.view_count = views;
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content_main: ArticleContent::new(self.content_main).unwrap(),
            content_summary: ArticleSummaryText::new(self.content_summary).unwrap(),
            picture: self.picture.map(|p| PictureRef::new(p).unwrap()),
            publish_date: self.publish_date,
            view_count: self.view_count,
            category_id: CategoryId::new(self.category_id).unwrap(),
            updated_at: fixed_now() - Duration::days(30),
        }
    }
}
