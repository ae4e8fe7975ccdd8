// src/domain/article/filter.rs
//! Selection predicates and orderings over the article collection.
//!
//! Every listing entry point goes through [`ArticleFilter`]; stores translate
//! the variant into their own query language, and [`ArticleFilter::matches`]
//! together with [`ArticleOrdering::compare`] define the reference semantics.

use crate::domain::article::entity::Article;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Datelike, Month, NaiveDate, Utc};
use std::cmp::Ordering;

/// Number of entries returned by the most-viewed listing.
pub const TOP_VIEWED_LIMIT: u32 = 5;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// Case-insensitive title search text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleSearch(String);

impl TitleSearch {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "search text cannot be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, title: &str) -> bool {
        title.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `ILIKE` pattern with the wildcard characters of the search text escaped.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

/// A calendar month in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> DomainResult<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DomainError::Validation(format!(
                "year must be between {MIN_YEAR} and {MAX_YEAR}"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(DomainError::Validation(
                "month must be between 1 and 12".into(),
            ));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: &DateTime<Utc>) -> bool {
        Self::of(date) == *self
    }

    /// English month name derived from the month number alone.
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("Unknown", |m| m.name())
    }

    /// Half-open `[start, end)` range of instants covered by this month.
    pub fn bounds(&self) -> DomainResult<(DateTime<Utc>, DateTime<Utc>)> {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        let start = first_instant(self.year, self.month)?;
        let end = first_instant(next_year, next_month)?;
        Ok((start, end))
    }
}

fn first_instant(year: i32, month: u32) -> DomainResult<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::Validation(format!("invalid month {year}-{month:02}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOrdering {
    /// `publish_date DESC, id DESC`
    NewestFirst,
    /// `view_count DESC, publish_date DESC, id DESC`
    MostViewed,
}

impl ArticleOrdering {
    pub fn compare(self, a: &Article, b: &Article) -> Ordering {
        let newest = b
            .publish_date
            .cmp(&a.publish_date)
            .then_with(|| b.id.0.cmp(&a.id.0));
        match self {
            Self::NewestFirst => newest,
            Self::MostViewed => b.view_count.cmp(&a.view_count).then(newest),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFilter {
    All,
    ByCategory(CategoryId),
    ByTitle(TitleSearch),
    ByYearMonth(YearMonth),
    TopViewed { limit: u32 },
}

impl ArticleFilter {
    pub const fn top_viewed() -> Self {
        Self::TopViewed {
            limit: TOP_VIEWED_LIMIT,
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::ByCategory(_) => "category",
            Self::ByTitle(_) => "title",
            Self::ByYearMonth(_) => "year_month",
            Self::TopViewed { .. } => "top_viewed",
        }
    }

    pub const fn ordering(&self) -> ArticleOrdering {
        match self {
            Self::TopViewed { .. } => ArticleOrdering::MostViewed,
            _ => ArticleOrdering::NewestFirst,
        }
    }

    /// Whether results go through the pagination window. The top-viewed
    /// listing is capped instead.
    pub const fn is_paginated(&self) -> bool {
        !matches!(self, Self::TopViewed { .. })
    }

    pub const fn result_cap(&self) -> Option<u32> {
        match self {
            Self::TopViewed { limit } => Some(*limit),
            _ => None,
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All | Self::TopViewed { .. } => true,
            Self::ByCategory(category_id) => article.category_id == *category_id,
            Self::ByTitle(search) => search.matches(article.title.as_str()),
            Self::ByYearMonth(period) => period.contains(&article.publish_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::{
        ArticleContent, ArticleId, ArticleSummaryText, ArticleTitle,
    };
    use chrono::TimeZone;

    fn article(id: i64, title: &str, date: DateTime<Utc>, views: u64, category: i64) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            content_main: ArticleContent::new("main").unwrap(),
            content_summary: ArticleSummaryText::new("summary").unwrap(),
            picture: None,
            publish_date: date,
            view_count: views,
            category_id: CategoryId::new(category).unwrap(),
            updated_at: date,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn title_search_is_case_insensitive() {
        let search = TitleSearch::new("RuSt").unwrap();
        assert!(search.matches("Learning rust in a weekend"));
        assert!(!search.matches("Go tips"));
    }

    #[test]
    fn title_search_rejects_blank_text() {
        assert!(TitleSearch::new("   ").is_err());
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let search = TitleSearch::new("100%_done\\").unwrap();
        assert_eq!(search.like_pattern(), "%100\\%\\_done\\\\%");
    }

    #[test]
    fn year_month_validates_ranges() {
        assert!(YearMonth::new(2024, 0).is_err());
        assert!(YearMonth::new(2024, 13).is_err());
        assert!(YearMonth::new(0, 5).is_err());
        assert!(YearMonth::new(2024, 12).is_ok());
    }

    #[test]
    fn year_month_bounds_roll_over_december() {
        let december = YearMonth::new(2023, 12).unwrap();
        let (start, end) = december.bounds().unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn month_name_is_derived_from_number() {
        assert_eq!(YearMonth::new(2023, 1).unwrap().month_name(), "January");
        assert_eq!(YearMonth::new(2023, 9).unwrap().month_name(), "September");
    }

    #[test]
    fn predicates_select_expected_articles() {
        let a = article(1, "Async Rust", at(2023, 1, 5), 10, 1);
        let b = article(2, "Cooking", at(2023, 2, 1), 3, 2);

        let by_category = ArticleFilter::ByCategory(CategoryId(2));
        assert!(!by_category.matches(&a));
        assert!(by_category.matches(&b));

        let by_month = ArticleFilter::ByYearMonth(YearMonth::new(2023, 1).unwrap());
        assert!(by_month.matches(&a));
        assert!(!by_month.matches(&b));

        let by_title = ArticleFilter::ByTitle(TitleSearch::new("rust").unwrap());
        assert!(by_title.matches(&a));
        assert!(!by_title.matches(&b));

        assert!(ArticleFilter::All.matches(&a));
        assert!(ArticleFilter::top_viewed().matches(&b));
    }

    #[test]
    fn top_viewed_is_capped_and_unpaginated() {
        let filter = ArticleFilter::top_viewed();
        assert!(!filter.is_paginated());
        assert_eq!(filter.result_cap(), Some(TOP_VIEWED_LIMIT));
        assert_eq!(filter.ordering(), ArticleOrdering::MostViewed);
        assert!(ArticleFilter::All.is_paginated());
        assert_eq!(ArticleFilter::All.ordering(), ArticleOrdering::NewestFirst);
    }

    #[test]
    fn orderings_break_ties_deterministically() {
        let older = article(1, "a", at(2023, 1, 1), 5, 1);
        let newer = article(2, "b", at(2023, 3, 1), 5, 1);
        let same_date_higher_id = article(3, "c", at(2023, 3, 1), 9, 1);

        let mut items = vec![older.clone(), newer.clone(), same_date_higher_id.clone()];
        items.sort_by(|x, y| ArticleOrdering::NewestFirst.compare(x, y));
        let ids: Vec<i64> = items.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        items.sort_by(|x, y| ArticleOrdering::MostViewed.compare(x, y));
        let ids: Vec<i64> = items.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
