use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticlePageDto, ArticleSummaryDto, SummaryView},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleFilter, TitleSearch, YearMonth},
        category::CategoryId,
        pagination::PageRequest,
    },
};

/// Paginated listing request. At most one filter dimension may be set;
/// `year` and `month` travel together.
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub page: i64,
    pub page_size: i64,
    pub category_id: Option<i64>,
    pub search: Option<String>,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl ListArticlesQuery {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    pub fn in_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn matching(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn published_in(mut self, year: i32, month: u32) -> Self {
        self.year = Some(year);
        self.month = Some(month);
        self
    }

    fn filter(&self) -> ApplicationResult<ArticleFilter> {
        let search = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        let period = match (self.year, self.month) {
            (Some(year), Some(month)) => Some((year, month)),
            (None, None) => None,
            _ => {
                return Err(ApplicationError::validation(
                    "year and month must be supplied together",
                ));
            }
        };

        let supplied = [
            self.category_id.is_some(),
            search.is_some(),
            period.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count();
        if supplied > 1 {
            return Err(ApplicationError::validation(
                "only one of categoryId, q or year/month may be supplied",
            ));
        }

        let filter = if let Some(id) = self.category_id {
            ArticleFilter::ByCategory(CategoryId::new(id)?)
        } else if let Some(text) = search {
            ArticleFilter::ByTitle(TitleSearch::new(text)?)
        } else if let Some((year, month)) = period {
            ArticleFilter::ByYearMonth(YearMonth::new(year, month)?)
        } else {
            ArticleFilter::All
        };
        Ok(filter)
    }
}

impl ArticleQueryService {
    pub async fn list_articles(&self, query: ListArticlesQuery) -> ApplicationResult<ArticlePageDto> {
        let request = PageRequest::new(query.page, query.page_size)?;
        let filter = query.filter()?;
        self.fetch_page(&filter, request).await
    }

    /// Count the filtered set, slice the requested window and project each
    /// item. Shared by every paginated listing.
    pub(super) async fn fetch_page(
        &self,
        filter: &ArticleFilter,
        request: PageRequest,
    ) -> ApplicationResult<ArticlePageDto> {
        let total_count = self.read_repo.count(filter).await?;
        let window = request.window(total_count);
        tracing::debug!(
            filter = filter.kind(),
            page = request.page(),
            page_size = request.page_size(),
            total_count,
            offset = window.offset,
            limit = window.limit,
            "listing articles"
        );

        if window.is_empty() {
            return Ok(ArticlePageDto::empty(total_count));
        }

        let records = self.read_repo.query(filter, Some(window)).await?;
        let items = ArticleSummaryDto::project_all(records, SummaryView::List)?;
        Ok(ArticlePageDto::new(total_count, items))
    }
}
