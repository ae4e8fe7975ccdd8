// src/domain/pagination.rs
use crate::domain::errors::{DomainError, DomainResult};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> DomainResult<Self> {
        if page < 1 {
            return Err(DomainError::Validation("page must be at least 1".into()));
        }
        if page_size < 1 {
            return Err(DomainError::Validation(
                "page size must be at least 1".into(),
            ));
        }
        // 1 以上であることは確認済み
        Ok(Self {
            page: page.unsigned_abs(),
            page_size: page_size.unsigned_abs(),
        })
    }

    pub const fn page(&self) -> u64 {
        self.page
    }

    pub const fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Saturates instead of overflowing; a saturated offset is always past
    /// the end of any stored set.
    pub const fn offset(&self) -> u64 {
        self.page_size.saturating_mul(self.page - 1)
    }

    /// `[offset, offset + page_size)` clipped to `[0, total_count)`. A page
    /// past the end yields an empty window.
    pub fn window(&self, total_count: u64) -> PageWindow {
        let offset = self.offset();
        let limit = total_count
            .saturating_sub(offset)
            .min(self.page_size);
        PageWindow { offset, limit }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    pub const fn is_empty(&self) -> bool {
        self.limit == 0
    }
}
