// src/shared/types/pagination.rs

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

/// ページネーションクエリパラメータ（`?page=2&page_size=20`）
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl PaginationQuery {
    /// デフォルト値を適用してページとページサイズを取得
    ///
    /// ページサイズは 1..=MAX_PAGE_SIZE に丸め、0 の場合はデフォルト値を使う。
    pub fn resolve(&self, default_page_size: u64) -> PageRequest {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = match self.page_size {
            Some(0) | None => default_page_size,
            Some(size) => size,
        }
        .clamp(1, MAX_PAGE_SIZE);

        PageRequest { page, page_size }
    }
}

/// 解決済みのページ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page, page_size }
    }

    /// オフセットを計算（範囲外の巨大なページ番号では u64::MAX で頭打ち）
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// 総件数に対してページが範囲内か（空の結果の1ページ目は常に有効）
    pub fn is_in_range(&self, total_count: u64) -> bool {
        self.page <= 1 || self.page <= total_pages(total_count, self.page_size)
    }

    pub fn ensure_in_range(&self, total_count: u64) -> AppResult<()> {
        if !self.is_in_range(total_count) {
            return Err(AppError::NotFound("Invalid page.".to_string()));
        }
        Ok(())
    }
}

fn total_pages(total_count: u64, page_size: u64) -> u64 {
    total_count.div_ceil(page_size)
}

/// ページネーション付きレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
    pub results: Vec<T>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(results: Vec<T>, request: PageRequest, total_count: u64) -> Self {
        let total_pages = total_pages(total_count, request.page_size);

        Self {
            count: total_count,
            page: request.page,
            page_size: request.page_size,
            total_pages,
            next: (request.page < total_pages).then_some(request.page + 1),
            previous: (request.page > 1).then(|| request.page - 1),
            results,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            count: self.count,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
