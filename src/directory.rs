//! User Directory Logic
//!
//! Fetch lifecycle, search and pagination over the fetched snapshot.

use crate::error::FetchError;
use crate::models::User;

/// Lifecycle of the one-shot users fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Loading,
    Loaded(Vec<User>),
    Failed(String),
}

impl FetchState {
    /// Settled state for a finished fetch
    pub fn from_result(result: Result<Vec<User>, FetchError>) -> Self {
        match result {
            Ok(users) => FetchState::Loaded(users),
            Err(e) => FetchState::Failed(e.to_string()),
        }
    }

    pub fn users(&self) -> &[User] {
        match self {
            FetchState::Loaded(users) => users,
            _ => &[],
        }
    }
}

/// Users whose name or email contains `query`, ignoring case.
///
/// Always filters the full snapshot; a blank query keeps everyone.
pub fn search_users(users: &[User], query: &str) -> Vec<User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|u| {
            u.name.to_lowercase().contains(&needle) || u.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Cursor to use once the search text goes from `previous` to `current`.
///
/// Any change of the query starts again at page 1.
pub fn pager_after_search(pager: Pagination, previous: &str, current: &str) -> Pagination {
    if previous == current {
        pager
    } else {
        pager.reset()
    }
}

/// 1-based page cursor with a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// `ceil(count / page_size)`
    pub fn total_pages(&self, count: usize) -> usize {
        count.div_ceil(self.page_size)
    }

    /// Controls are only shown with more than one page
    pub fn has_controls(&self, count: usize) -> bool {
        self.total_pages(count) > 1
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self, count: usize) -> bool {
        self.page >= self.total_pages(count)
    }

    pub fn next(self, count: usize) -> Self {
        let last = self.total_pages(count).max(1);
        Self {
            page: (self.page + 1).min(last),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    /// Back to the first page
    pub fn reset(self) -> Self {
        Self { page: 1, ..self }
    }

    /// Index of the first record on the current page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// The records on the current page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }

    /// Current page paired with each record's index in `items`
    pub fn indexed_page<T: Clone>(&self, items: &[T]) -> Vec<(usize, T)> {
        let offset = self.offset();
        self.slice(items)
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, item)| (offset + i, item))
            .collect()
    }
}
