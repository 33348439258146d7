use std::collections::BTreeSet;

use crate::error::TableError;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PaginationState {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationState {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size,
        }
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.page_size == 0 {
            return Err(TableError::InvalidPageSize(self.page_size));
        }
        Ok(())
    }

    pub fn total_pages(&self, total_rows: usize) -> usize {
        total_rows.div_ceil(self.page_size.max(1)).max(1)
    }

    pub fn is_out_of_range(&self, total_rows: usize) -> bool {
        self.page > self.total_pages(total_rows)
    }

    /// Snaps the page back into `[1, total_pages]`. Opt-in: `slice` itself
    /// never clamps, it just yields an empty page past the end.
    pub fn clamped_to(self, total_rows: usize) -> Self {
        Self {
            page: self.page.min(self.total_pages(total_rows)).max(1),
            page_size: self.page_size,
        }
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let page_size = self.page_size.max(1);
        let start = self.page.saturating_sub(1).saturating_mul(page_size);
        if start >= rows.len() {
            return &[];
        }
        let end = start.saturating_add(page_size).min(rows.len());
        &rows[start..end]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// The boundary/sibling window of page buttons a paginator renders, with
/// ellipses standing in for collapsed runs. Up to seven pages everything is
/// shown outright.
pub fn page_items(
    total_pages: usize,
    current: usize,
    siblings: usize,
    boundaries: usize,
) -> Vec<PageItem> {
    let total = total_pages.max(1);
    if total <= 7 {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut pages = BTreeSet::new();
    let boundaries = boundaries.max(1);

    for page in 1..=boundaries.min(total) {
        pages.insert(page);
    }

    let start_tail = total.saturating_sub(boundaries).saturating_add(1);
    for page in start_tail..=total {
        pages.insert(page);
    }

    let start_middle = current.saturating_sub(siblings).max(1);
    let end_middle = current.saturating_add(siblings).min(total);
    for page in start_middle..=end_middle {
        pages.insert(page);
    }

    let mut items = Vec::new();
    let mut previous: Option<usize> = None;
    for page in pages {
        if let Some(prev) = previous {
            if page > prev + 1 {
                items.push(PageItem::Ellipsis);
            }
        }
        items.push(PageItem::Page(page));
        previous = Some(page);
    }
    items
}

/// Page-size selector options: deduplicated, ascending, never below 1, and
/// always containing the active size.
pub fn normalize_page_size_options(options: Vec<usize>, active: usize) -> Vec<usize> {
    let mut normalized = options
        .into_iter()
        .map(|value| value.max(1))
        .collect::<Vec<_>>();
    normalized.push(active.max(1));
    normalized.sort_unstable();
    normalized.dedup();
    normalized
}
