use std::collections::{BTreeMap, BTreeSet};

use log::debug;

use crate::control::Concern;
use crate::error::TableError;
use crate::pagination_state::PaginationState;
use crate::selection_state::{SelectAllStatus, SelectionState};
use crate::sort_state::{SortDirection, SortState};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub sortable: bool,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
        }
    }

    pub fn sortable(mut self, value: bool) -> Self {
        self.sortable = value;
        self
    }
}

/// One dataset row. The coordinator only ever reads `id`; cell contents are
/// opaque to it and pass straight through to the renderer.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Row {
    pub id: String,
    pub fields: BTreeMap<String, String>,
}

impl Row {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

/// Per-render inputs. Supplying a state here only has an effect for
/// concerns constructed as controlled; the rows are expected to arrive
/// already sorted when a sort is active.
#[derive(Clone, Copy, Default)]
pub struct RenderInput<'a> {
    pub columns: &'a [Column],
    pub rows: &'a [Row],
    pub selection: Option<&'a SelectionState>,
    pub sort: Option<&'a SortState>,
    pub pagination: Option<&'a PaginationState>,
}

/// The consistent snapshot handed to the renderer: the visible page slice
/// plus everything needed for checkboxes, sort arrows, and page indicators.
/// Derived fresh on every render pass, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct PageView<'a> {
    pub visible_rows: &'a [Row],
    pub total_pages: usize,
    pub select_all_status: SelectAllStatus,
    pub selection: SelectionState,
    pub sort: SortState,
    pub pagination: PaginationState,
}

impl PageView<'_> {
    pub fn is_row_selected(&self, row: &Row) -> bool {
        self.selection.is_selected(&row.id)
    }

    pub fn sort_direction_for(&self, key: &str) -> Option<SortDirection> {
        self.sort.direction_for(key)
    }
}

/// Composes selection, sort, and pagination over a caller-owned dataset.
///
/// Each concern is either owned here (`default_*` builders) or controlled
/// by the caller (`controlled_*` builders, which take the change callback
/// and make this side purely propositional for that concern). The mode is
/// fixed for the coordinator's lifetime.
pub struct TableCoordinator {
    selection: Concern<SelectionState>,
    sort: Concern<SortState>,
    pagination: Concern<PaginationState>,
}

impl Default for TableCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl TableCoordinator {
    pub fn new() -> Self {
        Self {
            selection: Concern::owned(SelectionState::new()),
            sort: Concern::owned(SortState::unsorted()),
            pagination: Concern::owned(PaginationState::default()),
        }
    }

    pub fn page_size(mut self, value: usize) -> Self {
        let current = *self.pagination.current();
        self.pagination = Concern::owned(PaginationState::new(current.page, value));
        self
    }

    pub fn default_page(mut self, value: usize) -> Self {
        let current = *self.pagination.current();
        self.pagination = Concern::owned(PaginationState::new(value, current.page_size));
        self
    }

    pub fn default_selection(mut self, value: SelectionState) -> Self {
        self.selection = Concern::owned(value);
        self
    }

    pub fn default_sort(mut self, value: SortState) -> Self {
        self.sort = Concern::owned(value);
        self
    }

    pub fn controlled_selection(mut self, on_change: impl Fn(&SelectionState) + 'static) -> Self {
        self.selection = Concern::external(SelectionState::new(), on_change);
        self
    }

    pub fn controlled_sort(mut self, on_change: impl Fn(&SortState) + 'static) -> Self {
        self.sort = Concern::external(SortState::unsorted(), on_change);
        self
    }

    pub fn controlled_pagination(mut self, on_change: impl Fn(&PaginationState) + 'static) -> Self {
        self.pagination = Concern::external(PaginationState::default(), on_change);
        self
    }

    pub fn current_selection(&self) -> &SelectionState {
        self.selection.current()
    }

    pub fn current_sort(&self) -> &SortState {
        self.sort.current()
    }

    pub fn current_pagination(&self) -> &PaginationState {
        self.pagination.current()
    }

    pub fn on_row_toggle(&mut self, id: &str, selected: bool) -> bool {
        let next = self.selection.current().toggled(id, selected);
        self.selection.apply(next)
    }

    /// `rows` is the full dataset in render order; the toggle applies to
    /// the slice currently on screen, not to the whole dataset.
    pub fn on_select_all_toggle(&mut self, rows: &[Row], selected: bool) -> bool {
        let visible = self.pagination.current().slice(rows);
        let next = self.selection.current().with_visible(visible, selected);
        self.selection.apply(next)
    }

    pub fn on_header_click(&mut self, columns: &[Column], key: &str) -> bool {
        match self.sort.current().after_click(columns, key) {
            Some(next) => self.sort.apply(next),
            None => {
                debug!("header click on `{key}` ignored: column unknown or not sortable");
                false
            }
        }
    }

    pub fn on_page_change(&mut self, next_page: usize) -> bool {
        let current = *self.pagination.current();
        self.pagination
            .apply(PaginationState::new(next_page, current.page_size))
    }

    /// A new page size always snaps back to the first page.
    pub fn on_page_size_change(&mut self, next_size: usize) -> bool {
        self.pagination
            .apply(PaginationState::new(1, next_size.max(1)))
    }

    /// Reconciles controlled snapshots with the supplied inputs, then
    /// derives the page view. Misconfiguration (zero page size, duplicate
    /// column keys) fails here; an out-of-range page degrades to an empty
    /// slice and leaves any clamping decision to the caller.
    pub fn page_view<'a>(&mut self, input: RenderInput<'a>) -> Result<PageView<'a>, TableError> {
        validate_columns(input.columns)?;

        self.selection.sync("selection", input.selection);
        self.sort.sync("sort", input.sort);
        self.pagination.sync("pagination", input.pagination);

        let pagination = *self.pagination.current();
        pagination.validate()?;

        let total_pages = pagination.total_pages(input.rows.len());
        if pagination.is_out_of_range(input.rows.len()) {
            debug!(
                "page {} of {total_pages} is out of range, rendering an empty page",
                pagination.page
            );
        }
        let visible_rows = pagination.slice(input.rows);
        let selection = self.selection.current().clone();
        let select_all_status = selection.status(visible_rows);

        Ok(PageView {
            visible_rows,
            total_pages,
            select_all_status,
            selection,
            sort: self.sort.current().clone(),
            pagination,
        })
    }
}

fn validate_columns(columns: &[Column]) -> Result<(), TableError> {
    let mut seen = BTreeSet::new();
    for column in columns {
        if !seen.insert(column.key.as_str()) {
            return Err(TableError::DuplicateColumnKey(column.key.clone()));
        }
    }
    Ok(())
}
