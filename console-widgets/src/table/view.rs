//! The paged list view and its events.

use super::column::Column;
use super::pagination::{PageNav, Pagination};
use super::selection::{SelectionStatus, selection_status, toggle_all, toggle_one};
use super::sort::{SortDirection, SortState};

/// Message shown in place of rows when the page is empty.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data found.";

/// Default row identity: the record's `id` field.
pub trait RowId {
    fn row_id(&self) -> String;
}

/// Which of the three mutually exclusive bodies the view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// A single indeterminate progress row.
    Loading,
    /// A single row holding the empty message.
    Empty,
    /// One row per record.
    Populated,
}

/// A change the view asks its caller to make.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    PageChange(usize),
    Sort(SortState),
    /// The complete new selection.
    SelectionChange(Vec<String>),
}

impl ListEvent {
    /// Route this event to the matching handler hook.
    pub fn dispatch<H: ListViewHandler + ?Sized>(self, handler: &mut H) {
        log::debug!("List event: {:?}", self);
        match self {
            ListEvent::PageChange(page) => handler.on_page_change(page),
            ListEvent::Sort(sort) => handler.on_sort(&sort.key, sort.direction),
            ListEvent::SelectionChange(ids) => handler.on_selection_change(ids),
        }
    }
}

/// Hooks a caller implements to receive list events.
///
/// Page changes are required. Sort and selection hooks default to doing
/// nothing, which behaves like an absent callback.
pub trait ListViewHandler {
    fn on_page_change(&mut self, page: usize);

    fn on_sort(&mut self, _key: &str, _direction: SortDirection) {}

    fn on_selection_change(&mut self, _ids: Vec<String>) {}
}

type RowIdFn<'a, T> = Box<dyn Fn(&T) -> String + 'a>;

/// A table over one page of rows.
///
/// Built fresh from the caller's props on every render; holds only borrows.
pub struct PagedListView<'a, T> {
    columns: &'a [Column<T>],
    rows: &'a [T],
    total_count: usize,
    page: usize,
    page_size: usize,
    sort: Option<&'a SortState>,
    loading: bool,
    selectable: bool,
    selected: &'a [String],
    row_id: RowIdFn<'a, T>,
    empty_message: &'a str,
    cursor: Option<usize>,
}

impl<'a, T: RowId> PagedListView<'a, T> {
    /// Create a view whose rows are identified by [`RowId`].
    pub fn new(columns: &'a [Column<T>], rows: &'a [T]) -> Self {
        Self::with_row_id(columns, rows, |row: &T| row.row_id())
    }
}

impl<'a, T> PagedListView<'a, T> {
    /// Create a view with an explicit row-identity function.
    pub fn with_row_id<F>(columns: &'a [Column<T>], rows: &'a [T], row_id: F) -> Self
    where
        F: Fn(&T) -> String + 'a,
    {
        Self {
            columns,
            rows,
            total_count: rows.len(),
            page: 1,
            page_size: rows.len().max(1),
            sort: None,
            loading: false,
            selectable: false,
            selected: &[],
            row_id: Box::new(row_id),
            empty_message: DEFAULT_EMPTY_MESSAGE,
            cursor: None,
        }
    }

    /// Total rows across all pages.
    pub fn total_count(mut self, total_count: usize) -> Self {
        self.total_count = total_count;
        self
    }

    /// Current page (1-based) and page size.
    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    pub fn sort(mut self, sort: Option<&'a SortState>) -> Self {
        self.sort = sort;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable selection with the caller's current selection.
    pub fn selectable(mut self, selected: &'a [String]) -> Self {
        self.selectable = true;
        self.selected = selected;
        self
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    /// Highlight the row at `index` on this page.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    // -------------------------------------------------------------------------
    // Derived state
    // -------------------------------------------------------------------------

    pub fn columns(&self) -> &[Column<T>] {
        self.columns
    }

    pub fn rows(&self) -> &[T] {
        self.rows
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn current_sort(&self) -> Option<&SortState> {
        self.sort
    }

    pub fn empty_text(&self) -> &str {
        self.empty_message
    }

    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.filter(|&i| i < self.rows.len())
    }

    pub fn render_state(&self) -> RenderState {
        if self.loading {
            RenderState::Loading
        } else if self.rows.is_empty() {
            RenderState::Empty
        } else {
            RenderState::Populated
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.total_count).loading(self.loading)
    }

    pub fn row_id(&self, row: &T) -> String {
        (self.row_id)(row)
    }

    /// Ids of the rows on this page, in display order.
    pub fn page_ids(&self) -> Vec<String> {
        self.rows.iter().map(|row| self.row_id(row)).collect()
    }

    pub fn is_selected(&self, row: &T) -> bool {
        self.selectable && self.selected.contains(&self.row_id(row))
    }

    /// Selection status of the current page.
    pub fn selection_status(&self) -> SelectionStatus {
        if !self.selectable {
            return SelectionStatus::None;
        }
        selection_status(&self.page_ids(), self.selected)
    }

    /// Sort glyph for a column header: `↕` unsorted, `↑`/`↓` when active.
    pub fn sort_indicator(&self, column: &Column<T>) -> Option<&'static str> {
        if !column.sortable {
            return None;
        }
        match self.sort {
            Some(sort) if sort.key == column.key => Some(sort.direction.indicator()),
            _ => Some("↕"),
        }
    }

    // -------------------------------------------------------------------------
    // Interactions
    // -------------------------------------------------------------------------

    /// Activate the header of column `key`.
    pub fn activate_header(&self, key: &str) -> Option<ListEvent> {
        let column = self.columns.iter().find(|c| c.key == key)?;
        if !column.sortable {
            return None;
        }
        Some(ListEvent::Sort(SortState::next(self.sort, key)))
    }

    /// Activate a footer navigation control.
    pub fn navigate(&self, nav: PageNav) -> Option<ListEvent> {
        self.pagination().target(nav).map(ListEvent::PageChange)
    }

    /// Activate the select-all checkbox.
    pub fn toggle_all(&self) -> Option<ListEvent> {
        if !self.selectable || self.loading || self.rows.is_empty() {
            return None;
        }
        Some(ListEvent::SelectionChange(toggle_all(
            &self.page_ids(),
            self.selected,
        )))
    }

    /// Toggle the row at `index` on this page.
    pub fn toggle_row(&self, index: usize) -> Option<ListEvent> {
        if !self.selectable || self.loading {
            return None;
        }
        let row = self.rows.get(index)?;
        Some(ListEvent::SelectionChange(toggle_one(
            &self.row_id(row),
            self.selected,
        )))
    }
}
