//! Paged list view - a table over one caller-supplied page of rows.
//!
//! The view provides:
//! - Column-based layout with a header row and sort indicators
//! - Pagination footer with first/prev/next/last navigation
//! - Optional multi-row selection with a select-all checkbox
//! - Loading and empty placeholder rows
//!
//! It never fetches, sorts, slices or stores anything. The caller owns the
//! page slice, the sort state and the selection; every interaction returns a
//! [`ListEvent`] describing the change the caller should make.
//!
//! # Example
//!
//! ```ignore
//! use console_widgets::prelude::*;
//!
//! let columns = vec![
//!     Column::text("name", "Tenant", |t: &Tenant| t.name.clone()).sortable(),
//!     Column::text("users", "Users", |t: &Tenant| t.user_count.to_string())
//!         .align(Alignment::Right),
//! ];
//!
//! let view = PagedListView::new(&columns, &page.rows)
//!     .total_count(page.total_count)
//!     .page(page.page, 10)
//!     .sort(sort.as_ref())
//!     .selectable(&selected);
//!
//! if let Some(event) = view.activate_header("name") {
//!     event.dispatch(&mut handler);
//! }
//! ```

mod column;
mod pagination;
mod render;
mod selection;
mod sort;
mod view;

pub use column::{Alignment, Column, ColumnWidth};
pub use pagination::{PageNav, Pagination};
pub use render::{ListHit, ListLayout};
pub use selection::{SelectionStatus, selection_status, toggle_all, toggle_one};
pub use sort::{SortDirection, SortState};
pub use view::{
    DEFAULT_EMPTY_MESSAGE, ListEvent, ListViewHandler, PagedListView, RenderState, RowId,
};
