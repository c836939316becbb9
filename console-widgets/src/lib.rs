//! Reusable console components.
//!
//! Every component here is a plain value built from caller-owned props and
//! drawn into a [`console_term::Buffer`]. Interactions never mutate the
//! component; they return an event describing what the caller should change.

pub mod badge;
pub mod chart;
pub mod content;
pub mod draw;
pub mod filter_bar;
pub mod keybinds;
pub mod stat_card;
pub mod table;
pub mod theme;
pub mod toast;
pub mod validation;

pub mod prelude {
    pub use crate::badge::StatusBadge;
    pub use crate::chart::BarChart;
    pub use crate::content::{Content, Span, Tone};
    pub use crate::filter_bar::{FilterBar, FilterOption, SelectFilter};
    pub use crate::keybinds::{Key, KeyCombo, KeybindError, Keybinds, Modifiers};
    pub use crate::stat_card::{StatCard, StatVariant, Trend};
    pub use crate::table::{
        Alignment, Column, ColumnWidth, ListEvent, ListViewHandler, PageNav, PagedListView,
        Pagination, RenderState, RowId, SelectionStatus, SortDirection, SortState,
    };
    pub use crate::theme::{DefaultTheme, Theme};
    pub use crate::toast::{Notifier, Toast, ToastLevel, ToastQueue};
    pub use crate::validation::{FieldError, ValidationResult, Validator};
}
