//! Caller-owned selection helpers.
//!
//! Selections are ordered id lists owned by the caller. These functions
//! compute the list to report after a toggle; they never touch ids that are
//! not on the current page.

/// How much of the current page is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStatus {
    /// No row on the page is selected (or the page is empty).
    #[default]
    None,
    /// At least one but not every row is selected.
    Some,
    /// Every row on a non-empty page is selected.
    All,
}

impl SelectionStatus {
    /// Header checkbox glyph.
    pub fn checkbox(self) -> &'static str {
        match self {
            SelectionStatus::None => "[ ]",
            SelectionStatus::Some => "[-]",
            SelectionStatus::All => "[x]",
        }
    }
}

pub fn selection_status(page_ids: &[String], selected: &[String]) -> SelectionStatus {
    let count = page_ids.iter().filter(|id| selected.contains(id)).count();
    match count {
        0 => SelectionStatus::None,
        n if n == page_ids.len() => SelectionStatus::All,
        _ => SelectionStatus::Some,
    }
}

/// Select-all on the page.
///
/// With every page row selected, removes exactly the page's ids. Otherwise
/// appends the page ids that are missing, keeping the existing order.
pub fn toggle_all(page_ids: &[String], selected: &[String]) -> Vec<String> {
    if selection_status(page_ids, selected) == SelectionStatus::All {
        selected
            .iter()
            .filter(|id| !page_ids.contains(id))
            .cloned()
            .collect()
    } else {
        let mut next = selected.to_vec();
        for id in page_ids {
            if !next.contains(id) {
                next.push(id.clone());
            }
        }
        next
    }
}

/// Fold `id` into the selection, or remove it if already present.
pub fn toggle_one(id: &str, selected: &[String]) -> Vec<String> {
    if selected.iter().any(|s| s == id) {
        selected.iter().filter(|s| *s != id).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(id.to_string());
        next
    }
}
