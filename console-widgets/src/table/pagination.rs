//! Page arithmetic for the list footer.

/// A navigation control in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

impl PageNav {
    pub const ALL: [PageNav; 4] = [PageNav::First, PageNav::Prev, PageNav::Next, PageNav::Last];

    pub fn label(self) -> &'static str {
        match self {
            PageNav::First => "First page",
            PageNav::Prev => "Previous page",
            PageNav::Next => "Next page",
            PageNav::Last => "Last page",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PageNav::First => "«",
            PageNav::Prev => "‹",
            PageNav::Next => "›",
            PageNav::Last => "»",
        }
    }
}

/// Pagination numbers derived from the caller's page props.
///
/// Pages are 1-based. A page size of zero is treated as one; the page is
/// clamped into `1..=total_pages` (or to 1 when there are no rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total_count: usize,
    loading: bool,
}

impl Pagination {
    pub fn new(page: usize, page_size: usize, total_count: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_count.div_ceil(page_size);
        let page = page.clamp(1, total_pages.max(1));
        Self {
            page,
            page_size,
            total_count,
            loading: false,
        }
    }

    /// Disable every control while loading.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// `ceil(total_count / page_size)`; zero when there are no rows.
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size)
    }

    /// 1-based index of the first row on this page, or 0 with no rows.
    pub fn start_index(&self) -> usize {
        if self.total_count == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last row on this page.
    pub fn end_index(&self) -> usize {
        (self.page * self.page_size).min(self.total_count)
    }

    pub fn is_enabled(&self, nav: PageNav) -> bool {
        if self.loading {
            return false;
        }
        match nav {
            PageNav::First | PageNav::Prev => self.page > 1,
            PageNav::Next | PageNav::Last => self.page < self.total_pages(),
        }
    }

    /// The page `nav` leads to, or `None` when that control is disabled.
    pub fn target(&self, nav: PageNav) -> Option<usize> {
        if !self.is_enabled(nav) {
            return None;
        }
        Some(match nav {
            PageNav::First => 1,
            PageNav::Prev => self.page - 1,
            PageNav::Next => self.page + 1,
            PageNav::Last => self.total_pages(),
        })
    }

    /// `Showing 21 to 23 of 23 results`
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} results",
            self.start_index(),
            self.end_index(),
            self.total_count
        )
    }

    /// `Page 3 of 3`
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}
