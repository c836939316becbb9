//! Page type for paginated query results.

/// One page of query results with pagination information.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    rows: Vec<T>,
    total_count: usize,
    page: usize,
    page_size: usize,
}

impl<T> Page<T> {
    pub fn new(rows: Vec<T>, total_count: usize, page: usize, page_size: usize) -> Self {
        Self {
            rows,
            total_count,
            page,
            page_size,
        }
    }

    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Matching rows across all pages.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// 1-based page number actually served (after clamping).
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1))
    }

    pub fn has_more(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
