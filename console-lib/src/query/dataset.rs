use super::filter::{Filter, check_field};
use super::order::OrderBy;
use super::page::Page;
use super::record::Record;
use crate::error::{Error, Result};

/// Default rows per page for list views.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search, filter, order and page for one list request.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub search: String,
    pub filter: Filter,
    pub order: Option<OrderBy>,
    /// 1-based. Zero is treated as the first page.
    pub page: usize,
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search: String::new(),
            filter: Filter::All,
            order: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn order(mut self, order: OrderBy) -> Self {
        self.order = Some(order);
        self
    }

    pub fn page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }
}

/// An owned collection of records that can be queried.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    rows: Vec<T>,
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record + Clone> Dataset<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self { rows }
    }

    pub fn all(&self) -> &[T] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Rows matching the search and filter, ordered, without paging.
    pub fn matching(&self, query: &Query) -> Result<Vec<T>> {
        query.filter.validate::<T>()?;
        if let Some(order) = &query.order {
            for (field, _) in order.fields() {
                check_field::<T>(field)?;
            }
        }

        let search = query.search.trim();
        let mut rows: Vec<T> = self
            .rows
            .iter()
            .filter(|row| row.matches_search(search) && query.filter.matches(*row))
            .cloned()
            .collect();

        if let Some(order) = &query.order {
            // `sort_by` is stable: equal rows keep fixture order.
            rows.sort_by(|a, b| order.compare(a, b));
        }
        Ok(rows)
    }

    /// Run a query and return the requested page.
    ///
    /// Pages past the end are clamped to the last page.
    pub fn query(&self, query: &Query) -> Result<Page<T>> {
        if query.page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        let rows = self.matching(query)?;
        let total_count = rows.len();
        let total_pages = total_count.div_ceil(query.page_size);
        let page = query.page.clamp(1, total_pages.max(1));

        let start = (page - 1) * query.page_size;
        let rows: Vec<T> = rows.into_iter().skip(start).take(query.page_size).collect();
        log::debug!(
            "{} query: search={:?} page={} -> {} of {} rows",
            T::NAME,
            query.search,
            page,
            rows.len(),
            total_count
        );
        Ok(Page::new(rows, total_count, page, query.page_size))
    }
}
