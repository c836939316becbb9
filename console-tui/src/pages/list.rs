//! Shared state and controls for the list pages.
//!
//! A [`ListPage`] owns a [`Dataset`], the caller-side props of a
//! [`PagedListView`] ([`ListState`]) and the last served [`Page`]. Every
//! change to the props re-runs the query, so the view always renders exactly
//! what the state describes.

use console_lib::query::{Dataset, Direction, Filter, OrderBy, Page, Query, Record};
use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};
use console_widgets::content::{Content, Span, Tone};
use console_widgets::draw;
use console_widgets::filter_bar::{FilterBar, SelectFilter};
use console_widgets::table::{
    Column, ListEvent, ListHit, ListViewHandler, PageNav, PagedListView, SortDirection, SortState,
};
use console_widgets::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Caller-owned props of a paged list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub search: String,
    pub search_focused: bool,
    pub filters: Vec<SelectFilter>,
    /// Filter cycled by `f`/`F`.
    pub focused_filter: usize,
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortState>,
    pub selected: Vec<String>,
    /// Row index on the current page.
    pub cursor: usize,
}

impl ListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            search_focused: false,
            filters: Vec::new(),
            focused_filter: 0,
            page: 1,
            page_size: page_size.max(1),
            sort: None,
            selected: Vec::new(),
            cursor: 0,
        }
    }

    /// The query these props describe, narrowed by `scope`.
    pub fn query(&self, scope: &Filter) -> Query {
        let filter = self
            .filters
            .iter()
            .filter_map(|f| f.selected().map(|value| Filter::eq(f.key.clone(), value)))
            .fold(scope.clone(), Filter::and_also);

        let mut query = Query::new()
            .search(self.search.clone())
            .filter(filter)
            .page(self.page, self.page_size);
        if let Some(sort) = &self.sort {
            let direction = match sort.direction {
                SortDirection::Asc => Direction::Asc,
                SortDirection::Desc => Direction::Desc,
            };
            query = query.order(OrderBy::new(sort.key.clone(), direction));
        }
        query
    }

    pub fn filter_value(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.key == key)
            .and_then(SelectFilter::selected)
    }
}

impl ListViewHandler for ListState {
    fn on_page_change(&mut self, page: usize) {
        self.page = page;
        self.cursor = 0;
    }

    fn on_sort(&mut self, key: &str, direction: SortDirection) {
        self.sort = Some(SortState::new(key, direction));
    }

    fn on_selection_change(&mut self, ids: Vec<String>) {
        self.selected = ids;
    }
}

pub struct ListPage<T> {
    dataset: Dataset<T>,
    columns: Vec<Column<T>>,
    state: ListState,
    /// Always-applied filter, e.g. the active tab.
    scope: Filter,
    results: Page<T>,
    selectable: bool,
    empty_message: &'static str,
    search_placeholder: &'static str,
    actions: Vec<(&'static str, &'static str)>,
}

impl<T: Record + Clone> ListPage<T> {
    pub fn new(dataset: Dataset<T>, columns: Vec<Column<T>>, page_size: usize) -> Self {
        let state = ListState::new(page_size);
        let mut page = Self {
            dataset,
            columns,
            results: Page::new(Vec::new(), 0, 1, state.page_size),
            state,
            scope: Filter::All,
            selectable: false,
            empty_message: "No data found.",
            search_placeholder: "Search...",
            actions: Vec::new(),
        };
        page.refresh();
        page
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn sorted(mut self, sort: SortState) -> Self {
        self.state.sort = Some(sort);
        self.refresh();
        self
    }

    pub fn filter(mut self, filter: SelectFilter) -> Self {
        self.state.filters.push(filter);
        self
    }

    pub fn empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn search_placeholder(mut self, placeholder: &'static str) -> Self {
        self.search_placeholder = placeholder;
        self
    }

    pub fn action(mut self, hotkey: &'static str, label: &'static str) -> Self {
        self.actions.push((hotkey, label));
        self
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn results(&self) -> &Page<T> {
        &self.results
    }

    pub fn dataset(&self) -> &Dataset<T> {
        &self.dataset
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
        if !selectable {
            self.state.selected.clear();
        }
    }

    /// Row under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.results.rows().get(self.state.cursor)
    }

    pub fn selected(&self) -> &[String] {
        &self.state.selected
    }

    pub fn clear_selection(&mut self) {
        self.state.selected.clear();
    }

    /// Replace the always-applied filter and go back to page one.
    pub fn set_scope(&mut self, scope: Filter) {
        self.scope = scope;
        self.state.page = 1;
        self.state.cursor = 0;
        self.refresh();
    }

    /// Re-run the query for the current props.
    pub fn refresh(&mut self) {
        match self.dataset.query(&self.state.query(&self.scope)) {
            Ok(page) => {
                self.state.page = page.page();
                self.results = page;
            }
            Err(e) => {
                log::error!("{} query failed: {}", T::NAME, e);
                self.results = Page::new(Vec::new(), 0, 1, self.state.page_size);
            }
        }
        let rows = self.results.len();
        if self.state.cursor >= rows {
            self.state.cursor = rows.saturating_sub(1);
        }
    }

    pub fn view(&self) -> PagedListView<'_, T> {
        let view = PagedListView::with_row_id(&self.columns, self.results.rows(), |row: &T| {
            row.id().to_string()
        })
        .total_count(self.results.total_count())
        .page(self.state.page, self.state.page_size)
        .sort(self.state.sort.as_ref())
        .empty_message(self.empty_message)
        .cursor(Some(self.state.cursor));
        if self.selectable {
            view.selectable(&self.state.selected)
        } else {
            view
        }
    }

    pub fn filter_bar(&self) -> FilterBar {
        let mut bar = FilterBar::new()
            .search(self.search_placeholder, self.state.search.clone())
            .focused(self.state.search_focused);
        for filter in &self.state.filters {
            bar = bar.filter(filter.clone());
        }
        for (hotkey, label) in &self.actions {
            bar = bar.action(*hotkey, *label);
        }
        bar
    }

    /// Apply a view event and re-query.
    pub fn apply(&mut self, event: ListEvent) {
        event.dispatch(&mut self.state);
        self.refresh();
    }

    fn set_search(&mut self, search: String) {
        self.state.search = search;
        self.state.page = 1;
        self.refresh();
    }

    fn cycle_filter(&mut self, forward: bool) {
        let Some(filter) = self.state.filters.get_mut(self.state.focused_filter) else {
            return;
        };
        filter.value = filter.cycled(forward);
        log::debug!("Filter {} = {}", filter.key, filter.value);
        self.state.page = 1;
        self.refresh();
    }

    fn clear_filters(&mut self) {
        let mut bar = self.filter_bar();
        if !bar.has_active_filters() {
            return;
        }
        bar.clear();
        self.state.search = bar.search_value;
        self.state.filters = bar.filters;
        self.state.page = 1;
        self.refresh();
    }

    fn move_cursor(&mut self, down: bool) {
        let rows = self.results.len();
        if rows == 0 {
            return;
        }
        self.state.cursor = if down {
            (self.state.cursor + 1).min(rows - 1)
        } else {
            self.state.cursor.saturating_sub(1)
        };
    }

    /// Handle list navigation keys. Returns false for keys it does not use.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.state.search_focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.state.search_focused = false,
                KeyCode::Backspace => {
                    let mut search = self.state.search.clone();
                    search.pop();
                    self.set_search(search);
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    let mut search = self.state.search.clone();
                    search.push(c);
                    self.set_search(search);
                }
                _ => return false,
            }
            return true;
        }

        let event = match key.code {
            KeyCode::Char('/') => {
                self.state.search_focused = true;
                return true;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(false);
                return true;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(true);
                return true;
            }
            KeyCode::Char('f') => {
                self.cycle_filter(true);
                return true;
            }
            KeyCode::Char('F') => {
                self.cycle_filter(false);
                return true;
            }
            KeyCode::Tab if !self.state.filters.is_empty() => {
                self.state.focused_filter = (self.state.focused_filter + 1) % self.state.filters.len();
                return true;
            }
            KeyCode::Char('x') => {
                self.clear_filters();
                return true;
            }
            KeyCode::Esc if !self.state.selected.is_empty() => {
                self.clear_selection();
                return true;
            }
            KeyCode::Home => self.view().navigate(PageNav::First),
            KeyCode::Left | KeyCode::Char('[') => self.view().navigate(PageNav::Prev),
            KeyCode::Right | KeyCode::Char(']') => self.view().navigate(PageNav::Next),
            KeyCode::End => self.view().navigate(PageNav::Last),
            KeyCode::Char(' ') => self.view().toggle_row(self.state.cursor),
            KeyCode::Char('a') => self.view().toggle_all(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.columns
                    .get(index)
                    .map(|column| column.key.clone())
                    .and_then(|key| self.view().activate_header(&key))
            }
            _ => return false,
        };
        if let Some(event) = event {
            self.apply(event);
        }
        true
    }

    /// Split `area` into the filter row, the bulk-action row and the table.
    pub fn layout(&self, area: Rect) -> (Rect, Rect, Rect) {
        let (filter, rest) = area.split_top(1);
        let (bulk, rest) = rest.split_top(1);
        let (_, table) = rest.split_top(1);
        (filter, bulk, table)
    }

    /// Handle a click inside `area`. Returns true if it landed on the list.
    pub fn handle_click(&mut self, area: Rect, x: u16, y: u16) -> bool {
        let (_, _, table) = self.layout(area);
        if !table.contains(x, y) {
            return false;
        }
        let (event, row) = {
            let view = self.view();
            let row = match view.hit(table, x, y) {
                Some(ListHit::Row(index)) => Some(index),
                _ => None,
            };
            (view.click(table, x, y), row)
        };
        if let Some(index) = row {
            self.state.cursor = index;
        }
        if let Some(event) = event {
            self.apply(event);
        }
        true
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let (filter, bulk, table) = self.layout(area);
        self.filter_bar().render(buf, filter, theme);

        if !self.state.selected.is_empty() {
            let line = Content::from(
                Span::new(format!("{} selected", self.state.selected.len())).bold(),
            )
            .then(Span::new("(Esc to clear)").tone(Tone::Muted));
            draw::content(buf, bulk, &line, TextAlign::Left, Style::new(), theme);
        }

        self.view().render(buf, table, theme);
    }
}
