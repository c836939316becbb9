use console_term::{Buffer, Rect};
use console_widgets::table::{
    Column, ListEvent, ListHit, ListViewHandler, PageNav, PagedListView, Pagination,
    RenderState, RowId, SelectionStatus, SortDirection, SortState, selection_status, toggle_all,
};
use console_widgets::theme::DefaultTheme;

#[derive(Debug, Clone)]
struct Row {
    id: String,
    name: String,
}

impl RowId for Row {
    fn row_id(&self) -> String {
        self.id.clone()
    }
}

fn rows(ids: &[&str]) -> Vec<Row> {
    ids.iter()
        .map(|id| Row {
            id: id.to_string(),
            name: format!("Name {}", id),
        })
        .collect()
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::text("name", "Name", |r: &Row| r.name.clone()).sortable(),
        Column::text("id", "Id", |r: &Row| r.id.clone()).fixed(6),
    ]
}

fn ids(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[derive(Default)]
struct Recorder {
    pages: Vec<usize>,
    sorts: Vec<(String, SortDirection)>,
    selections: Vec<Vec<String>>,
}

impl ListViewHandler for Recorder {
    fn on_page_change(&mut self, page: usize) {
        self.pages.push(page);
    }

    fn on_sort(&mut self, key: &str, direction: SortDirection) {
        self.sorts.push((key.to_string(), direction));
    }

    fn on_selection_change(&mut self, ids: Vec<String>) {
        self.selections.push(ids);
    }
}

/// Only handles pages; sort and selection hooks fall back to no-ops.
struct PagesOnly(Vec<usize>);

impl ListViewHandler for PagesOnly {
    fn on_page_change(&mut self, page: usize) {
        self.0.push(page);
    }
}

// -----------------------------------------------------------------------------
// Pagination
// -----------------------------------------------------------------------------

#[test]
fn test_total_pages_is_ceiling() {
    for total in 0usize..60 {
        for size in 1..12 {
            let p = Pagination::new(1, size, total);
            assert_eq!(p.total_pages(), total.div_ceil(size), "total={total} size={size}");
        }
    }
}

#[test]
fn test_first_and_last_always_reachable_when_not_there() {
    for total in 1usize..40 {
        for size in 1..8 {
            let pages = total.div_ceil(size);
            for page in 1..=pages {
                let p = Pagination::new(page, size, total);
                if page != 1 {
                    assert_eq!(p.target(PageNav::First), Some(1));
                }
                if page != pages {
                    assert_eq!(p.target(PageNav::Last), Some(pages));
                }
            }
        }
    }
}

#[test]
fn test_last_page_example() {
    let p = Pagination::new(3, 10, 23);
    assert_eq!(p.summary(), "Showing 21 to 23 of 23 results");
    assert_eq!(p.page_label(), "Page 3 of 3");
    assert!(!p.is_enabled(PageNav::Next));
    assert!(!p.is_enabled(PageNav::Last));
    assert!(p.is_enabled(PageNav::Prev));
    assert!(p.is_enabled(PageNav::First));
    assert_eq!(p.target(PageNav::Prev), Some(2));
}

#[test]
fn test_first_page_disables_back_controls() {
    let p = Pagination::new(1, 10, 23);
    assert_eq!(p.summary(), "Showing 1 to 10 of 23 results");
    assert_eq!(p.target(PageNav::First), None);
    assert_eq!(p.target(PageNav::Prev), None);
    assert_eq!(p.target(PageNav::Next), Some(2));
}

#[test]
fn test_malformed_inputs_are_clamped() {
    let p = Pagination::new(0, 0, 5);
    assert_eq!(p.page(), 1);
    assert_eq!(p.page_size(), 1);
    assert_eq!(p.total_pages(), 5);

    let p = Pagination::new(99, 10, 23);
    assert_eq!(p.page(), 3);
}

#[test]
fn test_empty_dataset_footer() {
    let p = Pagination::new(1, 10, 0);
    assert_eq!(p.summary(), "Showing 0 to 0 of 0 results");
    assert_eq!(p.page_label(), "Page 1 of 0");
    for nav in PageNav::ALL {
        assert!(!p.is_enabled(nav));
    }
}

#[test]
fn test_loading_disables_navigation() {
    let p = Pagination::new(2, 10, 50).loading(true);
    for nav in PageNav::ALL {
        assert_eq!(p.target(nav), None);
    }
}

#[test]
fn test_navigate_dispatches_page_change() {
    let cols = columns();
    let data = rows(&["a", "b"]);
    let view = PagedListView::new(&cols, &data).total_count(23).page(2, 10);

    let mut recorder = Recorder::default();
    for nav in PageNav::ALL {
        if let Some(event) = view.navigate(nav) {
            event.dispatch(&mut recorder);
        }
    }
    assert_eq!(recorder.pages, vec![1, 1, 3, 3]);
}

// -----------------------------------------------------------------------------
// Sorting
// -----------------------------------------------------------------------------

#[test]
fn test_header_click_cycles_asc_then_desc() {
    let cols = columns();
    let data = rows(&["a"]);

    let first = PagedListView::new(&cols, &data).activate_header("name");
    assert_eq!(first, Some(ListEvent::Sort(SortState::asc("name"))));

    let current = SortState::asc("name");
    let second = PagedListView::new(&cols, &data)
        .sort(Some(&current))
        .activate_header("name");
    assert_eq!(second, Some(ListEvent::Sort(SortState::desc("name"))));

    let current = SortState::desc("name");
    let third = PagedListView::new(&cols, &data)
        .sort(Some(&current))
        .activate_header("name");
    assert_eq!(third, Some(ListEvent::Sort(SortState::asc("name"))));
}

#[test]
fn test_different_header_resets_to_asc() {
    let cols = vec![
        Column::text("name", "Name", |r: &Row| r.name.clone()).sortable(),
        Column::text("id", "Id", |r: &Row| r.id.clone()).sortable(),
    ];
    let data = rows(&["a"]);
    let current = SortState::asc("name");
    let event = PagedListView::new(&cols, &data)
        .sort(Some(&current))
        .activate_header("id");
    assert_eq!(event, Some(ListEvent::Sort(SortState::asc("id"))));
}

#[test]
fn test_unsortable_header_emits_nothing() {
    let cols = columns();
    let data = rows(&["a"]);
    let view = PagedListView::new(&cols, &data);
    assert_eq!(view.activate_header("id"), None);
    assert_eq!(view.activate_header("missing"), None);
    assert_eq!(view.sort_indicator(&cols[1]), None);
    assert_eq!(view.sort_indicator(&cols[0]), Some("↕"));
}

#[test]
fn test_sort_indicator_follows_direction() {
    let cols = columns();
    let data = rows(&["a"]);
    let current = SortState::desc("name");
    let view = PagedListView::new(&cols, &data).sort(Some(&current));
    assert_eq!(view.sort_indicator(&cols[0]), Some("↓"));
}

#[test]
fn test_absent_sort_hook_is_noop() {
    let cols = columns();
    let data = rows(&["a"]);
    let view = PagedListView::new(&cols, &data).selectable(&[]);
    let mut handler = PagesOnly(Vec::new());

    if let Some(event) = view.activate_header("name") {
        event.dispatch(&mut handler);
    }
    if let Some(event) = view.toggle_all() {
        event.dispatch(&mut handler);
    }
    assert!(handler.0.is_empty());
}

// -----------------------------------------------------------------------------
// Selection
// -----------------------------------------------------------------------------

#[test]
fn test_select_all_with_partial_selection_adds_whole_page() {
    let cols = columns();
    let data = rows(&["a", "b", "c"]);
    let selected = ids(&["x", "b"]);
    let view = PagedListView::new(&cols, &data).selectable(&selected);

    assert_eq!(view.selection_status(), SelectionStatus::Some);
    let Some(ListEvent::SelectionChange(next)) = view.toggle_all() else {
        panic!("expected a selection change");
    };
    for id in ["a", "b", "c", "x"] {
        assert!(next.contains(&id.to_string()), "missing {id}");
    }
    assert_eq!(next.len(), 4);
}

#[test]
fn test_deselect_all_keeps_other_pages() {
    let cols = columns();
    let data = rows(&["a", "b"]);
    let selected = ids(&["x", "a", "b", "y"]);
    let view = PagedListView::new(&cols, &data).selectable(&selected);

    assert_eq!(view.selection_status(), SelectionStatus::All);
    assert_eq!(
        view.toggle_all(),
        Some(ListEvent::SelectionChange(ids(&["x", "y"])))
    );
}

#[test]
fn test_row_toggle_folds_and_unfolds() {
    let cols = columns();
    let data = rows(&["a", "b"]);
    let selected = ids(&["b"]);
    let view = PagedListView::new(&cols, &data).selectable(&selected);

    assert_eq!(
        view.toggle_row(0),
        Some(ListEvent::SelectionChange(ids(&["b", "a"])))
    );
    assert_eq!(view.toggle_row(1), Some(ListEvent::SelectionChange(vec![])));
    assert_eq!(view.toggle_row(5), None);
}

#[test]
fn test_selection_status_is_three_valued() {
    let page = ids(&["a", "b"]);
    assert_eq!(selection_status(&page, &[]), SelectionStatus::None);
    assert_eq!(selection_status(&page, &ids(&["a"])), SelectionStatus::Some);
    assert_eq!(selection_status(&page, &ids(&["b", "a"])), SelectionStatus::All);
    assert_eq!(SelectionStatus::Some.checkbox(), "[-]");
}

#[test]
fn test_toggle_all_is_involutive_on_page_ids() {
    let page = ids(&["a", "b"]);
    let selected = ids(&["z"]);
    let once = toggle_all(&page, &selected);
    let twice = toggle_all(&page, &once);
    assert_eq!(twice, selected);
}

#[test]
fn test_selection_disabled_when_not_selectable_or_loading() {
    let cols = columns();
    let data = rows(&["a"]);
    let view = PagedListView::new(&cols, &data);
    assert_eq!(view.toggle_all(), None);
    assert_eq!(view.toggle_row(0), None);

    let selected = Vec::new();
    let view = PagedListView::new(&cols, &data)
        .selectable(&selected)
        .loading(true);
    assert_eq!(view.toggle_all(), None);
    assert_eq!(view.toggle_row(0), None);
}

#[test]
fn test_select_all_on_empty_page_emits_nothing() {
    let cols = columns();
    let data: Vec<Row> = Vec::new();
    let selected = ids(&["x"]);
    let view = PagedListView::new(&cols, &data).selectable(&selected);
    assert_eq!(view.toggle_all(), None);
    assert_eq!(view.selection_status(), SelectionStatus::None);
}

#[test]
fn test_custom_row_id() {
    let cols = columns();
    let data = rows(&["a"]);
    let view =
        PagedListView::with_row_id(&cols, &data, |r: &Row| format!("row-{}", r.id)).selectable(&[]);
    assert_eq!(
        view.toggle_row(0),
        Some(ListEvent::SelectionChange(ids(&["row-a"])))
    );
}

// -----------------------------------------------------------------------------
// Render states
// -----------------------------------------------------------------------------

fn render(view: &PagedListView<'_, Row>, width: u16, height: u16) -> Vec<String> {
    let mut buf = Buffer::new(width, height);
    let area = buf.area();
    view.render(&mut buf, area, &DefaultTheme::dark());
    (0..height).map(|y| buf.row_text(y)).collect()
}

fn body_lines(lines: &[String]) -> Vec<&str> {
    // Header, rule, ..body.., rule, footer
    lines[2..lines.len() - 2]
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect()
}

#[test]
fn test_loading_hides_rows() {
    let cols = columns();
    let data = rows(&["a", "b", "c"]);
    let view = PagedListView::new(&cols, &data).loading(true);
    assert_eq!(view.render_state(), RenderState::Loading);

    let lines = render(&view, 50, 10);
    let body = body_lines(&lines);
    assert_eq!(body.len(), 1);
    assert!(body[0].contains("Loading"));
    assert!(!lines.iter().any(|l| l.contains("Name a")));
}

#[test]
fn test_empty_shows_single_message_row() {
    let cols = columns();
    let data: Vec<Row> = Vec::new();
    let view = PagedListView::new(&cols, &data).total_count(0);
    assert_eq!(view.render_state(), RenderState::Empty);

    let lines = render(&view, 50, 10);
    assert_eq!(body_lines(&lines), vec!["No data found."]);

    let view = PagedListView::new(&cols, &data).empty_message("No tenants match.");
    let lines = render(&view, 50, 10);
    assert_eq!(body_lines(&lines), vec!["No tenants match."]);
}

#[test]
fn test_populated_renders_rows_and_footer() {
    let cols = columns();
    let data = rows(&["a", "b", "c"]);
    let view = PagedListView::new(&cols, &data).total_count(23).page(3, 10);
    assert_eq!(view.render_state(), RenderState::Populated);

    let lines = render(&view, 60, 10);
    assert!(lines[0].contains("Name ↕"));
    assert_eq!(body_lines(&lines).len(), 3);
    assert!(lines[2].contains("Name a"));
    let footer = &lines[9];
    assert!(footer.contains("Showing 21 to 23 of 23 results"));
    assert!(footer.contains("Page 3 of 3"));
}

#[test]
fn test_selectable_header_shows_tristate_checkbox() {
    let cols = columns();
    let data = rows(&["a", "b"]);
    let selected = ids(&["a"]);
    let view = PagedListView::new(&cols, &data).selectable(&selected);
    let lines = render(&view, 60, 8);
    assert!(lines[0].starts_with("[-]"));
    assert!(lines[2].starts_with("[x]"));
    assert!(lines[3].starts_with("[ ]"));
}

// -----------------------------------------------------------------------------
// Hit testing
// -----------------------------------------------------------------------------

#[test]
fn test_click_maps_to_events() {
    let cols = columns();
    let data = rows(&["a", "b"]);
    let selected = Vec::new();
    let view = PagedListView::new(&cols, &data)
        .total_count(23)
        .page(1, 10)
        .selectable(&selected);
    let area = Rect::new(0, 0, 60, 10);
    let layout = view.layout(area);

    assert_eq!(view.hit(area, 0, 0), Some(ListHit::SelectAll));
    let name = layout.columns[0];
    assert_eq!(
        view.click(area, name.x, name.y),
        Some(ListEvent::Sort(SortState::asc("name")))
    );
    assert_eq!(view.hit(area, 10, 3), Some(ListHit::Row(1)));
    assert_eq!(
        view.click(area, 1, 3),
        Some(ListEvent::SelectionChange(ids(&["b"])))
    );
    assert_eq!(view.click(area, 10, 3), None);

    let (_, next) = layout
        .nav
        .iter()
        .find(|(nav, _)| *nav == PageNav::Next)
        .copied()
        .unwrap();
    assert_eq!(view.click(area, next.x, next.y), Some(ListEvent::PageChange(2)));
    let (_, prev) = layout.nav[1];
    assert_eq!(view.click(area, prev.x, prev.y), None);
}
