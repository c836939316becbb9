//! Drawing and hit testing for the paged list view.

use console_term::text::{TextAlign, display_width};
use console_term::{Buffer, Rect, Style};

use crate::content::{Content, Span, Tone};
use crate::draw;
use crate::theme::Theme;

use super::column::{ColumnWidth, resolve_widths};
use super::pagination::PageNav;
use super::view::{ListEvent, PagedListView, RenderState};

/// Width of the checkbox column, including its trailing gap.
const CHECKBOX_WIDTH: u16 = 4;
/// Gap between data columns.
const COLUMN_GAP: u16 = 1;
/// Header row plus the rule under it.
const HEADER_HEIGHT: u16 = 2;
/// Rule above the footer plus the footer line.
const FOOTER_HEIGHT: u16 = 2;

/// Screen regions of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    /// Select-all checkbox, when selectable.
    pub checkbox: Option<Rect>,
    /// One rect per column on the header row.
    pub columns: Vec<Rect>,
    /// Footer navigation controls.
    pub nav: Vec<(PageNav, Rect)>,
}

/// What a point on the list corresponds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListHit {
    Header(String),
    SelectAll,
    /// Index into the page rows.
    Row(usize),
    Nav(PageNav),
}

impl<T> PagedListView<'_, T> {
    /// Compute the regions this view occupies inside `area`.
    pub fn layout(&self, area: Rect) -> ListLayout {
        let (top, rest) = area.split_top(HEADER_HEIGHT);
        let (body, bottom) = rest.split_bottom(FOOTER_HEIGHT);
        let header = Rect::new(top.x, top.y, top.width, top.height.min(1));
        let footer = Rect::new(
            bottom.x,
            bottom.bottom().saturating_sub(1),
            bottom.width,
            bottom.height.min(1),
        );

        let (checkbox, data) = if self.is_selectable() {
            let (cb, data) = header.split_left(CHECKBOX_WIDTH);
            (Some(Rect::new(cb.x, cb.y, 3.min(cb.width), cb.height)), data)
        } else {
            (None, header)
        };

        let specs: Vec<ColumnWidth> = self.columns().iter().map(|c| c.width).collect();
        let widths = resolve_widths(&specs, data.width, COLUMN_GAP);
        let mut x = data.x;
        let columns = widths
            .iter()
            .map(|w| {
                let rect = Rect::new(x, data.y, *w, data.height);
                x = x.saturating_add(w + COLUMN_GAP);
                rect
            })
            .collect();

        ListLayout {
            header,
            body,
            footer,
            checkbox,
            columns,
            nav: self.nav_layout(footer),
        }
    }

    /// Footer controls, right-aligned: `« ‹ Page 1 of 3 › »`.
    fn nav_layout(&self, footer: Rect) -> Vec<(PageNav, Rect)> {
        let label_width = display_width(&self.pagination().page_label()) as u16;
        // Four glyphs, each followed by a space, with the label after the second.
        let total = 4 * 2 + label_width;
        if footer.width < total || footer.height == 0 {
            return Vec::new();
        }
        let mut x = footer.right() - total;
        let mut out = Vec::with_capacity(4);
        for nav in PageNav::ALL {
            out.push((nav, Rect::new(x, footer.y, 1, 1)));
            x += 2;
            if nav == PageNav::Prev {
                x += label_width + 1;
            }
        }
        out
    }

    /// Map a screen point to the list element under it.
    pub fn hit(&self, area: Rect, x: u16, y: u16) -> Option<ListHit> {
        let layout = self.layout(area);
        if let Some(cb) = layout.checkbox
            && cb.contains(x, y)
        {
            return Some(ListHit::SelectAll);
        }
        if layout.header.contains(x, y) {
            return layout
                .columns
                .iter()
                .position(|rect| rect.contains(x, y))
                .and_then(|i| self.columns().get(i))
                .map(|c| ListHit::Header(c.key.clone()));
        }
        if layout.body.contains(x, y) {
            if self.render_state() != RenderState::Populated {
                return None;
            }
            let index = (y - layout.body.y) as usize;
            return (index < self.rows().len()).then_some(ListHit::Row(index));
        }
        layout
            .nav
            .iter()
            .find(|(_, rect)| rect.contains(x, y))
            .map(|(nav, _)| ListHit::Nav(*nav))
    }

    /// Handle a click at a screen point.
    ///
    /// Clicking a row's checkbox toggles it; clicking elsewhere on a row is
    /// left to the caller (it usually moves the cursor).
    pub fn click(&self, area: Rect, x: u16, y: u16) -> Option<ListEvent> {
        match self.hit(area, x, y)? {
            ListHit::Header(key) => self.activate_header(&key),
            ListHit::SelectAll => self.toggle_all(),
            ListHit::Nav(nav) => self.navigate(nav),
            ListHit::Row(index) if self.is_selectable() && x < area.x + CHECKBOX_WIDTH => {
                self.toggle_row(index)
            }
            ListHit::Row(_) => None,
        }
    }

    /// Draw the view into `area`.
    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        if area.is_empty() {
            return;
        }
        let layout = self.layout(area);
        let text = Style::new().foreground(theme.color("text"));
        let muted = Style::new().foreground(theme.color("muted"));
        let border = Style::new().foreground(theme.color("border"));

        // Header
        buf.fill(layout.header, &Style::new().background(theme.color("surface")));
        if let Some(cb) = layout.checkbox {
            draw::text(buf, cb, self.selection_status().checkbox(), TextAlign::Left, text);
        }
        for (column, rect) in self.columns().iter().zip(&layout.columns) {
            let mut content = Content::from(Span::new(column.header.clone()).bold());
            if let Some(indicator) = self.sort_indicator(column) {
                let active = self.current_sort().is_some_and(|s| s.key == column.key);
                let tone = if active { Tone::Primary } else { Tone::Muted };
                content = content.then(Span::new(indicator).tone(tone));
            }
            draw::content(buf, *rect, &content, column.align.into(), Style::new(), theme);
        }
        if area.height > 1 {
            draw::rule(buf, Rect::new(area.x, area.y + 1, area.width, 1), border);
        }

        // Body
        self.render_body(buf, &layout, theme);

        // Footer
        if layout.footer.y > area.y + HEADER_HEIGHT {
            draw::rule(buf, Rect::new(area.x, layout.footer.y - 1, area.width, 1), border);
        }
        self.render_footer(buf, &layout, text, muted);
    }

    fn render_body(&self, buf: &mut Buffer, layout: &ListLayout, theme: &dyn Theme) {
        let body = layout.body;
        if body.is_empty() {
            return;
        }
        let muted = Style::new().foreground(theme.color("muted"));
        match self.render_state() {
            RenderState::Loading => {
                let row = Rect::new(body.x, body.y + body.height / 2, body.width, 1);
                draw::text(buf, row, "◌ Loading...", TextAlign::Center, muted);
            }
            RenderState::Empty => {
                let row = Rect::new(body.x, body.y + body.height / 2, body.width, 1);
                draw::text(buf, row, self.empty_text(), TextAlign::Center, muted);
            }
            RenderState::Populated => {
                let cursor = self.cursor_index();
                for (i, row) in self.rows().iter().enumerate().take(body.height as usize) {
                    let y = body.y + i as u16;
                    let line = Rect::new(body.x, y, body.width, 1);
                    let selected = self.is_selected(row);

                    let mut base = Style::new();
                    if cursor == Some(i) {
                        base = base.background(theme.color("cursor"));
                    } else if selected {
                        base = base.background(theme.color("selection"));
                    }
                    buf.fill(line, &base);

                    if self.is_selectable() {
                        let mark = if selected { "[x]" } else { "[ ]" };
                        let cb = Rect::new(body.x, y, 3.min(body.width), 1);
                        let style = base.foreground(theme.color("text"));
                        draw::text(buf, cb, mark, TextAlign::Left, style);
                    }
                    for (column, rect) in self.columns().iter().zip(&layout.columns) {
                        let cell = Rect::new(rect.x, y, rect.width, 1);
                        let content = column.cell(row);
                        draw::content(buf, cell, &content, column.align.into(), base, theme);
                    }
                }
            }
        }
    }

    fn render_footer(&self, buf: &mut Buffer, layout: &ListLayout, text: Style, muted: Style) {
        let footer = layout.footer;
        if footer.is_empty() {
            return;
        }
        let pagination = self.pagination();
        draw::text(buf, footer, &pagination.summary(), TextAlign::Left, muted);

        for (nav, rect) in &layout.nav {
            let style = if pagination.is_enabled(*nav) {
                text.bold()
            } else {
                muted.dim()
            };
            buf.put_str(rect.x, rect.y, nav.glyph(), &style, 1);
        }
        if let Some((_, prev)) = layout.nav.iter().find(|(nav, _)| *nav == PageNav::Prev) {
            let label = pagination.page_label();
            let width = display_width(&label) as u16;
            buf.put_str(prev.x + 2, prev.y, &label, &text, width);
        }
    }
}
