//! Small drawing helpers shared by the components.

use console_term::text::{align_offset, display_width, truncate_to_width, TextAlign};
use console_term::{Buffer, Rect, Style};

use crate::content::Content;
use crate::theme::Theme;

/// Draw `content` on one line inside `area`, aligned and clipped to its width.
///
/// Returns the number of columns written.
pub fn content(
    buf: &mut Buffer,
    area: Rect,
    content: &Content,
    align: TextAlign,
    base: Style,
    theme: &dyn Theme,
) -> u16 {
    if area.is_empty() {
        return 0;
    }
    let available = area.width as usize;
    let total = display_width(&content.plain());
    let mut x = area.x + align_offset(total.min(available), available, align) as u16;
    let end = area.right();
    let clipped = total > available;

    let mut written = 0u16;
    for span in &content.spans {
        if x >= end {
            break;
        }
        let mut style = base.patch(theme.tone_style(span.tone));
        if span.bold {
            style = style.bold();
        }
        let remaining = end - x;
        let text = if clipped && display_width(&span.text) >= remaining as usize {
            truncate_to_width(&span.text, remaining as usize)
        } else {
            span.text.clone()
        };
        let w = buf.put_str(x, area.y, &text, &style, remaining);
        x += w;
        written += w;
    }
    written
}

/// Draw a plain string on one line, aligned and clipped.
pub fn text(buf: &mut Buffer, area: Rect, text: &str, align: TextAlign, style: Style) -> u16 {
    if area.is_empty() {
        return 0;
    }
    let available = area.width as usize;
    let text = truncate_to_width(text, available);
    let offset = align_offset(display_width(&text), available, align) as u16;
    buf.put_str(area.x + offset, area.y, &text, &style, area.width - offset)
}

/// Draw a rounded border around `area` with an optional title in the top edge.
///
/// Returns the inner area.
pub fn border(buf: &mut Buffer, area: Rect, title: Option<&str>, style: Style) -> Rect {
    if area.width < 2 || area.height < 2 {
        return Rect::new(area.x, area.y, 0, 0);
    }
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    buf.put_str(area.x, area.y, "╭", &style, 1);
    buf.put_str(right, area.y, "╮", &style, 1);
    buf.put_str(area.x, bottom, "╰", &style, 1);
    buf.put_str(right, bottom, "╯", &style, 1);
    for x in (area.x + 1)..right {
        buf.put_str(x, area.y, "─", &style, 1);
        buf.put_str(x, bottom, "─", &style, 1);
    }
    for y in (area.y + 1)..bottom {
        buf.put_str(area.x, y, "│", &style, 1);
        buf.put_str(right, y, "│", &style, 1);
    }

    if let Some(title) = title
        && area.width > 4
    {
        let label = format!(" {} ", title);
        let label = truncate_to_width(&label, (area.width - 4) as usize);
        buf.put_str(area.x + 2, area.y, &label, &style.bold(), area.width - 4);
    }

    area.inner()
}

/// Horizontal rule across `area`'s first row.
pub fn rule(buf: &mut Buffer, area: Rect, style: Style) {
    for x in area.left()..area.right() {
        buf.put_str(x, area.y, "─", &style, 1);
    }
}
