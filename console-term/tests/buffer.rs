use console_term::{Buffer, Color, Rect, Rgb, Style};

#[test]
fn test_put_str_writes_and_reports_width() {
    let mut buf = Buffer::new(10, 1);
    let written = buf.put_str(1, 0, "abc", &Style::new(), 10);
    assert_eq!(written, 3);
    assert_eq!(buf.row_text(0), " abc      ");
}

#[test]
fn test_put_str_clips_to_max_width() {
    let mut buf = Buffer::new(10, 1);
    let written = buf.put_str(0, 0, "abcdef", &Style::new(), 4);
    assert_eq!(written, 4);
    assert_eq!(buf.row_text(0).trim_end(), "abcd");
}

#[test]
fn test_put_str_clips_to_buffer_edge() {
    let mut buf = Buffer::new(5, 1);
    let written = buf.put_str(3, 0, "abcdef", &Style::new(), 20);
    assert_eq!(written, 2);
    assert_eq!(buf.row_text(0), "   ab");
}

#[test]
fn test_put_str_wide_char_marks_continuation() {
    let mut buf = Buffer::new(4, 1);
    buf.put_str(0, 0, "日x", &Style::new(), 4);
    assert_eq!(buf.get(0, 0).map(|c| c.char), Some('日'));
    assert!(buf.get(1, 0).is_some_and(|c| c.wide_continuation));
    assert_eq!(buf.get(2, 0).map(|c| c.char), Some('x'));
}

#[test]
fn test_put_str_drops_wide_char_at_limit() {
    let mut buf = Buffer::new(4, 1);
    let written = buf.put_str(0, 0, "a日", &Style::new(), 2);
    assert_eq!(written, 1);
}

#[test]
fn test_put_str_applies_colors() {
    let mut buf = Buffer::new(3, 1);
    let style = Style::new()
        .foreground(Color::rgb(10, 20, 30))
        .background(Color::hex(0x405060))
        .bold();
    buf.put_str(0, 0, "x", &style, 3);
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(10, 20, 30));
    assert_eq!(cell.bg, Rgb::new(0x40, 0x50, 0x60));
    assert!(cell.style.bold);
}

#[test]
fn test_fill_is_clipped_to_buffer() {
    let mut buf = Buffer::new(3, 3);
    buf.put_str(0, 0, "abc", &Style::new(), 3);
    buf.fill(
        Rect::new(1, 0, 10, 10),
        &Style::new().background(Color::rgb(1, 2, 3)),
    );
    assert_eq!(buf.row_text(0), "a  ");
    assert_eq!(buf.get(2, 2).unwrap().bg, Rgb::new(1, 2, 3));
    assert_eq!(buf.get(0, 2).unwrap().bg, Rgb::BLACK);
}

#[test]
fn test_diff_reports_changed_cells_only() {
    let a = Buffer::new(3, 2);
    let mut b = Buffer::new(3, 2);
    b.put_str(2, 1, "z", &Style::new(), 1);
    let changed: Vec<_> = b.diff(&a).map(|(x, y, c)| (x, y, c.char)).collect();
    assert_eq!(changed, vec![(2, 1, 'z')]);
}

#[test]
fn test_rect_columns_split_with_gap() {
    let cols = Rect::new(0, 0, 20, 3).columns(3, 1);
    assert_eq!(cols.len(), 3);
    assert_eq!(cols[0], Rect::new(0, 0, 6, 3));
    assert_eq!(cols[1], Rect::new(7, 0, 6, 3));
    assert_eq!(cols[2], Rect::new(14, 0, 6, 3));
}

#[test]
fn test_rect_splits() {
    let area = Rect::new(2, 2, 10, 10);
    let (top, rest) = area.split_top(3);
    assert_eq!(top, Rect::new(2, 2, 10, 3));
    assert_eq!(rest, Rect::new(2, 5, 10, 7));
    let (rest, bottom) = rest.split_bottom(2);
    assert_eq!(bottom, Rect::new(2, 10, 10, 2));
    assert_eq!(rest.height, 5);
    let (left, right) = area.split_left(4);
    assert_eq!(left.width, 4);
    assert_eq!(right, Rect::new(6, 2, 6, 10));
    assert_eq!(area.inner(), Rect::new(3, 3, 8, 8));
}

#[test]
fn test_rect_intersect_disjoint_is_empty() {
    let a = Rect::new(0, 0, 2, 2);
    let b = Rect::new(5, 5, 2, 2);
    assert!(a.intersect(b).is_empty());
}
