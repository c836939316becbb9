use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let target_width = max_width.saturating_sub(1);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Offset of a `content_width` string inside `available` columns.
pub fn align_offset(content_width: usize, available: usize, align: TextAlign) -> usize {
    if content_width >= available {
        return 0;
    }
    match align {
        TextAlign::Left => 0,
        TextAlign::Center => (available - content_width) / 2,
        TextAlign::Right => available - content_width,
    }
}

/// Truncate then pad `s` to exactly `width` columns.
pub fn pad_to_width(s: &str, width: usize, align: TextAlign) -> String {
    let text = truncate_to_width(s, width);
    let used = display_width(&text);
    let left = align_offset(used, width, align);
    let right = width.saturating_sub(used + left);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
