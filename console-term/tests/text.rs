use console_term::text::{align_offset, display_width, pad_to_width, truncate_to_width, TextAlign};

#[test]
fn test_display_width_ascii_and_cjk() {
    assert_eq!(display_width("hello"), 5);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width("₹125,000"), 8);
}

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello", 5), "hello");
}

#[test]
fn test_truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_align_offset() {
    assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
    assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
    assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
    assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
}

#[test]
fn test_pad_to_width() {
    assert_eq!(pad_to_width("42", 5, TextAlign::Right), "   42");
    assert_eq!(pad_to_width("ab", 5, TextAlign::Left), "ab   ");
    assert_eq!(pad_to_width("abcdefg", 4, TextAlign::Left), "abc…");
}
