//! Single-line text fields for the login and support forms.

use console_term::text::{TextAlign, display_width};
use console_term::{Buffer, Rect, Style};
use console_widgets::draw;
use console_widgets::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    /// Draw bullets instead of the value.
    pub masked: bool,
    /// Maximum length in characters.
    pub max_len: Option<usize>,
}

impl TextField {
    /// Label row plus input row.
    pub const HEIGHT: u16 = 2;

    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            masked: false,
            max_len: None,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Apply an editing key. Returns false for keys a field does not use.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self
                    .max_len
                    .is_none_or(|max| self.value.chars().count() < max)
                {
                    self.value.push(c);
                }
                true
            }
            _ => false,
        }
    }

    fn shown(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, focused: bool, theme: &dyn Theme) {
        let (label_row, rest) = area.split_top(1);
        let (input_row, _) = rest.split_top(1);
        let label_style = if focused {
            Style::new().foreground(theme.color("primary")).bold()
        } else {
            Style::new().foreground(theme.color("muted"))
        };
        draw::text(buf, label_row, self.label, TextAlign::Left, label_style);

        buf.fill(input_row, &Style::new().background(theme.color("surface")));
        let (text, style) = if self.value.is_empty() {
            (
                self.placeholder.to_string(),
                Style::new().foreground(theme.color("muted")),
            )
        } else {
            (self.shown(), Style::new().foreground(theme.color("text")))
        };
        let inner = input_row.shrink(0, 1, 0, 1);
        draw::text(buf, inner, &text, TextAlign::Left, style);
        if focused && !self.value.is_empty() {
            let x = inner.x + display_width(&text).min(inner.width as usize) as u16;
            if x < inner.right() {
                buf.put_str(
                    x,
                    inner.y,
                    "▏",
                    &Style::new().foreground(theme.color("primary")),
                    1,
                );
            }
        }
    }
}
