use crate::types::{Rgb, Style, TextStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub char: char,
    pub fg: Rgb,
    pub bg: Rgb,
    pub style: TextStyle,
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            char: ' ',
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            style: TextStyle::new(),
            wide_continuation: false,
        }
    }
}

impl Cell {
    /// Apply a style on top of this cell. Unset colors keep the cell's current value.
    pub fn apply(&mut self, style: &Style) {
        if let Some(fg) = &style.foreground {
            self.fg = fg.to_rgb();
        }
        if let Some(bg) = &style.background {
            self.bg = bg.to_rgb();
        }
        self.style = self.style.merge(style.text_style);
    }
}
