use crate::rect::Rect;
use crate::text::char_width;
use crate::types::Style;

use super::Cell;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write `text` starting at (x, y), never past `max_width` columns.
    ///
    /// Returns the number of columns written. Wide characters that would
    /// straddle the limit are dropped rather than split.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: &Style, max_width: u16) -> u16 {
        let mut col = 0u16;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col + w > max_width || x + col >= self.width {
                break;
            }
            if let Some(cell) = self.get_mut(x + col, y) {
                cell.char = ch;
                cell.wide_continuation = false;
                cell.apply(style);
            }
            if w == 2 {
                if let Some(cell) = self.get_mut(x + col + 1, y) {
                    cell.char = ' ';
                    cell.wide_continuation = true;
                    cell.apply(style);
                }
            }
            col += w;
        }
        col
    }

    /// Paint every cell in `rect` with `style`, blanking its content.
    pub fn fill(&mut self, rect: Rect, style: &Style) {
        let rect = rect.intersect(self.area());
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.char = ' ';
                    cell.wide_continuation = false;
                    cell.apply(style);
                }
            }
        }
    }

    /// Read back one row as a string (wide continuation cells skipped).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
