//! Column descriptors.

use std::fmt;

use console_term::text::TextAlign;

use crate::content::Content;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl From<Alignment> for TextAlign {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Left => TextAlign::Left,
            Alignment::Center => TextAlign::Center,
            Alignment::Right => TextAlign::Right,
        }
    }
}

/// Column width specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Fixed width in terminal columns.
    Fixed(u16),
    /// Share of the width left over after fixed columns.
    Flex(u16),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex(1)
    }
}

type CellFn<T> = Box<dyn Fn(&T) -> Content + Send + Sync>;

/// A table column: key, header label, cell function and layout hints.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::text("invoice_number", "Invoice #", |i: &Invoice| i.invoice_number.clone()),
///     Column::new("status", "Status", |i: &Invoice| StatusBadge::new(i.status.as_str()).content())
///         .sortable()
///         .fixed(12),
/// ];
/// ```
pub struct Column<T> {
    /// Identifier reported in sort events.
    pub key: String,
    /// Header label.
    pub header: String,
    /// Whether activating the header requests a sort.
    pub sortable: bool,
    pub width: ColumnWidth,
    pub align: Alignment,
    cell: CellFn<T>,
}

impl<T> Column<T> {
    pub fn new<F>(key: impl Into<String>, header: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> Content + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            width: ColumnWidth::default(),
            align: Alignment::Left,
            cell: Box::new(cell),
        }
    }

    /// Column whose cell is a single unstyled string.
    pub fn text<F>(key: impl Into<String>, header: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self::new(key, header, move |row| Content::text(cell(row)))
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn fixed(mut self, width: u16) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex(mut self, weight: u16) -> Self {
        self.width = ColumnWidth::Flex(weight);
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Render this column's cell for `row`.
    pub fn cell(&self, row: &T) -> Content {
        (self.cell)(row)
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

/// Resolve column widths for `available` terminal columns.
///
/// Columns are separated by `gap`. Fixed columns get their width (shrunk if
/// the total does not fit); flex columns split what remains by weight, with
/// rounding leftovers given to the last flex column.
pub(super) fn resolve_widths(widths: &[ColumnWidth], available: u16, gap: u16) -> Vec<u16> {
    if widths.is_empty() {
        return Vec::new();
    }
    let gaps = gap.saturating_mul(widths.len() as u16 - 1);
    let usable = available.saturating_sub(gaps);

    let fixed_total: u32 = widths
        .iter()
        .map(|w| match w {
            ColumnWidth::Fixed(n) => *n as u32,
            ColumnWidth::Flex(_) => 0,
        })
        .sum();
    let flex_total: u32 = widths
        .iter()
        .map(|w| match w {
            ColumnWidth::Fixed(_) => 0,
            ColumnWidth::Flex(weight) => (*weight).max(1) as u32,
        })
        .sum();

    let mut out: Vec<u16> = widths
        .iter()
        .map(|w| match w {
            ColumnWidth::Fixed(n) if fixed_total > usable as u32 => {
                (*n as u32 * usable as u32 / fixed_total.max(1)) as u16
            }
            ColumnWidth::Fixed(n) => *n,
            ColumnWidth::Flex(_) => 0,
        })
        .collect();

    let remaining = (usable as u32).saturating_sub(out.iter().map(|w| *w as u32).sum::<u32>());
    if flex_total > 0 {
        let mut given = 0u32;
        let mut last_flex = None;
        for (i, w) in widths.iter().enumerate() {
            if let ColumnWidth::Flex(weight) = w {
                let share = remaining * (*weight).max(1) as u32 / flex_total;
                out[i] = share as u16;
                given += share;
                last_flex = Some(i);
            }
        }
        if let Some(i) = last_flex {
            out[i] += (remaining - given) as u16;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_columns_share_space() {
        let widths = resolve_widths(&[ColumnWidth::Flex(1), ColumnWidth::Flex(1)], 21, 1);
        assert_eq!(widths, vec![10, 10]);
    }

    #[test]
    fn test_fixed_and_flex() {
        let widths = resolve_widths(&[ColumnWidth::Fixed(4), ColumnWidth::Flex(1)], 20, 1);
        assert_eq!(widths, vec![4, 15]);
    }

    #[test]
    fn test_flex_weights_and_leftover() {
        let widths = resolve_widths(&[ColumnWidth::Flex(2), ColumnWidth::Flex(1)], 10, 0);
        assert_eq!(widths, vec![6, 4]);
    }

    #[test]
    fn test_fixed_overflow_is_scaled_down() {
        let widths = resolve_widths(&[ColumnWidth::Fixed(10), ColumnWidth::Fixed(10)], 10, 0);
        assert_eq!(widths, vec![5, 5]);
    }

    #[test]
    fn test_no_columns() {
        assert!(resolve_widths(&[], 10, 1).is_empty());
    }
}
