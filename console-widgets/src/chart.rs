//! Vertical bar chart for small series.

use console_term::text::{display_width, truncate_to_width, TextAlign};
use console_term::{Buffer, Rect, Style};

use crate::content::Tone;
use crate::draw;
use crate::theme::Theme;

const EIGHTHS: [&str; 8] = ["▁", "▂", "▃", "▄", "▅", "▆", "▇", "█"];

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<(String, f64)>,
    pub tone: Tone,
}

impl BarChart {
    pub fn new(title: impl Into<String>, bars: Vec<(String, f64)>) -> Self {
        Self {
            title: title.into(),
            bars,
            tone: Tone::Primary,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn max(&self) -> f64 {
        self.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max)
    }

    /// Bar height in eighths of a row for a chart `rows` tall.
    pub fn scaled(&self, value: f64, rows: u16) -> u32 {
        let max = self.max();
        if max <= 0.0 || value <= 0.0 {
            return 0;
        }
        let eighths = (value / max * f64::from(rows) * 8.0).round() as u32;
        eighths.clamp(1, u32::from(rows) * 8)
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let border = Style::new().foreground(theme.color("border"));
        let inner = draw::border(buf, area, Some(self.title.as_str()), border);
        if inner.height < 2 || self.bars.is_empty() {
            return;
        }
        let (plot, labels) = inner.split_bottom(1);
        let slots = plot.columns(self.bars.len() as u16, 1);
        let bar_style = theme.tone_style(self.tone);
        let label_style = theme.tone_style(Tone::Muted);

        for ((label, value), slot) in self.bars.iter().zip(slots) {
            if slot.is_empty() {
                continue;
            }
            let mut eighths = self.scaled(*value, plot.height);
            let mut y = plot.bottom();
            while eighths > 0 && y > plot.y {
                y -= 1;
                let glyph = EIGHTHS[(eighths.min(8) - 1) as usize];
                for x in slot.left()..slot.right() {
                    buf.put_str(x, y, glyph, &bar_style, 1);
                }
                eighths = eighths.saturating_sub(8);
            }

            let label_area = Rect::new(slot.x, labels.y, slot.width, 1);
            let label = if display_width(label) > slot.width as usize {
                truncate_to_width(label, slot.width as usize)
            } else {
                label.clone()
            };
            draw::text(buf, label_area, &label, TextAlign::Center, label_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_is_relative_to_max() {
        let chart = BarChart::new(
            "Revenue",
            vec![("Jan".into(), 50.0), ("Feb".into(), 100.0), ("Mar".into(), 0.0)],
        );
        assert_eq!(chart.scaled(100.0, 4), 32);
        assert_eq!(chart.scaled(50.0, 4), 16);
        assert_eq!(chart.scaled(0.0, 4), 0);
        assert_eq!(chart.scaled(0.1, 4), 1);
    }
}
