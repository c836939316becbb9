//! Stat cards: a headline number with an optional trend.

use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};

use crate::content::{Content, Span, Tone};
use crate::draw;
use crate::theme::Theme;

/// Accent of the card's icon slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatVariant {
    #[default]
    Default,
    Accent,
    Success,
    Warning,
    Destructive,
}

impl StatVariant {
    pub fn tone(self) -> Tone {
        match self {
            StatVariant::Default => Tone::Primary,
            StatVariant::Accent => Tone::Accent,
            StatVariant::Success => Tone::Success,
            StatVariant::Warning => Tone::Warning,
            StatVariant::Destructive => Tone::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Percentage change.
    pub change: Option<f64>,
    pub change_label: Option<String>,
    /// Single-glyph icon.
    pub icon: &'static str,
    pub variant: StatVariant,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: None,
            change_label: None,
            icon: "■",
            variant: StatVariant::Default,
        }
    }

    pub fn change(mut self, change: f64, label: impl Into<String>) -> Self {
        self.change = Some(change);
        self.change_label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn variant(mut self, variant: StatVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn trend(&self) -> Option<Trend> {
        self.change.map(|c| {
            if c > 0.0 {
                Trend::Up
            } else if c < 0.0 {
                Trend::Down
            } else {
                Trend::Flat
            }
        })
    }

    /// `+12%`, `-3%`, `0%`. Whole numbers print without decimals.
    pub fn change_text(&self) -> Option<String> {
        let change = self.change?;
        let number = if change.fract() == 0.0 {
            format!("{}", change as i64)
        } else {
            format!("{:.1}", change)
        };
        let sign = if change > 0.0 { "+" } else { "" };
        Some(format!("{}{}%", sign, number))
    }

    /// The trend line: arrow, signed change and label.
    pub fn trend_content(&self) -> Option<Content> {
        let trend = self.trend()?;
        let text = self.change_text()?;
        let (arrow, tone) = match trend {
            Trend::Up => ("▲ ", Tone::Success),
            Trend::Down => ("▼ ", Tone::Destructive),
            Trend::Flat => ("", Tone::Default),
        };
        let mut content = Content::new().span(Span::new(format!("{}{}", arrow, text)).tone(tone).bold());
        if let Some(label) = &self.change_label {
            content = content.then(Span::new(label.clone()).muted());
        }
        Some(content)
    }

    /// Height the card needs when rendered.
    pub fn height(&self) -> u16 {
        if self.change.is_some() { 5 } else { 4 }
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        let border = Style::new().foreground(theme.color("border"));
        let inner = draw::border(buf, area, None, border);
        if inner.is_empty() {
            return;
        }
        let (title_row, rest) = inner.split_top(1);
        let title = Content::from(Span::new(self.title.clone()).muted());
        draw::content(buf, title_row, &title, TextAlign::Left, Style::new(), theme);
        let icon = Content::from(Span::new(self.icon).tone(self.variant.tone()));
        draw::content(buf, title_row, &icon, TextAlign::Right, Style::new(), theme);

        let (value_row, rest) = rest.split_top(1);
        let value = Content::from(Span::new(self.value.clone()).bold());
        draw::content(buf, value_row, &value, TextAlign::Left, Style::new(), theme);

        if let Some(trend) = self.trend_content() {
            let (trend_row, _) = rest.split_top(1);
            draw::content(buf, trend_row, &trend, TextAlign::Left, Style::new(), theme);
        }
    }
}
