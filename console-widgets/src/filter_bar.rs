//! Search box, select filters and action labels shown above a list.

use console_term::text::TextAlign;
use console_term::{Buffer, Rect, Style};

use crate::content::{Content, Span, Tone};
use crate::draw;
use crate::theme::Theme;

/// Value of the implicit unfiltered option.
pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A select filter. `"all"` is always available and shown as `All {label}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectFilter {
    pub key: String,
    pub label: String,
    pub options: Vec<FilterOption>,
    pub value: String,
}

impl SelectFilter {
    pub fn new(key: impl Into<String>, label: impl Into<String>, options: Vec<FilterOption>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            options,
            value: ALL.to_string(),
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn is_active(&self) -> bool {
        self.value != ALL
    }

    /// The selected value, or `None` when unfiltered.
    pub fn selected(&self) -> Option<&str> {
        self.is_active().then_some(self.value.as_str())
    }

    pub fn current_label(&self) -> String {
        self.options
            .iter()
            .find(|o| o.value == self.value)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| format!("All {}", self.label))
    }

    /// Value after stepping through `All`, then each option, wrapping around.
    pub fn cycled(&self, forward: bool) -> String {
        let mut values = vec![ALL];
        values.extend(self.options.iter().map(|o| o.value.as_str()));
        let current = values.iter().position(|v| *v == self.value).unwrap_or(0);
        let len = values.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        values[next].to_string()
    }
}

/// Props for the filter row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterBar {
    pub search_placeholder: Option<String>,
    pub search_value: String,
    pub filters: Vec<SelectFilter>,
    /// Labels of buttons drawn on the right, with their hotkeys.
    pub actions: Vec<(String, String)>,
    pub search_focused: bool,
}

impl FilterBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.search_placeholder = Some(placeholder.into());
        self.search_value = value.into();
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.search_focused = focused;
        self
    }

    pub fn filter(mut self, filter: SelectFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn action(mut self, hotkey: impl Into<String>, label: impl Into<String>) -> Self {
        self.actions.push((hotkey.into(), label.into()));
        self
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_value.is_empty() || self.filters.iter().any(SelectFilter::is_active)
    }

    /// Reset search and every select filter to `all`.
    pub fn clear(&mut self) {
        self.search_value.clear();
        for filter in &mut self.filters {
            filter.value = ALL.to_string();
        }
    }

    pub fn render(&self, buf: &mut Buffer, area: Rect, theme: &dyn Theme) {
        if area.is_empty() {
            return;
        }
        let mut line = Content::new();

        if let Some(placeholder) = &self.search_placeholder {
            let cursor = if self.search_focused { "▏" } else { "" };
            let search = if self.search_value.is_empty() {
                Span::new(format!("/ {}{}", placeholder, cursor)).muted()
            } else {
                Span::new(format!("/ {}{}", self.search_value, cursor))
            };
            line = line.then(search);
        }

        for filter in &self.filters {
            let tone = if filter.is_active() {
                Tone::Primary
            } else {
                Tone::Muted
            };
            line = line.then(Span::new(format!("[{} ▾]", filter.current_label())).tone(tone));
        }

        if self.has_active_filters() {
            line = line.then(Span::new("x clear").muted());
        }

        draw::content(buf, area, &line, TextAlign::Left, Style::new(), theme);

        let mut actions = Content::new();
        for (hotkey, label) in &self.actions {
            actions = actions.then(Span::new(format!("{} {}", hotkey, label)).tone(Tone::Accent));
        }
        if !actions.is_empty() {
            draw::content(buf, area, &actions, TextAlign::Right, Style::new(), theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status() -> SelectFilter {
        SelectFilter::new(
            "status",
            "Status",
            vec![
                FilterOption::new("active", "Active"),
                FilterOption::new("suspended", "Suspended"),
            ],
        )
    }

    #[test]
    fn cycling_starts_and_wraps_at_all() {
        let filter = status();
        assert_eq!(filter.cycled(true), "active");
        assert_eq!(filter.clone().value("suspended").cycled(true), "all");
        assert_eq!(filter.cycled(false), "suspended");
    }

    #[test]
    fn label_for_unfiltered() {
        assert_eq!(status().current_label(), "All Status");
        assert_eq!(status().value("active").current_label(), "Active");
    }

    #[test]
    fn clear_resets_everything() {
        let mut bar = FilterBar::new()
            .search("Search...", "acme")
            .filter(status().value("active"));
        assert!(bar.has_active_filters());
        bar.clear();
        assert!(!bar.has_active_filters());
        assert_eq!(bar.filters[0].selected(), None);
    }
}
