//! Named colors for the console.
//!
//! Components ask the theme for a color by name (`"surface"`, `"muted"`) or
//! by semantic [`Tone`]. Unknown names fall back to the text color.

use console_term::{Color, Style};

use crate::content::Tone;

/// Trait for theme types that can resolve named colors.
pub trait Theme: Send + Sync {
    /// Resolve a named color. Returns `None` if the name is not defined.
    fn resolve(&self, name: &str) -> Option<Color>;

    /// Resolve a name, falling back to the `text` color.
    fn color(&self, name: &str) -> Color {
        self.resolve(name).unwrap_or_else(|| {
            log::warn!("Unknown theme color '{}', using text", name);
            self.resolve("text").unwrap_or(Color::rgb(255, 255, 255))
        })
    }

    /// Foreground color for a semantic tone.
    fn tone(&self, tone: Tone) -> Color {
        self.color(tone.color_name())
    }

    /// Foreground-only style for a tone.
    fn tone_style(&self, tone: Tone) -> Style {
        Style::new().foreground(self.tone(tone))
    }
}

/// The default dark theme.
#[derive(Debug, Clone)]
pub struct DefaultTheme {
    pub background: Color,
    pub surface: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub destructive: Color,
    /// Row under the keyboard cursor.
    pub cursor: Color,
    /// Selected rows.
    pub selection: Color,
}

impl Default for DefaultTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl DefaultTheme {
    pub fn dark() -> Self {
        Self {
            background: Color::oklch(0.17, 0.01, 250.0),
            surface: Color::oklch(0.22, 0.02, 250.0),
            border: Color::oklch(0.35, 0.02, 250.0),
            text: Color::oklch(0.92, 0.01, 250.0),
            text_muted: Color::oklch(0.62, 0.02, 250.0),
            primary: Color::oklch(0.68, 0.15, 250.0),
            accent: Color::oklch(0.72, 0.14, 300.0),
            success: Color::oklch(0.7, 0.15, 145.0),
            warning: Color::oklch(0.75, 0.15, 85.0),
            destructive: Color::oklch(0.65, 0.2, 25.0),
            cursor: Color::hex(0x3B3366),
            selection: Color::hex(0x2A2740),
        }
    }
}

impl Theme for DefaultTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "background" | "bg" => Some(self.background),
            "surface" => Some(self.surface),
            "border" => Some(self.border),
            "text" | "fg" => Some(self.text),
            "muted" | "text_muted" => Some(self.text_muted),
            "primary" => Some(self.primary),
            "accent" => Some(self.accent),
            "success" => Some(self.success),
            "warning" => Some(self.warning),
            "destructive" | "danger" | "error" => Some(self.destructive),
            "cursor" => Some(self.cursor),
            "selection" => Some(self.selection),
            _ => None,
        }
    }
}
