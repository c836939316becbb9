//! Styled text fragments produced by cell functions.

/// Semantic color of a fragment, resolved through the theme at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Primary,
    Accent,
    Success,
    Warning,
    Destructive,
}

impl Tone {
    pub fn color_name(self) -> &'static str {
        match self {
            Tone::Default => "text",
            Tone::Muted => "muted",
            Tone::Primary => "primary",
            Tone::Accent => "accent",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Destructive => "destructive",
        }
    }
}

/// A run of text with one tone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub bold: bool,
}

impl Span {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Default,
            bold: false,
        }
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn muted(self) -> Self {
        self.tone(Tone::Muted)
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Cell content: a sequence of spans drawn left to right.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Content {
    pub spans: Vec<Span>,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::new(text)],
        }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.spans.push(span);
        self
    }

    /// Append `span` separated from existing content by a single space.
    pub fn then(mut self, span: Span) -> Self {
        if !self.spans.is_empty() {
            self.spans.push(Span::new(" "));
        }
        self.spans.push(span);
        self
    }

    /// Concatenated text of all spans.
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.text.is_empty())
    }
}

impl From<Span> for Content {
    fn from(span: Span) -> Self {
        Self { spans: vec![span] }
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::text(text)
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::text(text)
    }
}
