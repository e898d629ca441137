use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    pub kind: SpanKind,
    pub text: String,
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        InlineSpan {
            kind: SpanKind::Plain,
            text: text.into(),
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        InlineSpan {
            kind: SpanKind::Bold,
            text: text.into(),
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        InlineSpan {
            kind: SpanKind::Italic,
            text: text.into(),
        }
    }

    pub fn bold_italic(text: impl Into<String>) -> Self {
        InlineSpan {
            kind: SpanKind::BoldItalic,
            text: text.into(),
        }
    }
}

/// Inline-formatted content of a heading, list item or paragraph.
///
/// Spans carry unescaped text; renderers decide how each kind is displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InlineText(Vec<InlineSpan>);

impl InlineText {
    pub fn new(spans: Vec<InlineSpan>) -> Self {
        InlineText(spans)
    }

    /// A single plain span, or no spans at all for empty text.
    pub fn plain(text: &str) -> Self {
        if text.is_empty() {
            InlineText::default()
        } else {
            InlineText(vec![InlineSpan::plain(text)])
        }
    }

    pub fn spans(&self) -> &[InlineSpan] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_plain_string(&self) -> String {
        self.0.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockNode {
    Heading { level: u8, text: InlineText },
    List { items: Vec<InlineText> },
    Rule,
    RawLine { text: String },
    Paragraph { text: InlineText },
}
