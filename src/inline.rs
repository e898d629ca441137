use crate::ir::{InlineSpan, InlineText, SpanKind};
use regex::Regex;
use std::sync::LazyLock;

static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Split `text` on every match of `re`. Captures become `inside` spans and
/// the text between matches stays `outside`.
fn split_spans(
    text: &str,
    re: &Regex,
    outside: SpanKind,
    inside: SpanKind,
    out: &mut Vec<InlineSpan>,
) {
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            out.push(span(outside, &text[last..whole.start()]));
        }
        out.push(span(inside, inner.as_str()));
        last = whole.end();
    }
    if last < text.len() {
        out.push(span(outside, &text[last..]));
    }
}

fn span(kind: SpanKind, text: &str) -> InlineSpan {
    InlineSpan {
        kind,
        text: text.to_string(),
    }
}

/// Bold first, then italic over the result: plain text around bold runs and
/// the text inside them. Markers without a partner stay as literal asterisks.
pub fn emphasize(text: &str) -> InlineText {
    let mut bolded = Vec::new();
    split_spans(text, &RE_BOLD, SpanKind::Plain, SpanKind::Bold, &mut bolded);

    let mut spans = Vec::with_capacity(bolded.len());
    for piece in bolded {
        let inside = match piece.kind {
            SpanKind::Bold => SpanKind::BoldItalic,
            _ => SpanKind::Italic,
        };
        split_spans(&piece.text, &RE_ITALIC, piece.kind, inside, &mut spans);
    }
    InlineText::new(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn spans(text: &str) -> Vec<InlineSpan> {
        emphasize(text).spans().to_vec()
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(spans("just words"), vec![InlineSpan::plain("just words")]);
    }

    #[test]
    fn test_empty_text() {
        assert!(emphasize("").is_empty());
    }

    #[test]
    fn test_bold_then_italic() {
        assert_eq!(
            spans("**bold** and *italic*"),
            vec![
                InlineSpan::bold("bold"),
                InlineSpan::plain(" and "),
                InlineSpan::italic("italic"),
            ]
        );
    }

    #[test]
    fn test_multiple_bold_shortest_match() {
        assert_eq!(
            spans("**a** x **b**"),
            vec![
                InlineSpan::bold("a"),
                InlineSpan::plain(" x "),
                InlineSpan::bold("b"),
            ]
        );
    }

    #[test]
    fn test_unterminated_markers_stay_literal() {
        assert_eq!(spans("**open"), vec![InlineSpan::plain("**open")]);
        assert_eq!(spans("5 * 3"), vec![InlineSpan::plain("5 * 3")]);
    }

    #[test]
    fn test_empty_emphasis_is_not_a_span() {
        // `****` has no non-empty run between the bold markers; the italic
        // pass then pairs the middle asterisks around a single `*`.
        assert_eq!(
            spans("****"),
            vec![
                InlineSpan::italic("*"),
                InlineSpan::plain("*"),
            ]
        );
    }

    #[test]
    fn test_italic_around_bold_is_left_dangling() {
        assert_eq!(
            spans("*a **b** c*"),
            vec![
                InlineSpan::plain("*a "),
                InlineSpan::bold("b"),
                InlineSpan::plain(" c*"),
            ]
        );
    }

    #[test]
    fn test_italic_inside_bold() {
        assert_eq!(
            spans("**Note: *very* important**"),
            vec![
                InlineSpan::bold("Note: "),
                InlineSpan::bold_italic("very"),
                InlineSpan::bold(" important"),
            ]
        );
    }

    #[test]
    fn test_whole_bold_run_italic() {
        assert_eq!(spans("***x***"), vec![InlineSpan::bold("*x"), InlineSpan::plain("*")]);
        assert_eq!(spans("***x* y**"), vec![InlineSpan::bold_italic("x"), InlineSpan::bold(" y")]);
    }

    #[test]
    fn test_triple_asterisks() {
        assert_eq!(
            spans("***x***"),
            vec![InlineSpan::bold("*x"), InlineSpan::plain("*")]
        );
    }

    #[test]
    fn test_bold_key_value() {
        assert_eq!(
            spans("**Client:** 28-year-old"),
            vec![InlineSpan::bold("Client:"), InlineSpan::plain(" 28-year-old")]
        );
    }
}
