use regex::Regex;
use std::sync::LazyLock;

static RE_LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*]\s").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading { level: u8, text: &'a str },
    Rule,
    ListItem(&'a str),
    RawLine(&'a str),
    Blank,
    Paragraph(&'a str),
}

fn strip_heading(rest: &str) -> &str {
    rest.strip_prefix(' ').unwrap_or(rest)
}

/// Tag one line (no trailing newline). Longest heading marker wins, and a
/// pipe anywhere marks the line as table-like before the paragraph fallback.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix("###") {
        return LineKind::Heading {
            level: 3,
            text: strip_heading(rest),
        };
    }
    if let Some(rest) = line.strip_prefix("##") {
        return LineKind::Heading {
            level: 2,
            text: strip_heading(rest),
        };
    }
    if let Some(rest) = line.strip_prefix('#') {
        return LineKind::Heading {
            level: 1,
            text: strip_heading(rest),
        };
    }
    if line.trim() == "---" {
        return LineKind::Rule;
    }
    if let Some(m) = RE_LIST_MARKER.find(line) {
        return LineKind::ListItem(&line[m.end()..]);
    }
    if line.contains('|') {
        return LineKind::RawLine(line);
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    LineKind::Paragraph(line)
}
