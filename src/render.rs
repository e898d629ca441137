use crate::ir::{BlockNode, InlineText, SpanKind};
use html_escape::encode_text;

fn inline_html(text: &InlineText) -> String {
    let mut out = String::new();
    for span in text.spans() {
        let escaped = encode_text(&span.text);
        match span.kind {
            SpanKind::Plain => out.push_str(&escaped),
            SpanKind::Bold => {
                out.push_str("<strong>");
                out.push_str(&escaped);
                out.push_str("</strong>");
            }
            SpanKind::Italic => {
                out.push_str("<em>");
                out.push_str(&escaped);
                out.push_str("</em>");
            }
            SpanKind::BoldItalic => {
                out.push_str("<strong><em>");
                out.push_str(&escaped);
                out.push_str("</em></strong>");
            }
        }
    }
    out
}

/// One HTML element per block, one block per line. All text is escaped, so
/// the only tags in the output are the ones written here.
pub fn render_html(blocks: &[BlockNode]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let line = match block {
            BlockNode::Heading { level, text } => {
                format!("<h{level}>{}</h{level}>", inline_html(text))
            }
            BlockNode::List { items } => {
                let lis: String = items
                    .iter()
                    .map(|item| format!("<li>{}</li>", inline_html(item)))
                    .collect();
                format!("<ul>{}</ul>", lis)
            }
            BlockNode::Rule => "<hr />".to_string(),
            BlockNode::RawLine { text } => format!("<p class=\"raw\">{}</p>", encode_text(text)),
            BlockNode::Paragraph { text } => format!("<p>{}</p>", inline_html(text)),
        };
        lines.push(line);
    }
    let mut result = lines.join("\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}

pub fn render_text(blocks: &[BlockNode]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(blocks.len());
    for block in blocks {
        let part = match block {
            BlockNode::Heading { text, .. } => text.to_plain_string().to_uppercase(),
            BlockNode::List { items } => items
                .iter()
                .map(|item| format!("- {}", item.to_plain_string()))
                .collect::<Vec<_>>()
                .join("\n"),
            BlockNode::Rule => "---".to_string(),
            BlockNode::RawLine { text } => text.clone(),
            BlockNode::Paragraph { text } => text.to_plain_string(),
        };
        parts.push(part);
    }
    let mut result = parts.join("\n\n");
    if !result.is_empty() {
        result.push('\n');
    }
    result
}
