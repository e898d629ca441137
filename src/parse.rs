use crate::classify::{classify, LineKind};
use crate::inline::emphasize;
use crate::ir::{BlockNode, InlineText};
use crate::list::ListState;

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l))
}

/// Scan `text` line by line and return its blocks in input order.
///
/// Contiguous list lines merge into one `List`; any other line, blank lines
/// included, closes the pending run first. Never fails.
pub fn parse(text: &str) -> Vec<BlockNode> {
    let mut line_count = 0usize;
    let (mut blocks, mut list) = split_lines(text).fold(
        (Vec::new(), ListState::default()),
        |(mut blocks, mut list), line| {
            line_count += 1;
            let kind = classify(line);
            if let LineKind::ListItem(item) = kind {
                list.push(emphasize(item));
                return (blocks, list);
            }
            blocks.extend(list.flush());
            match kind {
                LineKind::Heading { level, text } => blocks.push(BlockNode::Heading {
                    level,
                    text: InlineText::plain(text),
                }),
                LineKind::Rule => blocks.push(BlockNode::Rule),
                LineKind::RawLine(raw) => blocks.push(BlockNode::RawLine {
                    text: raw.to_string(),
                }),
                LineKind::Paragraph(para) => blocks.push(BlockNode::Paragraph {
                    text: emphasize(para),
                }),
                LineKind::Blank | LineKind::ListItem(_) => {}
            }
            (blocks, list)
        },
    );
    blocks.extend(list.flush());

    tracing::debug!(lines = line_count, blocks = blocks.len(), "parsed analysis text");
    blocks
}
