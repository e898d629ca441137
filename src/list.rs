use crate::ir::{BlockNode, InlineText};

/// Pending list items between two non-list lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    #[default]
    NoPendingList,
    PendingList(Vec<InlineText>),
}

impl ListState {
    pub fn push(&mut self, item: InlineText) {
        match self {
            ListState::PendingList(items) => items.push(item),
            ListState::NoPendingList => *self = ListState::PendingList(vec![item]),
        }
    }

    /// Emit the buffered run as one `List` node and reset. `None` when
    /// nothing is pending, so a `List` never carries zero items.
    pub fn flush(&mut self) -> Option<BlockNode> {
        match std::mem::take(self) {
            ListState::PendingList(items) if !items.is_empty() => Some(BlockNode::List { items }),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ListState::PendingList(_))
    }
}
