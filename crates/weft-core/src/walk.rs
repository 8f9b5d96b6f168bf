//! Depth-first pre-order traversal over a thread's message forest.
//!
//! Selection resolution and viewport rendering both consume this one walker,
//! so a linear index means the same message to both. Each entry carries the
//! indentation state the renderer needs, which keeps the leading-marker
//! bookkeeping inside the traversal instead of duplicated at the call sites.

use crate::models::Message;

/// One visited message together with its position and tree-shape context.
#[derive(Debug)]
pub struct ThreadEntry<'a> {
    pub message: &'a Message,
    /// Running index in walk order, starting at 0.
    pub index: usize,
    /// One flag per ancestor level: true while that ancestor still has later
    /// siblings (draw a continuation line), false once its slot is closed.
    pub leading: Vec<bool>,
    /// Whether this message is the last among its siblings.
    pub last: bool,
}

struct PendingNode<'a> {
    message: &'a Message,
    leading: Vec<bool>,
    last: bool,
}

/// Iterator yielding every message of a forest in depth-first, pre-order,
/// sibling order. Uses an explicit work list seeded with the top level in
/// reverse, so popping yields forward order and depth never touches the call
/// stack.
pub struct ThreadWalker<'a> {
    stack: Vec<PendingNode<'a>>,
    next_index: usize,
}

impl<'a> ThreadWalker<'a> {
    pub fn new(top_level: &'a [Message]) -> Self {
        let count = top_level.len();
        let stack = top_level
            .iter()
            .enumerate()
            .rev()
            .map(|(position, message)| PendingNode {
                message,
                leading: Vec::new(),
                last: position + 1 == count,
            })
            .collect();
        Self {
            stack,
            next_index: 0,
        }
    }
}

impl<'a> Iterator for ThreadWalker<'a> {
    type Item = ThreadEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let index = self.next_index;
        self.next_index += 1;

        // Replies go on the stack in reverse so the first reply is visited
        // before this node's later siblings.
        let reply_count = node.message.replies.len();
        for (position, reply) in node.message.replies.iter().enumerate().rev() {
            let mut leading = node.leading.clone();
            leading.push(!node.last);
            self.stack.push(PendingNode {
                message: reply,
                leading,
                last: position + 1 == reply_count,
            });
        }

        Some(ThreadEntry {
            message: node.message,
            index,
            leading: node.leading,
            last: node.last,
        })
    }
}
