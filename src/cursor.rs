use generational_arena::Index;
use tracing::instrument;

use crate::errors::{SgfError, SgfResult};
use crate::tree::{Branch, GameTree, Node};

/// One step of the navigation path: a branch and an offset within it.
#[derive(Debug, Clone, Copy)]
struct Frame {
    branch: Index,
    node: usize,
}

/// Stateful navigator over a single game tree.
///
/// Holds the path from the root to the current node as a stack of frames.
/// The cursor borrows the tree exclusively for its whole lifetime, so no
/// other mutation can invalidate the frames it remembers.
#[derive(Debug)]
pub struct Cursor<'a> {
    tree: &'a mut GameTree,
    stack: Vec<Frame>,
}

impl<'a> Cursor<'a> {
    pub fn new(tree: &'a mut GameTree) -> SgfResult<Self> {
        let trunk = tree.trunk();
        if tree.branch(trunk).nodes.is_empty() {
            return Err(SgfError::EmptyGame);
        }
        Ok(Self {
            tree,
            stack: vec![Frame { branch: trunk, node: 0 }],
        })
    }

    // The stack is never empty: the root frame is pushed at construction and
    // retreat refuses to pop it.
    fn top(&self) -> Frame {
        *self.stack.last().unwrap()
    }

    pub fn current(&self) -> &Node {
        let Frame { branch, node } = self.top();
        &self.tree.branch(branch).nodes[node]
    }

    pub fn current_mut(&mut self) -> &mut Node {
        let Frame { branch, node } = self.top();
        &mut self.tree.branch_mut(branch).nodes[node]
    }

    /// Number of continuations from the current node: the fork size, or 1
    /// for a plain line (even when the line ends here).
    pub fn fork_width(&self) -> usize {
        let fork = &self.current().fork;
        if fork.is_empty() {
            1
        } else {
            fork.len()
        }
    }

    fn next_frame(&self, choice: usize) -> SgfResult<Option<Frame>> {
        let Frame { branch, node } = self.top();
        let line = self.tree.branch(branch);
        let current = &line.nodes[node];
        if !current.fork.is_empty() {
            let width = current.fork.len();
            if choice >= width {
                return Err(SgfError::InvalidVariant { choice, width });
            }
            // fork children are never empty
            Ok(Some(Frame {
                branch: current.fork[choice],
                node: 0,
            }))
        } else if choice != 0 {
            Err(SgfError::NoVariant(choice))
        } else if node + 1 < line.nodes.len() {
            Ok(Some(Frame {
                branch,
                node: node + 1,
            }))
        } else {
            Ok(None)
        }
    }

    /// Moves forward into the chosen continuation. `Ok(None)` means the line
    /// ended; the cursor stays put.
    #[instrument(level = "trace", skip(self))]
    pub fn advance(&mut self, choice: usize) -> SgfResult<Option<&Node>> {
        match self.next_frame(choice)? {
            Some(frame) => {
                self.stack.push(frame);
                Ok(Some(self.current()))
            }
            None => Ok(None),
        }
    }

    /// Looks at the node `advance(choice)` would land on without committing.
    pub fn peek(&self, choice: usize) -> SgfResult<Option<&Node>> {
        Ok(self.next_frame(choice)?.map(|Frame { branch, node }| {
            &self.tree.branch(branch).nodes[node]
        }))
    }

    /// Moves one step back. `None` means the cursor is already at the root
    /// and nothing happened.
    #[instrument(level = "trace", skip(self))]
    pub fn retreat(&mut self) -> Option<&Node> {
        if self.stack.len() == 1 {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }

    /// Inserts `node` as a new continuation from the current position.
    ///
    /// Extends the line when the current node is last and unforked; adds a
    /// new fork child when a fork exists (rejecting a move-identical child);
    /// splits the line into a two-child fork when inserting mid-line. The
    /// cursor itself does not move.
    #[instrument(level = "trace", skip(self, node))]
    pub fn insert(&mut self, node: Node) -> SgfResult<()> {
        let Frame { branch, node: index } = self.top();
        let line_len = self.tree.branch(branch).nodes.len();
        let has_fork = !self.tree.branch(branch).nodes[index].fork.is_empty();

        if has_fork {
            let fork = self.tree.branch(branch).nodes[index].fork.clone();
            for child in fork {
                if self.tree.branch(child).nodes[0].same_move(&node) {
                    return Err(SgfError::NodeAlreadyExists);
                }
            }
            let child = self.tree.add_branch(Branch::from_nodes(vec![node]));
            self.tree.branch_mut(branch).nodes[index].fork.push(child);
        } else if index + 1 == line_len {
            self.tree.branch_mut(branch).nodes.push(node);
        } else {
            if self.tree.branch(branch).nodes[index + 1].same_move(&node) {
                return Err(SgfError::NodeAlreadyExists);
            }
            let tail = self.tree.branch_mut(branch).nodes.split_off(index + 1);
            let tail_branch = self.tree.add_branch(Branch::from_nodes(tail));
            let new_branch = self.tree.add_branch(Branch::from_nodes(vec![node]));
            let fork = &mut self.tree.branch_mut(branch).nodes[index].fork;
            fork.push(tail_branch);
            fork.push(new_branch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::parse;
    use crate::tree::BLACK;

    #[test]
    fn new_rejects_nodeless_tree() {
        let mut tree = GameTree::with_empty_trunk();
        assert_eq!(Cursor::new(&mut tree).unwrap_err(), SgfError::EmptyGame);
    }

    #[test]
    fn peek_does_not_move() {
        let mut tree = parse("(;FF[4];B[aa])")
            .unwrap()
            .games
            .into_iter()
            .next()
            .unwrap();
        let cursor = Cursor::new(&mut tree).unwrap();
        assert_eq!(cursor.peek(0).unwrap().unwrap().get(BLACK), Some("aa"));
        assert_eq!(cursor.peek(0).unwrap().unwrap().get(BLACK), Some("aa"));
        assert_eq!(cursor.current().get("FF"), Some("4"));
    }
}
