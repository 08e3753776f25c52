use tracing::instrument;

use crate::cursor::Cursor;
use crate::errors::SgfResult;
use crate::tree::{GameTree, Node};

/// Merges a linear continuation into the tree, forking at the first
/// divergence.
///
/// Walks `incoming` (the moves after the root, in order) against the tree:
/// shared prefixes are followed, never duplicated; the first node with no
/// move-identical child forks the tree once, and everything after it is
/// appended linearly below that fork. Candidate children are tried in
/// insertion order and the first match wins. An exact-prefix submission
/// changes nothing.
#[instrument(level = "debug", skip(tree, incoming), fields(moves = incoming.len()))]
pub fn merge_variant(tree: &mut GameTree, incoming: &[Node]) -> SgfResult<()> {
    let mut cursor = Cursor::new(tree)?;
    for node in incoming {
        let width = cursor.fork_width();
        let mut matched = false;
        for choice in 0..width {
            if cursor.peek(choice)?.is_some_and(|next| next.same_move(node)) {
                cursor.advance(choice)?;
                matched = true;
                break;
            }
        }
        if !matched {
            cursor.insert(node.clone())?;
            // follow the continuation we just created: the new last fork
            // child, or the appended node when the line was simply extended
            let width = cursor.fork_width();
            cursor.advance(width - 1)?;
        }
    }
    Ok(())
}
