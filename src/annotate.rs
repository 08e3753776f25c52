use chrono::NaiveDateTime;
use tracing::{instrument, warn};

use crate::cursor::Cursor;
use crate::errors::SgfResult;
use crate::tree::GameTree;

/// A free-text comment bound to a node by a short navigation path.
///
/// A path is a sequence of `(branch choice, hop count)` pairs: the first hop
/// of each pair takes the chosen variant, the remaining hops follow the main
/// line. This is the compact addressing scheme comments are stored under.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub path: Vec<(usize, usize)>,
    pub date: NaiveDateTime,
    pub author: String,
    pub text: String,
}

/// Appends each annotation's formatted text to the comment property of its
/// target node, in the given order.
///
/// A path that runs off the end of a line is skipped with a warning: the
/// tree may have been trimmed since the comment was written. Stale variant
/// choices surface as errors instead.
#[instrument(level = "debug", skip(tree, annotations), fields(entries = annotations.len()))]
pub fn annotate(tree: &mut GameTree, annotations: &[Annotation]) -> SgfResult<()> {
    for annotation in annotations {
        let mut cursor = Cursor::new(tree)?;
        if !walk(&mut cursor, &annotation.path)? {
            warn!(
                path = ?annotation.path,
                author = %annotation.author,
                "annotation target unreachable, skipping"
            );
            continue;
        }
        let line = format!(
            "On {} {} said:\n{}\n\n",
            annotation.date.format("%Y-%m-%d %H:%M:%S"),
            annotation.author,
            annotation.text
        );
        cursor.current_mut().append_comment(&line);
    }
    Ok(())
}

/// Follows a short path. `Ok(false)` means a line ended before the target
/// was reached.
fn walk(cursor: &mut Cursor<'_>, path: &[(usize, usize)]) -> SgfResult<bool> {
    for &(branch, hops) in path {
        let mut choice = branch;
        for _ in 0..hops {
            if cursor.advance(choice)?.is_none() {
                return Ok(false);
            }
            choice = 0;
        }
    }
    Ok(true)
}
