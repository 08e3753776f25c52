use generational_arena::Index;
use tracing::instrument;

use crate::tree::{Collection, GameTree};

/// Renders a collection back to SGF text, the structural inverse of parsing.
///
/// Properties come out in ascending lexical order regardless of how they
/// were inserted, so the output is deterministic and re-parsing it yields a
/// structurally identical tree. No whitespace is emitted: parenthesization
/// alone delimits games and variants.
#[instrument(level = "debug", skip(collection), fields(games = collection.games.len()))]
pub fn serialize(collection: &Collection) -> String {
    let mut out = String::new();
    for game in &collection.games {
        out.push('(');
        render_branch(game, game.trunk(), &mut out);
        out.push(')');
    }
    out
}

/// Single-game convenience wrapper around [`serialize`].
pub fn serialize_game(game: &GameTree) -> String {
    let mut out = String::from("(");
    render_branch(game, game.trunk(), &mut out);
    out.push(')');
    out
}

fn render_branch(tree: &GameTree, branch: Index, out: &mut String) {
    for node in &tree.branch(branch).nodes {
        out.push_str(&node.to_string());
        for &child in &node.fork {
            out.push('(');
            render_branch(tree, child, out);
            out.push(')');
        }
    }
}
