use generational_arena::Index;
use termtree::Tree;

use crate::tree::{GameTree, Node};

/// Renders a game tree as an indented ASCII tree for terminal display.
pub trait ToTermTree {
    fn to_tree_string(&self) -> Tree<String>;
}

impl ToTermTree for GameTree {
    fn to_tree_string(&self) -> Tree<String> {
        node_tree(self, self.trunk(), 0)
    }
}

fn label(node: &Node) -> String {
    // comments may contain newlines, which would wreck the layout
    node.to_string().replace('\n', "\\n")
}

fn node_tree(tree: &GameTree, branch: Index, idx: usize) -> Tree<String> {
    let line = tree.branch(branch);
    let node = &line.nodes[idx];

    let mut children = Vec::new();
    for &child in &node.fork {
        children.push(node_tree(tree, child, 0));
    }
    if idx + 1 < line.nodes.len() {
        children.push(node_tree(tree, branch, idx + 1));
    }

    Tree::new(label(node)).with_leaves(children)
}
