use std::collections::BTreeMap;
use std::fmt;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

/// Move property for the black player.
pub const BLACK: &str = "B";
/// Move property for the white player.
pub const WHITE: &str = "W";
/// Free-text comment property.
pub const COMMENT: &str = "C";

/// A single SGF node: a mapping from property identifier to value, plus an
/// optional fork of alternative continuations starting right after it.
///
/// Property identifiers are case-sensitive opaque tokens; each occurs at most
/// once per node. The `BTreeMap` keeps them in ascending lexical order, which
/// is the canonical serialization order.
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Property identifier -> value
    pub properties: BTreeMap<String, String>,
    /// Branch indices of alternative continuations, in insertion order.
    /// Empty means no fork. One-element forks are legal (degenerate variants).
    pub fork: Vec<Index>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a node holding a single property, e.g. a bare move.
    pub fn with_property(name: &str, value: &str) -> Self {
        let mut node = Self::new();
        node.properties.insert(name.to_string(), value.to_string());
        node
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    /// Move identity: two nodes are the same move iff their `B` and `W`
    /// values match exactly (both absent counts as a match). All other
    /// properties are irrelevant here.
    pub fn same_move(&self, other: &Node) -> bool {
        self.get(BLACK) == other.get(BLACK) && self.get(WHITE) == other.get(WHITE)
    }

    /// Appends text to the `C` property, creating it if absent.
    pub fn append_comment(&mut self, text: &str) {
        self.properties
            .entry(COMMENT.to_string())
            .or_default()
            .push_str(text);
    }
}

impl fmt::Display for Node {
    /// SGF text of the node without its fork: `;` followed by the properties
    /// in canonical (ascending lexical) order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            ";{}",
            self.properties
                .iter()
                .map(|(name, value)| format!("{name}[{value}]"))
                .join("")
        )
    }
}

/// A linear sequence of nodes with no internal forking. Only the last node of
/// a branch may carry a fork; the fork is then the continuation.
#[derive(Debug, Clone, Default)]
pub struct Branch {
    pub nodes: Vec<Node>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

/// One game: a rooted tree of branches, all owned by a single arena.
///
/// The arena keeps the cursor a cheap index stack instead of a pointer chase
/// and sidesteps cyclic-ownership questions: branches reference each other
/// only through `Index` values valid within their own game.
#[derive(Debug, Clone)]
pub struct GameTree {
    arena: Arena<Branch>,
    trunk: Index,
}

impl Default for GameTree {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameTree {
    /// A brand-new game: a single bare root node, ready for merging moves.
    pub fn new_game() -> Self {
        let mut tree = Self::with_empty_trunk();
        tree.branch_mut(tree.trunk).nodes.push(Node::new());
        tree
    }

    /// An empty trunk, only valid as a parse intermediate. The builder
    /// guarantees at least one node before handing the tree out.
    pub(crate) fn with_empty_trunk() -> Self {
        let mut arena = Arena::new();
        let trunk = arena.insert(Branch::new());
        Self { arena, trunk }
    }

    pub fn trunk(&self) -> Index {
        self.trunk
    }

    pub fn branch(&self, idx: Index) -> &Branch {
        &self.arena[idx]
    }

    pub fn branch_mut(&mut self, idx: Index) -> &mut Branch {
        &mut self.arena[idx]
    }

    #[instrument(level = "trace", skip(self, branch))]
    pub(crate) fn add_branch(&mut self, branch: Branch) -> Index {
        self.arena.insert(branch)
    }

    /// The root node (first node of the trunk), carrying game metadata.
    pub fn root(&self) -> Option<&Node> {
        self.branch(self.trunk).nodes.first()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        let trunk = self.trunk;
        self.branch_mut(trunk).nodes.first_mut()
    }

    /// Total node count across all branches.
    pub fn node_count(&self) -> usize {
        self.arena.iter().map(|(_, branch)| branch.nodes.len()).sum()
    }

    /// Number of branches, trunk included.
    pub fn branch_count(&self) -> usize {
        self.arena.len()
    }

    pub fn result(&self) -> Option<&str> {
        self.root().and_then(|root| root.get("RE"))
    }

    pub fn player_black(&self) -> Option<&str> {
        self.root().and_then(|root| root.get("PB"))
    }

    pub fn player_white(&self) -> Option<&str> {
        self.root().and_then(|root| root.get("PW"))
    }

    pub fn event(&self) -> Option<&str> {
        self.root().and_then(|root| root.get("EV"))
    }

    /// Little Golem records carry a bare `B`/`W` result; normalize to the
    /// SGF-style `B+`/`W+`.
    #[instrument(level = "debug", skip(self))]
    pub fn normalize_result(&mut self) {
        if let Some(root) = self.root_mut() {
            match root.get("RE") {
                Some("B") => root.set("RE", "B+"),
                Some("W") => root.set("RE", "W+"),
                _ => {}
            }
        }
    }
}

/// An ordered sequence of games, as parsed from one SGF text.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub games: Vec<GameTree>,
}
