use generational_arena::Index;
use tracing::instrument;

use crate::errors::{SgfError, SgfResult};
use crate::lexer::{self, Handler};
use crate::tree::{Branch, Collection, GameTree, Node};

/// Parses an SGF text into a collection of game trees.
#[instrument(level = "debug", skip(input), fields(len = input.len()))]
pub fn parse(input: &str) -> SgfResult<Collection> {
    let mut builder = TreeBuilder::new();
    lexer::run(input, &mut builder)?;
    builder.finish()
}

/// Incrementally constructs game trees from lexer events.
///
/// Keeps a stack of open branches (arena indices into the game under
/// construction); the current node is always the last node of the top branch.
/// Structural invariants are enforced as the events arrive: no duplicate
/// properties, no empty branches, balanced nesting, no empty games.
pub struct TreeBuilder {
    games: Vec<GameTree>,
    current: Option<GameTree>,
    branch_stack: Vec<Index>,
    saw_node: bool,
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            current: None,
            branch_stack: Vec::new(),
            saw_node: false,
        }
    }

    /// Final result retrieval. A game left open (unterminated input) is
    /// discarded rather than handed out half-validated.
    pub fn finish(self) -> SgfResult<Collection> {
        if self.games.is_empty() {
            return Err(SgfError::EmptyCollection);
        }
        Ok(Collection { games: self.games })
    }

    fn tree_mut(&mut self) -> SgfResult<&mut GameTree> {
        self.current.as_mut().ok_or(SgfError::NoCurrentGame)
    }

    fn top_branch(&self) -> SgfResult<Index> {
        self.branch_stack
            .last()
            .copied()
            .ok_or(SgfError::NoCurrentGame)
    }
}

impl Handler for TreeBuilder {
    fn on_game_start(&mut self) -> SgfResult<()> {
        let tree = GameTree::with_empty_trunk();
        self.branch_stack = vec![tree.trunk()];
        self.current = Some(tree);
        self.saw_node = false;
        Ok(())
    }

    fn on_game_stop(&mut self) -> SgfResult<()> {
        if self.current.is_none() {
            return Err(SgfError::NoCurrentGame);
        }
        if self.branch_stack.len() != 1 {
            return Err(SgfError::UnbalancedBranches);
        }
        if !self.saw_node {
            return Err(SgfError::EmptyGame);
        }
        self.branch_stack.clear();
        self.games.push(self.current.take().unwrap());
        Ok(())
    }

    fn on_node(&mut self) -> SgfResult<()> {
        let top = self.top_branch()?;
        let tree = self.tree_mut()?;
        tree.branch_mut(top).nodes.push(Node::new());
        self.saw_node = true;
        Ok(())
    }

    fn on_property(&mut self, name: &str, value: &str) -> SgfResult<()> {
        let top = self.top_branch()?;
        let tree = self.tree_mut()?;
        let node = tree
            .branch_mut(top)
            .nodes
            .last_mut()
            .ok_or(SgfError::NoCurrentNode)?;
        if node.properties.contains_key(name) {
            return Err(SgfError::DuplicateProperty(name.to_string()));
        }
        node.set(name, value);
        Ok(())
    }

    fn on_branch_start(&mut self) -> SgfResult<()> {
        let top = self.top_branch()?;
        let tree = self.tree_mut()?;
        if tree.branch(top).nodes.is_empty() {
            return Err(SgfError::NoCurrentNode);
        }
        let child = tree.add_branch(Branch::new());
        tree.branch_mut(top)
            .nodes
            .last_mut()
            .unwrap()
            .fork
            .push(child);
        self.branch_stack.push(child);
        Ok(())
    }

    fn on_branch_stop(&mut self) -> SgfResult<()> {
        if self.branch_stack.len() <= 1 {
            return Err(SgfError::DanglingBranch);
        }
        let closed = self.branch_stack.pop().unwrap();
        let tree = self.tree_mut()?;
        if tree.branch(closed).nodes.is_empty() {
            return Err(SgfError::EmptyBranch);
        }
        Ok(())
    }
}
