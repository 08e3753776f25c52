//! Smart Game Format game trees.
//!
//! Parsing is done with [`parse`], which returns a [`Collection`]: an ordered
//! sequence of [`GameTree`]s, each a branching tree of [`Node`]s (property
//! maps) stored in a per-game arena. A node may fork into ordered alternative
//! continuations. Navigate and mutate a game with [`Cursor`], merge a
//! submitted continuation with [`merge_variant`], attach comments with
//! [`annotate`], and render back to SGF text with [`serialize`].
//!
//! ```
//! use sgftree::{parse, serialize};
//!
//! let collection = parse("(;FF[4]GM[1];B[aa];W[bb])").unwrap();
//! assert_eq!(serialize(&collection), "(;FF[4]GM[1];B[aa];W[bb])");
//! ```

pub mod annotate;
pub mod builder;
pub mod cli;
pub mod cursor;
pub mod display;
pub mod errors;
pub mod exitcode;
pub mod lexer;
pub mod merge;
pub mod serializer;
pub mod tree;
pub mod util;

pub use annotate::{annotate, Annotation};
pub use builder::{parse, TreeBuilder};
pub use cursor::Cursor;
pub use display::ToTermTree;
pub use errors::{SgfError, SgfResult};
pub use merge::merge_variant;
pub use serializer::{serialize, serialize_game};
pub use tree::{Branch, Collection, GameTree, Node, BLACK, COMMENT, WHITE};
