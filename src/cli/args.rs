//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Smart Game Format game trees: parse, navigate, merge variants, annotate, serialize
#[derive(Parser, Debug)]
#[command(name = "sgftree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a file and report its structure
    Check {
        /// SGF file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
    },

    /// Canonicalize a file to stdout (or rewrite it in place)
    Fmt {
        /// SGF file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Show the branching structure as a tree
    Tree {
        /// SGF file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Game index within the collection
        #[arg(short, long, default_value_t = 0)]
        game: usize,
    },

    /// Merge a linear continuation, forking where it diverges
    Merge {
        /// SGF file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Moves after the root in SGF form, e.g. B[aa] W[bb]
        #[arg(required = true)]
        moves: Vec<String>,
        /// Game index within the collection
        #[arg(short, long, default_value_t = 0)]
        game: usize,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Attach a comment to a node addressed by a short path
    Annotate {
        /// SGF file
        #[arg(value_hint = ValueHint::FilePath)]
        file: PathBuf,
        /// Short path pairs branch:hops, comma separated (e.g. 0:2,1:1)
        #[arg(short, long)]
        path: String,
        /// Comment author
        #[arg(short, long)]
        author: String,
        /// Comment text
        #[arg(short, long)]
        text: String,
        /// Game index within the collection
        #[arg(short, long, default_value_t = 0)]
        game: usize,
        /// Rewrite the file instead of printing
        #[arg(short, long)]
        write: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
