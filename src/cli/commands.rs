//! Command dispatch and implementations

use std::fs;
use std::io;
use std::path::Path;

use chrono::Local;
use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::annotate::{annotate, Annotation};
use crate::builder::parse;
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::display::ToTermTree;
use crate::merge::merge_variant;
use crate::serializer::serialize;
use crate::tree::{Collection, GameTree, Node};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Check { file }) => check(file),
        Some(Commands::Fmt { file, write }) => fmt(file, *write),
        Some(Commands::Tree { file, game }) => tree(file, *game),
        Some(Commands::Merge {
            file,
            moves,
            game,
            write,
        }) => merge(file, moves, *game, *write),
        Some(Commands::Annotate {
            file,
            path,
            author,
            text,
            game,
            write,
        }) => annotate_node(file, path, author, text, *game, *write),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument]
fn check(file: &Path) -> CliResult<()> {
    let collection = load(file)?;
    output::success(&format!(
        "{}: {} game(s)",
        file.display(),
        collection.games.len()
    ));
    for (i, game) in collection.games.iter().enumerate() {
        output::detail(&format!(
            "game {}: {} node(s) in {} branch(es), {} vs {}, result {}",
            i,
            game.node_count(),
            game.branch_count(),
            game.player_black().unwrap_or("?"),
            game.player_white().unwrap_or("?"),
            game.result().unwrap_or("?"),
        ));
    }
    Ok(())
}

#[instrument]
fn fmt(file: &Path, write: bool) -> CliResult<()> {
    let collection = load(file)?;
    emit(file, &serialize(&collection), write)
}

#[instrument]
fn tree(file: &Path, game: usize) -> CliResult<()> {
    let collection = load(file)?;
    let tree = pick_game(&collection, game)?;
    output::info(&tree.to_tree_string());
    Ok(())
}

#[instrument]
fn merge(file: &Path, moves: &[String], game: usize, write: bool) -> CliResult<()> {
    let incoming = moves
        .iter()
        .map(|text| parse_move(text))
        .collect::<CliResult<Vec<_>>>()?;
    debug!("incoming: {:?}", incoming);

    let mut collection = load(file)?;
    pick_game(&collection, game)?;
    merge_variant(&mut collection.games[game], &incoming)?;
    emit(file, &serialize(&collection), write)
}

#[instrument]
fn annotate_node(
    file: &Path,
    path: &str,
    author: &str,
    text: &str,
    game: usize,
    write: bool,
) -> CliResult<()> {
    let annotation = Annotation {
        path: parse_path(path)?,
        date: Local::now().naive_local(),
        author: author.to_string(),
        text: text.to_string(),
    };

    let mut collection = load(file)?;
    pick_game(&collection, game)?;
    annotate(&mut collection.games[game], &[annotation])?;
    emit(file, &serialize(&collection), write)
}

fn load(file: &Path) -> CliResult<Collection> {
    let text = fs::read_to_string(file).map_err(|source| CliError::Io {
        path: file.to_path_buf(),
        source,
    })?;
    Ok(parse(&text)?)
}

fn emit(file: &Path, text: &str, write: bool) -> CliResult<()> {
    if write {
        fs::write(file, text).map_err(|source| CliError::Io {
            path: file.to_path_buf(),
            source,
        })?;
        output::success(&format!("updated {}", file.display()));
    } else {
        output::info(text);
    }
    Ok(())
}

fn pick_game(collection: &Collection, game: usize) -> CliResult<&GameTree> {
    let count = collection.games.len();
    collection.games.get(game).ok_or_else(|| {
        CliError::InvalidArgs(format!(
            "game index {game} out of range (collection has {count})"
        ))
    })
}

/// One move argument in SGF form, e.g. `B[aa]`.
fn parse_move(text: &str) -> CliResult<Node> {
    match text.find('[') {
        Some(open) if open > 0 && text.ends_with(']') && open + 1 < text.len() => {
            Ok(Node::with_property(
                &text[..open],
                &text[open + 1..text.len() - 1],
            ))
        }
        _ => Err(CliError::InvalidArgs(format!(
            "move must look like B[aa], got: {text}"
        ))),
    }
}

/// Short path in `branch:hops[,branch:hops...]` form.
fn parse_path(text: &str) -> CliResult<Vec<(usize, usize)>> {
    let bad = || CliError::InvalidArgs(format!("path must look like 0:2,1:1, got: {text}"));
    text.split(',')
        .map(|pair| {
            let (branch, hops) = pair.split_once(':').ok_or_else(bad)?;
            Ok((
                branch.trim().parse().map_err(|_| bad())?,
                hops.trim().parse().map_err(|_| bad())?,
            ))
        })
        .collect()
}
