//! Command layer: file round trips and error exit codes

use std::fs;
use std::io::Write;

use sgftree::cli::args::{Cli, Commands};
use sgftree::cli::commands::execute_command;
use sgftree::exitcode;
use sgftree::util::testing;
use tempfile::NamedTempFile;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn sgf_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn cli(command: Commands) -> Cli {
    Cli {
        debug: 0,
        command: Some(command),
    }
}

#[test]
fn given_messy_file_when_fmt_writes_then_file_is_canonical() {
    // whitespace only between games and around the sequence; inside a node
    // it would become part of the next property name
    let file = sgf_file("  (;SZ[19]FF[4]GM[1];B[aa];W[bb])\n");

    execute_command(&cli(Commands::Fmt {
        file: file.path().to_path_buf(),
        write: true,
    }))
    .unwrap();

    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        "(;FF[4]GM[1]SZ[19];B[aa];W[bb])"
    );
}

#[test]
fn given_divergent_moves_when_merge_writes_then_file_gains_a_fork() {
    let file = sgf_file("(;FF[4];B[aa];W[bb])");

    execute_command(&cli(Commands::Merge {
        file: file.path().to_path_buf(),
        moves: vec!["B[aa]".to_string(), "W[xx]".to_string()],
        game: 0,
        write: true,
    }))
    .unwrap();

    assert_eq!(
        fs::read_to_string(file.path()).unwrap(),
        "(;FF[4];B[aa](;W[bb])(;W[xx]))"
    );
}

#[test]
fn given_short_path_when_annotate_writes_then_comment_is_stored() {
    let file = sgf_file("(;FF[4];B[aa];W[bb])");

    execute_command(&cli(Commands::Annotate {
        file: file.path().to_path_buf(),
        path: "0:2".to_string(),
        author: "gg".to_string(),
        text: "nice".to_string(),
        game: 0,
        write: true,
    }))
    .unwrap();

    // canonical order puts C before W within the node
    let rewritten = fs::read_to_string(file.path()).unwrap();
    assert!(rewritten.contains(";C[On "));
    assert!(rewritten.contains("gg said:\nnice\n\n]W[bb]"));
}

#[test]
fn given_missing_file_when_checking_then_io_exit_code() {
    let err = execute_command(&cli(Commands::Check {
        file: "/no/such/file.sgf".into(),
    }))
    .unwrap_err();
    assert_eq!(err.exit_code(), exitcode::IOERR);
}

#[test]
fn given_malformed_file_when_checking_then_data_exit_code() {
    let file = sgf_file("(;B[aa]())");
    let err = execute_command(&cli(Commands::Check {
        file: file.path().to_path_buf(),
    }))
    .unwrap_err();
    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_out_of_range_game_index_when_formatting_tree_then_usage_exit_code() {
    let file = sgf_file("(;FF[4];B[aa])");
    let err = execute_command(&cli(Commands::Tree {
        file: file.path().to_path_buf(),
        game: 3,
    }))
    .unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_bad_move_argument_when_merging_then_usage_exit_code() {
    let file = sgf_file("(;FF[4];B[aa])");
    let err = execute_command(&cli(Commands::Merge {
        file: file.path().to_path_buf(),
        moves: vec!["not-a-move".to_string()],
        game: 0,
        write: false,
    }))
    .unwrap_err();
    assert_eq!(err.exit_code(), exitcode::USAGE);
}
