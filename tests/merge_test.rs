//! Variant merging: longest-common-prefix fork semantics

use sgftree::util::testing;
use sgftree::{merge_variant, parse, serialize_game, GameTree, Node, BLACK, COMMENT, WHITE};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn game(input: &str) -> GameTree {
    parse(input).unwrap().games.into_iter().next().unwrap()
}

fn mv(color: &str, coord: &str) -> Node {
    Node::with_property(color, coord)
}

#[test]
fn given_exact_prefix_when_merging_then_tree_is_unchanged() {
    let mut game = game("(;FF[4];B[aa];W[bb];B[cc])");
    let before = serialize_game(&game);
    let node_count = game.node_count();

    merge_variant(&mut game, &[mv(BLACK, "aa"), mv(WHITE, "bb")]).unwrap();

    assert_eq!(serialize_game(&game), before);
    assert_eq!(game.node_count(), node_count);
    assert_eq!(game.branch_count(), 1);
}

#[test]
fn given_divergent_move_when_merging_then_line_forks_once() {
    let mut game = game("(;FF[4];B[aa];W[bb];B[cc])");

    merge_variant(&mut game, &[mv(BLACK, "aa"), mv(WHITE, "xx")]).unwrap();

    assert_eq!(
        serialize_game(&game),
        "(;FF[4];B[aa](;W[bb];B[cc])(;W[xx]))"
    );
}

#[test]
fn given_moves_past_divergence_when_merging_then_remainder_is_linear() {
    let mut game = game("(;FF[4];B[aa];W[bb])");

    merge_variant(
        &mut game,
        &[mv(BLACK, "aa"), mv(WHITE, "xx"), mv(BLACK, "yy"), mv(WHITE, "zz")],
    )
    .unwrap();

    assert_eq!(
        serialize_game(&game),
        "(;FF[4];B[aa](;W[bb])(;W[xx];B[yy];W[zz]))"
    );
}

#[test]
fn given_existing_fork_when_merging_matching_variant_then_it_is_followed() {
    let mut game = game("(;FF[4];B[aa];W[bb](;B[cc];W[dd])(;B[hh];W[hg]))");

    // extends the second variant instead of creating a third one
    merge_variant(
        &mut game,
        &[mv(BLACK, "aa"), mv(WHITE, "bb"), mv(BLACK, "hh"), mv(WHITE, "hg"), mv(BLACK, "ii")],
    )
    .unwrap();

    assert_eq!(
        serialize_game(&game),
        "(;FF[4];B[aa];W[bb](;B[cc];W[dd])(;B[hh];W[hg];B[ii]))"
    );
}

#[test]
fn given_existing_fork_when_merging_new_variant_then_child_is_appended() {
    let mut game = game("(;FF[4];B[aa];W[bb](;B[cc])(;B[hh]))");

    merge_variant(&mut game, &[mv(BLACK, "aa"), mv(WHITE, "bb"), mv(BLACK, "xx")]).unwrap();

    assert_eq!(
        serialize_game(&game),
        "(;FF[4];B[aa];W[bb](;B[cc])(;B[hh])(;B[xx]))"
    );
}

#[test]
fn given_auxiliary_properties_when_matching_then_incoming_extras_are_dropped() {
    let mut game = game("(;FF[4];B[aa];W[bb])");

    let mut annotated = mv(BLACK, "aa");
    annotated.set(COMMENT, "a note");
    merge_variant(&mut game, &[annotated, mv(WHITE, "bb")]).unwrap();

    // matching kept the tree's node, not the incoming one
    assert_eq!(serialize_game(&game), "(;FF[4];B[aa];W[bb])");
}

#[test]
fn given_fresh_game_when_merging_then_line_grows_from_the_root() {
    let mut game = GameTree::new_game();

    merge_variant(&mut game, &[mv(BLACK, "aa"), mv(WHITE, "bb")]).unwrap();

    assert_eq!(serialize_game(&game), "(;;B[aa];W[bb])");
}

#[test]
fn given_two_submissions_when_merging_then_shared_prefix_is_stored_once() {
    let mut game = GameTree::new_game();

    merge_variant(&mut game, &[mv(BLACK, "aa"), mv(WHITE, "bb"), mv(BLACK, "cc")]).unwrap();
    merge_variant(&mut game, &[mv(BLACK, "aa"), mv(WHITE, "bb"), mv(BLACK, "dd")]).unwrap();

    assert_eq!(
        serialize_game(&game),
        "(;;B[aa];W[bb](;B[cc])(;B[dd]))"
    );
}
