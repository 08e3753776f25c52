//! Serialization: canonical output and round trips

use rstest::rstest;
use sgftree::util::testing;
use sgftree::{parse, serialize, serialize_game};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[rstest]
#[case("(;FF[4]GM[1];B[aa];W[bb])")]
#[case("(;FF[4]GM[1]SZ[19];B[aa];W[bb](;B[cc];W[dd];B[ee])(;B[hh];W[hg]))")]
#[case("(;FF[4];B[aa];W[bb](;B[cc];W[dd](;B[ad])(;B[ee]))(;B[hh])(;B[ii]))")]
#[case("(;FF[4];B[aa](;W[bb]))")]
fn given_canonical_input_when_round_tripping_then_text_is_preserved(#[case] input: &str) {
    assert_eq!(serialize(&parse(input).unwrap()), input);
}

#[test]
fn given_unordered_properties_when_serializing_then_lexical_order_wins() {
    let coll = parse("(;SZ[19]FF[4]GM[1];B[aa])").unwrap();
    assert_eq!(serialize(&coll), "(;FF[4]GM[1]SZ[19];B[aa])");
}

#[test]
fn given_serialized_output_when_reserializing_then_output_is_stable() {
    let once = serialize(&parse("(;SZ[19]GM[1]FF[4]\n;B[aa]\n(;W[bb])\n(;W[cc]))").unwrap());
    let twice = serialize(&parse(&once).unwrap());
    assert_eq!(once, twice);
}

#[test]
fn given_multiple_games_when_serializing_then_each_is_parenthesized() {
    let coll = parse(" (;FF[4];B[aa]) (;FF[5];W[dd]) ").unwrap();
    assert_eq!(serialize(&coll), "(;FF[4];B[aa])(;FF[5];W[dd])");
}

#[test]
fn given_single_game_when_serializing_then_game_wrapper_matches_collection() {
    let coll = parse("(;FF[4];B[aa](;W[bb])(;W[cc]))").unwrap();
    assert_eq!(serialize_game(&coll.games[0]), serialize(&coll));
}
