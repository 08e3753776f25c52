use tracing::instrument;

use crate::errors::SgfResult;

/// Receiver for the structural events of one SGF text.
///
/// The lexer has no tree knowledge; whoever implements this builds whatever
/// it wants from the event stream (see `TreeBuilder`). Any error returned
/// from a callback aborts the scan immediately.
pub trait Handler {
    fn on_game_start(&mut self) -> SgfResult<()>;
    fn on_game_stop(&mut self) -> SgfResult<()>;
    fn on_node(&mut self) -> SgfResult<()>;
    fn on_property(&mut self, name: &str, value: &str) -> SgfResult<()>;
    fn on_branch_start(&mut self) -> SgfResult<()>;
    fn on_branch_stop(&mut self) -> SgfResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Collection,
    Seq,
    Node,
    Property,
}

/// Scans the input once, left to right, emitting structural events.
///
/// Properties are exactly one bracketed value; no escaping and no whitespace
/// normalization. A `]` closing a value whose pending name is empty emits
/// nothing, which silently drops the extra values of multi-value properties
/// (`B[aa][bb]` keeps only `aa`). The accumulator resets on `(`, `)`, `[`
/// and `]` only, so stray text between nodes travels into the next property
/// name untouched.
#[instrument(level = "debug", skip(input, handler), fields(len = input.len()))]
pub fn run<H: Handler>(input: &str, handler: &mut H) -> SgfResult<()> {
    let mut state = LexState::Collection;
    let mut acc = String::new();
    let mut prop_name = String::new();
    let mut depth = 0usize;

    for ch in input.chars() {
        match (state, ch) {
            (LexState::Collection, '(') => {
                handler.on_game_start()?;
                state = LexState::Seq;
            }
            (LexState::Seq | LexState::Node, ';') => {
                handler.on_node()?;
                state = LexState::Node;
            }
            (LexState::Node, '[') => {
                prop_name = std::mem::take(&mut acc);
                state = LexState::Property;
            }
            (LexState::Seq | LexState::Node, '(') => {
                acc.clear();
                depth += 1;
                state = LexState::Seq;
                handler.on_branch_start()?;
            }
            (LexState::Seq | LexState::Node, ')') => {
                acc.clear();
                if depth == 0 {
                    handler.on_game_stop()?;
                    state = LexState::Collection;
                } else {
                    handler.on_branch_stop()?;
                    depth -= 1;
                    state = LexState::Seq;
                }
            }
            (LexState::Property, ']') => {
                state = LexState::Node;
                if !prop_name.is_empty() {
                    handler.on_property(&prop_name, &acc)?;
                }
                acc.clear();
            }
            (LexState::Node | LexState::Property, _) => acc.push(ch),
            _ => {}
        }
    }
    Ok(())
}
