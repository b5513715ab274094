//! The DAFSA construction and binary encoding pipeline.
//!
//! `compile` is the crate's core entry point: it drives a tagged word list
//! through the nine-stage pipeline described in `SPEC_FULL.md` §2 --
//! `words -> C2 -> C3 -> C4 -> C3 -> C4 -> C5 -> C6 -> C7 -> bytes` -- and
//! returns the final byte array. Every other item in this module is
//! `pub(crate)`: callers outside the crate only ever see `compile` and the
//! crate-root `Error` type.

mod builder;
mod encode;
mod graph;
mod join;
mod reverse;
mod suffix;
mod toposort;

use crate::Error;

/// Compiles a tagged word list into its encoded DAFSA byte array.
///
/// Each pair is a word (printable 7-bit ASCII, `[0x20, 0x7F]`) and its tag
/// (`[0, 15]`); the parser collaborator is responsible for producing these
/// from textual input. Fails with [`Error::EmptyInput`] on an empty list,
/// [`Error::BadCharacter`] on a malformed word byte, or
/// [`Error::OffsetOverflow`] if the minimised graph cannot be addressed by
/// the 21-bit offset encoding.
pub fn compile(words: &[(Vec<u8>, u8)]) -> Result<Vec<u8>, Error> {
    let dafsa = builder::build(words)?;
    log::debug!(
        "builder: {} words accepted, {} unshared nodes",
        words.len(),
        dafsa.graph.node_count()
    );

    // Double reverse-then-merge-suffixes: canonicalise suffix sharing, then
    // (after reversal) canonicalise prefix sharing, then reverse once more
    // to restore the original orientation before label joining.
    let dafsa = suffix::join_suffixes(&reverse::reverse(&dafsa));
    log::trace!(
        "suffix merge (suffix canonical): {} nodes",
        dafsa.graph.node_count()
    );
    let dafsa = suffix::join_suffixes(&reverse::reverse(&dafsa));
    log::trace!(
        "suffix merge (prefix canonical): {} nodes",
        dafsa.graph.node_count()
    );

    let dafsa = join::join_labels(&dafsa);
    log::debug!("label joiner: {} nodes", dafsa.graph.node_count());

    let order = toposort::order(&dafsa);
    log::trace!("topological order: {} nodes", order.len());

    let encoded = encode::encode(&dafsa, &order)?;
    log::info!(
        "encoded {} words into {} bytes",
        words.len(),
        encoded.len()
    );
    Ok(encoded)
}
