//! Serialises the minimised graph into the final byte array (component C7).
//!
//! Bytes are laid out in *reverse* of memory order so every child's byte
//! position is already known when its parent is written, then the whole
//! buffer is reversed once at the end. This is what makes every child
//! reference in the final array a positive forward distance -- not a
//! micro-optimisation, see `SPEC_FULL.md` component 4.6.

use std::cmp::Reverse;
use std::collections::HashMap;

use super::graph::{Dafsa, NodeId, SINK};
use crate::Error;

pub(crate) fn encode(dafsa: &Dafsa, topo_order: &[NodeId]) -> Result<Vec<u8>, Error> {
    let mut output: Vec<u8> = Vec::new();
    let mut offsets: HashMap<NodeId, usize> = HashMap::new();

    for &node in topo_order.iter().rev() {
        let children = dafsa.graph.children(node);
        let prefix_inlines = children.len() == 1
            && children[0] != SINK
            && offsets.get(&children[0]) == Some(&output.len());
        if prefix_inlines {
            encode_prefix(dafsa.graph.label(node), &mut output);
        } else {
            encode_links(children, &offsets, output.len(), &mut output)?;
            encode_label(dafsa.graph.label(node), &mut output);
        }
        offsets.insert(node, output.len());
    }

    encode_links(&dafsa.roots, &offsets, output.len(), &mut output)?;
    output.reverse();
    Ok(output)
}

/// Appends a label's bytes in reverse order, without a terminator. Used when
/// the label can be chained directly as a prefix into an already-written
/// child.
fn encode_prefix(label: &[u8], out: &mut Vec<u8>) {
    out.extend(label.iter().rev());
}

/// Appends a label's bytes in reverse order, marking the end of the label on
/// the byte corresponding to the label's last (highest-index) character.
///
/// Bytes are pushed `label[k-1], label[k-2], ..., label[0]`, so `label[k-1]`
/// -- the word's final character, or its tag byte -- is the first one
/// pushed. That is the byte the terminator bit belongs on.
fn encode_label(label: &[u8], out: &mut Vec<u8>) {
    let start = out.len();
    encode_prefix(label, out);
    out[start] |= 0x80;
}

/// Appends the offset list for `children`, or nothing at all if the only
/// child is the sink (an end-label node needs no offsets).
fn encode_links(
    children: &[NodeId],
    offsets: &HashMap<NodeId, usize>,
    current: usize,
    out: &mut Vec<u8>,
) -> Result<(), Error> {
    if children.len() == 1 && children[0] == SINK {
        return Ok(());
    }

    let mut sorted: Vec<NodeId> = children.to_vec();
    sorted.sort_by_key(|&child| Reverse(offsets[&child]));

    let mut guess = 3 * sorted.len();
    loop {
        let mut cursor = current + guess;
        let mut buf = Vec::new();
        let mut last = 0usize;
        for &child in &sorted {
            last = buf.len();
            let distance = cursor - offsets[&child];
            encode_distance(distance, &mut buf)?;
            cursor -= distance;
        }
        if buf.len() == guess {
            buf[last] |= 0x80;
            buf.reverse();
            out.extend(buf);
            return Ok(());
        }
        guess = buf.len();
    }
}

fn encode_distance(distance: usize, buf: &mut Vec<u8>) -> Result<(), Error> {
    if distance < (1 << 6) {
        buf.push(distance as u8);
    } else if distance < (1 << 13) {
        buf.push(0x40 | ((distance >> 8) as u8));
        buf.push((distance & 0xFF) as u8);
    } else if distance < (1 << 21) {
        buf.push(0x60 | ((distance >> 16) as u8));
        buf.push(((distance >> 8) & 0xFF) as u8);
        buf.push((distance & 0xFF) as u8);
    } else {
        return Err(Error::OffsetOverflow(distance));
    }
    Ok(())
}
