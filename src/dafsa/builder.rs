//! Converts an annotated word list into an initial, unshared graph
//! (component C2).

use super::graph::{Dafsa, Graph, SINK};
use crate::Error;

/// Builds one linear chain per word: `c1 -> c2 -> ... -> cn -> (tag & 0xF) -> sink`.
///
/// No sharing is performed; that is the job of later pipeline stages.
pub(crate) fn build(words: &[(Vec<u8>, u8)]) -> Result<Dafsa, Error> {
    if words.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut graph = Graph::new();
    let mut roots = Vec::with_capacity(words.len());
    for (word, tag) in words {
        for &byte in word {
            if !(0x1F < byte && byte < 0x80) {
                return Err(Error::BadCharacter(byte));
            }
        }
        roots.push(build_chain(&mut graph, word, *tag));
    }
    Ok(Dafsa { graph, roots })
}

/// Builds the chain for a single word and returns the id of its first node.
fn build_chain(graph: &mut Graph, word: &[u8], tag: u8) -> super::graph::NodeId {
    let tag_node = graph.alloc(vec![tag & 0x0F], vec![SINK]);
    let mut next = tag_node;
    for &byte in word.iter().rev() {
        next = graph.alloc(vec![byte], vec![next]);
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_word_list_fails() {
        assert!(matches!(build(&[]), Err(Error::EmptyInput)));
    }

    #[test]
    fn bad_character_is_rejected() {
        let words = vec![(vec![0x1F], 1u8)];
        let err = build(&words).unwrap_err();
        assert!(matches!(err, Error::BadCharacter(0x1F)));
    }

    #[test]
    fn single_word_builds_a_chain_of_len_plus_one() {
        let words = vec![(b"aa".to_vec(), 1u8)];
        let dafsa = build(&words).unwrap();
        assert_eq!(dafsa.roots.len(), 1);
        // two letters + one tag node
        assert_eq!(dafsa.graph.node_count(), 3);
        let root = dafsa.roots[0];
        assert_eq!(dafsa.graph.label(root), b"a");
        let mid = dafsa.graph.children(root)[0];
        assert_eq!(dafsa.graph.label(mid), b"a");
        let tag_node = dafsa.graph.children(mid)[0];
        assert_eq!(dafsa.graph.label(tag_node), &[1]);
        assert_eq!(dafsa.graph.children(tag_node), &[SINK]);
    }

    #[test]
    fn tag_is_masked_to_four_bits() {
        let words = vec![(b"a".to_vec(), 0xFFu8)];
        let dafsa = build(&words).unwrap();
        let tag_node = dafsa.graph.children(dafsa.roots[0])[0];
        assert_eq!(dafsa.graph.label(tag_node), &[0x0F]);
    }
}
