//! Merges nodes that accept identical suffix languages (component C4).
//!
//! A node is replaced by the unique representative for the key
//! `{ label . w : c in children, w in L(c) }`, where the sink's key is the
//! single empty string. Children are canonicalised before their parent so
//! each sub-key is already canonical; the first node observed for a given
//! key wins.

use std::collections::{BTreeSet, HashMap};

use super::graph::{Dafsa, Graph, NodeId, SINK};

type SuffixKey = BTreeSet<Vec<u8>>;

pub(crate) fn join_suffixes(dafsa: &Dafsa) -> Dafsa {
    let mut new_graph = Graph::new();
    let mut nodemap: HashMap<SuffixKey, NodeId> = HashMap::new();
    let new_roots = dafsa
        .roots
        .iter()
        .map(|&root| join(&dafsa.graph, &mut nodemap, &mut new_graph, root))
        .collect();
    Dafsa { graph: new_graph, roots: new_roots }
}

fn join(
    graph: &Graph,
    nodemap: &mut HashMap<SuffixKey, NodeId>,
    new_graph: &mut Graph,
    node: NodeId,
) -> NodeId {
    if node == SINK {
        return SINK;
    }
    let key = suffix_words(graph, node);
    if let Some(&existing) = nodemap.get(&key) {
        return existing;
    }
    let children: Vec<NodeId> = graph
        .children(node)
        .to_vec()
        .into_iter()
        .map(|child| join(graph, nodemap, new_graph, child))
        .collect();
    let new_id = new_graph.alloc(graph.label(node).to_vec(), children);
    nodemap.insert(key, new_id);
    new_id
}

/// The set of all strings formed by concatenating labels along every path
/// from `node` to the sink (the sink itself contributes the empty string).
fn suffix_words(graph: &Graph, node: NodeId) -> SuffixKey {
    if node == SINK {
        let mut set = BTreeSet::new();
        set.insert(Vec::new());
        return set;
    }
    let label = graph.label(node);
    let mut words = BTreeSet::new();
    for &child in graph.children(node) {
        for suffix in suffix_words(graph, child) {
            let mut word = label.to_vec();
            word.extend(suffix);
            words.insert(word);
        }
    }
    words
}
