//! Produces a new DAG with every edge direction inverted, re-rooted at the
//! former sink (component C3).
//!
//! A new node is synthesised per original node on first visit; its label is
//! the byte-reversed original label, and its children accumulate one entry
//! per original parent encountered across the whole traversal. The sink
//! index doubles as both "we've reached the end of an old path" (the
//! recursion's base case) and "this new node terminates at the new sink"
//! (the `parent` seed passed in for each original root) -- the same value
//! plays both roles the way `None` does in the reference algorithm this was
//! distilled from.

use std::collections::HashMap;

use super::graph::{Dafsa, Graph, NodeId, SINK};

pub(crate) fn reverse(dafsa: &Dafsa) -> Dafsa {
    let mut new_graph = Graph::new();
    let mut map: HashMap<NodeId, NodeId> = HashMap::new();
    let mut new_roots = Vec::new();

    for &root in &dafsa.roots {
        visit(&dafsa.graph, &mut new_graph, &mut map, &mut new_roots, root, SINK);
    }

    Dafsa { graph: new_graph, roots: new_roots }
}

fn visit(
    graph: &Graph,
    new_graph: &mut Graph,
    map: &mut HashMap<NodeId, NodeId>,
    new_roots: &mut Vec<NodeId>,
    node: NodeId,
    parent: NodeId,
) {
    if node == SINK {
        new_roots.push(parent);
        return;
    }
    if let Some(&new_id) = map.get(&node) {
        new_graph.children_mut(new_id).push(parent);
        return;
    }
    let mut label = graph.label(node).to_vec();
    label.reverse();
    let new_id = new_graph.alloc(label, vec![parent]);
    map.insert(node, new_id);
    for &child in graph.children(node).to_vec().iter() {
        visit(graph, new_graph, map, new_roots, child, new_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dafsa::builder::build;

    #[test]
    fn reversing_a_single_word_flips_the_label_order() {
        let dafsa = build(&[(b"ab".to_vec(), 1u8)]).unwrap();
        let rev = reverse(&dafsa);
        // chain was a -> b -> tag(1) -> sink, now it's tag(1) -> b -> a -> sink
        assert_eq!(rev.roots.len(), 1);
        let tag_node = rev.roots[0];
        assert_eq!(rev.graph.label(tag_node), &[1]);
        let b_node = rev.graph.children(tag_node)[0];
        assert_eq!(rev.graph.label(b_node), b"b");
        let a_node = rev.graph.children(b_node)[0];
        assert_eq!(rev.graph.label(a_node), b"a");
        assert_eq!(rev.graph.children(a_node), &[SINK]);
    }

    #[test]
    fn reversing_twice_restores_original_shape() {
        let dafsa = build(&[(b"cat".to_vec(), 2u8), (b"car".to_vec(), 3u8)]).unwrap();
        let once = reverse(&dafsa);
        let twice = reverse(&once);
        // node counts must match (isomorphic, just arena ids differ)
        assert_eq!(dafsa.graph.node_count(), twice.graph.node_count());
        assert_eq!(dafsa.roots.len(), twice.roots.len());
    }
}
