//! Produces a topological order of nodes consistent with edge direction
//! (component C6), using a standard Kahn-style reduction over the DAG.
//!
//! The harvesting frontier is a LIFO stack rather than a FIFO queue: the
//! *most recently* zeroed node is processed next. This is load-bearing for
//! byte-exact encoder output, not an arbitrary implementation choice.

use std::collections::HashMap;

use super::graph::{Dafsa, Graph, NodeId, SINK};

pub(crate) fn order(dafsa: &Dafsa) -> Vec<NodeId> {
    let mut incoming: HashMap<NodeId, usize> = HashMap::new();
    for &root in &dafsa.roots {
        count_incoming(&dafsa.graph, &mut incoming, root);
    }
    // Remove the source's synthetic incoming edge for each root.
    for &root in &dafsa.roots {
        *incoming.get_mut(&root).expect("root was counted above") -= 1;
    }

    let mut waiting: Vec<NodeId> = dafsa
        .roots
        .iter()
        .copied()
        .filter(|r| incoming[r] == 0)
        .collect();
    let mut nodes = Vec::new();
    while let Some(node) = waiting.pop() {
        nodes.push(node);
        for &child in dafsa.graph.children(node) {
            if child == SINK {
                continue;
            }
            let count = incoming.get_mut(&child).expect("child was counted above");
            *count -= 1;
            if *count == 0 {
                waiting.push(child);
            }
        }
    }
    nodes
}

fn count_incoming(graph: &Graph, incoming: &mut HashMap<NodeId, usize>, node: NodeId) {
    if node == SINK {
        return;
    }
    if let Some(count) = incoming.get_mut(&node) {
        *count += 1;
    } else {
        incoming.insert(node, 1);
        for &child in graph.children(node).to_vec().iter() {
            count_incoming(graph, incoming, child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dafsa::builder::build;
    use crate::dafsa::join::join_labels;
    use crate::dafsa::reverse::reverse;
    use crate::dafsa::suffix::join_suffixes;

    fn pipeline(words: &[(Vec<u8>, u8)]) -> Dafsa {
        let dafsa = build(words).unwrap();
        let dafsa = join_suffixes(&reverse(&dafsa));
        let dafsa = join_suffixes(&reverse(&dafsa));
        join_labels(&dafsa)
    }

    #[test]
    fn order_covers_every_node_exactly_once_and_precedes_children() {
        let dafsa = pipeline(&[(b"aa".to_vec(), 1u8), (b"bbb".to_vec(), 2u8), (b"baa".to_vec(), 1u8)]);
        let order = order(&dafsa);
        assert_eq!(order.len(), dafsa.graph.node_count());
        let position: HashMap<NodeId, usize> =
            order.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        for &node in &order {
            for &child in dafsa.graph.children(node) {
                if child != SINK {
                    assert!(position[&node] < position[&child], "parent must precede child");
                }
            }
        }
    }

    #[test]
    fn sink_is_never_emitted() {
        let dafsa = pipeline(&[(b"a".to_vec(), 0u8)]);
        let order = order(&dafsa);
        assert!(!order.contains(&SINK));
    }
}
