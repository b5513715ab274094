//! Collapses each maximal single-parent/single-child chain into one
//! multi-byte-label node (component C5).

use std::collections::HashMap;

use super::graph::{Dafsa, Graph, NodeId, SINK};

pub(crate) fn join_labels(dafsa: &Dafsa) -> Dafsa {
    let mut counts: HashMap<NodeId, usize> = HashMap::new();
    counts.insert(SINK, 2); // pinned so the sink is never "swallowed"
    for &root in &dafsa.roots {
        count_parents(&dafsa.graph, &mut counts, root);
    }

    let mut new_graph = Graph::new();
    let mut nodemap: HashMap<NodeId, NodeId> = HashMap::new();
    let new_roots = dafsa
        .roots
        .iter()
        .map(|&root| join(&dafsa.graph, &counts, &mut nodemap, &mut new_graph, root))
        .collect();
    Dafsa { graph: new_graph, roots: new_roots }
}

fn count_parents(graph: &Graph, counts: &mut HashMap<NodeId, usize>, node: NodeId) {
    if let Some(count) = counts.get_mut(&node) {
        *count += 1;
    } else {
        counts.insert(node, 1);
        for &child in graph.children(node).to_vec().iter() {
            count_parents(graph, counts, child);
        }
    }
}

fn join(
    graph: &Graph,
    counts: &HashMap<NodeId, usize>,
    nodemap: &mut HashMap<NodeId, NodeId>,
    new_graph: &mut Graph,
    node: NodeId,
) -> NodeId {
    if node == SINK {
        return SINK;
    }
    if let Some(&existing) = nodemap.get(&node) {
        return existing;
    }
    let old_children = graph.children(node).to_vec();
    let new_children: Vec<NodeId> = old_children
        .iter()
        .map(|&child| join(graph, counts, nodemap, new_graph, child))
        .collect();

    let new_id = if new_children.len() == 1 && counts.get(&old_children[0]).copied().unwrap_or(0) == 1 {
        let child_new_id = new_children[0];
        let mut label = graph.label(node).to_vec();
        label.extend_from_slice(new_graph.label(child_new_id));
        let grandchildren = new_graph.children(child_new_id).to_vec();
        new_graph.alloc(label, grandchildren)
    } else {
        new_graph.alloc(graph.label(node).to_vec(), new_children)
    };
    nodemap.insert(node, new_id);
    new_id
}
