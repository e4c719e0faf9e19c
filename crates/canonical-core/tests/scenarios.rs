//! End-to-end scenarios against the public API.

use canonical_core::graph::{DEFAULT_WEIGHT, Graph, Node};
use canonical_core::{ErrorCode, GraphError};

fn keys<'g>(walk: impl Iterator<Item = &'g Node>) -> Vec<&'g str> {
    walk.map(Node::key).collect()
}

fn chain() -> Graph {
    let mut g = Graph::new();
    for key in ["A", "B", "C", "D"] {
        g.add_node(key).unwrap();
    }
    g.add_edge("A", "B", DEFAULT_WEIGHT).unwrap();
    g.add_edge("B", "C", DEFAULT_WEIGHT).unwrap();
    g.add_edge("C", "D", DEFAULT_WEIGHT).unwrap();
    g
}

#[test]
fn chain_topological_bfs_and_cycle() {
    let g = chain();
    assert_eq!(
        keys(g.topological_sort().unwrap().into_iter()),
        vec!["A", "B", "C", "D"]
    );
    assert_eq!(keys(g.bfs("A").unwrap()), vec!["A", "B", "C", "D"]);
    assert_eq!(keys(g.dfs("A").unwrap()), vec!["A", "B", "C", "D"]);
    assert!(!g.cycle_exists("A").unwrap());
}

#[test]
fn two_cycle_is_detected_and_bfs_terminates() {
    let mut g = Graph::new();
    g.add_edge("A", "B", DEFAULT_WEIGHT).unwrap();
    g.add_edge("B", "A", DEFAULT_WEIGHT).unwrap();

    assert!(g.cycle_exists("A").unwrap());
    assert_eq!(keys(g.bfs("A").unwrap()), vec!["A", "B"]);
    assert_eq!(keys(g.dfs("A").unwrap()), vec!["A", "B"]);
}

#[test]
fn adding_a_node_twice_fails() {
    let mut g = Graph::new();
    g.add_node("A").unwrap();
    let err = g.add_node("A").unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateNode);
}

#[test]
fn added_edge_is_in_neighbor_set() {
    let mut g = Graph::new();
    g.add_edge("a", "b", 12).unwrap();

    let a = g.get("a").unwrap();
    let b = g.index_of("b").unwrap();
    assert!(a.has_neighbor(b));
    assert_eq!(a.weight_to(b), Some(12));
    assert_eq!(g.neighbors("a").unwrap(), vec![("b", 12)]);
}

#[test]
fn removed_edge_breaks_reachability() {
    let mut g = chain();
    assert!(g.is_reachable("A", "D").unwrap());
    assert!(g.remove_edge("B", "C").unwrap());
    assert!(!g.is_reachable("A", "D").unwrap());
    assert_eq!(keys(g.bfs("A").unwrap()), vec!["A", "B"]);
}

#[test]
fn undirected_edges_are_cycles() {
    let mut g = Graph::new();
    g.add_undirected_edge("x", "y", 3).unwrap();
    assert!(g.cycle_exists("x").unwrap());
    assert!(matches!(
        g.topological_sort(),
        Err(GraphError::CycleDetected(_))
    ));
}

#[test]
fn deep_chain_does_not_overflow() {
    const LEN: usize = 200_000;
    let mut g = Graph::new();
    for i in 0..LEN {
        g.add_edge(&format!("n{i}"), &format!("n{}", i + 1), 1).unwrap();
    }
    let last = format!("n{LEN}");

    assert_eq!(g.dfs("n0").unwrap().count(), LEN + 1);
    assert_eq!(g.bfs("n0").unwrap().count(), LEN + 1);
    assert!(g.is_reachable("n0", &last).unwrap());

    let order = g.topological_sort().unwrap();
    assert_eq!(order.len(), LEN + 1);
    assert_eq!(order.first().map(|n| n.key()), Some("n0"));
    assert_eq!(order.last().map(|n| n.key()), Some(last.as_str()));

    assert!(!g.cycle_exists("n0").unwrap());
    assert!(!g.has_cycles());
}

#[test]
fn deep_cycle_is_found_without_overflow() {
    const LEN: usize = 200_000;
    let mut g = Graph::new();
    for i in 0..LEN {
        g.add_edge(&format!("n{i}"), &format!("n{}", (i + 1) % LEN), 1)
            .unwrap();
    }

    let cycle = g.find_cycle_from("n0").unwrap().unwrap();
    assert_eq!(cycle.len(), LEN);
    assert_eq!(cycle.path.first(), cycle.path.last());
    match g.topological_sort() {
        Err(GraphError::CycleDetected(found)) => assert_eq!(found.len(), LEN),
        other => panic!("expected a cycle, got {} nodes", other.map_or(0, |o| o.len())),
    }
}
