use super::*;
use crate::graph::def::GraphBuilder;
use crate::graph::preset::tower_map;

fn abcd() -> Graph {
    GraphBuilder::new()
        .node("A", 0.0, 0.0)
        .node("B", 80.0, 0.0)
        .node("C", 80.0, 60.0)
        .node("D", 120.0, 60.0)
        .edge("A", "B", 10.0)
        .edge("B", "C", 5.0)
        .edge("A", "C", 20.0)
        .edge("C", "D", 1.0)
        .build()
        .unwrap()
}

fn describe(graph: &Graph, trace: &Trace) -> Vec<String> {
    trace
        .iter()
        .map(|e| match e {
            TraceEvent::Explored { node, .. } => format!("E {}", graph.label(*node)),
            TraceEvent::Relaxed { from, to, .. } => {
                format!("R {}>{}", graph.label(*from), graph.label(*to))
            }
            TraceEvent::Final { .. } => "F".to_owned(),
        })
        .collect()
}

#[test]
fn abcd_distances_and_event_order() {
    let g = abcd();
    let out = ShortestPathEngine::run(&g, g.find("A").unwrap(), Multiplier::ONE).unwrap();
    assert_eq!(out.distances, vec![0.0, 10.0, 15.0, 16.0]);
    assert_eq!(
        describe(&g, &out.trace),
        vec!["E A", "R A>B", "R A>C", "E B", "R B>C", "E C", "R C>D", "E D"]
    );
    assert_eq!(out.predecessors[3], Some(NodeIdx(2)));
    assert_eq!(out.predecessors[0], None);
}

#[test]
fn relaxed_snapshot_is_post_update() {
    let g = abcd();
    let out = ShortestPathEngine::run(&g, NodeIdx(0), Multiplier::ONE).unwrap();
    let TraceEvent::Relaxed { to, snapshot, .. } = &out.trace.events()[4] else {
        panic!("expected relax B>C");
    };
    assert_eq!(*to, NodeIdx(2));
    assert_eq!(snapshot.distance(NodeIdx(2)), 15.0);
    assert!(snapshot.is_visited(NodeIdx(1)));
    assert!(!snapshot.is_visited(NodeIdx(2)));
}

#[test]
fn runs_are_deterministic() {
    let g = tower_map().unwrap();
    let src = g.find("Tower 3").unwrap();
    let a = ShortestPathEngine::run(&g, src, Multiplier::ONE).unwrap();
    let b = ShortestPathEngine::run(&g, src, Multiplier::ONE).unwrap();
    assert_eq!(a, b);
}

#[test]
fn each_node_is_explored_at_most_once() {
    let g = tower_map().unwrap();
    let out = ShortestPathEngine::run(&g, NodeIdx(0), Multiplier::ONE).unwrap();
    let mut explored = out.trace.explored_nodes();
    let total = explored.len();
    explored.sort();
    explored.dedup();
    assert_eq!(explored.len(), total);
    assert_eq!(total, g.node_count());
}

#[test]
fn distance_snapshots_never_increase_per_node() {
    let g = tower_map().unwrap();
    let out = ShortestPathEngine::run(&g, g.find("Tower 11").unwrap(), Multiplier::ONE).unwrap();
    for n in 0..g.node_count() {
        let mut last = f64::INFINITY;
        for e in &out.trace {
            let d = e.snapshot().distance(NodeIdx(n as u32));
            assert!(d <= last, "node {n} went from {last} to {d}");
            last = d;
        }
    }
}

#[test]
fn distances_match_floyd_warshall() {
    let g = tower_map().unwrap();
    let n = g.node_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for e in g.edges() {
        dist[e.a.index()][e.b.index()] = e.base_weight;
        dist[e.b.index()][e.a.index()] = e.base_weight;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let via = dist[i][k] + dist[k][j];
                if via < dist[i][j] {
                    dist[i][j] = via;
                }
            }
        }
    }

    for s in 0..n {
        let out = ShortestPathEngine::run(&g, NodeIdx(s as u32), Multiplier::ONE).unwrap();
        for t in 0..n {
            assert!((out.distances[t] - dist[s][t]).abs() < 1e-9, "{s}->{t}");
        }
    }
}

#[test]
fn disconnected_nodes_stay_unreached() {
    let g = GraphBuilder::new()
        .node("A", 0.0, 0.0)
        .node("B", 1.0, 0.0)
        .node("Z", 5.0, 5.0)
        .edge("A", "B", 1.0)
        .build()
        .unwrap();
    let out = ShortestPathEngine::run(&g, NodeIdx(0), Multiplier::ONE).unwrap();
    assert!(out.distance(NodeIdx(2)).is_infinite());
    assert_eq!(out.predecessors[2], None);
    assert!(!out.is_reachable(NodeIdx(2)));
    assert!(!out.trace.explored_nodes().contains(&NodeIdx(2)));
}

#[test]
fn equal_candidates_do_not_relax() {
    // A-B-D and A-C-D tie at 2; D must be relaxed exactly once.
    let g = GraphBuilder::new()
        .node("A", 0.0, 0.0)
        .node("B", 1.0, 0.0)
        .node("C", 0.0, 1.0)
        .node("D", 1.0, 1.0)
        .edge("A", "B", 1.0)
        .edge("A", "C", 1.0)
        .edge("B", "D", 1.0)
        .edge("C", "D", 1.0)
        .build()
        .unwrap();
    let out = ShortestPathEngine::run(&g, NodeIdx(0), Multiplier::ONE).unwrap();
    let relax_d = out
        .trace
        .iter()
        .filter(|e| matches!(e, TraceEvent::Relaxed { to, .. } if *to == NodeIdx(3)))
        .count();
    assert_eq!(relax_d, 1);
    // insertion order breaks the B/C tie
    assert_eq!(out.predecessors[3], Some(NodeIdx(1)));
}

#[test]
fn multiplier_scales_costs_but_not_order() {
    let g = abcd();
    let one = ShortestPathEngine::run(&g, NodeIdx(0), Multiplier::ONE).unwrap();
    let two = ShortestPathEngine::run(&g, NodeIdx(0), Multiplier::new(2.0).unwrap()).unwrap();
    assert_eq!(describe(&g, &one.trace), describe(&g, &two.trace));
    for (a, b) in one.distances.iter().zip(&two.distances) {
        assert_eq!(a * 2.0, *b);
    }
}

#[test]
fn unknown_source_is_invalid_selection() {
    let g = abcd();
    let err = ShortestPathEngine::run(&g, NodeIdx(42), Multiplier::ONE).unwrap_err();
    assert!(matches!(err, RouteError::InvalidSelection(_)));
}
